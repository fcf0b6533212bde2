//! Check digit validation for ISBN and ISSN identifiers.
//!
//! Each routine takes an identifier with any hyphens already removed and
//! tells apart a malformed value (wrong length, stray characters) from a
//! well-formed value whose check character does not match. A mismatch
//! carries the check character that would make the value valid.

use thiserror::Error;

/// Why an identifier failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    /// The value does not have the required number of characters
    #[error("expected {expected} characters, found {found}")]
    WrongLength {
        /// Required length
        expected: usize,
        /// Actual length in characters
        found: usize,
    },

    /// A character outside the allowed set for its position
    #[error("invalid character '{found}' at position {position}")]
    InvalidCharacter {
        /// Zero-based character position
        position: usize,
        /// Offending character
        found: char,
    },

    /// Well-formed value whose check character is wrong
    #[error("check character is '{found}', expected '{expected}'")]
    Mismatch {
        /// Check character present in the value
        found: char,
        /// Check character the payload calls for
        expected: char,
    },
}

impl ChecksumError {
    /// Whether this is a computed-but-mismatched check character, as opposed
    /// to a malformed value
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ChecksumError::Mismatch { .. })
    }
}

/// Convenience type alias for check digit results
pub type ChecksumResult = std::result::Result<(), ChecksumError>;

/// ISBN-10 and ISBN-13 check digit validation
#[derive(Debug)]
pub struct IsbnValidator;

impl IsbnValidator {
    /// Validate an ISBN-10 check digit
    ///
    /// Weights 10 down to 2 over the first nine digits, weight 1 on the
    /// check character where `X` counts as 10; valid iff the sum is
    /// divisible by 11.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError`] for a malformed value or a wrong check digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_lint::{ChecksumError, IsbnValidator};
    ///
    /// assert!(IsbnValidator::validate_isbn10("155404295X").is_ok());
    /// assert_eq!(
    ///     IsbnValidator::validate_isbn10("0123456788"),
    ///     Err(ChecksumError::Mismatch { found: '8', expected: '9' })
    /// );
    /// ```
    pub fn validate_isbn10(isbn: &str) -> ChecksumResult {
        let chars: Vec<char> = isbn.chars().collect();
        if chars.len() != 10 {
            return Err(ChecksumError::WrongLength {
                expected: 10,
                found: chars.len(),
            });
        }

        let payload = digits(&chars[..9])?;
        let check = chars[9];
        if !(check.is_ascii_digit() || check == 'X' || check == 'x') {
            return Err(ChecksumError::InvalidCharacter {
                position: 9,
                found: check,
            });
        }

        let sum: u32 = payload
            .iter()
            .zip((2..=10u32).rev())
            .map(|(d, weight)| d * weight)
            .sum();
        let expected = match (11 - sum % 11) % 11 {
            10 => 'X',
            n => digit_char(n),
        };

        if check.to_ascii_uppercase() == expected {
            Ok(())
        } else {
            Err(ChecksumError::Mismatch {
                found: check,
                expected,
            })
        }
    }

    /// Validate an ISBN-13 check digit
    ///
    /// Alternating weights 1 and 3 over the first twelve digits; the
    /// thirteenth digit brings the total to a multiple of 10.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError`] for a malformed value or a wrong check digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_lint::IsbnValidator;
    ///
    /// assert!(IsbnValidator::validate_isbn13("9780123456786").is_ok());
    /// assert!(IsbnValidator::validate_isbn13("9780123456787").is_err());
    /// ```
    pub fn validate_isbn13(isbn: &str) -> ChecksumResult {
        let chars: Vec<char> = isbn.chars().collect();
        if chars.len() != 13 {
            return Err(ChecksumError::WrongLength {
                expected: 13,
                found: chars.len(),
            });
        }

        let all = digits(&chars)?;
        let sum: u32 = all[..12]
            .iter()
            .enumerate()
            .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
            .sum();
        let expected = digit_char((10 - sum % 10) % 10);

        if chars[12] == expected {
            Ok(())
        } else {
            Err(ChecksumError::Mismatch {
                found: chars[12],
                expected,
            })
        }
    }

    /// Validate either form, chosen by length
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError`] for a malformed value or a wrong check digit.
    pub fn validate(isbn: &str) -> ChecksumResult {
        match isbn.chars().count() {
            13 => Self::validate_isbn13(isbn),
            _ => Self::validate_isbn10(isbn),
        }
    }

    /// Remove hyphens
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_lint::IsbnValidator;
    ///
    /// assert_eq!(IsbnValidator::normalize("0-12-345678-9"), "0123456789");
    /// ```
    #[must_use]
    pub fn normalize(isbn: &str) -> String {
        isbn.replace('-', "")
    }
}

/// ISSN check digit validation
#[derive(Debug)]
pub struct IssnValidator;

impl IssnValidator {
    /// Validate an ISSN check character
    ///
    /// Weights 8 down to 2 over the first seven digits; the check value is
    /// `(11 - sum mod 11) mod 11`, written as `X` when it is 10.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError`] for a malformed value or a wrong check digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_lint::IssnValidator;
    ///
    /// assert!(IssnValidator::validate("03785955").is_ok());
    /// assert!(IssnValidator::validate("0002953x").is_ok());
    /// assert!(IssnValidator::validate("03785956").is_err());
    /// ```
    pub fn validate(issn: &str) -> ChecksumResult {
        let chars: Vec<char> = issn.chars().collect();
        if chars.len() != 8 {
            return Err(ChecksumError::WrongLength {
                expected: 8,
                found: chars.len(),
            });
        }

        let payload = digits(&chars[..7])?;
        let check = chars[7];
        if !(check.is_ascii_digit() || check == 'X' || check == 'x') {
            return Err(ChecksumError::InvalidCharacter {
                position: 7,
                found: check,
            });
        }

        let sum: u32 = payload
            .iter()
            .zip((2..=8u32).rev())
            .map(|(d, weight)| d * weight)
            .sum();
        let expected = match (11 - sum % 11) % 11 {
            10 => 'X',
            n => digit_char(n),
        };

        if check.to_ascii_uppercase() == expected {
            Ok(())
        } else {
            Err(ChecksumError::Mismatch {
                found: check,
                expected,
            })
        }
    }

    /// Remove hyphens
    #[must_use]
    pub fn normalize(issn: &str) -> String {
        issn.replace('-', "")
    }
}

fn digits(chars: &[char]) -> Result<Vec<u32>, ChecksumError> {
    chars
        .iter()
        .enumerate()
        .map(|(position, &c)| {
            c.to_digit(10)
                .ok_or(ChecksumError::InvalidCharacter { position, found: c })
        })
        .collect()
}

fn digit_char(n: u32) -> char {
    char::from_digit(n, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn10_valid() {
        for isbn in ["0123456789", "155404295X", "0306406152", "080442957X"] {
            assert!(IsbnValidator::validate_isbn10(isbn).is_ok(), "{isbn}");
        }
    }

    #[test]
    fn test_isbn10_lowercase_x() {
        assert!(IsbnValidator::validate_isbn10("155404295x").is_ok());
    }

    #[test]
    fn test_isbn10_mismatch_reports_expected() {
        assert_eq!(
            IsbnValidator::validate_isbn10("0306406153"),
            Err(ChecksumError::Mismatch {
                found: '3',
                expected: '2'
            })
        );
    }

    #[test]
    fn test_isbn10_malformed() {
        assert_eq!(
            IsbnValidator::validate_isbn10("X123456789"),
            Err(ChecksumError::InvalidCharacter {
                position: 0,
                found: 'X'
            })
        );
        assert_eq!(
            IsbnValidator::validate_isbn10("12345"),
            Err(ChecksumError::WrongLength {
                expected: 10,
                found: 5
            })
        );
        assert!(!IsbnValidator::validate_isbn10("012345678Y")
            .unwrap_err()
            .is_mismatch());
    }

    #[test]
    fn test_isbn13() {
        assert!(IsbnValidator::validate_isbn13("9780306406157").is_ok());
        assert_eq!(
            IsbnValidator::validate_isbn13("9780306406158"),
            Err(ChecksumError::Mismatch {
                found: '8',
                expected: '7'
            })
        );
        assert!(matches!(
            IsbnValidator::validate_isbn13("978030640615X"),
            Err(ChecksumError::InvalidCharacter { position: 12, .. })
        ));
    }

    #[test]
    fn test_isbn13_without_bookland_prefix() {
        // Only the check digit is verified, not the prefix
        assert!(IsbnValidator::validate_isbn13("1234567890128").is_ok());
    }

    #[test]
    fn test_validate_dispatches_on_length() {
        assert!(IsbnValidator::validate("0123456789").is_ok());
        assert!(IsbnValidator::validate("9780123456786").is_ok());
        assert!(IsbnValidator::validate("123").is_err());
    }

    #[test]
    fn test_issn() {
        for issn in ["03785955", "00280836", "0002953X", "0002953x", "04107543"] {
            assert!(IssnValidator::validate(issn).is_ok(), "{issn}");
        }
        assert_eq!(
            IssnValidator::validate("03785956"),
            Err(ChecksumError::Mismatch {
                found: '6',
                expected: '5'
            })
        );
        assert!(matches!(
            IssnValidator::validate("0378595"),
            Err(ChecksumError::WrongLength { .. })
        ));
        assert_eq!(IssnValidator::normalize("0378-5955"), "03785955");
    }
}
