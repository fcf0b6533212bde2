//! Standard number checks: 020 (ISBN) and 022 (ISSN).
//!
//! Both fields keep the number in `$a` and cancelled or invalid numbers in
//! `$z`. The number is pulled out of the subfield text, which may carry a
//! qualifier such as `(pbk.)`, and handed to the checksum validators. A
//! malformed number and a number with a wrong check character produce
//! different findings.

use lazy_static::lazy_static;
use regex::Regex;

use super::FieldContext;
use crate::checksum::{IsbnValidator, IssnValidator};
use crate::warning::MarcWarning;

lazy_static! {
    // leading 10-13 digit run, last position may be X
    static ref ISBN_NUMBER: Regex = Regex::new(r"^[^0-9]*([0-9]{9,12}[0-9Xx])\b").unwrap();
    static ref ISBN_SHAPE: Regex = Regex::new(r"^(?:[0-9]{10}|[0-9]{13}|[0-9]{9}[Xx])$").unwrap();
    static ref SPACED_QUALIFIER: Regex = Regex::new(r"[0-9Xx] \(").unwrap();
    // how a cancelled ISBN that is really a valid one usually looks
    static ref WRITTEN_AS_ISBN: Regex = Regex::new(r"^(?:ISBN|[0-9]*-[0-9]+)").unwrap();
    static ref ISSN: Regex = Regex::new(r"^([0-9]{4})-?([0-9]{3}[0-9Xx])\b").unwrap();
}

/// The ISBN proper: hyphens removed, leading text and trailing qualifiers
/// dropped. Returns the hyphen-free value unchanged when no digit run is
/// found.
fn isbn_number(value: &str) -> String {
    let stripped = IsbnValidator::normalize(value);
    match ISBN_NUMBER.captures(&stripped).and_then(|caps| caps.get(1)) {
        Some(number) => number.as_str().to_string(),
        None => stripped,
    }
}

/// Compact ISSN (`NNNNNNNC`) from a subfield value, if it opens with one
fn issn_number(value: &str) -> Option<String> {
    let caps = ISSN.captures(value)?;
    Some(format!("{}{}", caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// 020: International Standard Book Number
pub fn check_020(ctx: &FieldContext<'_>, warnings: &mut Vec<MarcWarning>) {
    for subfield in &ctx.field.subfields {
        let value = subfield.value.as_str();
        match subfield.code {
            'a' => check_isbn(ctx, value, warnings),
            'z' => {
                let number = isbn_number(value);
                if WRITTEN_AS_ISBN.is_match(value)
                    && ISBN_SHAPE.is_match(&number)
                    && IsbnValidator::validate(&number).is_ok()
                {
                    warnings.push(ctx.warn_subfield('z', "is numerically valid."));
                }
            },
            _ => {},
        }
    }
}

fn check_isbn(ctx: &FieldContext<'_>, value: &str, warnings: &mut Vec<MarcWarning>) {
    let number = isbn_number(value);

    if !value.starts_with(&number) {
        warnings.push(ctx.warn_subfield('a', "may have invalid characters."));
    }

    if value.contains('(') && !SPACED_QUALIFIER.is_match(value) {
        warnings.push(ctx.warn_subfield(
            'a',
            format!("qualifier must be preceded by space, {value}."),
        ));
    }

    if !ISBN_SHAPE.is_match(&number) {
        warnings.push(ctx.warn_subfield(
            'a',
            format!("has the wrong number of digits, {value}."),
        ));
        return;
    }

    if number.len() == 13 {
        if IsbnValidator::validate_isbn13(&number).is_err() {
            warnings.push(ctx.warn_subfield(
                'a',
                format!("has bad checksum (13 digit), {value}."),
            ));
        }
    } else if IsbnValidator::validate_isbn10(&number).is_err() {
        warnings.push(ctx.warn_subfield('a', format!("has bad checksum, {value}.")));
    }
}

/// 022: International Standard Serial Number
pub fn check_022(ctx: &FieldContext<'_>, warnings: &mut Vec<MarcWarning>) {
    for subfield in &ctx.field.subfields {
        let value = subfield.value.as_str();
        match subfield.code {
            'a' => match issn_number(value) {
                Some(issn) => {
                    if IssnValidator::validate(&issn).is_err() {
                        warnings.push(ctx.warn_subfield('a', format!("has bad checksum, {value}.")));
                    }
                },
                None => warnings.push(ctx.warn_subfield(
                    'a',
                    format!("has the wrong number of digits, {value}."),
                )),
            },
            // incorrect ISSN: only flag one that is actually correct
            'y' => {
                if issn_number(value).is_some_and(|issn| IssnValidator::validate(&issn).is_ok()) {
                    warnings.push(ctx.warn_subfield('y', "is numerically valid."));
                }
            },
            // cancelled ISSN: format only
            'z' => {
                if !ISSN.is_match(value) {
                    warnings.push(ctx.warn_subfield('z', format!("has invalid format, {value}.")));
                }
            },
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::record::Field;

    fn run(check: fn(&FieldContext<'_>, &mut Vec<MarcWarning>), field: &Field) -> Vec<String> {
        let config = LintConfig::default();
        let ctx = FieldContext {
            field,
            tag: &field.tag,
            position: None,
            language: None,
            fields: std::slice::from_ref(field),
            config: &config,
        };
        let mut warnings = Vec::new();
        check(&ctx, &mut warnings);
        warnings.iter().map(ToString::to_string).collect()
    }

    fn isbn(code: char, value: &str) -> Vec<String> {
        run(check_020, &Field::builder("020", ' ', ' ').subfield(code, value).build())
    }

    fn issn(subfields: &[(char, &str)]) -> Vec<String> {
        let mut field = Field::new("022", ' ', ' ');
        for (code, value) in subfields {
            field.add_subfield(*code, *value);
        }
        run(check_022, &field)
    }

    #[test]
    fn test_isbn_number_extraction() {
        assert_eq!(isbn_number("0123456789 (hardcover)"), "0123456789");
        assert_eq!(isbn_number("0-12-345678-9"), "0123456789");
        assert_eq!(isbn_number("ISBN 0123456789"), "0123456789");
        assert_eq!(isbn_number("9780123456786 (pbk.)"), "9780123456786");
        assert_eq!(isbn_number("012345678"), "012345678");
    }

    #[test]
    fn test_valid_isbns() {
        for value in [
            "0123456789",
            "155404295X",
            "9780123456786",
            "0123456789 (hardcover)",
            "0123456789 (v. 1 : hardcover)",
            "9780123456786 (paperback)",
        ] {
            assert!(isbn('a', value).is_empty(), "{value}");
        }
    }

    #[test]
    fn test_isbn_checksums() {
        assert_eq!(isbn('a', "0123456788"), vec!["020: Subfield a has bad checksum, 0123456788."]);
        assert_eq!(
            isbn('a', "9780123456787"),
            vec!["020: Subfield a has bad checksum (13 digit), 9780123456787."]
        );
    }

    #[test]
    fn test_isbn_format_findings() {
        assert_eq!(
            isbn('a', "012345678"),
            vec!["020: Subfield a has the wrong number of digits, 012345678."]
        );
        assert_eq!(
            isbn('a', "X123456789"),
            vec!["020: Subfield a has the wrong number of digits, X123456789."]
        );
        assert_eq!(
            isbn('a', "0123456789(hardcover)"),
            vec!["020: Subfield a qualifier must be preceded by space, 0123456789(hardcover)."]
        );
        assert_eq!(
            isbn('a', "ISBN 0123456789"),
            vec!["020: Subfield a may have invalid characters."]
        );
        assert_eq!(isbn('a', ""), vec!["020: Subfield a has the wrong number of digits, ."]);
    }

    #[test]
    fn test_cancelled_isbn() {
        assert_eq!(isbn('z', "0-12-345678-9"), vec!["020: Subfield z is numerically valid."]);
        assert_eq!(isbn('z', "ISBN 0123456789"), vec!["020: Subfield z is numerically valid."]);
        // bad checksum, as a cancelled number should have
        assert!(isbn('z', "0123456788").is_empty());
        // plain digits are not examined
        assert!(isbn('z', "9876543210").is_empty());
    }

    #[test]
    fn test_valid_issns() {
        for value in ["0378-5955", "03785955", "0028-0836", "0002-953x", "0378-5955 (print)"] {
            assert!(issn(&[('a', value)]).is_empty(), "{value}");
        }
    }

    #[test]
    fn test_issn_findings() {
        assert_eq!(issn(&[('a', "0378-5956")]), vec!["022: Subfield a has bad checksum, 0378-5956."]);
        for value in ["0378-59", "037-85955", "ABC-DEFG", ""] {
            assert_eq!(
                issn(&[('a', value)]),
                vec![format!("022: Subfield a has the wrong number of digits, {value}.")]
            );
        }
    }

    #[test]
    fn test_incorrect_and_cancelled_issns() {
        assert_eq!(
            issn(&[('a', "0378-5955"), ('y', "0028-0836")]),
            vec!["022: Subfield y is numerically valid."]
        );
        assert!(issn(&[('a', "0378-5955"), ('y', "0046-2255")]).is_empty());
        assert!(issn(&[('a', "0410-7543"), ('z', "0527-740X")]).is_empty());
        assert_eq!(
            issn(&[('a', "0378-5955"), ('z', "12345")]),
            vec!["022: Subfield z has invalid format, 12345."]
        );
    }
}
