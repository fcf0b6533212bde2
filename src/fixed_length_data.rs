//! Field 008 (fixed-length data elements) decoding and checks.
//!
//! Only the positions common to every material type are checked: date
//! entered, type of date, the two dates, place of publication, language,
//! modified record and cataloging source. Positions 18-34 depend on the
//! material type and are left alone.

use crate::code_tables::{country_status, language_status, CodeStatus};
use crate::warning::MarcWarning;

/// Tag of the fixed-length data elements field
pub const FIXED_LENGTH_TAG: &str = "008";

/// Required length of field 008
pub const FIXED_LENGTH: usize = 40;

const TYPES_OF_DATE: &str = "bcdeikmnpqrstu|";
/// Types of date whose Date 2 closes a range opened by Date 1
const RANGE_TYPES: &str = "dikmq";
const MODIFIED_RECORD: &str = " dorsx|";
const CATALOGING_SOURCE: &str = " cdu|";

/// Decoded view over a well-formed 008
#[derive(Debug, Clone, Copy)]
pub struct FixedLengthData<'a> {
    data: &'a str,
}

impl<'a> FixedLengthData<'a> {
    /// Wrap 008 data, or `None` if it is not exactly 40 ASCII characters
    #[must_use]
    pub fn parse(data: &'a str) -> Option<Self> {
        (data.len() == FIXED_LENGTH && data.is_ascii()).then_some(FixedLengthData { data })
    }

    /// Positions 00-05
    #[must_use]
    pub fn date_entered(&self) -> &'a str {
        &self.data[0..6]
    }

    /// Position 06
    #[must_use]
    pub fn type_of_date(&self) -> char {
        self.char_at(6)
    }

    /// Positions 07-10
    #[must_use]
    pub fn date1(&self) -> &'a str {
        &self.data[7..11]
    }

    /// Positions 11-14
    #[must_use]
    pub fn date2(&self) -> &'a str {
        &self.data[11..15]
    }

    /// Positions 15-17
    #[must_use]
    pub fn place(&self) -> &'a str {
        &self.data[15..18]
    }

    /// Positions 35-37
    #[must_use]
    pub fn language(&self) -> &'a str {
        &self.data[35..38]
    }

    /// Position 38
    #[must_use]
    pub fn modified_record(&self) -> char {
        self.char_at(38)
    }

    /// Position 39
    #[must_use]
    pub fn cataloging_source(&self) -> char {
        self.char_at(39)
    }

    fn char_at(&self, position: usize) -> char {
        char::from(self.data.as_bytes()[position])
    }
}

/// Check field 008 data, appending findings.
///
/// Returns the decoded view when the length is right, so the caller can
/// reuse the language code; a wrong length yields a single finding.
pub fn check_fixed_length_data<'a>(
    data: &'a str,
    warnings: &mut Vec<MarcWarning>,
) -> Option<FixedLengthData<'a>> {
    let Some(fixed) = FixedLengthData::parse(data) else {
        let length = data.chars().count();
        let message = if length == FIXED_LENGTH {
            "Coded positions must be ASCII characters.".to_string()
        } else {
            format!("Length must be {FIXED_LENGTH} characters, but it is {length}.")
        };
        warnings.push(warning(message));
        return None;
    };

    let entered = fixed.date_entered();
    if !entered.bytes().all(|b| b.is_ascii_digit()) {
        warnings.push(warning(format!(
            "Date entered on file (positions 00-05) must be six digits, '{entered}'."
        )));
    }

    let type_of_date = fixed.type_of_date();
    if !TYPES_OF_DATE.contains(type_of_date) {
        warnings.push(warning(format!(
            "Invalid type of date/publication status '{type_of_date}' at position 06."
        )));
    }

    for (name, span, value) in [
        ("Date 1", "07-10", fixed.date1()),
        ("Date 2", "11-14", fixed.date2()),
    ] {
        if !is_valid_date(value) {
            warnings.push(warning(format!(
                "{name} (positions {span}) is not a valid year, '{value}'."
            )));
        }
    }

    if RANGE_TYPES.contains(type_of_date) {
        if let (Ok(start), Ok(end)) = (fixed.date1().parse::<u16>(), fixed.date2().parse::<u16>()) {
            if end < start {
                warnings.push(warning(format!(
                    "Date 2 ({end}) precedes Date 1 ({start}) for type of date '{type_of_date}'."
                )));
            }
        }
    }

    let place = fixed.place();
    if place != "|||" {
        match country_status(place) {
            CodeStatus::Valid => {},
            CodeStatus::Obsolete => warnings.push(warning(format!(
                "Country code '{place}' at positions 15-17 may be obsolete."
            ))),
            CodeStatus::Unknown => warnings.push(warning(format!(
                "Invalid country code '{place}' at positions 15-17."
            ))),
        }
    }

    let language = fixed.language();
    if language != "|||" && language != "   " {
        match language_status(language) {
            CodeStatus::Valid => {},
            CodeStatus::Obsolete => warnings.push(warning(format!(
                "Language code '{language}' at positions 35-37 may be obsolete."
            ))),
            CodeStatus::Unknown => warnings.push(warning(format!(
                "Invalid language code '{language}' at positions 35-37."
            ))),
        }
    }

    let modified = fixed.modified_record();
    if !MODIFIED_RECORD.contains(modified) {
        warnings.push(warning(format!(
            "Invalid modified record '{modified}' at position 38."
        )));
    }

    let source = fixed.cataloging_source();
    if !CATALOGING_SOURCE.contains(source) {
        warnings.push(warning(format!(
            "Invalid cataloging source '{source}' at position 39."
        )));
    }

    Some(fixed)
}

/// Four digits or `u`, all blanks, or all fill characters
fn is_valid_date(value: &str) -> bool {
    value == "    "
        || value == "||||"
        || value.bytes().all(|b| b.is_ascii_digit() || b == b'u')
}

fn warning(message: String) -> MarcWarning {
    MarcWarning::new(FIXED_LENGTH_TAG, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "240101s2024    xxu           000 0 eng d";

    fn with(position: usize, replacement: &str) -> String {
        let mut data = VALID.to_string();
        data.replace_range(position..position + replacement.len(), replacement);
        data
    }

    fn check(data: &str) -> Vec<MarcWarning> {
        let mut warnings = Vec::new();
        check_fixed_length_data(data, &mut warnings);
        warnings
    }

    #[test]
    fn test_valid_008() {
        assert_eq!(VALID.len(), 40);
        assert!(check(VALID).is_empty());
        let fixed = FixedLengthData::parse(VALID).unwrap();
        assert_eq!(fixed.language(), "eng");
        assert_eq!(fixed.place(), "xxu");
        assert_eq!(fixed.date1(), "2024");
        assert_eq!(fixed.type_of_date(), 's');
    }

    #[test]
    fn test_wrong_length_is_single_finding() {
        let warnings = check("240101s2024");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("40 characters"));

        let mut warnings = Vec::new();
        assert!(check_fixed_length_data(&format!("{VALID}x"), &mut warnings).is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_date_entered() {
        let warnings = check(&with(0, "24ab01"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("Date entered"));
    }

    #[test]
    fn test_type_of_date() {
        let warnings = check(&with(6, "x"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("type of date"));
    }

    #[test]
    fn test_dates_allow_unknown_digits() {
        for date in ["19uu", "199u", "uuuu", "    ", "||||"] {
            assert!(check(&with(7, date)).is_empty(), "{date}");
        }
        let warnings = check(&with(7, "abcd"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("Date 1"));
    }

    #[test]
    fn test_date_range_order() {
        let ok = with(6, "d19902000");
        assert!(check(&ok).is_empty());

        let reversed = with(6, "d20001990");
        let warnings = check(&reversed);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("precedes Date 1"));

        // reprint dates: Date 2 is the original, earlier date
        assert!(check(&with(6, "r20001990")).is_empty());
    }

    #[test]
    fn test_country_codes() {
        assert!(check(&with(15, "nyu")).is_empty());
        assert!(check(&with(15, "|||")).is_empty());

        let warnings = check(&with(15, "zzz"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("country code"));

        let warnings = check(&with(15, "cs "));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("obsolete"));
        assert!(warnings[0].message().contains("Country"));
    }

    #[test]
    fn test_language_codes() {
        assert!(check(&with(35, "fre")).is_empty());
        assert!(check(&with(35, "|||")).is_empty());
        assert!(check(&with(35, "   ")).is_empty());

        let warnings = check(&with(35, "zzz"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("language code"));

        let warnings = check(&with(35, "esk"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("obsolete"));
    }

    #[test]
    fn test_modified_record_and_cataloging_source() {
        let warnings = check(&with(38, "q"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("modified record"));

        let warnings = check(&with(39, "q"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("cataloging source"));
    }
}
