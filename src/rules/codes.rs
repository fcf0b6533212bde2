//! Coded-value fields checked against the MARC code lists: 041 (language
//! codes) and 043 (geographic area codes).

use super::FieldContext;
use crate::code_tables::{geographic_area_status, language_status, CodeStatus};
use crate::warning::MarcWarning;

/// Second indicator value meaning the codes come from the source named in $2
const OTHER_SOURCE: char = '7';

/// Subfields of 041 that do not hold language codes
const NON_CODE_SUBFIELDS: &str = "2368";

const GEOGRAPHIC_AREA_LENGTH: usize = 7;

/// 041: Language code
///
/// Each code subfield holds one or more three-letter codes run together
/// (`engfre`). Codes from another source (second indicator 7) are not
/// checked. One finding per offending subfield.
pub fn check_041(ctx: &FieldContext<'_>, warnings: &mut Vec<MarcWarning>) {
    if ctx.field.indicator2 == OTHER_SOURCE {
        return;
    }

    for subfield in &ctx.field.subfields {
        let code = subfield.code;
        if NON_CODE_SUBFIELDS.contains(code) {
            continue;
        }
        let value = subfield.value.as_str();

        if !value.is_ascii() || value.len() % 3 != 0 {
            warnings.push(ctx.warn_subfield(
                code,
                format!(
                    "must be evenly divisible by 3 or exactly three characters if ind2 is not 7, ({value})."
                ),
            ));
            continue;
        }

        let mut invalid = Vec::new();
        let mut obsolete = Vec::new();
        // ASCII, so byte offsets are character boundaries
        for language in (0..value.len()).step_by(3).map(|i| &value[i..i + 3]) {
            match language_status(language) {
                CodeStatus::Valid => {},
                CodeStatus::Obsolete => obsolete.push(language),
                CodeStatus::Unknown => invalid.push(language),
            }
        }

        if !invalid.is_empty() {
            warnings.push(ctx.warn_subfield(
                code,
                format!("{value} ({}), is not valid.", invalid.join(", ")),
            ));
        } else if !obsolete.is_empty() {
            let message = if value.len() == 3 {
                format!("{value}, may be obsolete.")
            } else {
                format!("{value} ({}), may be obsolete.", obsolete.join(", "))
            };
            warnings.push(ctx.warn_subfield(code, message));
        }
    }
}

/// 043: Geographic area code
///
/// Only `$a` is checked; `$b` (local code) and `$c` (ISO code) are not in
/// the MARC list.
pub fn check_043(ctx: &FieldContext<'_>, warnings: &mut Vec<MarcWarning>) {
    for value in ctx.field.subfields_by_code('a') {
        if value.chars().count() != GEOGRAPHIC_AREA_LENGTH {
            warnings.push(ctx.warn_subfield(
                'a',
                format!("must be exactly {GEOGRAPHIC_AREA_LENGTH} characters, {value}."),
            ));
            continue;
        }

        match geographic_area_status(value) {
            CodeStatus::Valid => {},
            CodeStatus::Obsolete => {
                warnings.push(ctx.warn_subfield('a', format!("{value}, may be obsolete.")));
            },
            CodeStatus::Unknown => {
                warnings.push(ctx.warn_subfield('a', format!("{value}, is not valid.")));
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::record::Field;

    fn run(
        check: fn(&FieldContext<'_>, &mut Vec<MarcWarning>),
        tag: &str,
        ind2: char,
        subfields: &[(char, &str)],
    ) -> Vec<String> {
        let mut field = Field::new(tag, ' ', ind2);
        for (code, value) in subfields {
            field.add_subfield(*code, *value);
        }
        let config = LintConfig::default();
        let ctx = FieldContext {
            field: &field,
            tag,
            position: None,
            language: None,
            fields: std::slice::from_ref(&field),
            config: &config,
        };
        let mut warnings = Vec::new();
        check(&ctx, &mut warnings);
        warnings.iter().map(ToString::to_string).collect()
    }

    fn languages(ind2: char, subfields: &[(char, &str)]) -> Vec<String> {
        run(check_041, "041", ind2, subfields)
    }

    fn areas(subfields: &[(char, &str)]) -> Vec<String> {
        run(check_043, "043", ' ', subfields)
    }

    #[test]
    fn test_valid_language_codes() {
        assert!(languages(' ', &[('a', "eng")]).is_empty());
        assert!(languages(' ', &[('a', "engfrespa"), ('h', "lat")]).is_empty());
        assert!(languages(' ', &[('a', "")]).is_empty());
    }

    #[test]
    fn test_language_code_length() {
        for value in ["en", "engl", "engfres"] {
            let warnings = languages(' ', &[('a', value)]);
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].starts_with("041: Subfield a must be evenly divisible by 3"));
        }
    }

    #[test]
    fn test_invalid_language_codes() {
        assert_eq!(
            languages(' ', &[('a', "engxxx")]),
            vec!["041: Subfield a engxxx (xxx), is not valid."]
        );
        assert_eq!(
            languages(' ', &[('a', "eng"), ('b', "xxx")]),
            vec!["041: Subfield b xxx (xxx), is not valid."]
        );
        // one finding per subfield, listing every bad code
        assert_eq!(
            languages(' ', &[('a', "xxxengzzz")]),
            vec!["041: Subfield a xxxengzzz (xxx, zzz), is not valid."]
        );
    }

    #[test]
    fn test_obsolete_language_codes() {
        assert_eq!(
            languages(' ', &[('a', "scc")]),
            vec!["041: Subfield a scc, may be obsolete."]
        );
        assert_eq!(
            languages(' ', &[('a', "engscc")]),
            vec!["041: Subfield a engscc (scc), may be obsolete."]
        );
        // invalid wins over obsolete
        assert_eq!(
            languages(' ', &[('a', "sccxxx")]),
            vec!["041: Subfield a sccxxx (xxx), is not valid."]
        );
    }

    #[test]
    fn test_other_source_is_skipped() {
        assert!(languages('7', &[('a', "en"), ('2', "local")]).is_empty());
    }

    #[test]
    fn test_geographic_areas() {
        assert!(areas(&[('a', "n-us---")]).is_empty());
        assert!(areas(&[('a', "n-us---"), ('a', "e-fr---")]).is_empty());
        assert!(areas(&[('a', "n-us---"), ('b', "local"), ('c', "us")]).is_empty());

        assert_eq!(areas(&[('a', "n-us")]), vec!["043: Subfield a must be exactly 7 characters, n-us."]);
        assert_eq!(areas(&[('a', "x-xx---")]), vec!["043: Subfield a x-xx---, is not valid."]);
        assert_eq!(areas(&[('a', "e-ur-ai")]), vec!["043: Subfield a e-ur-ai, may be obsolete."]);
    }
}
