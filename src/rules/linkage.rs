//! 880 (Alternate Graphic Representation) linkage checks.
//!
//! These cover the 880 as such: its `$6` must be present and well formed,
//! and a numbered link must be answered by the field it names. Validation
//! of the 880's content with the linked tag's rules is done by the engine.

use super::FieldContext;
use crate::field_linkage::{LinkageInfo, ALTERNATE_GRAPHIC_TAG};
use crate::warning::MarcWarning;

/// 880: Alternate graphic representation
pub fn check_880(ctx: &FieldContext<'_>, warnings: &mut Vec<MarcWarning>) {
    let Some(value) = ctx.field.get_subfield('6') else {
        warnings.push(ctx.warn("No subfield 6."));
        return;
    };

    // an 880 can only link to a regular field
    let linkage = LinkageInfo::parse(value).filter(|linkage| linkage.tag != ALTERNATE_GRAPHIC_TAG);
    let Some(linkage) = linkage else {
        warnings.push(ctx.warn_subfield('6', format!("has invalid linkage, '{value}'.")));
        return;
    };

    if !linkage.is_unlinked() && !linkage.has_partner(ctx.fields) {
        warnings.push(ctx.warn(format!(
            "Subfield 6 links to {tag}-{occurrence}, but no {tag} field links back to {ALTERNATE_GRAPHIC_TAG}-{occurrence}.",
            tag = linkage.tag,
            occurrence = linkage.occurrence,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::record::Field;

    fn check(fields: &[Field], index: usize) -> Vec<String> {
        let config = LintConfig::default();
        let ctx = FieldContext {
            field: &fields[index],
            tag: "880",
            position: Some(0),
            language: None,
            fields,
            config: &config,
        };
        let mut warnings = Vec::new();
        check_880(&ctx, &mut warnings);
        warnings.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_missing_subfield_6() {
        let fields = vec![Field::builder("880", '1', '0').subfield('a', "Title.").build()];
        assert_eq!(check(&fields, 0), vec!["880[1]: No subfield 6."]);
    }

    #[test]
    fn test_malformed_subfield_6() {
        let fields = vec![Field::builder("880", '1', '0')
            .subfield('6', "24501")
            .subfield('a', "Title.")
            .build()];
        assert_eq!(check(&fields, 0), vec!["880[1]: Subfield 6 has invalid linkage, '24501'."]);
    }

    #[test]
    fn test_link_to_another_880_is_invalid() {
        let fields = vec![Field::builder("880", '1', '0')
            .subfield('6', "880-01")
            .subfield('a', "Loop.")
            .build()];
        assert_eq!(check(&fields, 0), vec!["880[1]: Subfield 6 has invalid linkage, '880-01'."]);
    }

    #[test]
    fn test_linked_pair() {
        let fields = vec![
            Field::builder("245", '1', '0')
                .subfield('6', "880-01")
                .subfield('a', "Title.")
                .build(),
            Field::builder("880", '1', '0')
                .subfield('6', "245-01/$1")
                .subfield('a', "Title.")
                .build(),
        ];
        assert!(check(&fields, 1).is_empty());
    }

    #[test]
    fn test_dangling_link() {
        let fields = vec![Field::builder("880", '1', '0')
            .subfield('6', "245-02")
            .subfield('a', "Title.")
            .build()];
        assert_eq!(
            check(&fields, 0),
            vec!["880[1]: Subfield 6 links to 245-02, but no 245 field links back to 880-02."]
        );
    }

    #[test]
    fn test_unlinked_occurrence_needs_no_partner() {
        let fields = vec![Field::builder("880", '1', '0')
            .subfield('6', "245-00/$1")
            .subfield('a', "Title.")
            .build()];
        assert!(check(&fields, 0).is_empty());
    }
}
