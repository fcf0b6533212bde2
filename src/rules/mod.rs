//! Field rule registry.
//!
//! Every field the engine visits goes through two layers of checks:
//!
//! 1. the generic checks driven by its [`TagRule`]: indicator values,
//!    undefined subfields, repeated non-repeatable subfields and control
//!    characters in subfield data;
//! 2. the tag-specific check looked up in the dispatch table with
//!    [`tag_check`].
//!
//! Checks only ever append to the finding list they are handed. Malformed
//! content is a finding, never an error.

pub mod codes;
pub mod identifiers;
pub mod linkage;
pub mod tag_rules;
pub mod title;

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::config::LintConfig;
use crate::record::Field;
use crate::warning::MarcWarning;

pub use tag_rules::{rule_for, IndicatorValidation, TagRule, TAG_RULES};

/// Everything a rule needs to know about the field under check.
///
/// `tag` is the tag the field is validated as. It differs from
/// `field.tag` only for a linked 880, which is validated with the rules of
/// the field it links to.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Field under check
    pub field: &'a Field,
    /// Effective tag, used for rule lookup and in findings
    pub tag: &'a str,
    /// Occurrence index to attach to findings, if any
    pub position: Option<usize>,
    /// Language code from a well-formed 008
    pub language: Option<&'a str>,
    /// All fields of the record, in document order
    pub fields: &'a [Field],
    /// Linter configuration
    pub config: &'a LintConfig,
}

impl FieldContext<'_> {
    /// Field-level finding against the effective tag
    #[must_use]
    pub fn warn(&self, message: impl Into<String>) -> MarcWarning {
        MarcWarning::new(self.tag, message).with_position(self.position)
    }

    /// Finding localized to one subfield
    #[must_use]
    pub fn warn_subfield(&self, code: char, message: impl Into<String>) -> MarcWarning {
        self.warn(message).with_subfield(code)
    }
}

/// Tag-specific check routine
pub type TagCheck = fn(&FieldContext<'_>, &mut Vec<MarcWarning>);

/// Check for tags with no rules beyond the generic ones
fn no_tag_check(_ctx: &FieldContext<'_>, _warnings: &mut Vec<MarcWarning>) {}

lazy_static! {
    static ref TAG_CHECKS: HashMap<&'static str, TagCheck> = {
        let mut checks: HashMap<&'static str, TagCheck> = TAG_RULES
            .iter()
            .map(|rule| (rule.tag, no_tag_check as TagCheck))
            .collect();

        checks.insert("020", identifiers::check_020);
        checks.insert("022", identifiers::check_022);
        checks.insert("041", codes::check_041);
        checks.insert("043", codes::check_043);
        checks.insert("130", title::check_nonfiling);
        checks.insert("240", title::check_nonfiling);
        checks.insert("245", title::check_245);
        checks.insert("630", title::check_nonfiling);
        checks.insert("730", title::check_nonfiling);
        checks.insert("830", title::check_nonfiling);
        checks.insert("880", linkage::check_880);
        checks
    };
}

/// Look up the tag-specific check for a tag
#[must_use]
pub fn tag_check(tag: &str) -> Option<TagCheck> {
    TAG_CHECKS.get(tag).copied()
}

/// Run the generic indicator and subfield checks of `rule`.
///
/// Control fields have neither indicators nor subfields and are left alone.
pub fn check_field_structure(ctx: &FieldContext<'_>, rule: &TagRule, warnings: &mut Vec<MarcWarning>) {
    let field = ctx.field;
    if field.is_control() {
        return;
    }

    for number in 1..=2 {
        let value = field.indicator(number).unwrap_or(' ');
        let validation = rule.indicator(number);
        if !validation.is_valid(value) {
            warnings.push(ctx.warn(format!(
                "Indicator {number} must be {} but it's \"{value}\"",
                validation.description()
            )));
        }
    }

    let mut seen: Vec<char> = Vec::with_capacity(field.subfields.len());
    for subfield in &field.subfields {
        let code = subfield.code;
        if !rule.allows_subfield(code) {
            warnings.push(ctx.warn(format!("Subfield _{code} is not allowed.")));
        } else if seen.contains(&code) && !rule.subfield_repeatable(code) {
            warnings.push(ctx.warn(format!("Subfield _{code} is not repeatable.")));
        }
        seen.push(code);

        if subfield.value.chars().any(char::is_control) {
            warnings.push(ctx.warn(format!(
                "Subfield _{code} has an invalid control character."
            )));
        }
    }
}
