//! The validation engine.
//!
//! [`MarcLint`] runs every check against one record and returns the
//! findings in the order the checks ran:
//!
//! 1. the leader;
//! 2. field 008, which also yields the language for the article check;
//! 3. record-level checks (a single 1XX, presence of 245);
//! 4. each field in document order: repeatability, generic indicator and
//!    subfield checks, then the tag-specific check.
//!
//! Findings are never sorted by tag. The engine keeps no state between
//! calls, so one `MarcLint` can be shared freely, including across threads.

use indexmap::IndexMap;

use crate::config::LintConfig;
use crate::error::{LintError, Result};
use crate::field_linkage::{LinkageInfo, ALTERNATE_GRAPHIC_TAG};
use crate::fixed_length_data::{check_fixed_length_data, FIXED_LENGTH_TAG};
use crate::leader::check_leader;
use crate::marc_record::MarcRecord;
use crate::record::{is_control_tag, Field};
use crate::rules::{check_field_structure, rule_for, tag_check, FieldContext, TagRule};
use crate::warning::{MarcWarning, Warnings};

const TITLE_TAG: &str = "245";
const MAIN_ENTRY_FIELD: &str = "1XX";

/// MARC21 bibliographic record linter.
///
/// # Examples
///
/// ```
/// use marc_lint::{Field, MarcLint, Record};
///
/// let record = Record::builder("00000nam a2200000 i 4500")
///     .control_field("001", "ocm00012345")
///     .control_field("008", "240101s2024    xxu           000 0 eng d")
///     .field(
///         Field::builder("245", '1', '0')
///             .subfield('a', "The Great Gatsby.")
///             .build(),
///     )
///     .build();
///
/// let warnings = MarcLint::new().check_record(&record).unwrap();
/// assert_eq!(
///     warnings.warnings(),
///     vec!["Record ocm00012345: 245: First word, the, may be an article, check 2nd indicator (0)."]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarcLint {
    config: LintConfig,
}

impl MarcLint {
    /// Create a linter with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a linter with a specific configuration
    #[must_use]
    pub fn with_config(config: LintConfig) -> Self {
        MarcLint { config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Check one record. Findings are stamped with the data of the
    /// configured record id field (001 by default) when the record has it.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::MissingLeader`] if the record has no leader and
    /// [`LintError::InvalidField`] if a field breaks the record model
    /// (tag not three characters, control field without data). Content
    /// problems are never errors.
    pub fn check_record<R: MarcRecord>(&self, record: &R) -> Result<Warnings> {
        let record_id = record.control_field(&self.config.record_id_tag);
        self.check_record_with_id(record, record_id)
    }

    /// Check one record, stamping findings with an explicit identifier
    /// instead of the record's own.
    ///
    /// # Errors
    ///
    /// Same as [`check_record`](Self::check_record).
    pub fn check_record_with_id<R: MarcRecord>(
        &self,
        record: &R,
        record_id: Option<&str>,
    ) -> Result<Warnings> {
        let mut warnings = self.lint(record)?;
        if let Some(record_id) = record_id {
            warnings = warnings
                .into_iter()
                .map(|warning| warning.with_record_id(record_id))
                .collect();
        }

        tracing::debug!(record_id, findings = warnings.len(), "record checked");
        Ok(Warnings::from(warnings))
    }

    fn lint<R: MarcRecord>(&self, record: &R) -> Result<Vec<MarcWarning>> {
        let leader = record.leader().ok_or(LintError::MissingLeader)?;
        let fields = record.fields();
        validate_structure(fields)?;

        let mut warnings = Vec::new();
        check_leader(leader, &mut warnings);

        let language = record
            .control_field(FIXED_LENGTH_TAG)
            .and_then(|data| check_fixed_length_data(data, &mut warnings))
            .map(|fixed| fixed.language());

        check_record_level(fields, &mut warnings);

        let groups = FieldGroups::build(fields);
        for (index, field) in fields.iter().enumerate() {
            let ctx = FieldContext {
                field,
                tag: &field.tag,
                position: None,
                language,
                fields,
                config: &self.config,
            };

            if field.tag == ALTERNATE_GRAPHIC_TAG {
                check_alternate_graphic(ctx, index, &groups, &mut warnings);
            } else if let Some(rule) = rule_for(&field.tag) {
                let (occurrence, count) = groups.occurrence(&field.tag, index);
                check_as(ctx, rule, occurrence, count, &mut warnings);
            }
        }

        Ok(warnings)
    }
}

/// An 880 is checked twice: once as an 880 (its own linkage, always
/// positioned among the record's 880s) and, when it links to a known
/// tag, once more with that tag's rules. Linked 880s are counted per
/// linked tag for repeatability.
fn check_alternate_graphic(
    ctx: FieldContext<'_>,
    index: usize,
    groups: &FieldGroups,
    warnings: &mut Vec<MarcWarning>,
) {
    let (occurrence, _) = groups.occurrence(ALTERNATE_GRAPHIC_TAG, index);
    if let Some(check) = tag_check(ALTERNATE_GRAPHIC_TAG) {
        check(
            &FieldContext {
                position: Some(occurrence),
                ..ctx
            },
            warnings,
        );
    }

    let Some(linkage) = LinkageInfo::from_field(ctx.field) else {
        return;
    };
    if linkage.tag == ALTERNATE_GRAPHIC_TAG || is_control_tag(&linkage.tag) {
        return;
    }
    let Some(rule) = rule_for(&linkage.tag) else {
        return;
    };

    let (occurrence, count) = groups.occurrence(&linked_group(rule.tag), index);
    check_as(
        FieldContext {
            tag: rule.tag,
            ..ctx
        },
        rule,
        occurrence,
        count,
        warnings,
    );
}

/// Validate `ctx.field` as the `rule.tag` field at `occurrence` out of
/// `count` same-tag fields.
fn check_as(
    ctx: FieldContext<'_>,
    rule: &TagRule,
    occurrence: usize,
    count: usize,
    warnings: &mut Vec<MarcWarning>,
) {
    if !rule.repeatable && occurrence > 0 {
        warnings.push(
            MarcWarning::new(rule.tag, "Field is not repeatable.").with_position(Some(occurrence)),
        );
    }

    let ctx = FieldContext {
        position: (rule.repeatable && count > 1).then_some(occurrence),
        ..ctx
    };
    check_field_structure(&ctx, rule, warnings);
    if let Some(check) = tag_check(rule.tag) {
        check(&ctx, warnings);
    }
}

fn check_record_level(fields: &[Field], warnings: &mut Vec<MarcWarning>) {
    let main_entries = fields.iter().filter(|f| f.tag.starts_with('1')).count();
    if main_entries > 1 {
        warnings.push(MarcWarning::new(
            MAIN_ENTRY_FIELD,
            format!("Only one 1XX tag is allowed, but I found {main_entries} of them."),
        ));
    }

    if !fields.iter().any(|f| f.tag == TITLE_TAG) {
        warnings.push(MarcWarning::new(TITLE_TAG, "No 245 tag."));
    }
}

/// Reject records the checks cannot make sense of
fn validate_structure(fields: &[Field]) -> Result<()> {
    for field in fields {
        if field.tag.chars().count() != 3 {
            return Err(LintError::InvalidField(format!(
                "tag '{}' is not three characters",
                field.tag
            )));
        }
        if field.is_control() && field.data.is_none() {
            return Err(LintError::InvalidField(format!(
                "control field {} has no data",
                field.tag
            )));
        }
    }
    Ok(())
}

fn linked_group(tag: &str) -> String {
    format!("{ALTERNATE_GRAPHIC_TAG}.{tag}")
}

/// Field indices grouped by the tag they are counted under, in order of
/// first appearance. Every field is in its own tag's group; an 880 with a
/// parseable `$6` is also in the `880.TAG` group of its linked tag.
struct FieldGroups {
    groups: IndexMap<String, Vec<usize>>,
}

impl FieldGroups {
    fn build(fields: &[Field]) -> Self {
        let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (index, field) in fields.iter().enumerate() {
            groups.entry(field.tag.clone()).or_default().push(index);
            if field.tag == ALTERNATE_GRAPHIC_TAG {
                if let Some(linkage) = LinkageInfo::from_field(field) {
                    groups.entry(linked_group(&linkage.tag)).or_default().push(index);
                }
            }
        }
        FieldGroups { groups }
    }

    /// Zero-based occurrence of a field within a group, and the group size
    fn occurrence(&self, group: &str, field_index: usize) -> (usize, usize) {
        self.groups
            .get(group)
            .and_then(|members| {
                members
                    .binary_search(&field_index)
                    .ok()
                    .map(|occurrence| (occurrence, members.len()))
            })
            .unwrap_or((0, 1))
    }
}
