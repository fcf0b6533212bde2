//! Subfield 6 linkage between regular fields and their 880 counterparts.
//!
//! The 880 field (Alternate Graphic Representation) carries the same data as
//! another field in a different script. Subfield 6 joins the pair:
//!
//! - `245 10 $6 880-01 $a Sekai no rekishi.`
//! - `880 10 $6 245-01/$1 $a 世界の歴史.`
//!
//! In an 880 the linkage names the regular field's tag; in the regular field
//! it names `880`. Both carry the same two-digit occurrence number. An
//! occurrence of `00` marks an 880 with no regular counterpart.

use lazy_static::lazy_static;
use regex::Regex;

use crate::record::Field;

/// Tag of the alternate graphic representation field
pub const ALTERNATE_GRAPHIC_TAG: &str = "880";

/// Occurrence number of an 880 that has no associated regular field
pub const UNLINKED_OCCURRENCE: &str = "00";

lazy_static! {
    // TAG-OCC[/SCRIPT][/r]
    // SCRIPT is a MARC script identification code: (3 Arabic, (B Latin,
    // $1 CJK, (N Cyrillic, (S Greek, (2 Hebrew
    static ref LINKAGE: Regex =
        Regex::new(r"^(\d{3})-(\d{2})(?:/([\(\$][A-Za-z0-9]))?(/r)?$").unwrap();
}

/// Parsed content of subfield 6 (Linkage).
///
/// # Examples
///
/// ```
/// use marc_lint::field_linkage::LinkageInfo;
///
/// let info = LinkageInfo::parse("245-01/$1").unwrap();
/// assert_eq!(info.tag, "245");
/// assert_eq!(info.occurrence, "01");
/// assert_eq!(info.script_id, "$1");
/// assert!(!info.is_reverse);
///
/// assert!(LinkageInfo::parse("24").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkageInfo {
    /// Tag of the linked field
    pub tag: String,

    /// Two-digit occurrence number shared by both fields of the pair
    pub occurrence: String,

    /// Script identification code, empty when absent
    pub script_id: String,

    /// Whether the right-to-left orientation flag `/r` is present
    pub is_reverse: bool,
}

impl LinkageInfo {
    /// Parse a subfield 6 value, returning `None` when it does not follow
    /// `TAG-NN[/script][/r]`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let caps = LINKAGE.captures(value)?;

        Some(LinkageInfo {
            tag: caps.get(1)?.as_str().to_string(),
            occurrence: caps.get(2)?.as_str().to_string(),
            script_id: caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            is_reverse: caps.get(4).is_some(),
        })
    }

    /// Parse the first subfield 6 of a field
    #[must_use]
    pub fn from_field(field: &Field) -> Option<Self> {
        field.get_subfield('6').and_then(Self::parse)
    }

    /// Whether this is the `00` occurrence of an 880 without a counterpart
    #[must_use]
    pub fn is_unlinked(&self) -> bool {
        self.occurrence == UNLINKED_OCCURRENCE
    }

    /// Whether `fields` contains the regular field an 880 with this linkage
    /// points to: a field of the linked tag whose own subfield 6 is
    /// `880-NN` with the same occurrence.
    #[must_use]
    pub fn has_partner(&self, fields: &[Field]) -> bool {
        fields
            .iter()
            .filter(|f| f.tag == self.tag && f.tag != ALTERNATE_GRAPHIC_TAG)
            .filter_map(Self::from_field)
            .any(|back| back.tag == ALTERNATE_GRAPHIC_TAG && back.occurrence == self.occurrence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------
    // Basic parsing
    // ------------------------------------------------------------------

    #[test]
    fn test_parse_basic_linkage() {
        let info = LinkageInfo::parse("100-01").unwrap();
        assert_eq!(info.tag, "100");
        assert_eq!(info.occurrence, "01");
        assert_eq!(info.script_id, "");
        assert!(!info.is_reverse);
    }

    #[test]
    fn test_parse_with_reverse_flag() {
        let info = LinkageInfo::parse("100-01/r").unwrap();
        assert!(info.is_reverse);

        let info = LinkageInfo::parse("245-02/(3/r").unwrap();
        assert_eq!(info.script_id, "(3");
        assert!(info.is_reverse);
    }

    #[test]
    fn test_parse_880_tag() {
        let info = LinkageInfo::parse("880-01").unwrap();
        assert_eq!(info.tag, "880");
    }

    // ------------------------------------------------------------------
    // Script identification codes
    // ------------------------------------------------------------------

    #[test]
    fn test_parse_script_codes() {
        for (value, script) in [
            ("245-01/(2", "(2"),
            ("245-01/(3", "(3"),
            ("245-01/$1", "$1"),
            ("245-01/(N", "(N"),
            ("245-01/(S", "(S"),
            ("245-01/(B", "(B"),
        ] {
            let info = LinkageInfo::parse(value).unwrap();
            assert_eq!(info.script_id, script, "{value}");
        }
    }

    // ------------------------------------------------------------------
    // Invalid formats
    // ------------------------------------------------------------------

    #[test]
    fn test_parse_invalid_formats() {
        for value in ["", "24", "245", "24501", "245-1", "245-001", "abc-01", "245-01/x"] {
            assert!(LinkageInfo::parse(value).is_none(), "{value}");
        }
    }

    // ------------------------------------------------------------------
    // Partner lookup
    // ------------------------------------------------------------------

    #[test]
    fn test_has_partner() {
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
        let info = LinkageInfo::from_field(&fields[1]).unwrap();
        assert!(info.has_partner(&fields));

        let dangling = LinkageInfo::parse("245-02").unwrap();
        assert!(!dangling.has_partner(&fields));

        let wrong_tag = LinkageInfo::parse("100-01").unwrap();
        assert!(!wrong_tag.has_partner(&fields));

        // an 880 pointing at 880 is never its own partner
        let looped = vec![Field::builder("880", '1', '0')
            .subfield('6', "880-01")
            .subfield('a', "Loop.")
            .build()];
        let info = LinkageInfo::from_field(&looped[0]).unwrap();
        assert!(!info.has_partner(&looped));
    }

    #[test]
    fn test_unlinked_occurrence() {
        assert!(LinkageInfo::parse("245-00").unwrap().is_unlinked());
        assert!(!LinkageInfo::parse("245-01").unwrap().is_unlinked());
    }
}
