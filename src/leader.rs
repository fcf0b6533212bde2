//! MARC record leader (24-character header) decoding and checks.
//!
//! The leader is a fixed-width string. Each coded position has an enumerated
//! set of allowed values, listed in [`LEADER_POSITIONS`]; the numeric spans
//! (record length and base address of data) must be digits. Findings from
//! this module are reported against the `LDR` sentinel field.
//!
//! # Examples
//!
//! ```
//! use marc_lint::leader::{check_leader, describe_value};
//!
//! let mut warnings = Vec::new();
//! check_leader("00000nam a2200000 i 4500", &mut warnings);
//! assert!(warnings.is_empty());
//!
//! check_leader("00000xam a2200000 i 4500", &mut warnings);
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(describe_value(6, 'a'), Some("Language material"));
//! ```

use crate::warning::MarcWarning;

/// Sentinel field name for leader findings
pub const LEADER_FIELD: &str = "LDR";

/// Required leader length
pub const LEADER_LENGTH: usize = 24;

/// A coded leader position and its allowed values
#[derive(Debug, Clone, Copy)]
pub struct LeaderPosition {
    /// Zero-based character position
    pub position: usize,
    /// Element name, as used in findings
    pub name: &'static str,
    /// Allowed values with their meanings
    pub values: &'static [(char, &'static str)],
}

impl LeaderPosition {
    /// Check if the given character is allowed at this position
    #[must_use]
    pub fn is_valid(&self, c: char) -> bool {
        self.values.iter().any(|(v, _)| *v == c)
    }
}

/// Coded leader positions, in position order
pub const LEADER_POSITIONS: &[LeaderPosition] = &[
    LeaderPosition {
        position: 5,
        name: "record status",
        values: &[
            ('a', "Increase in encoding level"),
            ('c', "Corrected or revised"),
            ('d', "Deleted"),
            ('n', "New"),
            ('p', "Increase in encoding level from prepublication"),
        ],
    },
    LeaderPosition {
        position: 6,
        name: "type of record",
        values: &[
            ('a', "Language material"),
            ('c', "Notated music"),
            ('d', "Manuscript notated music"),
            ('e', "Cartographic material"),
            ('f', "Manuscript cartographic material"),
            ('g', "Projected medium"),
            ('i', "Nonmusical sound recording"),
            ('j', "Musical sound recording"),
            ('k', "Two-dimensional nonprojectable graphic"),
            ('m', "Computer file"),
            ('o', "Kit"),
            ('p', "Mixed materials"),
            (
                'r',
                "Three-dimensional artifact or naturally occurring object",
            ),
            ('t', "Manuscript language material"),
        ],
    },
    LeaderPosition {
        position: 7,
        name: "bibliographic level",
        values: &[
            ('a', "Monographic component part"),
            ('b', "Serial component part"),
            ('c', "Collection"),
            ('d', "Subunit"),
            ('i', "Integrating resource"),
            ('m', "Monograph/Item"),
            ('s', "Serial"),
        ],
    },
    LeaderPosition {
        position: 8,
        name: "type of control",
        values: &[(' ', "No specified type"), ('a', "Archival")],
    },
    LeaderPosition {
        position: 9,
        name: "character coding scheme",
        values: &[(' ', "MARC-8"), ('a', "UCS/Unicode")],
    },
    LeaderPosition {
        position: 10,
        name: "indicator count",
        values: &[('2', "Number of character positions used for indicators")],
    },
    LeaderPosition {
        position: 11,
        name: "subfield code count",
        values: &[('2', "Number of character positions used for a subfield code")],
    },
    LeaderPosition {
        position: 17,
        name: "encoding level",
        values: &[
            (' ', "Full level"),
            ('1', "Full level, material not examined"),
            ('2', "Less-than-full level, material not examined"),
            ('3', "Abbreviated level"),
            ('4', "Core level"),
            ('5', "Partial (preliminary) level"),
            ('7', "Minimal level"),
            ('8', "Prepublication level"),
            ('u', "Unknown"),
            ('z', "Not applicable"),
        ],
    },
    LeaderPosition {
        position: 18,
        name: "descriptive cataloging form",
        values: &[
            (' ', "Non-ISBD"),
            ('a', "AACR 2"),
            ('c', "ISBD punctuation omitted"),
            ('i', "ISBD punctuation included"),
            ('n', "Non-ISBD punctuation omitted"),
            ('u', "Unknown"),
        ],
    },
    LeaderPosition {
        position: 19,
        name: "multipart resource record level",
        values: &[
            (' ', "Not specified or not applicable"),
            ('a', "Set"),
            ('b', "Part with independent title"),
            ('c', "Part with dependent title"),
        ],
    },
    LeaderPosition {
        position: 20,
        name: "length of the length-of-field portion",
        values: &[('4', "Entry map")],
    },
    LeaderPosition {
        position: 21,
        name: "length of the starting-character-position portion",
        values: &[('5', "Entry map")],
    },
    LeaderPosition {
        position: 22,
        name: "length of the implementation-defined portion",
        values: &[('0', "Entry map")],
    },
    LeaderPosition {
        position: 23,
        name: "undefined entry map character",
        values: &[('0', "Entry map")],
    },
];

/// Numeric spans: (start, end inclusive, name)
const NUMERIC_SPANS: &[(usize, usize, &str)] = &[
    (0, 4, "Record length"),
    (12, 16, "Base address of data"),
];

/// Get the allowed values at a coded leader position
///
/// # Examples
///
/// ```
/// use marc_lint::leader::valid_values_at_position;
///
/// let values = valid_values_at_position(5).unwrap();
/// assert!(values.iter().any(|(c, _)| *c == 'n'));
/// assert!(valid_values_at_position(0).is_none());
/// ```
#[must_use]
pub fn valid_values_at_position(position: usize) -> Option<&'static [(char, &'static str)]> {
    LEADER_POSITIONS
        .iter()
        .find(|p| p.position == position)
        .map(|p| p.values)
}

/// Meaning of a value at a coded leader position
#[must_use]
pub fn describe_value(position: usize, value: char) -> Option<&'static str> {
    valid_values_at_position(position)?
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, meaning)| *meaning)
}

/// Check a leader string, appending one finding per offending position.
///
/// A leader that is not exactly 24 characters gets a single length finding
/// and no position checks.
pub fn check_leader(leader: &str, warnings: &mut Vec<MarcWarning>) {
    let chars: Vec<char> = leader.chars().collect();
    if chars.len() != LEADER_LENGTH {
        warnings.push(MarcWarning::new(
            LEADER_FIELD,
            format!(
                "Leader must be {LEADER_LENGTH} characters, but it is {}.",
                chars.len()
            ),
        ));
        return;
    }

    for &(start, end, name) in NUMERIC_SPANS {
        let span = &chars[start..=end];
        if !span.iter().all(char::is_ascii_digit) {
            warnings.push(MarcWarning::new(
                LEADER_FIELD,
                format!(
                    "{name} (positions {start:02}-{end:02}) must be numeric, '{}'.",
                    span.iter().collect::<String>()
                ),
            ));
        }
    }

    for spec in LEADER_POSITIONS {
        let c = chars[spec.position];
        if !spec.is_valid(c) {
            warnings.push(MarcWarning::new(
                LEADER_FIELD,
                format!(
                    "Invalid {} '{c}' at position {:02}.",
                    spec.name, spec.position
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(leader: &str) -> Vec<MarcWarning> {
        let mut warnings = Vec::new();
        check_leader(leader, &mut warnings);
        warnings
    }

    #[test]
    fn test_valid_leaders() {
        assert!(check("00000nam a2200000 i 4500").is_empty());
        assert!(check("00000nam  2200000   4500").is_empty());
        assert!(check("01234cas a2200397 a 4500").is_empty());
    }

    #[test]
    fn test_short_leader_is_terminal() {
        let warnings = check("00000nam");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("must be 24 characters"));
        assert_eq!(warnings[0].field(), "LDR");
    }

    #[test]
    fn test_one_finding_per_position() {
        // bad record status (05) and bibliographic level (07)
        let warnings = check("00000xaz a2200000 i 4500");
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message().contains("record status"));
        assert!(warnings[0].message().contains("'x'"));
        assert!(warnings[1].message().contains("bibliographic level"));
        assert!(warnings[1].message().contains("position 07"));
    }

    #[test]
    fn test_each_named_position() {
        let cases = [
            ("00000nxm a2200000 i 4500", "type of record"),
            ("00000namxa2200000 i 4500", "type of control"),
            ("00000nam x2200000 i 4500", "character coding scheme"),
            ("00000nam a2200000xi 4500", "encoding level"),
            ("00000nam a2200000 x 4500", "descriptive cataloging form"),
            ("00000nam a2200000 ix4500", "multipart resource record level"),
        ];
        for (leader, name) in cases {
            let warnings = check(leader);
            assert_eq!(warnings.len(), 1, "{leader}");
            assert!(warnings[0].message().contains(name), "{leader}");
        }
    }

    #[test]
    fn test_numeric_spans_and_entry_map() {
        let warnings = check("0000xnam a22000x0 i 4501");
        let messages: Vec<&str> = warnings.iter().map(MarcWarning::message).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("Record length"));
        assert!(messages[1].starts_with("Base address of data"));
        assert!(messages[2].contains("position 23"));
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(5, 'n'), Some("New"));
        assert_eq!(describe_value(7, 's'), Some("Serial"));
        assert_eq!(describe_value(5, 'z'), None);
        assert_eq!(describe_value(0, '0'), None);
    }
}
