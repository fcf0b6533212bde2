//! Structured lint findings and their rendering.
//!
//! A [`MarcWarning`] is one violation found in one record. It always carries
//! the tag it concerns and a complete message; subfield, occurrence position
//! and record identity are optional annotations for programmatic filtering.
//!
//! # String form
//!
//! | annotations             | rendering                                  |
//! |-------------------------|--------------------------------------------|
//! | none                    | `245: Must end with . (period).`           |
//! | position                | `650[2]: Indicator 2 must be ...`          |
//! | subfield                | `020: Subfield a has bad checksum, ...`    |
//! | record id               | `Record ocm123: 245: No 245 tag.`          |
//!
//! Positions are zero-based internally and one-based when displayed.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single lint finding.
///
/// Findings are built by rule checks and never changed afterwards except
/// through the consuming `with_*` methods, which return a new value.
///
/// # Examples
///
/// ```
/// use marc_lint::MarcWarning;
///
/// let warning = MarcWarning::new("020", "has bad checksum, 0123456788.")
///     .with_subfield('a')
///     .with_record_id("ocm01");
/// assert_eq!(
///     warning.to_string(),
///     "Record ocm01: 020: Subfield a has bad checksum, 0123456788."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarcWarning {
    field: String,
    message: String,
    subfield: Option<char>,
    position: Option<usize>,
    record_id: Option<String>,
}

impl MarcWarning {
    /// Create a field-level finding
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        MarcWarning {
            field: field.into(),
            message: message.into(),
            subfield: None,
            position: None,
            record_id: None,
        }
    }

    /// Localize the finding to one subfield
    #[must_use]
    pub fn with_subfield(mut self, code: char) -> Self {
        self.subfield = Some(code);
        self
    }

    /// Attach the zero-based occurrence index among same-tag fields
    #[must_use]
    pub fn with_position(mut self, position: Option<usize>) -> Self {
        self.position = position;
        self
    }

    /// Stamp the record identifier
    #[must_use]
    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }

    /// Tag the finding concerns, or a sentinel such as `LDR`
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable description, complete on its own
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Subfield code, when the violation is localized to one subfield
    #[must_use]
    pub fn subfield(&self) -> Option<char> {
        self.subfield
    }

    /// Zero-based index among same-tag occurrences
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Identifier of the record the finding belongs to
    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Dictionary form with all five keys present, absent values as `null`.
    #[must_use]
    pub fn to_dict(&self) -> serde_json::Value {
        serde_json::json!({
            "field": self.field,
            "message": self.message,
            "subfield": self.subfield.map(String::from),
            "position": self.position,
            "record_id": self.record_id,
        })
    }
}

impl fmt::Display for MarcWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(record_id) = &self.record_id {
            write!(f, "Record {record_id}: ")?;
        }
        f.write_str(&self.field)?;
        if let Some(position) = self.position {
            write!(f, "[{}]", position + 1)?;
        }
        f.write_str(": ")?;
        if let Some(code) = self.subfield {
            write!(f, "Subfield {code} ")?;
        }
        f.write_str(&self.message)
    }
}

/// The findings of one `check_record` call, in the order checks ran.
///
/// Dereferences to a slice of [`MarcWarning`] so the usual slice methods
/// (`len`, `is_empty`, `iter`) work directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warnings(Vec<MarcWarning>);

impl Warnings {
    /// Findings rendered as strings (legacy form)
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Findings as structured values
    #[must_use]
    pub fn warnings_structured(&self) -> &[MarcWarning] {
        &self.0
    }

    /// Take ownership of the underlying list
    #[must_use]
    pub fn into_vec(self) -> Vec<MarcWarning> {
        self.0
    }

    /// Render as a JSON array of finding objects.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        warnings_to_json(&self.0)
    }
}

impl From<Vec<MarcWarning>> for Warnings {
    fn from(warnings: Vec<MarcWarning>) -> Self {
        Warnings(warnings)
    }
}

impl Deref for Warnings {
    type Target = [MarcWarning];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Warnings {
    type Item = MarcWarning;
    type IntoIter = std::vec::IntoIter<MarcWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a MarcWarning;
    type IntoIter = std::slice::Iter<'a, MarcWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Render findings as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn warnings_to_json(warnings: &[MarcWarning]) -> Result<String> {
    Ok(serde_json::to_string(warnings)?)
}
