//! In-memory MARC record structures consumed by the linter.
//!
//! This module provides the record model the linter reads:
//! - [`Record`] - Leader plus fields in document order
//! - [`Field`] - A control field (raw data) or a data field (indicators and subfields)
//! - [`Subfield`] - Named data elements within data fields
//!
//! Decoding ISO 2709 or MARCXML into these structures is left to a record
//! reader; anything that can produce a [`Record`] (or implement
//! [`MarcRecord`](crate::MarcRecord)) can be linted.
//!
//! # Examples
//!
//! ```
//! use marc_lint::{Field, Record};
//!
//! let record = Record::builder("00000nam a2200000 i 4500")
//!     .control_field("001", "ocm12345")
//!     .field(
//!         Field::builder("245", '1', '0')
//!             .subfield('a', "Title.")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.control_field("001"), Some("ocm12345"));
//! assert_eq!(record.fields().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A MARC bibliographic record
///
/// Fields are kept in a single vector in document order. Control fields and
/// data fields share the vector so that the order of occurrence, which the
/// linter uses for position indexing, is exactly what the source carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record leader (24 characters); `None` when the source supplied none
    pub leader: Option<String>,
    /// All fields, control and data, in document order
    pub fields: Vec<Field>,
}

/// A field in a MARC record
///
/// Control fields (tags `001`-`009`) carry `data` and no subfields; data
/// fields carry indicators and subfields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 characters)
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields (stored in `SmallVec` to avoid allocation for typical fields with 4 or fewer subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
    /// Raw content of a control field
    pub data: Option<String>,
}

/// A subfield within a data field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

/// Whether `tag` names a control field (`001`-`009`).
#[must_use]
pub fn is_control_tag(tag: &str) -> bool {
    tag.len() == 3 && tag.starts_with("00")
}

impl Record {
    /// Create a new record with the given leader
    #[must_use]
    pub fn new(leader: impl Into<String>) -> Self {
        Record {
            leader: Some(leader.into()),
            fields: Vec::new(),
        }
    }

    /// Create a builder for fluently constructing records
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_lint::{Field, Record};
    ///
    /// let record = Record::builder("00000nam a2200000 i 4500")
    ///     .control_field("008", "240101s2024    xxu           000 0 eng d")
    ///     .field(Field::builder("020", ' ', ' ').subfield('a', "0123456789").build())
    ///     .build();
    /// assert!(record.leader.is_some());
    /// ```
    #[must_use]
    pub fn builder(leader: impl Into<String>) -> RecordBuilder {
        RecordBuilder {
            record: Record::new(leader),
        }
    }

    /// Append a field (control or data) at the end of the record
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append a control field
    pub fn add_control_field(&mut self, tag: impl Into<String>, data: impl Into<String>) {
        self.fields.push(Field::control(tag, data));
    }

    /// Get the data of the first control field with this tag
    #[must_use]
    pub fn control_field(&self, tag: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.tag == tag)
            .and_then(|f| f.data.as_deref())
    }

    /// All fields in document order
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterate over fields with a specific tag, in document order
    pub fn fields_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields.iter().filter(move |f| f.tag == tag)
    }
}

/// Builder for [`Record`]
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a control field to the record being built
    #[must_use]
    pub fn control_field(mut self, tag: impl Into<String>, data: impl Into<String>) -> Self {
        self.record.add_control_field(tag, data);
        self
    }

    /// Add a data field to the record being built
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Create a new data field
    #[must_use]
    pub fn new(tag: impl Into<String>, indicator1: char, indicator2: char) -> Self {
        Field {
            tag: tag.into(),
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
            data: None,
        }
    }

    /// Create a control field carrying raw data
    #[must_use]
    pub fn control(tag: impl Into<String>, data: impl Into<String>) -> Self {
        Field {
            tag: tag.into(),
            indicator1: ' ',
            indicator2: ' ',
            subfields: SmallVec::new(),
            data: Some(data.into()),
        }
    }

    /// Create a builder for constructing data fields fluently
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_lint::Field;
    ///
    /// let field = Field::builder("245", '1', '0')
    ///     .subfield('a', "The Great Gatsby /")
    ///     .subfield('c', "F. Scott Fitzgerald.")
    ///     .build();
    /// assert_eq!(field.get_subfield('c'), Some("F. Scott Fitzgerald."));
    /// ```
    #[must_use]
    pub fn builder(tag: impl Into<String>, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Add a subfield
    pub fn add_subfield(&mut self, code: char, value: impl Into<String>) {
        self.subfields.push(Subfield {
            code,
            value: value.into(),
        });
    }

    /// Whether this is a control field (tags `001`-`009`)
    #[must_use]
    pub fn is_control(&self) -> bool {
        is_control_tag(&self.tag)
    }

    /// Get first value for a subfield code
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Iterate over subfields with a specific code
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Get an indicator by number (1 or 2), matching [`TagRule::indicator`](crate::rules::TagRule::indicator)
    #[must_use]
    pub fn indicator(&self, number: usize) -> Option<char> {
        match number {
            1 => Some(self.indicator1),
            2 => Some(self.indicator2),
            _ => None,
        }
    }
}

/// Builder for data fields
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield to the field being built
    #[must_use]
    pub fn subfield(mut self, code: char, value: impl Into<String>) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Build the field
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}
