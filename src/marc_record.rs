//! Read-only record interface consumed by the linter.
//!
//! This module defines the `MarcRecord` trait, the boundary between the
//! linter and whatever record model supplies the data. [`Record`] implements
//! it; other models (a reader's own record type, a database row adapter) can
//! implement it to be linted without conversion.

use crate::record::{Field, Record};

/// Read-only view of a MARC record.
///
/// The linter only needs three things from a record: the leader string, the
/// fields in document order, and lookup of control field data. The last one
/// has a default implementation in terms of `fields()`.
///
/// # Examples
///
/// ```
/// use marc_lint::{MarcRecord, Record};
///
/// fn record_id<T: MarcRecord>(record: &T) -> Option<&str> {
///     record.control_field("001")
/// }
///
/// let record = Record::builder("00000nam a2200000 i 4500")
///     .control_field("001", "12345")
///     .build();
/// assert_eq!(record_id(&record), Some("12345"));
/// ```
pub trait MarcRecord {
    /// The record's leader, or `None` if the record model provides none.
    fn leader(&self) -> Option<&str>;

    /// All fields (control and data) in document order.
    fn fields(&self) -> &[Field];

    /// Get the data of the first control field with this tag.
    ///
    /// Returns `None` if the field does not exist or carries no data.
    fn control_field(&self, tag: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|f| f.tag == tag)
            .and_then(|f| f.data.as_deref())
    }

    /// Collect the fields with a specific tag, in document order.
    fn fields_by_tag(&self, tag: &str) -> Vec<&Field> {
        self.fields().iter().filter(|f| f.tag == tag).collect()
    }
}

impl MarcRecord for Record {
    fn leader(&self) -> Option<&str> {
        self.leader.as_deref()
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }
}
