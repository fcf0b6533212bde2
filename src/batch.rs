//! Batch validation.
//!
//! [`MarcLint::check_records`] lints a slice of records and wraps each
//! outcome in a [`RecordResult`]. A record the engine refuses (no leader, a
//! malformed field) does not stop the batch: its result carries a single
//! `REC` finding describing the fault, and processing moves on.
//!
//! [`MarcLint::check_records_parallel`] does the same work on Rayon's
//! thread pool; results come back in input order either way.
//!
//! # Examples
//!
//! ```
//! use marc_lint::{Field, MarcLint, Record};
//!
//! let good = Record::builder("00000nam a2200000 i 4500")
//!     .control_field("001", "good")
//!     .field(Field::builder("245", '0', '0').subfield('a', "Title.").build())
//!     .build();
//! let bad = Record::new("00000nam a2200000 i 4500");
//!
//! let records = [good, bad];
//! let results = MarcLint::new().check_records(&records, true);
//! assert!(results[0].is_valid());
//! assert_eq!(results[1].record_id.as_deref(), Some("1"));
//! assert_eq!(results[1].warnings[0].message(), "No 245 tag.");
//! ```

use rayon::prelude::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::Result;
use crate::linter::MarcLint;
use crate::marc_record::MarcRecord;
use crate::record::Record;
use crate::warning::MarcWarning;

/// Field name of the finding that stands in for a record that could not be
/// validated
pub const RECORD_FIELD: &str = "REC";

/// Outcome of linting one record of a batch
#[derive(Debug, Clone)]
pub struct RecordResult<'a, R = Record> {
    /// Identifier from the record's id field, or its batch index when
    /// requested
    pub record_id: Option<String>,
    /// Findings, each stamped with `record_id`
    pub warnings: Vec<MarcWarning>,
    /// The record the findings belong to
    pub record: Option<&'a R>,
}

impl<R> RecordResult<'_, R> {
    /// Whether the record produced no findings
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Dictionary form: `record_id`, `is_valid` and `warnings`
    #[must_use]
    pub fn to_dict(&self) -> serde_json::Value {
        serde_json::json!({
            "record_id": self.record_id,
            "is_valid": self.is_valid(),
            "warnings": self.warnings.iter().map(MarcWarning::to_dict).collect::<Vec<_>>(),
        })
    }
}

// The record reference is not part of the serialized form.
impl<R> Serialize for RecordResult<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RecordResult", 3)?;
        state.serialize_field("record_id", &self.record_id)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("warnings", &self.warnings)?;
        state.end()
    }
}

impl MarcLint {
    /// Lint every record in order.
    ///
    /// The record id comes from the configured id field. When a record has
    /// none and `use_index_as_id` is set, its zero-based index in `records`
    /// is used instead; otherwise the id stays unset.
    pub fn check_records<'a, R: MarcRecord>(
        &self,
        records: &'a [R],
        use_index_as_id: bool,
    ) -> Vec<RecordResult<'a, R>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.check_batch_record(index, record, use_index_as_id))
            .collect()
    }

    /// Same as [`check_records`](Self::check_records), spread over Rayon's
    /// thread pool. Results keep input order.
    pub fn check_records_parallel<'a, R: MarcRecord + Sync>(
        &self,
        records: &'a [R],
        use_index_as_id: bool,
    ) -> Vec<RecordResult<'a, R>> {
        records
            .par_iter()
            .enumerate()
            .map(|(index, record)| self.check_batch_record(index, record, use_index_as_id))
            .collect()
    }

    fn check_batch_record<'a, R: MarcRecord>(
        &self,
        index: usize,
        record: &'a R,
        use_index_as_id: bool,
    ) -> RecordResult<'a, R> {
        let record_id = record
            .control_field(&self.config().record_id_tag)
            .map(str::to_string)
            .or_else(|| use_index_as_id.then(|| index.to_string()));

        let warnings = match self.check_record_with_id(record, record_id.as_deref()) {
            Ok(warnings) => warnings.into_vec(),
            Err(err) => {
                tracing::warn!(?record_id, index, error = %err, "record could not be validated");
                let warning =
                    MarcWarning::new(RECORD_FIELD, format!("Record could not be validated: {err}"));
                vec![match &record_id {
                    Some(id) => warning.with_record_id(id.as_str()),
                    None => warning,
                }]
            },
        };

        RecordResult {
            record_id,
            warnings,
            record: Some(record),
        }
    }
}

/// Serialize batch results as a JSON array
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn results_to_json<R>(results: &[RecordResult<'_, R>]) -> Result<String> {
    Ok(serde_json::to_string(results)?)
}
