//! Error types for lint operations.
//!
//! Content problems in a record are never errors: they are reported as
//! [`MarcWarning`](crate::MarcWarning)s. This module covers the other tier,
//! structural faults where a record does not meet the minimum shape the
//! linter needs, plus serialization failures.

use thiserror::Error;

/// Error type for all lint operations.
#[derive(Error, Debug)]
pub enum LintError {
    /// The record has no leader at all.
    #[error("Record has no leader")]
    MissingLeader,

    /// A field does not meet the record-model contract (malformed tag,
    /// control field without data).
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Failure while rendering findings or results as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`LintError`].
pub type Result<T> = std::result::Result<T, LintError>;
