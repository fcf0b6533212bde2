#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # marc-lint: MARC21 bibliographic record linter
//!
//! Checks MARC21 bibliographic records against cataloging rules and reports
//! every deviation as a structured [`MarcWarning`]. Records are never
//! rejected for their content; the caller decides what to do with the
//! findings.
//!
//! ## Quick Start
//!
//! ```
//! use marc_lint::{Field, MarcLint, Record};
//!
//! let record = Record::builder("00000nam a2200000 i 4500")
//!     .control_field("001", "ocm00012345")
//!     .control_field("008", "240101s2024    xxu           000 0 eng d")
//!     .field(
//!         Field::builder("020", ' ', ' ')
//!             .subfield('a', "0123456788")
//!             .build(),
//!     )
//!     .field(
//!         Field::builder("245", '1', '4')
//!             .subfield('a', "The Great Gatsby")
//!             .build(),
//!     )
//!     .build();
//!
//! let warnings = MarcLint::new().check_record(&record)?;
//! for warning in &warnings {
//!     println!("{warning}");
//! }
//! assert_eq!(
//!     warnings.warnings(),
//!     vec![
//!         "Record ocm00012345: 020: Subfield a has bad checksum, 0123456788.",
//!         "Record ocm00012345: 245: Must end with . (period).",
//!     ]
//! );
//!
//! // Structured access
//! let first = &warnings[0];
//! assert_eq!(first.field(), "020");
//! assert_eq!(first.subfield(), Some('a'));
//! assert_eq!(first.position(), None);
//! # Ok::<(), marc_lint::LintError>(())
//! ```
//!
//! ## Modules
//!
//! - [`linter`] - The validation engine ([`MarcLint`])
//! - [`batch`] - Batch and parallel validation ([`RecordResult`])
//! - [`rules`] - Field rule registry and tag-specific checks
//! - [`leader`] - Leader position checks
//! - [`fixed_length_data`] - Field 008 checks
//! - [`checksum`] - ISBN and ISSN check digits
//! - [`code_tables`] - Language, country, geographic area and article lists
//! - [`field_linkage`] - Subfield 6 linkage parsing
//! - [`warning`] - Findings and their rendering
//! - [`record`] - Minimal record model
//! - [`marc_record`] - Record trait consumed by the linter
//! - [`config`] - Linter configuration
//! - [`error`] - Error types and result type

pub mod batch;
pub mod checksum;
pub mod code_tables;
pub mod config;
pub mod error;
pub mod field_linkage;
pub mod fixed_length_data;
pub mod leader;
pub mod linter;
pub mod marc_record;
pub mod record;
pub mod rules;
pub mod warning;

pub use batch::{results_to_json, RecordResult};
pub use checksum::{ChecksumError, IsbnValidator, IssnValidator};
pub use config::LintConfig;
pub use error::{LintError, Result};
pub use field_linkage::LinkageInfo;
pub use linter::MarcLint;
pub use marc_record::MarcRecord;
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use warning::{warnings_to_json, MarcWarning, Warnings};
