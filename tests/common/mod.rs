//! Common test helpers and utilities shared across test suite.
#![allow(dead_code)]

use marc_lint::{Field, MarcLint, Record};

/// A leader with every coded position valid.
pub const LEADER: &str = "00000nam a2200000 i 4500";

/// A valid 40-character 008 for an English-language monograph.
pub const FIXED_008: &str = "240101s2024    xxu           000 0 eng d";

/// Builds a field from `(code, value)` pairs.
pub fn field(tag: &str, ind1: char, ind2: char, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag, ind1, ind2);
    for (code, value) in subfields {
        field.add_subfield(*code, *value);
    }
    field
}

/// A title field that passes every 245 check.
pub fn clean_title() -> Field {
    field("245", '1', '0', &[('a', "Cataloging rules /"), ('c', "edited by J.R. Smith.")])
}

/// Creates a record with control number 001, a valid 008, and `fields`
/// appended in order. No 245 is added; pass one when the test needs it.
pub fn record_with(fields: Vec<Field>) -> Record {
    let mut record = Record::builder(LEADER)
        .control_field("001", "test001")
        .control_field("008", FIXED_008)
        .build();
    for field in fields {
        record.add_field(field);
    }
    record
}

/// Creates a record with a clean title plus `fields`.
pub fn titled_record_with(fields: Vec<Field>) -> Record {
    let mut all = vec![clean_title()];
    all.extend(fields);
    record_with(all)
}

/// Lint a record with the default configuration and render the findings
/// without the record id prefix.
pub fn messages(record: &Record) -> Vec<String> {
    MarcLint::new()
        .check_record_with_id(record, None)
        .expect("record should be lintable")
        .warnings()
}
