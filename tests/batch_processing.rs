//! Batch validation, record identity and third-party record models.

mod common;

use common::{clean_title, field, record_with, LEADER};
use marc_lint::batch::RECORD_FIELD;
use marc_lint::{results_to_json, Field, MarcLint, MarcRecord, Record};

/// A record model owned by some other reader, linted through the trait.
struct ForeignRecord {
    leader: String,
    fields: Vec<Field>,
}

impl MarcRecord for ForeignRecord {
    fn leader(&self) -> Option<&str> {
        Some(&self.leader)
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }
}

fn untitled(id: &str) -> Record {
    Record::builder(LEADER).control_field("001", id).build()
}

#[test]
fn test_foreign_record_model() {
    let record = ForeignRecord {
        leader: LEADER.to_string(),
        fields: vec![
            Field::control("001", "foreign-1"),
            field("245", '1', '0', &[('a', "No period")]),
        ],
    };
    let warnings = MarcLint::new().check_record(&record).unwrap();
    assert_eq!(
        warnings.warnings(),
        vec!["Record foreign-1: 245: Must end with . (period)."]
    );
    assert_eq!(record.fields_by_tag("245").len(), 1);
}

#[test]
fn test_batch_results_in_input_order() {
    let records = vec![
        record_with(vec![clean_title()]),
        untitled("b2"),
        untitled("b3"),
    ];
    let results = MarcLint::new().check_records(&records, false);

    let ids: Vec<Option<&str>> = results.iter().map(|r| r.record_id.as_deref()).collect();
    assert_eq!(ids, vec![Some("test001"), Some("b2"), Some("b3")]);
    assert!(results[0].is_valid());
    assert!(!results[1].is_valid());
    assert_eq!(results[2].warnings[0].to_string(), "Record b3: 245: No 245 tag.");
    assert!(std::ptr::eq(results[1].record.unwrap(), &records[1]));
}

#[test]
fn test_index_ids_only_fill_gaps() {
    let records = vec![untitled("keep"), Record::new(LEADER)];
    let results = MarcLint::new().check_records(&records, true);
    assert_eq!(results[0].record_id.as_deref(), Some("keep"));
    assert_eq!(results[1].record_id.as_deref(), Some("1"));
    assert_eq!(results[1].warnings[0].record_id(), Some("1"));
}

#[test]
fn test_unprocessable_record_does_not_stop_batch() {
    let broken = ForeignRecord {
        leader: LEADER.to_string(),
        fields: vec![Field::control("001", "bad"), Field::new("24", '1', '0')],
    };
    let fine = ForeignRecord {
        leader: LEADER.to_string(),
        fields: vec![field("245", '1', '0', &[('a', "Title.")])],
    };
    let records = [broken, fine];
    let results = MarcLint::new().check_records(&records, true);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].record_id.as_deref(), Some("bad"));
    assert_eq!(results[0].warnings.len(), 1);
    assert_eq!(results[0].warnings[0].field(), RECORD_FIELD);
    assert!(results[0].warnings[0]
        .message()
        .starts_with("Record could not be validated: Invalid field:"));
    assert!(results[1].is_valid());
    assert_eq!(results[1].record_id.as_deref(), Some("1"));
}

#[test]
fn test_parallel_batch() {
    let records: Vec<Record> = (0..200)
        .map(|i| {
            if i % 2 == 0 {
                record_with(vec![clean_title()])
            } else {
                untitled(&format!("odd{i}"))
            }
        })
        .collect();
    let linter = MarcLint::new();
    let parallel = linter.check_records_parallel(&records, true);
    let sequential = linter.check_records(&records, true);

    assert_eq!(parallel.len(), 200);
    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.record_id, s.record_id);
        assert_eq!(p.warnings, s.warnings);
    }
    assert_eq!(parallel.iter().filter(|r| r.is_valid()).count(), 100);
}

#[test]
fn test_results_json() {
    let records = vec![record_with(vec![clean_title()]), untitled("x")];
    let results = MarcLint::new().check_records(&records, false);
    let json: serde_json::Value = serde_json::from_str(&results_to_json(&results).unwrap()).unwrap();

    assert_eq!(json[0]["is_valid"], true);
    assert_eq!(json[0]["warnings"], serde_json::json!([]));
    assert_eq!(json[1]["record_id"], "x");
    assert_eq!(json[1]["warnings"][0]["field"], "245");
    assert_eq!(json[1]["warnings"][0]["message"], "No 245 tag.");
    assert_eq!(json[1]["warnings"][0]["record_id"], "x");
    assert!(json[1].get("record").is_none());
}
