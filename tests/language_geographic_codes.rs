//! 041 language codes and 043 geographic area codes.

mod common;

use common::{field, messages, titled_record_with};
use marc_lint::code_tables::{country_status, geographic_area_status, language_status, CodeStatus};
use marc_lint::MarcLint;

#[test]
fn test_code_table_lookups() {
    assert_eq!(language_status("eng"), CodeStatus::Valid);
    assert_eq!(language_status("scc"), CodeStatus::Obsolete);
    assert_eq!(language_status("xxx"), CodeStatus::Unknown);
    assert_eq!(geographic_area_status("n-us---"), CodeStatus::Valid);
    assert_eq!(geographic_area_status("e-ur-ai"), CodeStatus::Obsolete);
    assert_eq!(country_status("xxu"), CodeStatus::Valid);
    assert_eq!(country_status("cs "), CodeStatus::Obsolete);
}

#[test]
fn test_valid_language_field() {
    let record = titled_record_with(vec![field(
        "041",
        '1',
        ' ',
        &[('a', "engfre"), ('h', "ger")],
    )]);
    assert!(messages(&record).is_empty());
}

#[test]
fn test_language_findings_name_the_subfield() {
    let record = titled_record_with(vec![field(
        "041",
        '0',
        ' ',
        &[('a', "engxxx"), ('b', "scc"), ('d', "engl")],
    )]);
    let warnings = MarcLint::new().check_record(&record).unwrap();
    let subfields: Vec<Option<char>> = warnings.iter().map(|w| w.subfield()).collect();
    assert_eq!(subfields, vec![Some('a'), Some('b'), Some('d')]);
    assert_eq!(
        warnings.warnings(),
        vec![
            "Record test001: 041: Subfield a engxxx (xxx), is not valid.",
            "Record test001: 041: Subfield b scc, may be obsolete.",
            "Record test001: 041: Subfield d must be evenly divisible by 3 or exactly three characters if ind2 is not 7, (engl).",
        ]
    );
}

#[test]
fn test_other_source_codes_are_not_checked() {
    let record = titled_record_with(vec![field(
        "041",
        ' ',
        '7',
        &[('a', "en"), ('2', "iso639-1")],
    )]);
    assert!(messages(&record).is_empty());
}

#[test]
fn test_repeated_041_fields_are_positioned() {
    let record = titled_record_with(vec![
        field("041", '0', ' ', &[('a', "eng")]),
        field("041", '0', ' ', &[('a', "zzz")]),
    ]);
    assert_eq!(messages(&record), vec!["041[2]: Subfield a zzz (zzz), is not valid."]);
}

#[test]
fn test_geographic_area_field() {
    let record = titled_record_with(vec![field(
        "043",
        ' ',
        ' ',
        &[('a', "n-us---"), ('a', "n-us"), ('a', "x-xx---"), ('a', "e-ur-ai")],
    )]);
    assert_eq!(
        messages(&record),
        vec![
            "043: Subfield a must be exactly 7 characters, n-us.",
            "043: Subfield a x-xx---, is not valid.",
            "043: Subfield a e-ur-ai, may be obsolete.",
        ]
    );
}

#[test]
fn test_043_is_not_repeatable() {
    let record = titled_record_with(vec![
        field("043", ' ', ' ', &[('a', "n-us---")]),
        field("043", ' ', ' ', &[('a', "e-fr---")]),
    ]);
    assert_eq!(messages(&record), vec!["043[2]: Field is not repeatable."]);
}
