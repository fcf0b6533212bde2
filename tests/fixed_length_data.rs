//! Field 008 checks through the full linter, and the way the 008 language
//! feeds the article check.

mod common;

use common::{field, messages, FIXED_008, LEADER};
use marc_lint::fixed_length_data::FixedLengthData;
use marc_lint::{Field, Record};

fn with_008(data: &str, title: Field) -> Record {
    Record::builder(LEADER)
        .control_field("008", data)
        .field(title)
        .build()
}

fn replace(position: usize, replacement: &str) -> String {
    let mut data = FIXED_008.to_string();
    data.replace_range(position..position + replacement.len(), replacement);
    data
}

fn article_title(ind2: char) -> Field {
    field("245", '0', ind2, &[('a', "Die Zeit.")])
}

#[test]
fn test_decoded_positions() {
    let fixed = FixedLengthData::parse("850101m19851990nyu           000 0 ger d").unwrap();
    assert_eq!(fixed.date_entered(), "850101");
    assert_eq!(fixed.type_of_date(), 'm');
    assert_eq!(fixed.date1(), "1985");
    assert_eq!(fixed.date2(), "1990");
    assert_eq!(fixed.place(), "nyu");
    assert_eq!(fixed.language(), "ger");
    assert_eq!(fixed.modified_record(), ' ');
    assert_eq!(fixed.cataloging_source(), 'd');
}

#[test]
fn test_wrong_length_is_reported_once() {
    let record = with_008("240101s2024", article_title('4'));
    assert_eq!(messages(&record), vec!["008: Length must be 40 characters, but it is 11."]);
}

#[test]
fn test_coded_values() {
    let record = with_008(&replace(15, "zz "), article_title('0'));
    assert_eq!(
        messages(&record),
        vec!["008: Invalid country code 'zz ' at positions 15-17."]
    );

    let record = with_008(&replace(38, "z"), article_title('0'));
    assert_eq!(
        messages(&record),
        vec!["008: Invalid modified record 'z' at position 38."]
    );
}

#[test]
fn test_language_drives_article_check() {
    // English: "die" is not an article
    let record = with_008(FIXED_008, article_title('4'));
    assert_eq!(
        messages(&record),
        vec!["245: First word, die, does not appear to be an article, check 2nd indicator (4)."]
    );

    // German: "Die " is four non-filing characters
    let record = with_008(&replace(35, "ger"), article_title('4'));
    assert!(messages(&record).is_empty());
    let record = with_008(&replace(35, "ger"), article_title('0'));
    assert_eq!(
        messages(&record),
        vec!["245: First word, die, may be an article, check 2nd indicator (0)."]
    );
}

#[test]
fn test_no_usable_language_skips_article_check() {
    // unsupported language
    let record = with_008(&replace(35, "jpn"), article_title('4'));
    assert!(messages(&record).is_empty());

    // unknown code: reported, but no article verdict
    let record = with_008(&replace(35, "zzz"), article_title('4'));
    assert_eq!(
        messages(&record),
        vec!["008: Invalid language code 'zzz' at positions 35-37."]
    );

    // malformed 008
    let record = with_008("short", article_title('4'));
    assert_eq!(messages(&record).len(), 1);

    // no 008 at all
    let record = Record::builder(LEADER).field(article_title('4')).build();
    assert!(messages(&record).is_empty());
}
