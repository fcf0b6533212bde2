//! Initial articles by language, for the non-filing indicator check.
//!
//! A leading word only counts as an article in a language that uses it:
//! "die" is an article in German and an ordinary word in English. Languages
//! absent from the table are unsupported and the check is skipped for them.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

/// (language, articles) pairs; articles are lowercase
const ARTICLES_BY_LANGUAGE: &[(&str, &[&str])] = &[
    ("ara", &["al", "el"]),
    ("cat", &["el", "els", "en", "l", "la", "les", "un", "una"]),
    ("dan", &["de", "den", "det", "en", "et"]),
    ("dut", &["de", "een", "het", "t"]),
    ("eng", &["a", "an", "the"]),
    ("fre", &["l", "la", "le", "les", "un", "une"]),
    (
        "ger",
        &[
            "das", "dem", "den", "der", "des", "die", "ein", "eine", "einem", "einen", "einer",
            "eines",
        ],
    ),
    ("glg", &["a", "as", "o", "os", "un", "unha"]),
    ("hun", &["a", "az", "egy"]),
    ("ita", &["gli", "i", "il", "l", "la", "le", "lo", "un", "una", "uno"]),
    ("mlt", &["il", "l"]),
    ("nor", &["de", "den", "det", "ei", "en", "et"]),
    ("por", &["a", "as", "o", "os", "um", "uma", "umas", "uns"]),
    ("spa", &["el", "la", "las", "lo", "los", "un", "una", "unas", "unos"]),
    ("swe", &["de", "den", "det", "en", "ett"]),
];

/// Title openings that look like an article but are not one
/// ("A la carte", "Los Angeles", "El Salvador").
const EXCEPTIONS: &[&str] = &[
    "A & E",
    "A & ",
    "A-",
    "A+",
    "A is ",
    "A isn't ",
    "A l'",
    "A la ",
    "A posteriori",
    "A priori",
    "A to ",
    "El Nino",
    "El Salvador",
    "L is ",
    "L-",
    "La Salle",
    "Las Vegas",
    "Lo cual",
    "Lo mein",
    "Lo que",
    "Los Alamos",
    "Los Angeles",
];

lazy_static! {
    static ref ARTICLES: HashMap<&'static str, HashSet<&'static str>> = ARTICLES_BY_LANGUAGE
        .iter()
        .map(|(lang, words)| (*lang, words.iter().copied().collect()))
        .collect();
}

/// Whether the article check knows this language.
#[must_use]
pub fn supports_articles(language: &str) -> bool {
    ARTICLES.contains_key(language)
}

/// Whether `word` (any case) is an initial article in `language`.
///
/// # Examples
///
/// ```
/// use marc_lint::code_tables::is_article;
///
/// assert!(is_article("The", "eng"));
/// assert!(is_article("die", "ger"));
/// assert!(!is_article("die", "eng"));
/// assert!(!is_article("the", "jpn"));
/// ```
#[must_use]
pub fn is_article(word: &str, language: &str) -> bool {
    ARTICLES
        .get(language)
        .is_some_and(|words| words.contains(word.to_lowercase().as_str()))
}

/// Whether a title opens with a phrase (any case) that must not be read as
/// an article.
#[must_use]
pub fn is_article_exception(title: &str) -> bool {
    EXCEPTIONS.iter().any(|prefix| {
        title
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
