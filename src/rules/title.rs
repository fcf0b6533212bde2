//! Title fields: 245 structure and punctuation, and the non-filing
//! indicator check shared by 130, 240, 245, 630, 730 and 830.
//!
//! # Non-filing characters
//!
//! A title that opens with an article ("The", "La", "Der") declares in one
//! of its indicators how many characters to skip when filing. The check
//! recomputes that count from `$a`, using the article list of the record's
//! language, and compares:
//!
//! ```text
//! 245 14 $a The Great Gatsby.      "The " = 4, ok
//! 245 10 $a The Great Gatsby.      First word, the, may be an article, ...
//! 245 04 $a Great expectations.    First word, great, does not appear ...
//! ```
//!
//! Records whose language has no article list get no verdict either way.

use lazy_static::lazy_static;
use regex::Regex;

use super::FieldContext;
use crate::code_tables::{is_article, is_article_exception, supports_articles};
use crate::record::Subfield;
use crate::warning::MarcWarning;

lazy_static! {
    static ref SPACED_INITIALS: Regex = Regex::new(r"\b\w\. \b\w\.").unwrap();
    static ref CORRECTED_INITIALS: Regex = Regex::new(r"\[\bi\.e\. \b\w\..*\]").unwrap();
    static ref BRACKETED_MEDIUM: Regex = Regex::new(r"^\[\w*\s*\w*\]").unwrap();
    static ref NO_SPACE_BEFORE: Regex = Regex::new(r"(\S$)|(\-\- $)").unwrap();
    static ref PERIOD_BEFORE: Regex = Regex::new(r"(\S\.$)|(\-\- \.$)").unwrap();
    static ref COMMA_BEFORE: Regex = Regex::new(r"(\S,$)|(\-\- ,$)").unwrap();
}

const FINAL_PUNCTUATION: &[char] = &['.', '?', '!'];
/// Allowed by MARC21 but not by LC practice
const NON_PERIOD_ENDINGS: &[char] = &['?', '!'];
/// Endings that may introduce other title information
const ISBD_PARALLEL: &[&str] = &[" :", " ;", " ="];

/// Characters skipped and counted before the first word
const LEADING_MARKS: &[char] = &['"', '\'', '[', '(', '*'];
/// Characters that end the first word
const WORD_SEPARATORS: &[char] = &[' ', '(', ')', '[', ']', '\'', '"', '-'];
/// Characters counted after an article, before the second word
const TRAILING_MARKS: &[char] = &[' ', '"', '\'', '[', ']', '(', ')', '*'];

/// 130, 240, 630, 730, 830
pub fn check_nonfiling(ctx: &FieldContext<'_>, warnings: &mut Vec<MarcWarning>) {
    if ctx.config.check_articles {
        check_article(ctx, warnings);
    }
}

/// 245: Title statement
pub fn check_245(ctx: &FieldContext<'_>, warnings: &mut Vec<MarcWarning>) {
    let subfields = ctx.field.subfields.as_slice();

    if ctx.field.get_subfield('a').is_none() {
        warnings.push(ctx.warn("Must have a subfield _a."));
    }

    // linkage and control subfields ($6, $8) may trail the title text
    let last_text = subfields.iter().rev().find(|sf| !sf.code.is_ascii_digit());
    if let Some(last) = last_text {
        if !last.value.ends_with(FINAL_PUNCTUATION) {
            warnings.push(ctx.warn("Must end with . (period)."));
        } else if last.value.ends_with(NON_PERIOD_ENDINGS) {
            warnings.push(ctx.warn(
                "MARC21 allows ? or ! as final punctuation but LCRI 1.0C, Nov. 2003 (LCPS 1.7.1 for RDA records), requires period.",
            ));
        }
    }

    check_first_subfield(ctx, subfields, warnings);
    check_punctuation(ctx, subfields, warnings);

    if ctx.config.check_articles {
        check_article(ctx, warnings);
    }
}

fn check_first_subfield(ctx: &FieldContext<'_>, subfields: &[Subfield], warnings: &mut Vec<MarcWarning>) {
    match subfields {
        [] => {},
        [first] if first.code == '6' => {
            warnings.push(ctx.warn("May have too few subfields."));
        },
        [first, second, ..] if first.code == '6' => {
            if second.code != 'a' {
                warnings.push(ctx.warn(format!(
                    "First subfield after subfield _6 must be _a, but it is _{}",
                    second.code
                )));
            }
        },
        [first, ..] => {
            if first.code != 'a' {
                warnings.push(ctx.warn(format!(
                    "First subfield must be _a, but it is _{}",
                    first.code
                )));
            }
        },
    }
}

/// ISBD punctuation between subfields. Each rule looks at the text of the
/// subfield just before the one it is about.
fn check_punctuation(ctx: &FieldContext<'_>, subfields: &[Subfield], warnings: &mut Vec<MarcWarning>) {
    let pairs = || subfields.windows(2).map(|pair| (&pair[0], &pair[1]));

    for (previous, current) in pairs() {
        if current.code == 'b' && !ISBD_PARALLEL.iter().any(|mark| previous.value.ends_with(mark)) {
            warnings.push(ctx.warn(
                "Subfield _b should be preceded by space-colon, space-semicolon, or space-equals sign.",
            ));
        }
    }

    if let Some((previous, current)) = pairs().find(|(_, current)| current.code == 'c') {
        let mut before_slash = previous.value.chars().rev();
        let slash = before_slash.next() == Some('/')
            && before_slash.next().is_some_and(char::is_whitespace);
        if !slash {
            warnings.push(ctx.warn("Subfield _c must be preceded by /"));
        }
        if SPACED_INITIALS.is_match(&current.value) && !CORRECTED_INITIALS.is_match(&current.value) {
            warnings.push(ctx.warn("Subfield _c initials should not have a space."));
        }
    }

    for (previous, current) in pairs().filter(|(_, current)| current.code == 'h') {
        if !NO_SPACE_BEFORE.is_match(&previous.value) {
            warnings.push(ctx.warn("Subfield _h should not be preceded by space."));
        }
        if !BRACKETED_MEDIUM.is_match(&current.value) {
            warnings.push(ctx.warn("Subfield _h must have matching square brackets, h."));
        }
    }

    for (previous, current) in pairs() {
        if current.code == 'n' && !PERIOD_BEFORE.is_match(&previous.value) {
            warnings.push(ctx.warn("Subfield _n must be preceded by . (period)."));
        }
    }

    for (previous, _) in pairs().filter(|(_, current)| current.code == 'p') {
        if previous.code == 'n' {
            if !COMMA_BEFORE.is_match(&previous.value) {
                warnings.push(ctx.warn(
                    "Subfield _p must be preceded by , (comma) when it follows subfield _n.",
                ));
            }
        } else if !PERIOD_BEFORE.is_match(&previous.value) {
            warnings.push(ctx.warn(
                "Subfield _p must be preceded by . (period) when it follows a subfield other than _n.",
            ));
        }
    }
}

/// Compare the non-filing indicator with the leading article of `$a`.
fn check_article(ctx: &FieldContext<'_>, warnings: &mut Vec<MarcWarning>) {
    let Some(language) = ctx.language.filter(|language| supports_articles(language)) else {
        tracing::trace!(tag = ctx.tag, language = ?ctx.language, "article check skipped");
        return;
    };

    let (indicator, which) = match ctx.tag {
        "130" | "630" | "730" => (ctx.field.indicator1, "1st"),
        _ => (ctx.field.indicator2, "2nd"),
    };

    let Some(declared) = indicator.to_digit(10) else {
        warnings.push(ctx.warn("Non-filing indicator is non-numeric"));
        return;
    };

    let Some(title) = ctx.field.get_subfield('a') else {
        return;
    };

    let leading = title.len() - title.trim_start_matches(LEADING_MARKS).len();
    let title = &title[leading..];
    let word_end = title.find(WORD_SEPARATORS).unwrap_or(title.len());
    let word = &title[..word_end];
    if word.is_empty() {
        return;
    }
    let rest = &title[word_end..];
    let lowercase = word.to_lowercase();

    if is_article(word, language) && !is_article_exception(title) {
        let mut nonfiling = leading + word.chars().count();
        if let Some(separator) = rest.chars().next() {
            nonfiling += 1;
            let after = &rest[separator.len_utf8()..];
            if after.starts_with(WORD_SEPARATORS) {
                nonfiling += after.chars().take_while(|c| TRAILING_MARKS.contains(c)).count();
            }
        }
        if usize::try_from(declared).ok() != Some(nonfiling) {
            warnings.push(ctx.warn(format!(
                "First word, {lowercase}, may be an article, check {which} indicator ({indicator})."
            )));
        }
    } else if declared != 0 {
        warnings.push(ctx.warn(format!(
            "First word, {lowercase}, does not appear to be an article, check {which} indicator ({indicator})."
        )));
    }
}
