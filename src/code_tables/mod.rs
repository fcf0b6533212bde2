//! Static MARC code lists.
//!
//! The tables here are fixed external standards (MARC Code Lists for
//! Languages, Countries and Geographic Areas) plus the per-language list of
//! initial articles used by the non-filing indicator check. Each table is
//! built once on first use and never changes afterwards.

pub mod articles;
pub mod countries;
pub mod geographic_areas;
pub mod languages;

pub use articles::{is_article, is_article_exception, supports_articles};
pub use countries::country_status;
pub use geographic_areas::geographic_area_status;
pub use languages::language_status;

/// Standing of a code in one of the code lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStatus {
    /// Current code
    Valid,
    /// Code that was once defined and has since been discontinued
    Obsolete,
    /// Not in the list at all
    Unknown,
}

impl CodeStatus {
    pub(crate) fn lookup(
        code: &str,
        valid: &std::collections::HashSet<&'static str>,
        obsolete: &std::collections::HashSet<&'static str>,
    ) -> Self {
        if valid.contains(code) {
            CodeStatus::Valid
        } else if obsolete.contains(code) {
            CodeStatus::Obsolete
        } else {
            CodeStatus::Unknown
        }
    }
}
