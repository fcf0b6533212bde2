//! Configuration options for the linter.
//!
//! This module provides the [`LintConfig`] struct. The code tables are not
//! configurable; they are fixed standards.

/// Configuration for [`MarcLint`](crate::MarcLint).
///
/// # Examples
///
/// ```
/// use marc_lint::LintConfig;
///
/// // Default configuration (article check on, identity from 001)
/// let config = LintConfig::default();
/// assert!(config.check_articles);
///
/// // Identity from a local control number field, no article check
/// let config = LintConfig::new()
///     .with_record_id_tag("003")
///     .with_article_check(false);
/// assert_eq!(config.record_id_tag, "003");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// Compare non-filing indicators of title fields against a detected
    /// leading article.
    ///
    /// The check only runs for records whose 008 language has an article
    /// list; see [`code_tables::supports_articles`](crate::code_tables::supports_articles).
    pub check_articles: bool,

    /// Control field whose data identifies the record in findings.
    pub record_id_tag: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            check_articles: true,
            record_id_tag: "001".to_string(),
        }
    }
}

impl LintConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the non-filing article check.
    #[must_use]
    pub fn with_article_check(mut self, enabled: bool) -> Self {
        self.check_articles = enabled;
        self
    }

    /// Sets the control field used for record identity.
    #[must_use]
    pub fn with_record_id_tag(mut self, tag: impl Into<String>) -> Self {
        self.record_id_tag = tag.into();
        self
    }
}
