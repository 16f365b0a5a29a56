//! Configuration types for HTML conversion.
//!
//! This module defines the options used to customize table rendering.
use serde::{Deserialize, Serialize};

/// Namespace token prepended to named table styles.
pub const DEFAULT_TABLE_CLASS_PREFIX: &str = "wordTable";

/// Configuration options for HTML conversion.
///
/// # Examples
///
/// ```rust
/// use wordhtml::html::HtmlOptions;
///
/// // Create with defaults
/// let options = HtmlOptions::default();
///
/// // Or customize
/// let options = HtmlOptions::new()
///     .with_table_class_prefix("docTable")
///     .with_fold_merged_content(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Prefix for the `class` attribute of tables using a named style
    pub table_class_prefix: String,
    /// Whether content of vertically merged-away cells is appended to the
    /// anchor cell
    pub fold_merged_content: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            table_class_prefix: DEFAULT_TABLE_CLASS_PREFIX.to_string(),
            fold_merged_content: true,
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix used for named table styles.
    ///
    /// A table styled `"Grid"` renders as `class="{prefix}Grid"`.
    ///
    /// ```rust
    /// use wordhtml::html::HtmlOptions;
    ///
    /// let options = HtmlOptions::new().with_table_class_prefix("tbl-");
    /// assert_eq!(options.table_class_prefix, "tbl-");
    /// ```
    #[inline]
    pub fn with_table_class_prefix(mut self, prefix: &str) -> Self {
        self.table_class_prefix = prefix.to_string();
        self
    }

    /// Set whether continuation-cell content is folded into merge anchors.
    #[inline]
    pub fn with_fold_merged_content(mut self, fold: bool) -> Self {
        self.fold_merged_content = fold;
        self
    }
}
