//! HTML conversion for Word tables.
//!
//! This module turns [`Table`](crate::document::Table) values into HTML
//! markup suitable for display: vertical merges become `rowspan`, grid
//! spans become `colspan`, cell fills get a legible foreground colour and
//! per-side borders are composed into one inline style.
//!
//! # Quick Start
//!
//! ```rust
//! use wordhtml::document::{Table, VMergeState};
//! use wordhtml::html::{HtmlOptions, ToHtml};
//!
//! # fn main() -> Result<(), wordhtml::Error> {
//! let mut table = Table::new(2, 2);
//! if let Some(cell) = table.cell_mut(0, 0) {
//!     cell.set_text("Spans two rows");
//!     cell.set_v_merge(Some(VMergeState::Restart));
//! }
//! if let Some(cell) = table.cell_mut(1, 0) {
//!     cell.set_v_merge(Some(VMergeState::Continue));
//! }
//!
//! let html = table.to_html()?;
//! assert!(html.contains("rowspan=\"2\""));
//!
//! // Or with custom options
//! let options = HtmlOptions::new().with_table_class_prefix("docTable");
//! let html = table.to_html_with_options(&options)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`ToHtml`]: core trait for types that can be converted to HTML
//! - [`HtmlOptions`]: configuration for conversion behavior
//! - [`TableWriter`]: the table element writer
//! - [`ContentRenderer`]: seam for rendering cell content, with
//!   [`ContainerWriter`] as the default implementation
//! - [`MergePlan`]: vertical merge resolution
// Module declarations
mod config;
mod content;
mod document;
mod table;
mod traits;
mod writer;
pub mod border;
pub mod merge;

use rayon::prelude::*;

use crate::common::Result;
use crate::document::Table;

// Re-export public API
pub use config::{DEFAULT_TABLE_CLASS_PREFIX, HtmlOptions};
pub use content::{ContainerWriter, EMPTY_PARAGRAPH};
pub use merge::{MergePlan, MergeSpan};
pub use table::TableWriter;
pub use traits::{ContentRenderer, ToHtml};

/// Render independent tables in parallel.
///
/// Output order matches input order. The first error, if any, is returned.
///
/// ```rust
/// use wordhtml::document::Table;
/// use wordhtml::html::{HtmlOptions, render_tables};
///
/// let tables = vec![Table::new(1, 1), Table::default()];
/// let html = render_tables(&tables, &HtmlOptions::default()).unwrap();
/// assert_eq!(html.len(), 2);
/// assert!(html[1].is_empty());
/// ```
pub fn render_tables(tables: &[Table], options: &HtmlOptions) -> Result<Vec<String>> {
    tables
        .par_iter()
        .map(|table| table.to_html_with_options(options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::VMergeState;

    #[test]
    fn test_parallel_matches_sequential() {
        let tables: Vec<Table> = (1..20)
            .map(|n| {
                let mut table = Table::new(n, 3);
                for row in 0..n {
                    if let Some(cell) = table.cell_mut(row, 1) {
                        cell.set_text(&format!("row {row}"));
                        let state = if row == 0 {
                            VMergeState::Restart
                        } else {
                            VMergeState::Continue
                        };
                        cell.set_v_merge(Some(state));
                    }
                }
                table
            })
            .collect();

        let options = HtmlOptions::default();
        let parallel = render_tables(&tables, &options).unwrap();
        for (table, html) in tables.iter().zip(&parallel) {
            assert_eq!(&table.to_html_with_options(&options).unwrap(), html);
        }
        assert!(parallel[4].contains("rowspan=\"5\""));
    }
}
