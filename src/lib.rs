//! wordhtml - HTML rendering of Word document tables
//!
//! This library turns the table element of a word-processing document model
//! into HTML markup. It resolves the document's merge topology (vertical
//! merges that straddle arbitrary row ranges, horizontal grid spans) into
//! flat `rowspan`/`colspan` attributes, picks a legible foreground colour for
//! filled cells and composes per-side borders into inline styles.
//!
//! # Features
//!
//! - **Merge resolution**: one forward pass over the table resolves every
//!   vertical merge, tolerating ragged rows and orphaned continuation cells
//! - **Content folding**: text placed in merged-away cells is kept in the
//!   anchor cell, blank filler paragraphs are not
//! - **Lenient**: malformed tables degrade to simpler markup, never to errors
//! - **Thread-safe**: the model is plain data; [`html::render_tables`]
//!   renders independent tables in parallel
//!
//! # Example
//!
//! ```rust
//! use wordhtml::document::{BorderSide, Table, VMergeState};
//! use wordhtml::html::ToHtml;
//!
//! # fn main() -> Result<(), wordhtml::Error> {
//! let mut table = Table::new(3, 2);
//! if let Some(cell) = table.cell_mut(0, 0) {
//!     cell.set_text("Quarter");
//!     cell.set_v_merge(Some(VMergeState::Restart));
//!     cell.set_background_color("1F3864");
//!     cell.set_width(1400);
//!     cell.set_has_border(true);
//!     cell.set_border(BorderSide::Top, 8, Some("auto"));
//! }
//! for row in 1..3 {
//!     if let Some(cell) = table.cell_mut(row, 0) {
//!         cell.set_v_merge(Some(VMergeState::Continue));
//!     }
//! }
//!
//! let html = table.to_html()?;
//! assert!(html.contains("rowspan=\"3\""));
//! assert!(html.contains("color=\"#ffffff\""));
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod document;
pub mod html;

pub use common::{Error, Result};
pub use document::{Cell, Element, Row, Table};
pub use html::{HtmlOptions, ToHtml};
