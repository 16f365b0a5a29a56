//! Core traits for HTML conversion.
//!
//! `ToHtml` is the public entry point; `ContentRenderer` is the seam through
//! which the table writer renders whatever lives inside a cell.
use super::config::HtmlOptions;
use super::content::EMPTY_PARAGRAPH;
use crate::common::Result;
use crate::document::Cell;

/// Core trait for types that can be converted to HTML.
///
/// Implemented for [`Table`](crate::document::Table),
/// [`Paragraph`](crate::document::Paragraph),
/// [`Element`](crate::document::Element) and [`Cell`].
///
/// # Examples
///
/// ```rust
/// use wordhtml::document::Table;
/// use wordhtml::html::ToHtml;
///
/// # fn main() -> Result<(), wordhtml::Error> {
/// let mut table = Table::new(1, 1);
/// if let Some(cell) = table.cell_mut(0, 0) {
///     cell.set_text("Hello");
/// }
/// let html = table.to_html()?;
/// assert!(html.starts_with("<table>"));
/// assert!(html.contains("<p>Hello</p>"));
/// # Ok(())
/// # }
/// ```
pub trait ToHtml {
    /// Convert this item to HTML with default options.
    fn to_html(&self) -> Result<String> {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Convert this item to HTML with custom options.
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String>;
}

/// Renders the content of a table cell.
///
/// The table writer calls [`render_cell`](ContentRenderer::render_cell) once
/// per emitted cell and once per folded continuation cell. Folding stops at
/// the first continuation whose output equals
/// [`empty_paragraph`](ContentRenderer::empty_paragraph).
pub trait ContentRenderer {
    /// Render the elements of `cell` to markup.
    fn render_cell(&self, cell: &Cell) -> Result<String>;

    /// Markup this renderer produces for a paragraph without text.
    fn empty_paragraph(&self) -> &str {
        EMPTY_PARAGRAPH
    }
}
