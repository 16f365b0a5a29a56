//! Content element types for representing ordered cell content.

use serde::{Deserialize, Serialize};

use super::{Paragraph, Table};

/// An element inside a cell (or any other container).
///
/// Elements keep the order in which they appear in the document, which the
/// HTML writers rely on.
///
/// # Examples
///
/// ```rust
/// use wordhtml::document::{Element, Paragraph, Table};
///
/// let elements = vec![
///     Element::Paragraph(Paragraph::new()),
///     Element::Table(Box::new(Table::new(1, 1))),
/// ];
/// assert!(elements[1].is_table());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    /// A paragraph of runs
    Paragraph(Paragraph),
    /// A manual line break outside any paragraph
    TextBreak,
    /// A nested table (boxed to keep the enum small)
    Table(Box<Table>),
}

impl Element {
    /// Check if this element is a paragraph.
    #[inline]
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }

    /// Check if this element is a table.
    #[inline]
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }

    /// Get a reference to the paragraph, if this is a paragraph element.
    #[inline]
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Element::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get a reference to the table, if this is a table element.
    #[inline]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Element::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Paragraph> for Element {
    fn from(para: Paragraph) -> Self {
        Element::Paragraph(para)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(Box::new(table))
    }
}
