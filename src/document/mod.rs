//! Word document object model consumed by the HTML writers.
//!
//! Tables are made of rows, rows of cells, and cells of content elements.
//! Cell styles carry the properties that survive into markup: width,
//! background, grid span, vertical merge state and per-side borders.

mod element;
mod paragraph;
mod table;

pub use element::Element;
pub use paragraph::{Paragraph, Run};
pub use table::{
    BorderSide, Cell, CellBorders, CellStyle, Row, RowStyle, Table, TableLayout, TableStyle,
    VMergeState,
};
