//! Table, Row, and Cell structures for Word documents.
//!
//! The model is plain data: the HTML writers only read it, and upstream
//! builders fill it either through the setters below or through serde.
use serde::{Deserialize, Serialize};

use super::element::Element;
use super::paragraph::Paragraph;

/// Vertical merge state for table cells.
///
/// Mirrors the `<w:vMerge>` element:
/// - `restart`: starts a new vertical merge (the anchor cell)
/// - `continue`: continues the merge from the cell above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VMergeState {
    /// Starts a vertical merge (`<w:vMerge w:val="restart"/>`)
    Restart,
    /// Continues a vertical merge from above (`<w:vMerge/>`)
    Continue,
}

/// Table layout algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    /// Column widths come from the cells (`table-layout: fixed`)
    Fixed,
    /// Column widths follow the content (`table-layout: auto`)
    Auto,
    /// No layout preference recorded
    #[default]
    Unset,
}

/// Style attached to a table.
///
/// Documents either reference a named table style from the style sheet or
/// carry the properties inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableStyle {
    /// Reference to a style sheet class
    Named(String),
    /// Inline table properties
    Structured {
        #[serde(default)]
        layout: TableLayout,
    },
}

impl TableStyle {
    /// Inline style with the given layout.
    pub fn with_layout(layout: TableLayout) -> Self {
        TableStyle::Structured { layout }
    }
}

/// One side of a cell border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    Top,
    Left,
    Right,
    Bottom,
}

impl BorderSide {
    /// All sides in storage (and output) order.
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Top,
        BorderSide::Left,
        BorderSide::Right,
        BorderSide::Bottom,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            BorderSide::Top => 0,
            BorderSide::Left => 1,
            BorderSide::Right => 2,
            BorderSide::Bottom => 3,
        }
    }
}

/// Per-side cell borders, stored top, left, right, bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellBorders {
    /// Border widths in eighths of a point
    pub sizes: [u32; 4],
    /// Border colors in hex RGB format, `auto`, or unset
    pub colors: [Option<String>; 4],
}

impl CellBorders {
    /// Border width of one side in eighths of a point.
    #[inline]
    pub fn size(&self, side: BorderSide) -> u32 {
        self.sizes[side.index()]
    }

    /// Stored color of one side, if any.
    #[inline]
    pub fn color(&self, side: BorderSide) -> Option<&str> {
        self.colors[side.index()].as_deref()
    }

    /// Set one side.
    pub fn set(&mut self, side: BorderSide, size: u32, color: Option<&str>) {
        self.sizes[side.index()] = size;
        self.colors[side.index()] = color.map(str::to_string);
    }

    /// Set all four sides to the same width and color.
    pub fn set_all(&mut self, size: u32, color: Option<&str>) {
        for side in BorderSide::ALL {
            self.set(side, size, color);
        }
    }
}

/// Cell properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    /// Cell width in twips
    pub width: Option<u32>,
    /// Cell background color in hex RGB format, or `auto`
    pub background_color: Option<String>,
    /// Raw grid span value (`<w:gridSpan w:val="…"/>`)
    pub grid_span: Option<String>,
    /// Vertical merge state
    pub v_merge: Option<VMergeState>,
    /// Per-side borders
    pub borders: CellBorders,
}

impl CellStyle {
    /// Number of grid columns this cell spans, if the stored value is numeric.
    pub fn column_span(&self) -> Option<u32> {
        self.grid_span.as_deref()?.trim().parse().ok()
    }

    /// Background color to paint, skipping unset and `auto` values.
    pub fn fill(&self) -> Option<&str> {
        match self.background_color.as_deref() {
            None | Some("") | Some("auto") => None,
            Some(color) => Some(color),
        }
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    style: CellStyle,
    has_border: bool,
    elements: Vec<Element>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Create a cell holding a single empty paragraph, as word processors do.
    pub fn new() -> Self {
        Self {
            style: CellStyle::default(),
            has_border: false,
            elements: vec![Element::Paragraph(Paragraph::new())],
        }
    }

    /// Create a cell with one paragraph of text.
    pub fn with_text(text: &str) -> Self {
        let mut cell = Self::new();
        cell.set_text(text);
        cell
    }

    #[inline]
    pub fn style(&self) -> &CellStyle {
        &self.style
    }

    #[inline]
    pub fn style_mut(&mut self) -> &mut CellStyle {
        &mut self.style
    }

    /// Whether the per-side borders should be drawn.
    #[inline]
    pub fn has_border(&self) -> bool {
        self.has_border
    }

    /// Content elements in document order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn v_merge(&self) -> Option<VMergeState> {
        self.style.v_merge
    }

    /// Whether this cell is swallowed by a vertical merge from above.
    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.style.v_merge == Some(VMergeState::Continue)
    }

    /// Concatenated text of all paragraphs, one line per paragraph.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for para in self.elements.iter().filter_map(Element::as_paragraph) {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&para.text());
        }
        text
    }

    /// Replace the content with one paragraph of text.
    pub fn set_text(&mut self, text: &str) {
        self.elements.clear();
        self.add_paragraph().add_run_with_text(text);
    }

    /// Remove all content, leaving the cell without any element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Add a new paragraph to the cell.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.elements.push(Element::Paragraph(Paragraph::new()));
        match self.elements.last_mut() {
            Some(Element::Paragraph(para)) => para,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    /// Append an arbitrary element (line break, nested table, …).
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Set cell width in twips.
    pub fn set_width(&mut self, width: u32) {
        self.style.width = Some(width);
    }

    /// Set cell background color in hex RGB format (e.g., "FFFF00" for yellow).
    pub fn set_background_color(&mut self, color: &str) {
        self.style.background_color = Some(color.to_string());
    }

    /// Set the number of grid columns this cell spans.
    pub fn set_grid_span(&mut self, span: u32) {
        self.style.grid_span = Some(span.to_string());
    }

    pub fn set_v_merge(&mut self, state: Option<VMergeState>) {
        self.style.v_merge = state;
    }

    /// Set one border side; the border is only drawn if [`Cell::set_has_border`] is on.
    pub fn set_border(&mut self, side: BorderSide, size: u32, color: Option<&str>) {
        self.style.borders.set(side, size, color);
    }

    pub fn set_has_border(&mut self, has_border: bool) {
        self.has_border = has_border;
    }
}

/// Row properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowStyle {
    /// Row repeats as a header row (`<w:tblHeader/>`)
    pub tbl_header: bool,
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    cells: Vec<Cell>,
    /// Row height in twips
    height: Option<u32>,
    style: RowStyle,
}

impl Row {
    /// Create a row with `cols` empty cells.
    pub fn new(cols: usize) -> Self {
        Self {
            cells: (0..cols).map(|_| Cell::new()).collect(),
            height: None,
            style: RowStyle::default(),
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by index; rows may be shorter than their neighbours.
    #[inline]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Add a new cell.
    pub fn add_cell(&mut self) -> &mut Cell {
        let index = self.cells.len();
        self.cells.push(Cell::new());
        &mut self.cells[index]
    }

    /// Row height in twips, zero when unset.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(0)
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = Some(height);
    }

    #[inline]
    pub fn style(&self) -> &RowStyle {
        &self.style
    }

    /// Whether this row repeats as a table header.
    #[inline]
    pub fn is_header(&self) -> bool {
        self.style.tbl_header
    }

    pub fn set_header(&mut self, header: bool) {
        self.style.tbl_header = header;
    }
}

/// A table in a Word document.
///
/// # Example
///
/// ```rust
/// use wordhtml::document::{Table, VMergeState};
///
/// let mut table = Table::new(3, 2);
/// if let Some(cell) = table.cell_mut(0, 0) {
///     cell.set_text("Merged");
///     cell.set_v_merge(Some(VMergeState::Restart));
/// }
/// if let Some(cell) = table.cell_mut(1, 0) {
///     cell.set_v_merge(Some(VMergeState::Continue));
/// }
/// assert_eq!(table.row_count(), 3);
/// assert_eq!(table.column_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    rows: Vec<Row>,
    style: Option<TableStyle>,
}

impl Table {
    /// Create a table of `rows` × `cols` empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::new(cols)).collect(),
            style: None,
        }
    }

    /// Add a new row with specified column count.
    pub fn add_row(&mut self, cols: usize) -> &mut Row {
        let index = self.rows.len();
        self.rows.push(Row::new(cols));
        &mut self.rows[index]
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Get the number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row, in cells.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::cell_count).max().unwrap_or(0)
    }

    /// Get a cell by row and column index.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.cell(col)
    }

    /// Get a mutable cell by row and column index.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row)?.cell_mut(col)
    }

    #[inline]
    pub fn style(&self) -> Option<&TableStyle> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: Option<TableStyle>) {
        self.style = style;
    }
}
