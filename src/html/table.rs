//! Table element HTML writer.
//!
//! Produces one `<table>` with a `<tr>` per row and a `<td>`/`<th>` per
//! cell. Vertical merges become `rowspan`, grid spans become `colspan`, and
//! cells swallowed by a vertical merge are skipped; their content, unless it
//! is only an empty paragraph, is appended to the anchor cell.
use super::border::write_borders;
use super::config::HtmlOptions;
use super::merge::{MergePlan, MergeSpan};
use super::traits::ContentRenderer;
use super::writer::{push_attr, push_int_attr};
use crate::common::Result;
use crate::common::contrasting_foreground;
use crate::common::unit::{TWIPS_PER_PX, write_px};
use crate::document::{Cell, Element, Table, TableLayout, TableStyle};

/// Writer for a single table element.
pub struct TableWriter<'a, R: ContentRenderer + ?Sized> {
    table: Option<&'a Table>,
    renderer: &'a R,
    options: &'a HtmlOptions,
}

impl<'a, R: ContentRenderer + ?Sized> TableWriter<'a, R> {
    /// Writer for `element`; anything other than a table renders as nothing.
    pub fn new(element: &'a Element, renderer: &'a R, options: &'a HtmlOptions) -> Self {
        Self {
            table: element.as_table(),
            renderer,
            options,
        }
    }

    /// Writer for a table known by type.
    pub fn for_table(table: &'a Table, renderer: &'a R, options: &'a HtmlOptions) -> Self {
        Self {
            table: Some(table),
            renderer,
            options,
        }
    }

    /// Render the table.
    ///
    /// Returns an empty string for non-table elements and tables without rows.
    pub fn write(&self) -> Result<String> {
        let Some(table) = self.table else {
            return Ok(String::new());
        };
        if table.row_count() == 0 {
            return Ok(String::new());
        }

        let plan = MergePlan::resolve(table);
        let mut out = String::with_capacity(256 * table.row_count());

        out.push_str("<table");
        write_table_style(&mut out, table.style(), self.options);
        out.push_str(">\n");

        for (row_idx, row) in table.rows().iter().enumerate() {
            out.push_str("<tr style=\"height:");
            write_px(&mut out, row.height(), TWIPS_PER_PX);
            out.push_str("px\">\n");

            let tag = if row.is_header() { "th" } else { "td" };
            for (col, cell) in row.cells().iter().enumerate() {
                if cell.is_continuation() {
                    continue;
                }
                let span = plan.span_at(row_idx, col);
                self.write_cell(&mut out, table, tag, cell, col, span)?;
            }

            out.push_str("</tr>\n");
        }

        out.push_str("</table>\n");

        log::debug!(
            "Rendered table: {} rows, {} vertical merges, {} orphan continuations",
            table.row_count(),
            plan.span_count(),
            plan.orphan_count()
        );
        Ok(out)
    }

    fn write_cell(
        &self,
        out: &mut String,
        table: &Table,
        tag: &str,
        cell: &Cell,
        col: usize,
        span: Option<&MergeSpan>,
    ) -> Result<()> {
        let style = cell.style();
        let row_span = span.map_or(1, |span| span.row_span);

        out.push('<');
        out.push_str(tag);
        if let Some(col_span) = style.column_span().filter(|&n| n > 1) {
            push_int_attr(out, "colspan", col_span as usize);
        }
        if row_span > 1 {
            push_int_attr(out, "rowspan", row_span);
        }
        if let Some(fill) = style.fill() {
            push_attr(out, "bgcolor", &format!("#{}", fill.trim_start_matches('#')));
            if let Some(foreground) = contrasting_foreground(fill) {
                push_attr(out, "color", &format!("#{foreground}"));
            }
        }
        out.push_str(" style=\"width:");
        write_px(out, style.width.unwrap_or(0), TWIPS_PER_PX);
        out.push_str("px;");
        write_borders(out, &style.borders, cell.has_border());
        out.push_str("\">\n");

        out.push_str(&self.renderer.render_cell(cell)?);
        if let Some(span) = span.filter(|_| self.options.fold_merged_content) {
            self.fold_continuations(out, table, col, span)?;
        }

        out.push_str("</");
        out.push_str(tag);
        out.push_str(">\n");
        Ok(())
    }

    /// Append the content of the cells merged into an anchor.
    ///
    /// Stops at the first continuation that renders as a bare empty
    /// paragraph; nothing below it is folded.
    fn fold_continuations(
        &self,
        out: &mut String,
        table: &Table,
        col: usize,
        span: &MergeSpan,
    ) -> Result<()> {
        for &row_idx in &span.continuations {
            let Some(cell) = table.cell(row_idx, col) else {
                break;
            };
            let content = self.renderer.render_cell(cell)?;
            if content == self.renderer.empty_paragraph() {
                log::trace!(
                    "Stopped folding column {} at row {}: empty paragraph",
                    col,
                    row_idx
                );
                break;
            }
            out.push_str(&content);
        }
        Ok(())
    }
}

/// Translate a table style into a `class` or `style` attribute.
fn write_table_style(out: &mut String, style: Option<&TableStyle>, options: &HtmlOptions) {
    match style {
        None => {},
        Some(TableStyle::Named(name)) if name.is_empty() => {},
        Some(TableStyle::Named(name)) => {
            push_attr(out, "class", &format!("{}{}", options.table_class_prefix, name));
        },
        Some(TableStyle::Structured { layout }) => {
            let declaration = match layout {
                TableLayout::Fixed => "table-layout: fixed;",
                TableLayout::Auto => "table-layout: auto;",
                TableLayout::Unset => "",
            };
            push_attr(out, "style", declaration);
        },
    }
}
