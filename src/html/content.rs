//! Default rendering of cell content.
//!
//! Paragraphs become `<p>` elements, runs are escaped and wrapped in
//! `<strong>`/`<em>`/`<u>`, and nested tables go back through the table
//! writer with this same renderer.
use super::config::HtmlOptions;
use super::table::TableWriter;
use super::traits::ContentRenderer;
use super::writer::escape_html;
use crate::common::Result;
use crate::document::{Cell, Element, Paragraph, Run};

/// Markup of a paragraph without text.
pub const EMPTY_PARAGRAPH: &str = "<p>&nbsp;</p>\n";

/// Renders sequences of [`Element`]s.
#[derive(Debug, Clone, Copy)]
pub struct ContainerWriter<'a> {
    options: &'a HtmlOptions,
}

impl<'a> ContainerWriter<'a> {
    pub fn new(options: &'a HtmlOptions) -> Self {
        Self { options }
    }

    /// Render elements in order.
    pub fn write_elements(&self, elements: &[Element]) -> Result<String> {
        let mut out = String::with_capacity(64 * elements.len());
        for element in elements {
            self.write_element(&mut out, element)?;
        }
        Ok(out)
    }

    fn write_element(&self, out: &mut String, element: &Element) -> Result<()> {
        match element {
            Element::Paragraph(para) => Self::write_paragraph(out, para),
            Element::TextBreak => out.push_str("<br />\n"),
            Element::Table(_) => {
                out.push_str(&TableWriter::new(element, self, self.options).write()?);
            },
        }
        Ok(())
    }

    /// Write a paragraph to the buffer.
    pub fn write_paragraph(out: &mut String, para: &Paragraph) {
        if para.is_empty() {
            out.push_str(EMPTY_PARAGRAPH);
            return;
        }

        out.push_str("<p>");
        for run in para.runs() {
            Self::write_run(out, run);
        }
        out.push_str("</p>\n");
    }

    /// Write a run with formatting.
    pub fn write_run(out: &mut String, run: &Run) {
        if run.text.is_empty() {
            return;
        }

        if run.bold {
            out.push_str("<strong>");
        }
        if run.italic {
            out.push_str("<em>");
        }
        if run.underline {
            out.push_str("<u>");
        }
        out.push_str(&escape_html(&run.text));
        if run.underline {
            out.push_str("</u>");
        }
        if run.italic {
            out.push_str("</em>");
        }
        if run.bold {
            out.push_str("</strong>");
        }
    }
}

impl ContentRenderer for ContainerWriter<'_> {
    fn render_cell(&self, cell: &Cell) -> Result<String> {
        self.write_elements(cell.elements())
    }
}
