//! ToHtml implementations for document model types.
use super::config::HtmlOptions;
use super::content::ContainerWriter;
use super::table::TableWriter;
use super::traits::{ContentRenderer, ToHtml};
use crate::common::Result;
use crate::document::{Cell, Element, Paragraph, Table};

impl ToHtml for Table {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        let renderer = ContainerWriter::new(options);
        TableWriter::for_table(self, &renderer, options).write()
    }
}

impl ToHtml for Paragraph {
    fn to_html_with_options(&self, _options: &HtmlOptions) -> Result<String> {
        let mut out = String::new();
        ContainerWriter::write_paragraph(&mut out, self);
        Ok(out)
    }
}

impl ToHtml for Element {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        ContainerWriter::new(options).write_elements(std::slice::from_ref(self))
    }
}

impl ToHtml for Cell {
    /// Renders the cell's content only, without the `<td>` wrapper.
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        ContainerWriter::new(options).render_cell(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Run;

    #[test]
    fn test_paragraph_to_html() {
        let mut para = Paragraph::new();
        para.add_run(Run::new("<b>").italic(true));
        assert_eq!(para.to_html().unwrap(), "<p><em>&lt;b&gt;</em></p>\n");
        assert_eq!(Paragraph::new().to_html().unwrap(), "<p>&nbsp;</p>\n");
    }

    #[test]
    fn test_element_to_html_dispatches() {
        assert_eq!(Element::TextBreak.to_html().unwrap(), "<br />\n");
        let table: Element = Table::new(1, 1).into();
        assert!(table.to_html().unwrap().starts_with("<table>\n"));
        let empty: Element = Table::default().into();
        assert_eq!(empty.to_html().unwrap(), "");
    }

    #[test]
    fn test_cell_to_html_is_content_only() {
        let cell = Cell::with_text("x");
        assert_eq!(cell.to_html().unwrap(), "<p>x</p>\n");
    }
}
