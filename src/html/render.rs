//! Document to HTML rendering

use crate::config::ImageConfig;
use crate::image::IMAGE_ATTRIBUTES;
use crate::model::{Block, Document};
use crate::schema::{merge_attributes, render_attributes, HtmlAttributes};
use crate::table::schema::TABLE_ATTRIBUTES;
use crate::table::{CellKind, TableNode, TableRow};

/// Rendering options
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Extra attributes merged into every rendered table
    pub table_attributes: HtmlAttributes,
    /// Extra attributes merged into every rendered image
    pub image_attributes: HtmlAttributes,
    /// Wrap images in a `<p>` so they sit in the text flow
    pub inline_images: bool,
}

impl HtmlOptions {
    pub fn from_image_config(config: &ImageConfig) -> Self {
        Self {
            inline_images: config.inline,
            ..Default::default()
        }
    }
}

/// Render a document with default options
pub fn render_document(doc: &Document) -> String {
    render_document_with(doc, &HtmlOptions::default())
}

/// Render a document, merging `options` into each node's attributes
pub fn render_document_with(doc: &Document, options: &HtmlOptions) -> String {
    doc.blocks()
        .iter()
        .map(|block| render_block(block, options))
        .collect()
}

/// Render a single block
pub fn render_block(block: &Block, options: &HtmlOptions) -> String {
    match block {
        Block::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
        Block::Image(image) => {
            let attrs = merge_attributes(
                &options.image_attributes,
                &render_attributes(IMAGE_ATTRIBUTES, image),
            );
            let img = format!("<img{}>", format_attributes(&attrs));
            if options.inline_images {
                format!("<p>{}</p>", img)
            } else {
                img
            }
        }
        Block::Table(table) => render_table(table, options),
    }
}

fn render_table(table: &TableNode, options: &HtmlOptions) -> String {
    let attrs = merge_attributes(
        &options.table_attributes,
        &render_attributes(TABLE_ATTRIBUTES, table),
    );

    let mut out = format!("<table{}>", format_attributes(&attrs));

    let body = if table.has_header_cells() {
        out.push_str("<thead>");
        if let Some(first) = table.row(0) {
            render_row(first, &mut out);
        }
        out.push_str("</thead>");
        &table.rows()[1..]
    } else {
        table.rows()
    };

    if !body.is_empty() {
        out.push_str("<tbody>");
        for row in body {
            render_row(row, &mut out);
        }
        out.push_str("</tbody>");
    }

    out.push_str("</table>");
    out
}

fn render_row(row: &TableRow, out: &mut String) {
    out.push_str("<tr>");
    for cell in &row.cells {
        let tag = match cell.kind {
            CellKind::Header => "th",
            CellKind::Data => "td",
        };
        out.push_str(&format!("<{tag}>{}</{tag}>", escape_html(&cell.content)));
    }
    out.push_str("</tr>");
}

fn format_attributes(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(" {}=\"{}\"", k, escape_html(v)))
        .collect()
}

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_document;
    use crate::table::CellPosition;

    #[test]
    fn test_render_table_with_header() {
        let mut table = TableNode::new(2, 2, true);
        table.set_cell_content(CellPosition::new(0, 0), "Name");
        table.set_cell_content(CellPosition::new(1, 0), "a & b");
        let doc = Document::with_blocks(vec![Block::Table(table)]);

        assert_eq!(
            render_document(&doc),
            "<table><thead><tr><th>Name</th><th></th></tr></thead>\
             <tbody><tr><td>a &amp; b</td><td></td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_render_table_without_header() {
        let doc = Document::with_blocks(vec![Block::Table(TableNode::new(1, 1, false))]);

        assert_eq!(
            render_document(&doc),
            "<table><tbody><tr><td></td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_render_merges_options() {
        let doc = Document::with_blocks(vec![Block::Table(TableNode::new(1, 1, false))]);
        let options = HtmlOptions {
            table_attributes: vec![("class".to_string(), "table_wp".to_string())],
            ..Default::default()
        };

        assert!(render_document_with(&doc, &options).starts_with("<table class=\"table_wp\">"));
    }

    #[test]
    fn test_render_then_parse_keeps_shape() {
        let mut table = TableNode::new(3, 4, true);
        table.set_cell_content(CellPosition::new(2, 3), "<x>");
        let doc = Document::with_blocks(vec![
            Block::paragraph("intro"),
            Block::Table(table.clone()),
        ]);

        let parsed = parse_document(&render_document(&doc)).unwrap();

        assert_eq!(parsed.blocks(), doc.blocks());
    }
}
