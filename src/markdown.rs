//! Markdown import using pulldown-cmark
//!
//! Paragraphs and headings become paragraph blocks, GFM tables become table
//! blocks (the head row as header cells) and images become image blocks,
//! except inside table cells, where they keep their alt text.
//! Everything else contributes its text to the enclosing paragraph.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::image::ImageOptions;
use crate::model::{Block, Document};
use crate::table::{CellKind, TableCell, TableNode, TableRow};

/// Import markdown into a new document
pub fn import_markdown(markdown: &str) -> Document {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut importer = Importer::default();
    for event in parser {
        importer.event(event);
    }
    importer.finish()
}

#[derive(Default)]
struct TableBuilder {
    rows: Vec<TableRow>,
    cells: Vec<TableCell>,
    cell: Option<String>,
    in_head: bool,
    has_head: bool,
}

impl TableBuilder {
    fn end_row(&mut self, kind: CellKind) {
        let cells = std::mem::take(&mut self.cells);
        if !cells.is_empty() {
            let mut row = TableRow { cells };
            row.set_kind(kind);
            self.rows.push(row);
        }
    }

    fn build(self) -> Option<TableNode> {
        if self.rows.is_empty() {
            return None;
        }
        Some(TableNode::from_rows(self.has_head, self.rows))
    }
}

struct PendingImage {
    options: ImageOptions,
    alt: String,
}

#[derive(Default)]
struct Importer {
    blocks: Vec<Block>,
    text: Option<String>,
    table: Option<TableBuilder>,
    image: Option<PendingImage>,
}

impl Importer {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) | Event::Code(text) => self.push_text(&text),
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push_text("\n"),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph | Tag::Heading { .. } if self.table.is_none() => {
                self.text = Some(String::new());
            }
            Tag::Table(_) => {
                self.flush_text();
                self.table = Some(TableBuilder::default());
            }
            Tag::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.in_head = true;
                    table.has_head = true;
                }
            }
            Tag::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.cell = Some(String::new());
                }
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                let mut options = ImageOptions::new(dest_url.to_string());
                if !title.is_empty() {
                    options.title = Some(title.to_string());
                }
                self.image = Some(PendingImage {
                    options,
                    alt: String::new(),
                });
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Heading(_) => self.flush_text(),
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    let content = table.cell.take().unwrap_or_default();
                    let kind = if table.in_head {
                        CellKind::Header
                    } else {
                        CellKind::Data
                    };
                    table
                        .cells
                        .push(TableCell::with_content(kind, content.trim()));
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.end_row(CellKind::Header);
                    table.in_head = false;
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.end_row(CellKind::Data);
                }
            }
            TagEnd::Table => {
                if let Some(node) = self.table.take().and_then(TableBuilder::build) {
                    self.blocks.push(Block::Table(node));
                }
            }
            TagEnd::Image => {
                if let Some(pending) = self.image.take() {
                    // Cells hold text only: keep the alt text, or the URL without one
                    if let Some(table) = self.table.as_mut() {
                        if let Some(cell) = table.cell.as_mut() {
                            if pending.alt.is_empty() {
                                cell.push_str(&pending.options.src);
                            } else {
                                cell.push_str(&pending.alt);
                            }
                        }
                        return;
                    }
                    self.flush_text();
                    self.text = Some(String::new());
                    let mut options = pending.options;
                    if !pending.alt.is_empty() {
                        options.alt = Some(pending.alt);
                    }
                    if !options.src.is_empty() {
                        self.blocks.push(Block::Image(options.into()));
                    }
                }
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(image) = self.image.as_mut() {
            image.alt.push_str(text);
        } else if let Some(cell) = self.table.as_mut().and_then(|t| t.cell.as_mut()) {
            cell.push_str(text);
        } else if let Some(buffer) = self.text.as_mut() {
            buffer.push_str(text);
        }
    }

    fn flush_text(&mut self) {
        if let Some(text) = self.text.take() {
            let text = text.trim();
            if !text.is_empty() {
                self.blocks.push(Block::paragraph(text));
            }
        }
    }

    fn finish(mut self) -> Document {
        self.flush_text();
        tracing::debug!(blocks = self.blocks.len(), "imported markdown");
        Document::with_blocks(self.blocks)
    }
}
