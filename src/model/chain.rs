//! Command chains - atomic batches of document edits
//!
//! ```ignore
//! doc.chain().focus().add_column_after().run();
//! ```
//!
//! A chain applies its commands to a draft copy of the document and only
//! commits the draft if every command succeeds. A refused command leaves the
//! document exactly as it was.

use super::document::{Block, Document, Focus, NodeType};
use crate::image::{ImageAlign, ImageNode, ImageOptions, IMAGE_ATTRIBUTES};
use crate::schema::{update_attribute, AttrValue};
use crate::table::schema::TABLE_ATTRIBUTES;
use crate::table::{CellPosition, TableNode};

/// A single edit against the document
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Give the editor keyboard focus
    Focus,
    /// Insert a table after the focused block and focus its first cell
    InsertTable {
        rows: usize,
        cols: usize,
        with_header_row: bool,
    },
    AddColumnBefore,
    AddColumnAfter,
    DeleteColumn,
    AddRowBefore,
    AddRowAfter,
    DeleteRow,
    /// Flip `withHeaderRow` and convert the first row's cells
    ToggleHeaderRow,
    /// Remove the focused table
    DeleteTable,
    /// Remove the focused block, whatever its type
    DeleteNode,
    /// Write attributes of the focused node through its schema
    UpdateAttributes {
        node: NodeType,
        attrs: Vec<(String, AttrValue)>,
    },
    /// Insert a paragraph after the focused block and focus it
    InsertParagraph(String),
    /// Insert an image after the focused block and focus it
    SetImage(ImageOptions),
    /// Replace the text of the focused table cell
    SetCellContent(String),
}

impl EditCommand {
    /// Apply to `doc`. Returns false when the command does not apply.
    ///
    /// A false return may leave `doc` partially edited; callers that need
    /// atomicity go through [`CommandChain`] or [`Document::can`].
    pub fn apply(&self, doc: &mut Document) -> bool {
        match self {
            EditCommand::Focus => {
                doc.set_has_focus(true);
                true
            }
            EditCommand::InsertTable {
                rows,
                cols,
                with_header_row,
            } => {
                let table = TableNode::new(*rows, *cols, *with_header_row);
                let index = doc.insertion_index();
                doc.insert_block(index, Block::Table(table));
                doc.set_focus_unchecked(Some(Focus {
                    block: index,
                    cell: Some(CellPosition::new(0, 0)),
                }));
                true
            }
            EditCommand::AddColumnBefore => edit_cell(doc, |table, pos| {
                table
                    .add_column_before(pos.col)
                    .then_some(CellPosition::new(pos.row, pos.col + 1))
            }),
            EditCommand::AddColumnAfter => {
                edit_cell(doc, |table, pos| table.add_column_after(pos.col).then_some(pos))
            }
            EditCommand::DeleteColumn => edit_cell(doc, |table, pos| {
                table
                    .delete_column(pos.col)
                    .then(|| table.clamp(pos))
            }),
            EditCommand::AddRowBefore => edit_cell(doc, |table, pos| {
                table
                    .add_row_before(pos.row)
                    .then_some(CellPosition::new(pos.row + 1, pos.col))
            }),
            EditCommand::AddRowAfter => {
                edit_cell(doc, |table, pos| table.add_row_after(pos.row).then_some(pos))
            }
            EditCommand::DeleteRow => edit_cell(doc, |table, pos| {
                table.delete_row(pos.row).then(|| table.clamp(pos))
            }),
            EditCommand::ToggleHeaderRow => match doc.focused_table().map(|(i, _)| i) {
                Some(index) => doc
                    .table_mut(index)
                    .is_some_and(|table| table.toggle_header_row()),
                None => false,
            },
            EditCommand::DeleteTable => match doc.focused_table().map(|(i, _)| i) {
                Some(index) => doc.remove_block(index).is_some(),
                None => false,
            },
            EditCommand::DeleteNode => match doc.focus() {
                Some(focus) => doc.remove_block(focus.block).is_some(),
                None => false,
            },
            EditCommand::UpdateAttributes { node, attrs } => update_attributes(doc, *node, attrs),
            EditCommand::InsertParagraph(text) => {
                insert_and_focus(doc, Block::paragraph(text.clone()));
                true
            }
            EditCommand::SetImage(options) => {
                if options.src.is_empty() {
                    return false;
                }
                insert_and_focus(doc, Block::Image(ImageNode::from(options.clone())));
                true
            }
            EditCommand::SetCellContent(text) => match doc.focused_cell() {
                Some((index, pos)) => doc
                    .table_mut(index)
                    .is_some_and(|table| table.set_cell_content(pos, text)),
                None => false,
            },
        }
    }
}

/// Run a structural edit on the focused cell's table
///
/// `edit` returns the new focus cell on success.
fn edit_cell(
    doc: &mut Document,
    edit: impl FnOnce(&mut TableNode, CellPosition) -> Option<CellPosition>,
) -> bool {
    let Some((index, pos)) = doc.focused_cell() else {
        tracing::debug!("no focused table cell");
        return false;
    };
    let Some(table) = doc.table_mut(index) else {
        return false;
    };

    match edit(table, pos) {
        Some(cell) => {
            doc.set_focus_unchecked(Some(Focus {
                block: index,
                cell: Some(cell),
            }));
            true
        }
        None => false,
    }
}

fn insert_and_focus(doc: &mut Document, block: Block) {
    let index = doc.insertion_index();
    doc.insert_block(index, block);
    doc.set_focus_unchecked(Some(Focus { block: index, cell: None }));
}

/// Apply every attribute to a copy of the focused node, then write it back
fn update_attributes(doc: &mut Document, node: NodeType, attrs: &[(String, AttrValue)]) -> bool {
    let Some(focus) = doc.focus() else {
        return false;
    };

    match node {
        NodeType::Table => {
            let Some(table) = doc.table_mut(focus.block) else {
                return false;
            };
            let mut draft = table.clone();
            let ok = attrs
                .iter()
                .all(|(key, value)| update_attribute(TABLE_ATTRIBUTES, &mut draft, key, value.clone()));
            if ok {
                *table = draft;
            }
            ok
        }
        NodeType::Image => {
            let Some(image) = doc.image_mut(focus.block) else {
                return false;
            };
            let mut draft = image.clone();
            let ok = attrs
                .iter()
                .all(|(key, value)| update_attribute(IMAGE_ATTRIBUTES, &mut draft, key, value.clone()));
            if ok {
                *image = draft;
            }
            ok
        }
        NodeType::Paragraph => false,
    }
}

/// Builder for an atomic batch of commands
#[derive(Debug)]
pub struct CommandChain<'a> {
    doc: &'a mut Document,
    commands: Vec<EditCommand>,
}

impl<'a> CommandChain<'a> {
    pub(crate) fn new(doc: &'a mut Document) -> Self {
        Self {
            doc,
            commands: Vec::new(),
        }
    }

    /// Append an arbitrary command
    pub fn command(mut self, command: EditCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn focus(self) -> Self {
        self.command(EditCommand::Focus)
    }

    pub fn insert_table(self, rows: usize, cols: usize, with_header_row: bool) -> Self {
        self.command(EditCommand::InsertTable {
            rows,
            cols,
            with_header_row,
        })
    }

    pub fn add_column_before(self) -> Self {
        self.command(EditCommand::AddColumnBefore)
    }

    pub fn add_column_after(self) -> Self {
        self.command(EditCommand::AddColumnAfter)
    }

    pub fn delete_column(self) -> Self {
        self.command(EditCommand::DeleteColumn)
    }

    pub fn add_row_before(self) -> Self {
        self.command(EditCommand::AddRowBefore)
    }

    pub fn add_row_after(self) -> Self {
        self.command(EditCommand::AddRowAfter)
    }

    pub fn delete_row(self) -> Self {
        self.command(EditCommand::DeleteRow)
    }

    pub fn toggle_header_row(self) -> Self {
        self.command(EditCommand::ToggleHeaderRow)
    }

    pub fn delete_table(self) -> Self {
        self.command(EditCommand::DeleteTable)
    }

    pub fn delete_node(self) -> Self {
        self.command(EditCommand::DeleteNode)
    }

    pub fn update_attributes(self, node: NodeType, attrs: Vec<(&str, AttrValue)>) -> Self {
        self.command(EditCommand::UpdateAttributes {
            node,
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        })
    }

    pub fn insert_paragraph(self, text: impl Into<String>) -> Self {
        self.command(EditCommand::InsertParagraph(text.into()))
    }

    pub fn set_image(self, options: ImageOptions) -> Self {
        self.command(EditCommand::SetImage(options))
    }

    pub fn set_image_align(self, align: ImageAlign) -> Self {
        self.update_attributes(NodeType::Image, vec![("align", AttrValue::from(align.as_str()))])
    }

    pub fn set_image_width(self, width: &str) -> Self {
        self.update_attributes(NodeType::Image, vec![("width", AttrValue::from(width))])
    }

    pub fn set_image_alt(self, alt: &str) -> Self {
        self.update_attributes(NodeType::Image, vec![("alt", AttrValue::from(alt))])
    }

    pub fn set_image_title(self, title: &str) -> Self {
        self.update_attributes(NodeType::Image, vec![("title", AttrValue::from(title))])
    }

    pub fn set_cell_content(self, text: impl Into<String>) -> Self {
        self.command(EditCommand::SetCellContent(text.into()))
    }

    /// Apply all commands, committing only if every one succeeds
    pub fn run(self) -> bool {
        let mut draft = self.doc.clone();
        for command in &self.commands {
            if !command.apply(&mut draft) {
                tracing::debug!(?command, "command refused, chain discarded");
                return false;
            }
        }
        *self.doc = draft;
        true
    }
}
