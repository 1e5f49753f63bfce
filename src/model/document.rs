//! Document model - the block tree and its focus

use serde::{Deserialize, Serialize};

use super::chain::{CommandChain, EditCommand};
use crate::image::ImageNode;
use crate::table::{CellPosition, TableNode};

/// Unique identifier for a block, stable across edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub u64);

/// Node type names understood by `is_active` and `update_attributes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Paragraph,
    Table,
    Image,
}

impl NodeType {
    pub fn name(self) -> &'static str {
        match self {
            NodeType::Paragraph => "paragraph",
            NodeType::Table => "table",
            NodeType::Image => "image",
        }
    }
}

/// A top-level block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        text: String,
    },
    Table(TableNode),
    Image(ImageNode),
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Block::Paragraph { .. } => NodeType::Paragraph,
            Block::Table(_) => NodeType::Table,
            Block::Image(_) => NodeType::Image,
        }
    }

    pub fn as_table(&self) -> Option<&TableNode> {
        match self {
            Block::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageNode> {
        match self {
            Block::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// Where the selection sits: a block and, inside tables, a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub block: usize,
    pub cell: Option<CellPosition>,
}

/// The document: an ordered list of blocks
///
/// The document is the only owner of its nodes. Everything else (menus,
/// pickers) refers to blocks by index or [`BlockId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentRepr", into = "DocumentRepr")]
pub struct Document {
    blocks: Vec<Block>,
    /// Parallel to `blocks`
    ids: Vec<BlockId>,
    next_id: u64,
    focus: Option<Focus>,
    has_focus: bool,
}

/// Serialized form: `{"type": "doc", "content": [...]}`
#[derive(Serialize, Deserialize)]
struct DocumentRepr {
    #[serde(rename = "type", default = "doc_type")]
    kind: String,
    #[serde(default)]
    content: Vec<Block>,
}

fn doc_type() -> String {
    "doc".to_string()
}

impl From<DocumentRepr> for Document {
    fn from(repr: DocumentRepr) -> Self {
        Document::with_blocks(repr.content)
    }
}

impl From<Document> for DocumentRepr {
    fn from(doc: Document) -> Self {
        DocumentRepr {
            kind: doc_type(),
            content: doc.blocks,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        let mut doc = Self::new();
        for block in blocks {
            doc.push_block(block);
        }
        doc
    }

    /// Parse the JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to the JSON form
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    // === Blocks ===

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn block_id(&self, index: usize) -> Option<BlockId> {
        self.ids.get(index).copied()
    }

    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.ids.iter().position(|i| *i == id)
    }

    /// Table at `index`, if that block is a table
    pub fn table(&self, index: usize) -> Option<&TableNode> {
        self.block(index)?.as_table()
    }

    pub(crate) fn table_mut(&mut self, index: usize) -> Option<&mut TableNode> {
        match self.blocks.get_mut(index)? {
            Block::Table(table) => Some(table),
            _ => None,
        }
    }

    pub(crate) fn image_mut(&mut self, index: usize) -> Option<&mut ImageNode> {
        match self.blocks.get_mut(index)? {
            Block::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Block ids of all tables, in document order
    pub fn table_ids(&self) -> Vec<BlockId> {
        self.blocks
            .iter()
            .zip(&self.ids)
            .filter(|(block, _)| block.node_type() == NodeType::Table)
            .map(|(_, id)| *id)
            .collect()
    }

    pub fn push_block(&mut self, block: Block) -> BlockId {
        self.insert_block(self.blocks.len(), block)
    }

    /// Insert a block at `index` (clamped to the end)
    pub fn insert_block(&mut self, index: usize, block: Block) -> BlockId {
        let index = index.min(self.blocks.len());
        self.next_id += 1;
        let id = BlockId(self.next_id);
        self.blocks.insert(index, block);
        self.ids.insert(index, id);

        if let Some(focus) = self.focus.as_mut() {
            if focus.block >= index {
                focus.block += 1;
            }
        }
        id
    }

    /// Remove the block at `index`, dropping focus if it pointed there
    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        if index >= self.blocks.len() {
            return None;
        }
        self.ids.remove(index);
        let block = self.blocks.remove(index);

        self.focus = match self.focus {
            Some(focus) if focus.block == index => None,
            Some(focus) if focus.block > index => Some(Focus {
                block: focus.block - 1,
                ..focus
            }),
            other => other,
        };
        Some(block)
    }

    // === Focus ===

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Move the selection to a block (and a cell, for tables)
    ///
    /// Returns false and leaves focus unchanged if the target does not exist.
    pub fn set_focus(&mut self, block: usize, cell: Option<CellPosition>) -> bool {
        let valid = match (self.block(block), cell) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(Block::Table(table)), Some(pos)) => table.contains(pos),
            (Some(_), Some(_)) => false,
        };
        if valid {
            self.focus = Some(Focus { block, cell });
        }
        valid
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    pub(crate) fn set_focus_unchecked(&mut self, focus: Option<Focus>) {
        self.focus = focus;
    }

    /// Whether the editor holds keyboard focus
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn set_has_focus(&mut self, focused: bool) {
        self.has_focus = focused;
    }

    /// Whether the focused block is of the given type
    pub fn is_active(&self, node: NodeType) -> bool {
        self.focus
            .and_then(|f| self.block(f.block))
            .is_some_and(|b| b.node_type() == node)
    }

    /// Focused table cell as (block index, cell)
    pub fn focused_cell(&self) -> Option<(usize, CellPosition)> {
        let focus = self.focus?;
        self.table(focus.block)?;
        Some((focus.block, focus.cell?))
    }

    /// Focused table as (block index, table)
    pub fn focused_table(&self) -> Option<(usize, &TableNode)> {
        let focus = self.focus?;
        Some((focus.block, self.table(focus.block)?))
    }

    /// Index of the block new content goes after
    pub(crate) fn insertion_index(&self) -> usize {
        self.focus
            .map(|f| f.block + 1)
            .unwrap_or(self.blocks.len())
    }

    // === Commands ===

    /// Start a command chain against this document
    pub fn chain(&mut self) -> CommandChain<'_> {
        CommandChain::new(self)
    }

    /// Whether a command would apply, without changing anything
    pub fn can(&self, command: &EditCommand) -> bool {
        let mut draft = self.clone();
        command.apply(&mut draft)
    }
}
