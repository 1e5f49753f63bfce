//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::geometry::{Point, Rect};
use crate::image::{ImageAlign, ImageOptions};
use crate::model::BlockId;
use crate::table::{CellPosition, TableMenuAction};

/// Document messages (focus, paragraph and cell text)
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMsg {
    /// Move the selection to a block, and a cell for tables
    SetFocus {
        block: usize,
        cell: Option<CellPosition>,
    },
    /// Editor lost keyboard focus
    Blur,
    /// Insert a paragraph after the focused block
    InsertParagraph(String),
    /// Replace the focused cell's text
    SetCellContent(String),
    /// Remove the focused block
    DeleteNode,
}

/// Table messages (layout, menu interaction)
#[derive(Debug, Clone, PartialEq)]
pub enum TableMsg {
    /// The host laid out a table at these bounds
    SetBounds { table: BlockId, bounds: Rect },
    /// Click at a document position
    Click(Point),
    /// Document-level pointer-down (outside-click detection)
    PointerDown(Point),
    /// Menu button pressed
    Action(TableMenuAction),
}

/// Table size picker messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMsg {
    /// Pointer entered the cell at (row, col)
    PointerOver { row: usize, col: usize },
    /// Any cell was clicked; inserts a table of the hovered size
    Click,
}

/// Image messages
#[derive(Debug, Clone, PartialEq)]
pub enum ImageMsg {
    /// Insert an image after the focused block
    Insert(ImageOptions),
    SetAlign(ImageAlign),
    SetWidth(String),
    SetAlt(String),
    SetTitle(String),
    /// Files picked in the upload dialog
    Upload(Vec<PathBuf>),
    /// Upload finished with one URL per file, or an error message
    Uploaded(Result<Vec<String>, String>),
}

/// UI messages (theme, popovers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    /// Switch between light and dark mode
    ToggleTheme,
    /// Open the table size picker
    OpenTablePicker,
    /// Close the table size picker
    CloseTablePicker,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Document(DocumentMsg),
    Table(TableMsg),
    Grid(GridMsg),
    Image(ImageMsg),
    Ui(UiMsg),
}

impl Msg {
    /// Short name for logging
    pub fn name(&self) -> String {
        match self {
            Msg::Document(m) => format!("Document::{}", variant_name(m)),
            Msg::Table(m) => format!("Table::{}", variant_name(m)),
            Msg::Grid(m) => format!("Grid::{}", variant_name(m)),
            Msg::Image(m) => format!("Image::{}", variant_name(m)),
            Msg::Ui(m) => format!("Ui::{:?}", m),
        }
    }
}

/// Debug output up to the first field
fn variant_name(msg: &impl std::fmt::Debug) -> String {
    let debug = format!("{:?}", msg);
    debug
        .split(|c: char| c == '(' || c == ' ' || c == '{')
        .next()
        .unwrap_or_default()
        .to_string()
}
