//! Table node editing
//!
//! Provides the table node used inside a [`Document`](crate::model::Document):
//! - Rectangular grid of header/data cells
//! - Structural edits (rows, columns, header toggle) that refuse to break the grid
//! - Attribute schema for `withHeaderRow`
//! - Contextual menu with an outside-click listener scoped to its open state
//!
//! # Architecture
//!
//! ```text
//! Document
//! └── Block::Table(TableNode)
//!         └── rows: Vec<TableRow>
//!                 └── cells: Vec<TableCell>
//!
//! UiState
//! └── TableMenu (per table, keyed by BlockId)
//!         └── ListenerGuard (only while open)
//! ```

mod commands;
pub mod menu;
mod model;
pub mod schema;

pub use menu::{MenuState, TableMenu, TableMenuAction};
pub use model::{CellKind, CellPosition, TableCell, TableNode, TableRow};
