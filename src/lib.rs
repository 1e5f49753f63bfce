//! editcrafter - Elm-style rich-text editing model with tables and images
//!
//! This crate provides the document model, table commands, table size picker,
//! contextual table menu and HTML/Markdown/JSON interchange for a block editor
//! implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod grid_selector;
pub mod html;
pub mod image;
pub mod listener;
pub mod markdown;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod schema;
pub mod table;
pub mod theme;
pub mod toolbar;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use grid_selector::{GridSelector, GridSize};
pub use messages::Msg;
pub use model::{Document, EditorModel};
pub use table::TableNode;
pub use theme::ThemeMode;
