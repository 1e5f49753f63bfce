//! Editor model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod chain;
pub mod document;
pub mod ui;

pub use chain::{CommandChain, EditCommand};
pub use document::{Block, BlockId, Document, Focus, NodeType};
pub use ui::UiState;

use crate::config::EditorConfig;
use crate::theme::ThemeMode;
use crate::toolbar::{Toolbar, ToolbarOptions};

/// The complete editor model
#[derive(Debug)]
pub struct EditorModel {
    /// Block content and selection
    pub document: Document,
    /// Table picker, table menus and listeners
    pub ui: UiState,
    /// Toolbar with its image uploader
    pub toolbar: Toolbar,
    /// Current appearance
    pub theme: ThemeMode,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl EditorModel {
    /// Create a model around `document`
    ///
    /// Toolbar customizations are passed in explicitly.
    pub fn new(document: Document, config: EditorConfig, options: ToolbarOptions) -> Self {
        let toolbar = Toolbar::new(options, &config.image);
        Self {
            document,
            ui: UiState::new(),
            toolbar,
            theme: config.theme,
            config,
        }
    }

    /// Empty document with default config and toolbar
    pub fn empty() -> Self {
        Self::new(
            Document::new(),
            EditorConfig::default(),
            ToolbarOptions::default(),
        )
    }
}

/// Reconcile UI state with the document after an update
///
/// Menus of deleted tables are dropped, which releases their listeners.
pub fn sync_table_menus(model: &mut EditorModel) {
    model.ui.sync_table_menus(&model.document);
}
