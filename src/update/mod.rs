//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;
mod grid;
mod image;
mod table;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{sync_table_menus, EditCommand, EditorModel};

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use document::update_document;
pub use grid::update_grid;
pub use image::update_image;
pub use table::update_table;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Table(m) => table::update_table(model, m),
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Image(m) => image::update_image(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
    };

    sync_table_menus(model);
    result
}

/// Run one command chain against the document
///
/// Refused commands leave the document untouched and produce no command.
pub(crate) fn run_edit(model: &mut EditorModel, command: EditCommand) -> Option<Cmd> {
    let label = format!("{:?}", command);
    if model.document.chain().focus().command(command).run() {
        Some(Cmd::Redraw)
    } else {
        tracing::debug!(command = %label, "command refused");
        None
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs each message and checks table invariants afterwards.
/// Pointer motion is not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{GridMsg, TableMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Grid(GridMsg::PointerOver { .. }) | Msg::Table(TableMsg::PointerDown(_))
    );

    let msg_name = msg.name();
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    for (index, block) in model.document.blocks().iter().enumerate() {
        if let Some(table) = block.as_table() {
            debug_assert!(
                table.is_rectangular(),
                "table at block {} is not rectangular after {}",
                index,
                msg_name
            );
        }
    }

    if !is_noisy {
        debug!(
            target: "message",
            blocks = model.document.len(),
            listeners = model.ui.listeners.listener_count(),
            "processed"
        );
    }

    result
}
