//! Document message handlers (focus, paragraphs, cell text)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{EditCommand, EditorModel};

use super::run_edit;

/// Handle document messages
pub fn update_document(model: &mut EditorModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::SetFocus { block, cell } => {
            if model.document.set_focus(block, cell) {
                model.document.set_has_focus(true);
                Some(Cmd::Redraw)
            } else {
                tracing::debug!(block, ?cell, "ignoring focus on missing target");
                None
            }
        }

        DocumentMsg::Blur => {
            model.document.set_has_focus(false);
            Some(Cmd::Redraw)
        }

        DocumentMsg::InsertParagraph(text) => run_edit(model, EditCommand::InsertParagraph(text)),

        DocumentMsg::SetCellContent(text) => run_edit(model, EditCommand::SetCellContent(text)),

        DocumentMsg::DeleteNode => run_edit(model, EditCommand::DeleteNode),
    }
}
