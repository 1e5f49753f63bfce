//! Table message handlers (layout, menu open/close, menu actions)

use crate::commands::Cmd;
use crate::messages::TableMsg;
use crate::model::EditorModel;
use crate::table::CellPosition;

use super::run_edit;

/// Handle table messages
pub fn update_table(model: &mut EditorModel, msg: TableMsg) -> Option<Cmd> {
    match msg {
        TableMsg::SetBounds { table, bounds } => {
            if model.document.index_of(table).is_none() {
                tracing::debug!(?table, "bounds for unknown table ignored");
                return None;
            }
            model.ui.set_table_bounds(table, bounds);
            None
        }

        TableMsg::Click(point) => {
            let table = model.ui.table_click(point)?;
            let index = model.document.index_of(table)?;

            // Without a focused cell in this table, focus moves to its first cell
            let focused_here = model
                .document
                .focus()
                .is_some_and(|f| f.block == index && f.cell.is_some());
            if !focused_here {
                model
                    .document
                    .set_focus(index, Some(CellPosition::new(0, 0)));
            }
            model.document.set_has_focus(true);
            Some(Cmd::Redraw)
        }

        TableMsg::PointerDown(point) => {
            let closed = model.ui.pointer_down(point);
            (closed > 0).then_some(Cmd::Redraw)
        }

        TableMsg::Action(action) => {
            tracing::debug!(action = action.label(), "table menu action");
            run_edit(model, action.command())
        }
    }
}
