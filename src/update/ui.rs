//! UI message handlers (theme toggle, table picker popover)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::EditorModel;

/// Handle UI messages
pub fn update_ui(model: &mut EditorModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ToggleTheme => {
            model.theme.toggle();
            model.config.theme = model.theme;
            tracing::info!(theme = %model.theme, "theme toggled");
            Some(Cmd::batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }

        UiMsg::OpenTablePicker => {
            let grid = model.config.grid;
            model.ui.open_table_picker(grid.rows, grid.cols);
            model.ui.close_table_menus();
            Some(Cmd::Redraw)
        }

        UiMsg::CloseTablePicker => {
            if model.ui.table_picker.take().is_some() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
