//! Table size picker handlers

use crate::commands::Cmd;
use crate::messages::GridMsg;
use crate::model::{EditCommand, EditorModel};

use super::run_edit;

/// Handle table size picker messages
pub fn update_grid(model: &mut EditorModel, msg: GridMsg) -> Option<Cmd> {
    let picker = model.ui.table_picker.as_mut()?;

    match msg {
        GridMsg::PointerOver { row, col } => picker.pointer_over(row, col).then_some(Cmd::Redraw),

        GridMsg::Click => {
            let size = picker.click();
            model.ui.close_table_picker();
            tracing::info!(%size, "inserting table");
            let command = EditCommand::InsertTable {
                rows: size.rows,
                cols: size.cols,
                with_header_row: model.config.table.with_header_row,
            };
            run_edit(model, command)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_selector::GridSize;
    use crate::model::NodeType;
    use crate::table::CellPosition;

    #[test]
    fn test_click_without_picker_is_ignored() {
        let mut model = EditorModel::empty();
        assert!(update_grid(&mut model, GridMsg::Click).is_none());
        assert!(model.document.is_empty());
    }

    #[test]
    fn test_hover_then_click_inserts_hovered_size() {
        let mut model = EditorModel::empty();
        model.ui.open_table_picker(10, 10);

        update_grid(&mut model, GridMsg::PointerOver { row: 3, col: 4 });
        assert_eq!(
            model.ui.table_picker.as_ref().unwrap().hover(),
            GridSize::new(4, 5)
        );
        update_grid(&mut model, GridMsg::Click);

        assert!(model.ui.table_picker.is_none());
        let table = model.document.table(0).unwrap();
        assert_eq!((table.row_count(), table.column_count()), (4, 5));
        assert!(table.with_header_row);
        assert!(model.document.is_active(NodeType::Table));
        assert_eq!(
            model.document.focused_cell(),
            Some((0, CellPosition::new(0, 0)))
        );
    }

    #[test]
    fn test_configured_header_default() {
        let mut model = EditorModel::empty();
        model.config.table.with_header_row = false;
        model.ui.open_table_picker(10, 10);

        update_grid(&mut model, GridMsg::Click);

        let table = model.document.table(0).unwrap();
        assert!(!table.with_header_row);
        assert!(!table.has_header_cells());
        assert_eq!((table.row_count(), table.column_count()), (2, 2));
    }
}
