//! Contextual table menu and its outside-click listener

mod common;

use common::model_with_laid_out_table;
use editcrafter::geometry::{Point, Rect};
use editcrafter::listener::ListenerRegistry;
use editcrafter::messages::{DocumentMsg, Msg, TableMsg};
use editcrafter::model::{BlockId, EditorModel};
use editcrafter::table::{CellPosition, MenuState, TableMenu, TableMenuAction};
use editcrafter::update::update;

fn open_menu(model: &mut EditorModel) {
    update(model, Msg::Table(TableMsg::Click(Point::new(20.0, 20.0))));
}

#[test]
fn test_outside_click_closes_and_removes_listener() {
    let mut model = model_with_laid_out_table();
    assert_eq!(model.ui.listeners.listener_count(), 0);

    open_menu(&mut model);
    assert!(model.ui.open_table_menu().is_some());
    assert_eq!(model.ui.listeners.listener_count(), 1);

    update(
        &mut model,
        Msg::Table(TableMsg::PointerDown(Point::new(400.0, 400.0))),
    );

    assert!(model.ui.open_table_menu().is_none());
    assert_eq!(model.ui.listeners.listener_count(), 0);
}

#[test]
fn test_pointer_down_inside_keeps_menu_open() {
    let mut model = model_with_laid_out_table();
    open_menu(&mut model);

    update(
        &mut model,
        Msg::Table(TableMsg::PointerDown(Point::new(50.0, 50.0))),
    );

    assert!(model.ui.open_table_menu().is_some());
    assert_eq!(model.ui.listeners.listener_count(), 1);
}

#[test]
fn test_repeated_clicks_hold_one_listener() {
    let mut model = model_with_laid_out_table();

    open_menu(&mut model);
    open_menu(&mut model);
    open_menu(&mut model);

    assert_eq!(model.ui.listeners.listener_count(), 1);
}

#[test]
fn test_delete_table_action_releases_listener() {
    let mut model = model_with_laid_out_table();
    open_menu(&mut model);

    update(
        &mut model,
        Msg::Table(TableMsg::Action(TableMenuAction::DeleteTable)),
    );

    assert!(model.document.is_empty());
    assert!(model.ui.table_menus.is_empty());
    assert_eq!(model.ui.listeners.listener_count(), 0);
}

#[test]
fn test_delete_node_while_open_releases_listener() {
    let mut model = model_with_laid_out_table();
    open_menu(&mut model);

    update(&mut model, Msg::Document(DocumentMsg::DeleteNode));

    assert_eq!(model.ui.listeners.listener_count(), 0);
}

#[test]
fn test_dropping_open_menu_releases_listener() {
    let registry = ListenerRegistry::new();
    let mut menu = TableMenu::new(BlockId(1), Rect::new(0.0, 0.0, 10.0, 10.0));

    assert!(menu.click(Point::new(5.0, 5.0), &registry));
    assert_eq!(menu.state(), MenuState::Open);
    assert_eq!(registry.listener_count(), 1);

    drop(menu);
    assert_eq!(registry.listener_count(), 0);
}

#[test]
fn test_menu_actions_edit_focused_table() {
    let mut model = model_with_laid_out_table();
    open_menu(&mut model);

    for action in [
        TableMenuAction::ColumnBefore,
        TableMenuAction::RowAfter,
        TableMenuAction::ToggleHeader,
    ] {
        update(&mut model, Msg::Table(TableMsg::Action(action)));
    }

    let table = model.document.table(0).unwrap();
    assert_eq!((table.row_count(), table.column_count()), (4, 4));
    assert!(!table.with_header_row);
    assert!(!table.has_header_cells());
}

#[test]
fn test_click_on_table_focused_without_cell_targets_first_cell() {
    let mut model = model_with_laid_out_table();
    update(
        &mut model,
        Msg::Document(DocumentMsg::SetFocus {
            block: 0,
            cell: None,
        }),
    );
    open_menu(&mut model);

    assert_eq!(
        model.document.focused_cell(),
        Some((0, CellPosition::new(0, 0)))
    );
    update(
        &mut model,
        Msg::Table(TableMsg::Action(TableMenuAction::RowAfter)),
    );
    update(
        &mut model,
        Msg::Table(TableMsg::Action(TableMenuAction::ColumnBefore)),
    );

    let table = model.document.table(0).unwrap();
    assert_eq!((table.row_count(), table.column_count()), (4, 4));
}

#[test]
fn test_refused_action_leaves_table() {
    let mut model = model_with_laid_out_table();
    open_menu(&mut model);
    let before = model.document.clone();

    // Without focus the action has no target
    model.document.clear_focus();
    update(
        &mut model,
        Msg::Table(TableMsg::Action(TableMenuAction::DeleteColumn)),
    );

    assert_eq!(model.document.table(0), before.table(0));
}

#[test]
fn test_action_labels_match_toolbar() {
    let labels: Vec<_> = TableMenuAction::ALL.iter().map(|a| a.label()).collect();
    assert_eq!(labels.len(), 8);
    assert!(labels.contains(&"Toggle Header"));
    assert!(TableMenuAction::DeleteTable.is_destructive());
    assert!(!TableMenuAction::RowAfter.is_destructive());
}
