//! UI state - table size picker, table menus and document listeners

use super::document::{BlockId, Document};
use crate::geometry::{Point, Rect};
use crate::grid_selector::GridSelector;
use crate::listener::{ListenerKind, ListenerRegistry};
use crate::table::TableMenu;

/// Transient UI state owned by the editor
#[derive(Debug, Default)]
pub struct UiState {
    /// Table size picker, present while its popover is open
    pub table_picker: Option<GridSelector>,
    /// One menu per laid-out table
    pub table_menus: Vec<TableMenu>,
    /// Document-level listeners (outside clicks)
    pub listeners: ListenerRegistry,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the table size picker with the given extent
    pub fn open_table_picker(&mut self, rows: usize, cols: usize) {
        self.table_picker = Some(GridSelector::default().with_extent(rows, cols));
    }

    pub fn close_table_picker(&mut self) {
        self.table_picker = None;
    }

    pub fn table_menu(&self, table: BlockId) -> Option<&TableMenu> {
        self.table_menus.iter().find(|m| m.table() == table)
    }

    /// The open menu, if any
    pub fn open_table_menu(&self) -> Option<&TableMenu> {
        self.table_menus.iter().find(|m| m.is_open())
    }

    /// Record where a table is drawn, creating its menu on first layout
    pub fn set_table_bounds(&mut self, table: BlockId, bounds: Rect) {
        match self.table_menus.iter_mut().find(|m| m.table() == table) {
            Some(menu) => menu.set_bounds(bounds),
            None => self.table_menus.push(TableMenu::new(table, bounds)),
        }
    }

    /// Route a click to the table under the pointer; returns that table
    pub fn table_click(&mut self, point: Point) -> Option<BlockId> {
        let listeners = self.listeners.clone();
        self.table_menus
            .iter_mut()
            .find(|m| m.bounds().contains(point))
            .map(|menu| {
                menu.click(point, &listeners);
                menu.table()
            })
    }

    /// Deliver a document-level pointer-down to the attached listeners
    ///
    /// Returns the number of menus that closed.
    pub fn pointer_down(&mut self, point: Point) -> usize {
        let attached = self.listeners.listeners(ListenerKind::PointerDown);
        self.table_menus
            .iter_mut()
            .filter(|m| m.listener_id().is_some_and(|id| attached.contains(&id)))
            .map(|m| m.pointer_down(point))
            .filter(|closed| *closed)
            .count()
    }

    /// Close every open menu
    pub fn close_table_menus(&mut self) {
        for menu in &mut self.table_menus {
            menu.close();
        }
    }

    /// Drop menus whose table no longer exists, releasing their listeners
    pub fn sync_table_menus(&mut self, doc: &Document) {
        let tables = doc.table_ids();
        self.table_menus.retain(|m| tables.contains(&m.table()));
    }
}
