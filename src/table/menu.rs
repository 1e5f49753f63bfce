//! Contextual menu attached to a table
//!
//! The menu opens on a click inside the table and closes on a pointer-down
//! anywhere outside it. While open it holds a document-level pointer-down
//! listener; the listener is released on every way out of the open state,
//! including the menu itself being dropped.

use crate::geometry::{Point, Rect};
use crate::listener::{ListenerGuard, ListenerId, ListenerKind, ListenerRegistry};
use crate::model::{BlockId, EditCommand};

/// Visibility of a table menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

/// Buttons offered by the table menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableMenuAction {
    ToggleHeader,
    ColumnBefore,
    ColumnAfter,
    DeleteColumn,
    RowBefore,
    RowAfter,
    DeleteRow,
    DeleteTable,
}

impl TableMenuAction {
    /// All actions, in toolbar order
    pub const ALL: [TableMenuAction; 8] = [
        TableMenuAction::ToggleHeader,
        TableMenuAction::ColumnBefore,
        TableMenuAction::ColumnAfter,
        TableMenuAction::DeleteColumn,
        TableMenuAction::RowBefore,
        TableMenuAction::RowAfter,
        TableMenuAction::DeleteRow,
        TableMenuAction::DeleteTable,
    ];

    /// Tooltip text
    pub fn label(self) -> &'static str {
        match self {
            TableMenuAction::ToggleHeader => "Toggle Header",
            TableMenuAction::ColumnBefore => "Col Before",
            TableMenuAction::ColumnAfter => "Col After",
            TableMenuAction::DeleteColumn => "Delete Col",
            TableMenuAction::RowBefore => "Row Before",
            TableMenuAction::RowAfter => "Row After",
            TableMenuAction::DeleteRow => "Delete Row",
            TableMenuAction::DeleteTable => "Delete Table",
        }
    }

    /// Rendered with the destructive button style
    pub fn is_destructive(self) -> bool {
        matches!(
            self,
            TableMenuAction::DeleteColumn
                | TableMenuAction::DeleteRow
                | TableMenuAction::DeleteTable
        )
    }

    /// The document command this button issues
    pub fn command(self) -> EditCommand {
        match self {
            TableMenuAction::ToggleHeader => EditCommand::ToggleHeaderRow,
            TableMenuAction::ColumnBefore => EditCommand::AddColumnBefore,
            TableMenuAction::ColumnAfter => EditCommand::AddColumnAfter,
            TableMenuAction::DeleteColumn => EditCommand::DeleteColumn,
            TableMenuAction::RowBefore => EditCommand::AddRowBefore,
            TableMenuAction::RowAfter => EditCommand::AddRowAfter,
            TableMenuAction::DeleteRow => EditCommand::DeleteRow,
            TableMenuAction::DeleteTable => EditCommand::DeleteTable,
        }
    }
}

/// Menu for one table instance
///
/// Holds only the table's [`BlockId`]; the document owns the table.
#[derive(Debug)]
pub struct TableMenu {
    table: BlockId,
    bounds: Rect,
    /// Present exactly while the menu is open
    outside_click: Option<ListenerGuard>,
}

impl TableMenu {
    pub fn new(table: BlockId, bounds: Rect) -> Self {
        Self {
            table,
            bounds,
            outside_click: None,
        }
    }

    pub fn table(&self) -> BlockId {
        self.table
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn state(&self) -> MenuState {
        if self.outside_click.is_some() {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == MenuState::Open
    }

    /// Id of the outside-click listener while open
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.outside_click.as_ref().map(ListenerGuard::id)
    }

    /// Handle a click; opens the menu when the click lands on the table
    ///
    /// Returns true if the click was inside the table.
    pub fn click(&mut self, point: Point, listeners: &ListenerRegistry) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        if self.outside_click.is_none() {
            self.outside_click = Some(listeners.acquire(ListenerKind::PointerDown));
            tracing::debug!(table = self.table.0, "table menu opened");
        }
        true
    }

    /// Handle a document-level pointer-down; closes the menu when outside
    ///
    /// Returns true if the menu closed.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if self.is_open() && !self.bounds.contains(point) {
            self.close();
            return true;
        }
        false
    }

    pub fn close(&mut self) {
        if self.outside_click.take().is_some() {
            tracing::debug!(table = self.table.0, "table menu closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> (TableMenu, ListenerRegistry) {
        (
            TableMenu::new(BlockId(1), Rect::new(0.0, 100.0, 400.0, 200.0)),
            ListenerRegistry::new(),
        )
    }

    #[test]
    fn test_starts_closed_without_listener() {
        let (menu, listeners) = menu();

        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(listeners.listener_count(), 0);
    }

    #[test]
    fn test_click_inside_opens_and_attaches_listener() {
        let (mut menu, listeners) = menu();

        assert!(menu.click(Point::new(10.0, 150.0), &listeners));

        assert_eq!(menu.state(), MenuState::Open);
        assert_eq!(listeners.listener_count(), 1);
    }

    #[test]
    fn test_click_outside_does_not_open() {
        let (mut menu, listeners) = menu();

        assert!(!menu.click(Point::new(10.0, 10.0), &listeners));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_repeated_clicks_keep_one_listener() {
        let (mut menu, listeners) = menu();

        menu.click(Point::new(10.0, 150.0), &listeners);
        menu.click(Point::new(20.0, 160.0), &listeners);

        assert_eq!(listeners.listener_count(), 1);
    }

    #[test]
    fn test_pointer_down_outside_closes_and_detaches() {
        let (mut menu, listeners) = menu();
        menu.click(Point::new(10.0, 150.0), &listeners);

        assert!(!menu.pointer_down(Point::new(10.0, 150.0)));
        assert!(menu.is_open());

        assert!(menu.pointer_down(Point::new(500.0, 500.0)));
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(listeners.listener_count(), 0);
    }

    #[test]
    fn test_drop_while_open_detaches() {
        let (mut menu, listeners) = menu();
        menu.click(Point::new(10.0, 150.0), &listeners);

        drop(menu);

        assert_eq!(listeners.listener_count(), 0);
    }

    #[test]
    fn test_action_metadata() {
        assert_eq!(TableMenuAction::ALL.len(), 8);
        assert!(TableMenuAction::DeleteTable.is_destructive());
        assert!(!TableMenuAction::ToggleHeader.is_destructive());
        assert_eq!(TableMenuAction::RowAfter.label(), "Row After");
        assert_eq!(
            TableMenuAction::DeleteColumn.command(),
            EditCommand::DeleteColumn
        );
    }
}
