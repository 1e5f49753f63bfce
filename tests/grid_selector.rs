//! Table size picker behavior

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use editcrafter::grid_selector::{GridSelector, GridSize, TOTAL_COLS, TOTAL_ROWS};

fn recording_selector() -> (GridSelector, Rc<RefCell<Vec<GridSize>>>) {
    let selected = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&selected);
    let selector = GridSelector::new(Some(Box::new(move |size| sink.borrow_mut().push(size))));
    (selector, selected)
}

proptest! {
    #[test]
    fn click_selects_last_hovered_cell(
        path in prop::collection::vec((0..TOTAL_ROWS, 0..TOTAL_COLS), 1..30)
    ) {
        let (mut selector, selected) = recording_selector();
        for &(row, col) in &path {
            prop_assert!(selector.pointer_over(row, col));
        }

        let (row, col) = *path.last().unwrap();
        let size = selector.click();

        prop_assert_eq!(size, GridSize::new(row + 1, col + 1));
        let selected = selected.borrow();
        prop_assert_eq!(selected.as_slice(), &[size]);
    }

    #[test]
    fn active_cells_form_the_hover_rectangle(row in 0..TOTAL_ROWS, col in 0..TOTAL_COLS) {
        let mut selector = GridSelector::default();
        selector.pointer_over(row, col);

        let active = selector.cells().filter(|c| c.active).count();
        prop_assert_eq!(active, (row + 1) * (col + 1));
    }
}

#[test]
fn test_click_without_hover_selects_default() {
    let (mut selector, selected) = recording_selector();

    assert_eq!(selector.click(), GridSize::new(2, 2));
    assert_eq!(selected.borrow().as_slice(), &[GridSize::new(2, 2)]);
    assert_eq!(selector.readout(), "2 × 2");
}

#[test]
fn test_hover_outside_grid_is_ignored() {
    let mut selector = GridSelector::default();
    selector.pointer_over(4, 4);

    assert!(!selector.pointer_over(TOTAL_ROWS, 0));
    assert!(!selector.pointer_over(0, TOTAL_COLS));
    assert_eq!(selector.hover(), GridSize::new(5, 5));
}

#[test]
fn test_click_without_callback_still_returns_size() {
    let mut selector = GridSelector::new(None);
    selector.pointer_over(0, 9);
    assert_eq!(selector.click(), GridSize::new(1, 10));
    assert_eq!(selector.readout(), "1 × 10");
}

#[test]
fn test_repeated_clicks_report_each_time() {
    let (mut selector, selected) = recording_selector();
    selector.click();
    selector.pointer_over(2, 3);
    selector.click();

    assert_eq!(
        selected.borrow().as_slice(),
        &[GridSize::new(2, 2), GridSize::new(3, 4)]
    );
}
