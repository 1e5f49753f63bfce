//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use editcrafter::geometry::Rect;
use editcrafter::messages::{Msg, TableMsg};
use editcrafter::model::{Block, Document, EditorModel};
use editcrafter::table::{CellKind, CellPosition, TableNode};
use editcrafter::update::update;

/// Document with a paragraph followed by a table, focus in the table at `cell`
pub fn doc_with_table(rows: usize, cols: usize, with_header_row: bool, cell: (usize, usize)) -> Document {
    let mut doc = Document::with_blocks(vec![
        Block::paragraph("Intro"),
        Block::Table(TableNode::new(rows, cols, with_header_row)),
    ]);
    assert!(doc.set_focus(1, Some(CellPosition::new(cell.0, cell.1))));
    doc
}

/// Fill every cell with "r,c" so moves are observable
pub fn label_cells(doc: &mut Document, block: usize) {
    let (rows, cols) = shape(doc, block);
    let saved = doc.focus();
    for row in 0..rows {
        for col in 0..cols {
            doc.set_focus(block, Some(CellPosition::new(row, col)));
            doc.chain().set_cell_content(format!("{},{}", row, col)).run();
        }
    }
    if let Some(focus) = saved {
        doc.set_focus(focus.block, focus.cell);
    }
}

/// (rows, cols) of the table at `block`
pub fn shape(doc: &Document, block: usize) -> (usize, usize) {
    let table = doc.table(block).expect("block is a table");
    (table.row_count(), table.column_count())
}

/// Cell kinds of one row
pub fn row_kinds(doc: &Document, block: usize, row: usize) -> Vec<CellKind> {
    doc.table(block)
        .and_then(|t| t.row(row))
        .map(|r| r.cells.iter().map(|c| c.kind).collect())
        .unwrap_or_default()
}

/// Model with one 3x3 table laid out at (0, 0, 300, 90)
pub fn model_with_laid_out_table() -> EditorModel {
    let mut model = EditorModel::empty();
    model.document = Document::with_blocks(vec![Block::Table(TableNode::new(3, 3, true))]);
    let table = model.document.block_id(0).expect("table block");
    update(
        &mut model,
        Msg::Table(TableMsg::SetBounds {
            table,
            bounds: Rect::new(0.0, 0.0, 300.0, 90.0),
        }),
    );
    model
}
