//! Table node data model
//!
//! A table is a list of rows, each row a list of cells. The grid is always
//! rectangular: every row holds exactly `column_count()` cells and there is
//! at least one row and one column.

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Whether a cell renders as `<th>` or `<td>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    Header,
    #[default]
    Data,
}

/// A single table cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub kind: CellKind,
    #[serde(default)]
    pub content: String,
}

impl TableCell {
    pub fn empty(kind: CellKind) -> Self {
        Self {
            kind,
            content: String::new(),
        }
    }

    pub fn with_content(kind: CellKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// A row of cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row of `cols` empty cells of the same kind
    pub fn empty(cols: usize, kind: CellKind) -> Self {
        Self {
            cells: (0..cols).map(|_| TableCell::empty(kind)).collect(),
        }
    }

    /// True when the row is non-empty and every cell is a header cell
    pub fn is_header(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|c| c.kind == CellKind::Header)
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        for cell in &mut self.cells {
            cell.kind = kind;
        }
    }
}

/// Table node
///
/// `with_header_row` is a descriptive attribute. It is derived from the
/// presence of a `<thead>` when parsing, and it never writes header markup
/// by itself: the cell kinds of the first row decide what gets rendered.
/// `toggle_header_row` flips both; an attribute write changes only the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableNodeRepr", rename_all = "camelCase")]
pub struct TableNode {
    pub with_header_row: bool,
    rows: Vec<TableRow>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableNodeRepr {
    #[serde(default = "default_with_header_row")]
    with_header_row: bool,
    #[serde(default)]
    rows: Vec<TableRow>,
}

impl From<TableNodeRepr> for TableNode {
    fn from(repr: TableNodeRepr) -> Self {
        TableNode::from_rows(repr.with_header_row, repr.rows)
    }
}

pub(crate) fn default_with_header_row() -> bool {
    true
}

impl Default for TableNode {
    fn default() -> Self {
        Self::new(1, 1, default_with_header_row())
    }
}

impl TableNode {
    /// Create an empty `rows` x `cols` table. Sizes below 1 are clamped to 1.
    pub fn new(rows: usize, cols: usize, with_header_row: bool) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);

        let rows = (0..rows)
            .map(|r| {
                let kind = if r == 0 && with_header_row {
                    CellKind::Header
                } else {
                    CellKind::Data
                };
                TableRow::empty(cols, kind)
            })
            .collect();

        Self {
            with_header_row,
            rows,
        }
    }

    /// Build a table from possibly ragged rows
    ///
    /// Short rows are padded with empty cells of the row's own kind (taken
    /// from its last cell) so the result is rectangular. An empty input
    /// yields a single empty cell.
    pub fn from_rows(with_header_row: bool, mut rows: Vec<TableRow>) -> Self {
        rows.retain(|r| !r.cells.is_empty());
        if rows.is_empty() {
            return Self::new(1, 1, with_header_row);
        }

        let cols = rows.iter().map(|r| r.cells.len()).max().unwrap_or(1);
        for row in &mut rows {
            let kind = row.cells.last().map(|c| c.kind).unwrap_or_default();
            while row.cells.len() < cols {
                row.cells.push(TableCell::empty(kind));
            }
        }

        Self {
            with_header_row,
            rows,
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<TableRow> {
        &mut self.rows
    }

    pub fn row(&self, row: usize) -> Option<&TableRow> {
        self.rows.get(row)
    }

    pub fn cell(&self, pos: CellPosition) -> Option<&TableCell> {
        self.rows.get(pos.row)?.cells.get(pos.col)
    }

    /// Replace the text of a cell. Returns false when out of bounds.
    pub fn set_cell_content(&mut self, pos: CellPosition, content: &str) -> bool {
        match self
            .rows
            .get_mut(pos.row)
            .and_then(|r| r.cells.get_mut(pos.col))
        {
            Some(cell) => {
                cell.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, pos: CellPosition) -> bool {
        pos.row < self.row_count() && pos.col < self.column_count()
    }

    /// Every row has the same, non-zero, cell count
    pub fn is_rectangular(&self) -> bool {
        let cols = self.column_count();
        cols > 0 && self.rows.iter().all(|r| r.cells.len() == cols)
    }

    /// True when the first row is made of header cells
    pub fn has_header_cells(&self) -> bool {
        self.rows.first().is_some_and(TableRow::is_header)
    }

    /// Clamp a position into the grid
    pub fn clamp(&self, pos: CellPosition) -> CellPosition {
        CellPosition {
            row: pos.row.min(self.row_count().saturating_sub(1)),
            col: pos.col.min(self.column_count().saturating_sub(1)),
        }
    }
}
