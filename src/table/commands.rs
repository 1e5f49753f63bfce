//! Structural table edits
//!
//! Every edit either applies completely and returns `true`, or leaves the
//! table untouched and returns `false`. Edits that would break the
//! rectangular grid (removing the last row or column) are refused.

use super::model::{CellKind, TableCell, TableNode, TableRow};

impl TableNode {
    /// Insert an empty column to the left of `col`
    pub fn add_column_before(&mut self, col: usize) -> bool {
        self.insert_column(col, col)
    }

    /// Insert an empty column to the right of `col`
    pub fn add_column_after(&mut self, col: usize) -> bool {
        self.insert_column(col, col + 1)
    }

    /// Insert one cell per row at `at`, copying each row's cell kind from `reference`
    fn insert_column(&mut self, reference: usize, at: usize) -> bool {
        if reference >= self.column_count() {
            return false;
        }

        for row in self.rows_mut() {
            let kind = row.cells[reference].kind;
            row.cells.insert(at, TableCell::empty(kind));
        }
        true
    }

    /// Remove the cell at `col` from every row
    pub fn delete_column(&mut self, col: usize) -> bool {
        let cols = self.column_count();
        if col >= cols || cols <= 1 {
            return false;
        }

        for row in self.rows_mut() {
            row.cells.remove(col);
        }
        true
    }

    /// Insert an empty row above `row`
    ///
    /// Inserting above a header row makes the new row the header and
    /// demotes the old one, so header cells stay in the first row.
    pub fn add_row_before(&mut self, row: usize) -> bool {
        if row >= self.row_count() {
            return false;
        }

        let cols = self.column_count();
        if row == 0 && self.has_header_cells() {
            let rows = self.rows_mut();
            rows[0].set_kind(CellKind::Data);
            rows.insert(0, TableRow::empty(cols, CellKind::Header));
        } else {
            self.rows_mut().insert(row, TableRow::empty(cols, CellKind::Data));
        }
        true
    }

    /// Insert an empty data row below `row`
    pub fn add_row_after(&mut self, row: usize) -> bool {
        if row >= self.row_count() {
            return false;
        }

        let cols = self.column_count();
        self.rows_mut()
            .insert(row + 1, TableRow::empty(cols, CellKind::Data));
        true
    }

    /// Remove `row`
    ///
    /// Deleting a header row promotes the next row to header cells.
    pub fn delete_row(&mut self, row: usize) -> bool {
        let count = self.row_count();
        if row >= count || count <= 1 {
            return false;
        }

        let was_header = row == 0 && self.has_header_cells();
        let rows = self.rows_mut();
        rows.remove(row);
        if was_header {
            rows[0].set_kind(CellKind::Header);
        }
        true
    }

    /// Flip `with_header_row` and convert the first row between header and
    /// data cells
    ///
    /// The flag and the cell kinds are flipped independently, so applying the
    /// toggle twice restores both even when they disagree.
    pub fn toggle_header_row(&mut self) -> bool {
        self.with_header_row = !self.with_header_row;
        let kind = if self.has_header_cells() {
            CellKind::Data
        } else {
            CellKind::Header
        };
        if let Some(first) = self.rows_mut().first_mut() {
            first.set_kind(kind);
        }
        true
    }
}
