//! Hover-driven table size picker
//!
//! The picker shows a fixed grid of cells. Hovering a cell highlights the
//! rectangle from the top-left corner to that cell; clicking anywhere on
//! the grid commits the highlighted size, not the cell under the pointer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid extent in rows
pub const TOTAL_ROWS: usize = 10;
/// Grid extent in columns
pub const TOTAL_COLS: usize = 10;

/// Highlighted size before any hover
pub const DEFAULT_HOVER: GridSize = GridSize { rows: 2, cols: 2 };

/// A table size chosen in the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    /// Create a size; zero dimensions are clamped to 1
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.rows, self.cols)
    }
}

/// One cell of the picker grid, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub active: bool,
}

/// Callback invoked with the committed size
pub type OnSelect = Box<dyn FnMut(GridSize)>;

/// Table size picker state
pub struct GridSelector {
    hover: GridSize,
    total_rows: usize,
    total_cols: usize,
    on_select: Option<OnSelect>,
}

impl fmt::Debug for GridSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSelector")
            .field("hover", &self.hover)
            .field("total_rows", &self.total_rows)
            .field("total_cols", &self.total_cols)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl Default for GridSelector {
    fn default() -> Self {
        Self::new(None)
    }
}

impl GridSelector {
    /// Create a 10x10 picker
    pub fn new(on_select: Option<OnSelect>) -> Self {
        Self {
            hover: DEFAULT_HOVER,
            total_rows: TOTAL_ROWS,
            total_cols: TOTAL_COLS,
            on_select,
        }
    }

    /// Use a different grid extent (at least 1x1)
    pub fn with_extent(mut self, rows: usize, cols: usize) -> Self {
        self.total_rows = rows.max(1);
        self.total_cols = cols.max(1);
        self.hover = GridSize::new(
            DEFAULT_HOVER.rows.min(self.total_rows),
            DEFAULT_HOVER.cols.min(self.total_cols),
        );
        self
    }

    /// Currently highlighted size
    pub fn hover(&self) -> GridSize {
        self.hover
    }

    /// Grid extent as (rows, cols)
    pub fn extent(&self) -> (usize, usize) {
        (self.total_rows, self.total_cols)
    }

    /// Pointer entered the cell at zero-based (`row`, `col`)
    ///
    /// Positions outside the grid are ignored and return false.
    pub fn pointer_over(&mut self, row: usize, col: usize) -> bool {
        if row >= self.total_rows || col >= self.total_cols {
            return false;
        }
        self.hover = GridSize {
            rows: row + 1,
            cols: col + 1,
        };
        true
    }

    /// Whether the cell is inside the highlighted rectangle
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        row < self.hover.rows && col < self.hover.cols
    }

    /// Commit the highlighted size
    pub fn click(&mut self) -> GridSize {
        let size = self.hover;
        tracing::debug!(rows = size.rows, cols = size.cols, "grid size selected");
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(size);
        }
        size
    }

    /// Text readout, e.g. `"3 × 4"`
    pub fn readout(&self) -> String {
        self.hover.to_string()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.total_rows).flat_map(move |row| {
            (0..self.total_cols).map(move |col| GridCell {
                row,
                col,
                active: self.is_active(row, col),
            })
        })
    }
}
