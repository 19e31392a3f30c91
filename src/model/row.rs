//! Rows own the render order of their cells

use serde::Serialize;

/// A rendered grid row
#[derive(Debug, Clone, Default, Serialize)]
pub struct RowState {
    pub index: usize,
    /// Whether one of the row's cells currently has focus
    pub focused: bool,
    /// Column indices of the row's cells, in render order
    cells: Vec<usize>,
}

impl RowState {
    pub fn new(index: usize, cells: Vec<usize>) -> Self {
        Self {
            index,
            focused: false,
            cells,
        }
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Column index of the first rendered cell
    pub fn first_cell(&self) -> Option<usize> {
        self.cells.first().copied()
    }

    /// Column index of the last rendered cell
    pub fn last_cell(&self) -> Option<usize> {
        self.cells.last().copied()
    }

    pub(crate) fn remove_cell(&mut self, col: usize) {
        self.cells.retain(|&c| c != col);
    }
}
