//! Message types for the Elm-style architecture
//!
//! Every input event the host forwards to the grid is one of these.

use crate::keymap::Keystroke;
use crate::model::{CellPosition, CellValue, GridId};

/// Addresses one cell of one grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellAddress {
    pub grid: GridId,
    pub position: CellPosition,
}

impl CellAddress {
    pub fn new(grid: impl Into<GridId>, row: usize, col: usize) -> Self {
        Self {
            grid: grid.into(),
            position: CellPosition::new(row, col),
        }
    }
}

/// Input events delivered to a single cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellMsg {
    /// The cell gained input focus
    Focus,
    /// The cell lost input focus
    Blur,
    /// A key was pressed while the cell had focus
    KeyDown(Keystroke),
    /// The cell was double-clicked
    DoubleClick,
    /// Commit a new value to the cell
    Update(CellValue),
}

/// Render-set changes for a whole grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// Append a row with values for the visible columns
    PushRow(Vec<CellValue>),
    RemoveRow(usize),
    /// Remove a column by its `index`
    RemoveColumn(usize),
}

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Cell(CellAddress, CellMsg),
    Grid(GridId, GridMsg),
}
