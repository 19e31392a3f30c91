//! Grid shared state: columns, rows, the cell index and the edit slot

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::cell::{CellPosition, CellState};
use super::column::Column;
use super::row::RowState;
use super::template::TemplateId;
use super::value::CellValue;
use crate::events::{EventQueue, GridEvent};

/// Identifier of a grid within a registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridId(pub String);

impl From<&str> for GridId {
    fn from(id: &str) -> Self {
        GridId(id.to_string())
    }
}

impl From<String> for GridId {
    fn from(id: String) -> Self {
        GridId(id)
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State shared by every cell of one grid.
///
/// Cells live in a 2D index keyed by (row index, column index). The edit slot
/// names at most one of them; it does not own the cell, so removing a row or
/// column clears it when it points at a removed cell.
#[derive(Debug, Clone)]
pub struct GridState {
    id: GridId,
    columns: Vec<Column>,
    rows: Vec<RowState>,
    cells: HashMap<CellPosition, CellState>,
    cell_in_edit_mode: Option<CellPosition>,
    events: EventQueue,
}

impl GridState {
    pub fn new(id: impl Into<GridId>, columns: Vec<Column>) -> Self {
        Self {
            id: id.into(),
            columns,
            rows: Vec::new(),
            cells: HashMap::new(),
            cell_in_edit_mode: None,
            events: EventQueue::new(),
        }
    }

    pub fn id(&self) -> &GridId {
        &self.id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column by its `index` key (not by position in the column list)
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.iter().find(|c| c.index == index)
    }

    /// Non-hidden columns ordered by `index`
    pub fn visible_columns(&self) -> Vec<&Column> {
        let mut visible: Vec<&Column> = self.columns.iter().filter(|c| !c.hidden).collect();
        visible.sort_by_key(|c| c.index);
        visible
    }

    pub fn visible_column_indices(&self) -> Vec<usize> {
        self.visible_columns().iter().map(|c| c.index).collect()
    }

    /// Render a new row at the bottom of the grid, one cell per visible
    /// column. `values` are matched to visible columns in order; missing
    /// values become empty. Returns the new row's index.
    pub fn push_row(&mut self, values: Vec<CellValue>) -> usize {
        let row = self.rows.len();
        let cols = self.visible_column_indices();
        let mut values = values.into_iter();

        for &col in &cols {
            let position = CellPosition::new(row, col);
            let value = values.next().unwrap_or_default();
            let mut cell = CellState::new(self.id.clone(), position, value);
            cell.set_cell_template(self.column(col).and_then(|c| c.cell_template.clone()));
            self.cells.insert(position, cell);
        }

        self.rows.push(RowState::new(row, cols));
        row
    }

    /// Remove a row and its cells; following rows shift up by one
    pub fn remove_row(&mut self, row: usize) -> bool {
        if row >= self.rows.len() {
            return false;
        }
        self.rows.remove(row);

        let cells = std::mem::take(&mut self.cells);
        self.cells = cells
            .into_iter()
            .filter(|(pos, _)| pos.row != row)
            .map(|(pos, cell)| {
                if pos.row > row {
                    let moved = CellPosition::new(pos.row - 1, pos.col);
                    (moved, cell.moved_to(moved))
                } else {
                    (pos, cell)
                }
            })
            .collect();

        for (i, r) in self.rows.iter_mut().enumerate() {
            r.index = i;
        }

        self.cell_in_edit_mode = match self.cell_in_edit_mode {
            Some(pos) if pos.row == row => None,
            Some(pos) if pos.row > row => Some(CellPosition::new(pos.row - 1, pos.col)),
            other => other,
        };
        true
    }

    /// Remove a column (by `index`) and every cell rendered for it
    pub fn remove_column(&mut self, index: usize) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.index != index);
        if self.columns.len() == before {
            return false;
        }

        self.cells.retain(|pos, _| pos.col != index);
        for row in &mut self.rows {
            row.remove_cell(index);
        }
        if self.cell_in_edit_mode.is_some_and(|pos| pos.col == index) {
            self.cell_in_edit_mode = None;
        }
        true
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&RowState> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut RowState> {
        self.rows.get_mut(index)
    }

    /// Cell lookup; absence (edge of grid) is a normal outcome
    pub fn cell(&self, position: CellPosition) -> Option<&CellState> {
        self.cells.get(&position)
    }

    pub fn cell_mut(&mut self, position: CellPosition) -> Option<&mut CellState> {
        self.cells.get_mut(&position)
    }

    /// Cells ordered by row, then column
    pub fn cells(&self) -> impl Iterator<Item = &CellState> {
        let mut cells: Vec<&CellState> = self.cells.values().collect();
        cells.sort_by_key(|c| c.position());
        cells.into_iter()
    }

    /// Set the display template of a column and of every cell already
    /// rendered for it. Returns the number of cells updated.
    pub fn set_column_cell_template(
        &mut self,
        col: usize,
        template: Option<TemplateId>,
    ) -> usize {
        let Some(column) = self.columns.iter_mut().find(|c| c.index == col) else {
            return 0;
        };
        column.cell_template = template.clone();

        let mut updated = 0;
        for cell in self.cells.values_mut().filter(|c| c.column_index() == col) {
            cell.set_cell_template(template.clone());
            updated += 1;
        }
        updated
    }

    /// The cell currently in edit mode, if any
    pub fn cell_in_edit_mode(&self) -> Option<CellPosition> {
        self.cell_in_edit_mode
    }

    pub(crate) fn set_cell_in_edit_mode(&mut self, position: Option<CellPosition>) {
        self.cell_in_edit_mode = position;
    }

    /// Position of the focused cell, if any
    pub fn focused_cell(&self) -> Option<CellPosition> {
        self.cells().find(|c| c.is_focused()).map(|c| c.position())
    }

    pub(crate) fn emit(&mut self, event: GridEvent) {
        self.events.emit(event);
    }

    /// Events emitted since the last drain
    pub fn pending_events(&self) -> &[GridEvent] {
        self.events.pending()
    }

    pub fn drain_events(&mut self) -> Vec<GridEvent> {
        self.events.drain()
    }
}
