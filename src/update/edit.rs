//! Edit-mode coordination
//!
//! All reads and writes of a grid's edit slot go through here, which keeps
//! at most one cell per grid in edit mode. Each function returns the
//! positions of the cells whose state changed.

use crate::events::GridEvent;
use crate::model::{CellPosition, CellValue, GridState};

fn is_editable(grid: &GridState, position: CellPosition) -> bool {
    grid.cell(position).is_some()
        && grid
            .column(position.col)
            .map(|column| column.editable)
            .unwrap_or(false)
}

/// Put a cell into edit mode, forcing any other editing cell out first.
///
/// Ignored for missing cells and non-editable columns.
pub fn begin_edit(grid: &mut GridState, position: CellPosition) -> Vec<CellPosition> {
    if !is_editable(grid, position) {
        tracing::debug!(?position, "edit ignored: column not editable");
        return Vec::new();
    }

    let mut changed = force_exit_other(grid, position).into_iter().collect::<Vec<_>>();

    if let Some(cell) = grid.cell_mut(position) {
        if !cell.in_edit_mode() {
            cell.set_edit_mode(true);
            changed.push(position);
        }
    }
    grid.set_cell_in_edit_mode(Some(position));
    tracing::debug!(?position, "entered edit mode");
    changed
}

/// Leave edit mode without committing anything
pub fn end_edit(grid: &mut GridState, position: CellPosition) -> Vec<CellPosition> {
    let Some(cell) = grid.cell_mut(position) else {
        return Vec::new();
    };
    if !cell.in_edit_mode() {
        return Vec::new();
    }
    cell.set_edit_mode(false);

    if grid.cell_in_edit_mode() == Some(position) {
        grid.set_cell_in_edit_mode(None);
    }
    tracing::debug!(?position, "left edit mode");
    vec![position]
}

/// Toggle edit mode on an editable cell (Enter/F2)
pub fn toggle_edit(grid: &mut GridState, position: CellPosition) -> Vec<CellPosition> {
    if !is_editable(grid, position) {
        tracing::debug!(?position, "toggle ignored: column not editable");
        return Vec::new();
    }

    let editing = grid
        .cell(position)
        .map(|cell| cell.in_edit_mode())
        .unwrap_or(false);
    if editing {
        end_edit(grid, position)
    } else {
        begin_edit(grid, position)
    }
}

/// Cancel editing (Escape); never commits
pub fn cancel_edit(grid: &mut GridState, position: CellPosition) -> Vec<CellPosition> {
    end_edit(grid, position)
}

/// End the edit session of whichever other cell holds the edit slot.
///
/// Returns the position of the cell that was forced out.
pub fn force_exit_other(grid: &mut GridState, position: CellPosition) -> Option<CellPosition> {
    let other = grid.cell_in_edit_mode().filter(|&other| other != position)?;

    if let Some(cell) = grid.cell_mut(other) {
        cell.set_edit_mode(false);
    }
    grid.set_cell_in_edit_mode(None);
    tracing::debug!(?other, focused = ?position, "forced edit exit");
    Some(other)
}

/// Commit a value to a cell regardless of its edit state.
///
/// Emits `EditCommitted` with the old and new values, stores the value, then
/// asks the host to update its backing data at the cell's coordinates.
pub fn commit_value(
    grid: &mut GridState,
    position: CellPosition,
    value: CellValue,
) -> Vec<CellPosition> {
    let Some(cell) = grid.cell_mut(position) else {
        tracing::debug!(?position, "update ignored: no such cell");
        return Vec::new();
    };

    let old_value = cell.replace_value(value.clone());
    tracing::debug!(?position, old = %old_value, new = %value, "value committed");

    grid.emit(GridEvent::EditCommitted {
        position,
        old_value,
        new_value: value.clone(),
    });
    grid.emit(GridEvent::DataUpdateRequested { position, value });
    vec![position]
}
