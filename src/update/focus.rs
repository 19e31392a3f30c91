//! Focus and selection protocol

use super::edit::force_exit_other;
use crate::events::GridEvent;
use crate::model::{CellPosition, GridState};

/// Give a cell focus.
///
/// Marks it focused and selected, flags its row, ends any other cell's edit
/// session and emits a selection event.
pub fn focus_cell(grid: &mut GridState, position: CellPosition) -> Vec<CellPosition> {
    let Some(cell) = grid.cell_mut(position) else {
        return Vec::new();
    };
    cell.gain_focus();

    if let Some(row) = grid.row_mut(position.row) {
        row.focused = true;
    }

    let mut changed = vec![position];
    changed.extend(force_exit_other(grid, position));

    grid.emit(GridEvent::Selection { position });
    tracing::debug!(?position, "cell focused");
    changed
}

/// Take focus away from a cell. Edit mode is left untouched.
pub fn blur_cell(grid: &mut GridState, position: CellPosition) -> Vec<CellPosition> {
    let Some(cell) = grid.cell_mut(position) else {
        return Vec::new();
    };
    let was_highlighted = cell.focused();
    cell.lose_focus();

    if let Some(row) = grid.row_mut(position.row) {
        row.focused = false;
    }

    tracing::trace!(?position, "cell blurred");
    if was_highlighted {
        vec![position]
    } else {
        Vec::new()
    }
}

/// Move focus between two cells: blur the source, then focus the target
pub fn transfer_focus(
    grid: &mut GridState,
    from: CellPosition,
    to: CellPosition,
) -> Vec<CellPosition> {
    let mut changed = blur_cell(grid, from);
    changed.extend(focus_cell(grid, to));
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, Column};

    fn grid() -> GridState {
        let mut grid = GridState::new("g", vec![Column::new(0, "a").editable(true)]);
        grid.push_row(vec![CellValue::from("x")]);
        grid.push_row(vec![CellValue::from("y")]);
        grid
    }

    #[test]
    fn test_focus_sets_flags_row_and_emits_selection() {
        let mut grid = grid();
        let pos = CellPosition::new(1, 0);
        focus_cell(&mut grid, pos);

        let cell = grid.cell(pos).unwrap();
        assert!(cell.is_focused());
        assert!(cell.is_selected());
        assert!(grid.row(1).unwrap().focused);
        assert_eq!(
            grid.drain_events(),
            vec![GridEvent::Selection { position: pos }]
        );
    }

    #[test]
    fn test_blur_is_idempotent() {
        let mut grid = grid();
        let pos = CellPosition::new(0, 0);
        focus_cell(&mut grid, pos);

        assert_eq!(blur_cell(&mut grid, pos), vec![pos]);
        assert!(blur_cell(&mut grid, pos).is_empty());

        let cell = grid.cell(pos).unwrap();
        assert!(!cell.is_focused());
        assert!(!cell.is_selected());
        assert!(!grid.row(0).unwrap().focused);
    }

    #[test]
    fn test_focus_missing_cell_is_noop() {
        let mut grid = grid();
        assert!(focus_cell(&mut grid, CellPosition::new(5, 0)).is_empty());
        assert!(grid.pending_events().is_empty());
    }

    #[test]
    fn test_transfer_focus() {
        let mut grid = grid();
        let a = CellPosition::new(0, 0);
        let b = CellPosition::new(1, 0);
        focus_cell(&mut grid, a);

        transfer_focus(&mut grid, a, b);
        assert!(!grid.cell(a).unwrap().is_focused());
        assert!(grid.cell(b).unwrap().is_focused());
        assert!(!grid.row(0).unwrap().focused);
        assert!(grid.row(1).unwrap().focused);
    }
}
