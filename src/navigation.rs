//! Cell navigation logic
//!
//! Resolves arrow-key intents to target coordinates. The resolver never
//! clamps rows: whether a target exists is decided by cell lookup.

use crate::keymap::Intent;
use crate::model::CellPosition;

/// Compute the target of a navigation intent.
///
/// `visible_columns` holds column indices in visible order; `row_first` and
/// `row_last` are the column indices of the current row's first and last
/// cells. Returns `None` for non-navigation intents and for a row that
/// cannot be represented (above row 0). A target equal to `current` means "no movement".
pub fn resolve(
    current: CellPosition,
    intent: Intent,
    visible_columns: &[usize],
    row_first: Option<usize>,
    row_last: Option<usize>,
) -> Option<CellPosition> {
    let CellPosition { row, col } = current;

    let target = match intent {
        Intent::MoveUp => CellPosition::new(row.checked_sub(1)?, col),
        Intent::MoveDown => CellPosition::new(row.checked_add(1)?, col),
        Intent::MoveLeftToFirst => CellPosition::new(row, row_first.unwrap_or(col)),
        Intent::MoveRightToLast => CellPosition::new(row, row_last.unwrap_or(col)),
        Intent::MoveLeft => {
            let prev = visible_columns
                .iter()
                .position(|&c| c == col)
                .and_then(|i| i.checked_sub(1))
                .map(|i| visible_columns[i]);
            CellPosition::new(row, prev.unwrap_or(col))
        }
        Intent::MoveRight => {
            // A column missing from the visible set stays put
            let next = visible_columns
                .iter()
                .position(|&c| c == col)
                .and_then(|i| visible_columns.get(i + 1))
                .copied();
            CellPosition::new(row, next.unwrap_or(col))
        }
        Intent::ToggleEdit | Intent::CancelEdit | Intent::None => return None,
    };

    Some(target)
}
