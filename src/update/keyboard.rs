//! Key handling for a focused cell
//!
//! Navigation is resolved first, then edit-mode toggling, always on the cell
//! that received the key. Navigation and edit intents are disjoint, so one
//! key press never both moves focus and toggles edit mode.

use super::edit::{cancel_edit, toggle_edit};
use super::focus::transfer_focus;
use crate::keymap::Intent;
use crate::model::{CellPosition, GridState};
use crate::navigation;

/// Apply a classified key press to the cell at `position`
pub fn handle_intent(
    grid: &mut GridState,
    position: CellPosition,
    intent: Intent,
) -> Vec<CellPosition> {
    let mut changed = handle_navigation(grid, position, intent);
    changed.extend(handle_edit_mode(grid, position, intent));
    changed
}

fn handle_navigation(
    grid: &mut GridState,
    position: CellPosition,
    intent: Intent,
) -> Vec<CellPosition> {
    if !intent.is_navigation() {
        return Vec::new();
    }

    let visible = grid.visible_column_indices();
    let (first, last) = grid
        .row(position.row)
        .map(|row| (row.first_cell(), row.last_cell()))
        .unwrap_or((None, None));

    let Some(target) = navigation::resolve(position, intent, &visible, first, last) else {
        tracing::trace!(?position, %intent, "no navigation target");
        return Vec::new();
    };
    if target == position {
        return Vec::new();
    }
    if grid.cell(target).is_none() {
        tracing::trace!(?position, ?target, "navigation target not rendered");
        return Vec::new();
    }

    tracing::debug!(from = ?position, to = ?target, %intent, "moving focus");
    transfer_focus(grid, position, target)
}

fn handle_edit_mode(
    grid: &mut GridState,
    position: CellPosition,
    intent: Intent,
) -> Vec<CellPosition> {
    match intent {
        Intent::ToggleEdit => toggle_edit(grid, position),
        Intent::CancelEdit => cancel_edit(grid, position),
        _ => Vec::new(),
    }
}
