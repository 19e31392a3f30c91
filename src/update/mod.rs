//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through [`update`]. Each call handles one
//! input event synchronously and returns the repaint it requires.

pub mod edit;
pub mod focus;
pub mod keyboard;

use crate::commands::Cmd;
use crate::keymap::Intent;
use crate::messages::{CellAddress, CellMsg, GridMsg, Msg};
use crate::model::{CellPosition, GridId, GridRegistry, GridState};
use crate::tracing::GridSnapshot;

/// Main update function - dispatches to sub-handlers
pub fn update(registry: &mut GridRegistry, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Cell(address, msg) => update_cell(registry, &address, msg),
        Msg::Grid(id, msg) => update_grid(registry, &id, msg),
    }
}

/// Handle an input event delivered to one cell
pub fn update_cell(
    registry: &mut GridRegistry,
    address: &CellAddress,
    msg: CellMsg,
) -> Option<Cmd> {
    let intent = match &msg {
        CellMsg::KeyDown(stroke) => registry.keymap().classify(stroke),
        _ => Intent::None,
    };

    let Some(grid) = registry.get_mut(&address.grid) else {
        tracing::debug!(grid = %address.grid, ?msg, "ignoring message for unknown grid");
        return None;
    };
    let position = address.position;
    if grid.cell(position).is_none() {
        tracing::debug!(grid = %address.grid, ?position, "ignoring message for missing cell");
        return None;
    }

    let before =
        tracing::enabled!(tracing::Level::DEBUG).then(|| GridSnapshot::from_grid(grid));

    let changed = match msg {
        CellMsg::Focus => focus::focus_cell(grid, position),
        CellMsg::Blur => focus::blur_cell(grid, position),
        CellMsg::KeyDown(_) => keyboard::handle_intent(grid, position, intent),
        CellMsg::DoubleClick => double_click(grid, position),
        CellMsg::Update(value) => edit::commit_value(grid, position, value),
    };

    if let Some(before) = before {
        if let Some(diff) = before.diff(&GridSnapshot::from_grid(grid)) {
            tracing::debug!(grid = %address.grid, "{}", diff);
        }
    }

    Cmd::redraw_cells(changed)
}

/// Double-click only ever enters edit mode
fn double_click(grid: &mut GridState, position: CellPosition) -> Vec<CellPosition> {
    let editing = grid
        .cell(position)
        .map(|cell| cell.in_edit_mode())
        .unwrap_or(false);
    if editing {
        return Vec::new();
    }
    edit::begin_edit(grid, position)
}

/// Handle render-set changes for a grid
pub fn update_grid(registry: &mut GridRegistry, id: &GridId, msg: GridMsg) -> Option<Cmd> {
    let Some(grid) = registry.get_mut(id) else {
        tracing::debug!(grid = %id, ?msg, "ignoring message for unknown grid");
        return None;
    };

    let changed = match msg {
        GridMsg::PushRow(values) => {
            let row = grid.push_row(values);
            tracing::debug!(grid = %id, row, "row added");
            true
        }
        GridMsg::RemoveRow(row) => grid.remove_row(row),
        GridMsg::RemoveColumn(col) => grid.remove_column(col),
    };

    changed.then_some(Cmd::Redraw)
}
