//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use cellgrid::keymap::{KeyCode, Keystroke, Modifiers};
use cellgrid::messages::{CellAddress, CellMsg, Msg};
use cellgrid::model::{CellValue, Column, GridId, GridRegistry, GridState};
use cellgrid::{update, Cmd, GridEvent};

pub const GRID: &str = "orders";

/// Three columns `id`, `name`, `qty`; only `name` is editable
pub fn test_grid(rows: usize) -> GridState {
    let mut grid = GridState::new(
        GRID,
        vec![
            Column::new(0, "id"),
            Column::new(1, "name").editable(true),
            Column::new(2, "qty").editable(true),
        ],
    );
    for row in 0..rows {
        grid.push_row(vec![
            CellValue::from(row as i64),
            CellValue::from(format!("item{}", row)),
            CellValue::from(10.0 * row as f64),
        ]);
    }
    grid
}

/// Registry holding [`test_grid`] with built-in key rules
pub fn test_registry(rows: usize) -> GridRegistry {
    let mut registry = GridRegistry::new();
    registry.register(test_grid(rows));
    registry
}

pub fn send(registry: &mut GridRegistry, row: usize, col: usize, msg: CellMsg) -> Option<Cmd> {
    update(registry, Msg::Cell(CellAddress::new(GRID, row, col), msg))
}

pub fn focus(registry: &mut GridRegistry, row: usize, col: usize) -> Option<Cmd> {
    send(registry, row, col, CellMsg::Focus)
}

pub fn blur(registry: &mut GridRegistry, row: usize, col: usize) -> Option<Cmd> {
    send(registry, row, col, CellMsg::Blur)
}

pub fn press(registry: &mut GridRegistry, row: usize, col: usize, key: KeyCode) -> Option<Cmd> {
    send(registry, row, col, CellMsg::KeyDown(Keystroke::key(key)))
}

pub fn press_ctrl(
    registry: &mut GridRegistry,
    row: usize,
    col: usize,
    key: KeyCode,
) -> Option<Cmd> {
    send(
        registry,
        row,
        col,
        CellMsg::KeyDown(Keystroke::new(key, Modifiers::CTRL)),
    )
}

pub fn grid(registry: &GridRegistry) -> &GridState {
    registry
        .get(&GridId::from(GRID))
        .expect("test grid is registered")
}

pub fn drain(registry: &mut GridRegistry) -> Vec<GridEvent> {
    registry
        .get_mut(&GridId::from(GRID))
        .expect("test grid is registered")
        .drain_events()
}

/// Number of cells currently flagged as editing
pub fn editing_count(grid: &GridState) -> usize {
    grid.cells().filter(|cell| cell.in_edit_mode()).count()
}
