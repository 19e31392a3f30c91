//! Grid registry: grid id → grid shared state

use std::collections::HashMap;

use super::cell::{CellPosition, CellState};
use super::grid::{GridId, GridState};
use crate::keymap::Keymap;

/// All live grids plus the keymap their cells classify keys with
#[derive(Debug, Clone, Default)]
pub struct GridRegistry {
    grids: HashMap<GridId, GridState>,
    keymap: Keymap,
}

impl GridRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keymap(keymap: Keymap) -> Self {
        Self {
            grids: HashMap::new(),
            keymap,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn set_keymap(&mut self, keymap: Keymap) {
        self.keymap = keymap;
    }

    /// Register a grid, replacing any grid with the same id
    pub fn register(&mut self, grid: GridState) -> Option<GridState> {
        let id = grid.id().clone();
        tracing::debug!(grid = %id, "registering grid");
        self.grids.insert(id, grid)
    }

    pub fn remove(&mut self, id: &GridId) -> Option<GridState> {
        self.grids.remove(id)
    }

    /// Resolve a grid id; unknown ids resolve to nothing
    pub fn get(&self, id: &GridId) -> Option<&GridState> {
        self.grids.get(id)
    }

    pub fn get_mut(&mut self, id: &GridId) -> Option<&mut GridState> {
        self.grids.get_mut(id)
    }

    /// Find a cell by grid id and coordinates
    pub fn find_cell(&self, id: &GridId, position: CellPosition) -> Option<&CellState> {
        self.get(id)?.cell(position)
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, Column};

    #[test]
    fn test_unknown_grid_resolves_to_none() {
        let registry = GridRegistry::new();
        assert!(registry.get(&GridId::from("missing")).is_none());
        assert!(registry
            .find_cell(&GridId::from("missing"), CellPosition::new(0, 0))
            .is_none());
    }

    #[test]
    fn test_register_and_find_cell() {
        let mut grid = GridState::new("orders", vec![Column::new(0, "id")]);
        grid.push_row(vec![CellValue::from(7i64)]);

        let mut registry = GridRegistry::new();
        assert!(registry.register(grid).is_none());
        assert_eq!(registry.len(), 1);

        let id = GridId::from("orders");
        let cell = registry.find_cell(&id, CellPosition::new(0, 0)).unwrap();
        assert_eq!(cell.value(), &CellValue::Number(7.0));
        assert!(registry.find_cell(&id, CellPosition::new(1, 0)).is_none());

        assert!(registry.remove(&id).is_some());
        assert!(registry.is_empty());
    }
}
