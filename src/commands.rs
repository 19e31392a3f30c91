//! Command types for the Elm-style architecture
//!
//! Commands tell the host what to repaint after an update. They carry no
//! behavior of their own.

use crate::model::CellPosition;

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint the whole grid (rows or columns changed)
    Redraw,
    /// Repaint only these cells
    RedrawCells(Vec<CellPosition>),
}

impl Cmd {
    /// Repaint the given cells; `None` when nothing changed
    pub fn redraw_cells(mut cells: Vec<CellPosition>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        cells.sort();
        cells.dedup();
        Some(Cmd::RedrawCells(cells))
    }

    /// Check if this command requires any repaint
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RedrawCells(cells) => !cells.is_empty(),
        }
    }

    /// Cells named by this command, or `None` for a full redraw
    pub fn damaged_cells(&self) -> Option<Vec<CellPosition>> {
        match self {
            Cmd::None => Some(Vec::new()),
            Cmd::Redraw => None,
            Cmd::RedrawCells(cells) => Some(cells.clone()),
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_cells_empty_is_none() {
        assert_eq!(Cmd::redraw_cells(vec![]), None);
    }

    #[test]
    fn test_redraw_cells_dedups() {
        let a = CellPosition::new(0, 1);
        let b = CellPosition::new(0, 0);
        assert_eq!(
            Cmd::redraw_cells(vec![a, b, a]),
            Some(Cmd::RedrawCells(vec![b, a]))
        );
    }

    #[test]
    fn test_damage() {
        let a = CellPosition::new(1, 1);
        let cells = Cmd::RedrawCells(vec![a]);
        assert!(cells.needs_redraw());
        assert_eq!(cells.damaged_cells(), Some(vec![a]));

        assert_eq!(Cmd::Redraw.damaged_cells(), None);
        assert!(!Cmd::from(None).needs_redraw());
    }
}
