//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with module filtering for debugging focus
//! and edit-mode transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cellgrid::update=debug` - transition diffs only
//! - `RUST_LOG=cellgrid=trace` - include emitted grid events
//!
//! # Log Files
//!
//! Logs are written to `~/.config/cellgrid/logs/cellgrid.log` with daily rotation.

use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{CellPosition, CellValue, GridState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "cellgrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// State of one cell at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSnapshot {
    pub position: CellPosition,
    pub value: CellValue,
    pub focused: bool,
    pub selected: bool,
    pub editing: bool,
}

/// Lightweight snapshot of a grid's interactive state for diffing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub grid: String,
    pub cell_in_edit_mode: Option<CellPosition>,
    pub focused_rows: Vec<usize>,
    pub cells: Vec<CellSnapshot>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &GridState) -> Self {
        Self {
            grid: grid.id().to_string(),
            cell_in_edit_mode: grid.cell_in_edit_mode(),
            focused_rows: grid
                .rows()
                .iter()
                .filter(|r| r.focused)
                .map(|r| r.index)
                .collect(),
            cells: grid
                .cells()
                .map(|c| CellSnapshot {
                    position: c.position(),
                    value: c.value().clone(),
                    focused: c.is_focused(),
                    selected: c.is_selected(),
                    editing: c.in_edit_mode(),
                })
                .collect(),
        }
    }

    /// Cells currently in edit mode
    pub fn editing_cells(&self) -> Vec<CellPosition> {
        self.cells
            .iter()
            .filter(|c| c.editing)
            .map(|c| c.position)
            .collect()
    }

    /// Describe what changed between two snapshots of the same grid
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.cell_in_edit_mode != other.cell_in_edit_mode {
            changes.push(format!(
                "edit slot: {:?} → {:?}",
                self.cell_in_edit_mode, other.cell_in_edit_mode
            ));
        }

        for (before, after) in self.cells.iter().zip(&other.cells) {
            let p = after.position;
            if before.focused != after.focused {
                changes.push(format!("({},{}) focused={}", p.row, p.col, after.focused));
            }
            if before.selected != after.selected {
                changes.push(format!("({},{}) selected={}", p.row, p.col, after.selected));
            }
            if before.editing != after.editing {
                changes.push(format!("({},{}) editing={}", p.row, p.col, after.editing));
            }
            if before.value != after.value {
                changes.push(format!(
                    "({},{}) value: {} → {}",
                    p.row, p.col, before.value, after.value
                ));
            }
        }

        if self.cells.len() != other.cells.len() {
            changes.push(format!(
                "cell count: {} → {}",
                self.cells.len(),
                other.cells.len()
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
