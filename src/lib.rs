//! cellgrid - keyboard-driven data grid cell state
//!
//! This crate provides the cell state machine behind an interactive data
//! grid: key classification, focus and selection, navigation between cells
//! and single-cell edit mode, all driven through an Elm-style `update`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod events;
pub mod fixture;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod navigation;
pub mod presentation;
pub mod replay;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use events::GridEvent;
pub use messages::{CellAddress, CellMsg, GridMsg, Msg};
pub use model::{CellPosition, CellState, Column, GridId, GridRegistry, GridState};
pub use update::update;
