//! Grid model - cells, columns, rows and the grid registry
//!
//! ```text
//! GridRegistry
//! └── GridState (per grid id)
//!     ├── columns: Vec<Column>
//!     ├── rows: Vec<RowState>
//!     ├── cells: (row, col) → CellState
//!     ├── cell_in_edit_mode: Option<CellPosition>
//!     └── events: EventQueue
//! ```

pub mod cell;
pub mod column;
pub mod grid;
pub mod registry;
pub mod row;
pub mod template;
pub mod value;

pub use cell::{CellPosition, CellState};
pub use column::{Column, DataType, FormatSpec, Formatter};
pub use grid::{GridId, GridState};
pub use registry::GridRegistry;
pub use row::RowState;
pub use template::{CellTemplate, TemplateId, TemplateSource};
pub use value::CellValue;
