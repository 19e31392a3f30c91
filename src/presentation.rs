//! Host attributes derived from cell state
//!
//! A renderer reads these to paint a cell. Everything here is a pure
//! function of the cell, its column and the grid id.

use serde::Serialize;

use crate::model::{CellPosition, CellTemplate, DataType, GridState};

/// Accessibility role of every cell
pub const CELL_ROLE: &str = "gridcell";

/// Attributes of a rendered cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellAttributes {
    pub role: &'static str,
    pub tabindex: i32,
    pub aria_readonly: bool,
    pub aria_selected: bool,
    /// `{grid_id}_{field}`, pointing at the column header
    pub aria_described_by: String,
    pub classes: Vec<String>,
    pub width: Option<String>,
    pub template: CellTemplate,
    /// Formatted value for display templates
    pub display_text: String,
}

impl CellAttributes {
    /// Derive attributes for a cell; `None` when the cell or its column is gone
    pub fn for_cell(grid: &GridState, position: CellPosition, cell_class: &str) -> Option<Self> {
        let cell = grid.cell(position)?;
        let column = grid.column(position.col)?;

        let mut classes = vec![cell_class.to_string()];
        classes.extend(column.cell_classes.split_whitespace().map(str::to_string));
        if cell.in_edit_mode() {
            classes.push(format!("{}--editing", cell_class));
        }
        if cell.focused() {
            classes.push(format!("{}--selected", cell_class));
        }
        if column.data_type == DataType::Number {
            classes.push(format!("{}--number", cell_class));
        }
        if column.width.is_some() {
            classes.push(format!("{}--fw", cell_class));
        }

        Some(Self {
            role: CELL_ROLE,
            tabindex: 0,
            aria_readonly: !column.editable,
            aria_selected: cell.focused(),
            aria_described_by: format!("{}_{}", grid.id(), column.field),
            classes,
            width: column.width.clone(),
            template: cell.template(column),
            display_text: column.format_value(cell.value()),
        })
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
