//! Grid fixtures: YAML descriptions of a grid and an input script
//!
//! ```yaml
//! id: orders
//! columns:
//!   - field: id
//!   - field: name
//!     editable: true
//!   - field: price
//!     data_type: number
//!     format: { fixed: 2 }
//! rows:
//!   - [1, Widget, 9.5]
//! script:
//!   - focus: [0, 1]
//!   - key: enter
//!   - update: Gadget
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{CellValue, Column, DataType, FormatSpec, GridState, TemplateId};
use crate::replay::Step;

/// One column of a fixture
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnFixture {
    /// Ordering key; defaults to the column's position in the list
    #[serde(default)]
    pub index: Option<usize>,
    pub field: String,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub cell_classes: String,
    #[serde(default)]
    pub hidden: bool,
    /// Inline editor template id
    #[serde(default)]
    pub editor: Option<String>,
    /// Display template id for the column's cells
    #[serde(default)]
    pub cell_template: Option<String>,
    #[serde(default)]
    pub format: Option<FormatSpec>,
}

impl ColumnFixture {
    fn to_column(&self, position: usize) -> Column {
        let mut column = Column::new(self.index.unwrap_or(position), self.field.clone())
            .editable(self.editable)
            .data_type(self.data_type)
            .cell_classes(self.cell_classes.clone())
            .hidden(self.hidden);
        if let Some(width) = &self.width {
            column = column.width(width.clone());
        }
        if let Some(editor) = &self.editor {
            column = column.inline_editor(TemplateId::new(editor.clone()));
        }
        if let Some(template) = &self.cell_template {
            column = column.cell_template(TemplateId::new(template.clone()));
        }
        if let Some(format) = self.format {
            column = column.formatter(format);
        }
        column
    }
}

/// A grid plus the script to replay against it
#[derive(Debug, Clone, Deserialize)]
pub struct GridFixture {
    pub id: String,
    pub columns: Vec<ColumnFixture>,
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
    #[serde(default)]
    pub script: Vec<Step>,
}

impl GridFixture {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let fixture: GridFixture =
            serde_yaml::from_str(yaml).context("Failed to parse grid fixture")?;
        fixture.validate()?;
        Ok(fixture)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid fixture {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for (position, column) in self.columns.iter().enumerate() {
            let index = column.index.unwrap_or(position);
            if !seen.insert(index) {
                anyhow::bail!("Duplicate column index {} ({})", index, column.field);
            }
        }
        Ok(())
    }

    /// Build the grid with every fixture row rendered
    pub fn to_grid(&self) -> GridState {
        let columns = self
            .columns
            .iter()
            .enumerate()
            .map(|(position, c)| c.to_column(position))
            .collect();

        let mut grid = GridState::new(self.id.as_str(), columns);
        for row in &self.rows {
            grid.push_row(row.clone());
        }
        grid
    }
}
