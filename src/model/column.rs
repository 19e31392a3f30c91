//! Column shape consumed by cells

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::template::TemplateId;
use super::value::CellValue;

/// Data type of a column's values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
}

/// Built-in display formats that can be named from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatSpec {
    /// Numbers with a fixed number of decimals
    Fixed(u8),
    /// Numbers as percentages (0.25 → "25%")
    Percent,
    /// Text upper-cased
    Uppercase,
}

/// Maps a value to its display string
#[derive(Clone)]
pub struct Formatter(Arc<dyn Fn(&CellValue) -> String + Send + Sync>);

impl Formatter {
    pub fn new(f: impl Fn(&CellValue) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn format(&self, value: &CellValue) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

impl From<FormatSpec> for Formatter {
    fn from(spec: FormatSpec) -> Self {
        match spec {
            FormatSpec::Fixed(decimals) => Formatter::new(move |value| match value {
                CellValue::Number(n) => format!("{:.*}", decimals as usize, n),
                other => other.to_string(),
            }),
            FormatSpec::Percent => Formatter::new(|value| match value {
                CellValue::Number(n) => format_percent(*n),
                other => other.to_string(),
            }),
            FormatSpec::Uppercase => Formatter::new(|value| value.to_string().to_uppercase()),
        }
    }
}

/// Percentage with at most two decimals, trailing zeros dropped
fn format_percent(n: f64) -> String {
    let fixed = format!("{:.2}", n * 100.0);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    format!("{}%", trimmed)
}

/// A grid column as seen by its cells
#[derive(Debug, Clone)]
pub struct Column {
    /// Stable ordering key among visible columns
    pub index: usize,
    /// Data field the column is bound to
    pub field: String,
    pub editable: bool,
    pub data_type: DataType,
    /// Fixed width (any CSS length); `None` lets the column flex
    pub width: Option<String>,
    /// Extra CSS classes applied to every cell in the column
    pub cell_classes: String,
    pub hidden: bool,
    /// Custom editor template used instead of the cell's default editor
    pub inline_editor_template: Option<TemplateId>,
    /// Display template handed to every cell rendered for the column
    pub cell_template: Option<TemplateId>,
    pub formatter: Option<Formatter>,
}

impl Column {
    pub fn new(index: usize, field: impl Into<String>) -> Self {
        Self {
            index,
            field: field.into(),
            editable: false,
            data_type: DataType::default(),
            width: None,
            cell_classes: String::new(),
            hidden: false,
            inline_editor_template: None,
            cell_template: None,
            formatter: None,
        }
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn cell_classes(mut self, classes: impl Into<String>) -> Self {
        self.cell_classes = classes.into();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn inline_editor(mut self, template: TemplateId) -> Self {
        self.inline_editor_template = Some(template);
        self
    }

    pub fn cell_template(mut self, template: TemplateId) -> Self {
        self.cell_template = Some(template);
        self
    }

    pub fn formatter(mut self, formatter: impl Into<Formatter>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    /// Display string for a value, through the formatter when one is set
    pub fn format_value(&self, value: &CellValue) -> String {
        match &self.formatter {
            Some(formatter) => formatter.format(value),
            None => value.to_string(),
        }
    }
}
