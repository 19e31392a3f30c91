//! Which template a cell renders with

use serde::{Deserialize, Serialize};

/// Opaque handle to a host-side template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Where a template comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TemplateSource {
    /// The cell's own built-in template
    Default,
    /// A template supplied by the column or the caller
    Custom(TemplateId),
}

impl From<Option<&TemplateId>> for TemplateSource {
    fn from(id: Option<&TemplateId>) -> Self {
        match id {
            Some(id) => TemplateSource::Custom(id.clone()),
            None => TemplateSource::Default,
        }
    }
}

/// The template a cell should render right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CellTemplate {
    Display(TemplateSource),
    Edit(TemplateSource),
}

impl CellTemplate {
    /// Pick the template for a cell's current state.
    ///
    /// Editing cells use the column's inline editor when it has one; display
    /// cells use the caller-supplied template when there is one.
    pub fn select(
        in_edit_mode: bool,
        column_editor: Option<&TemplateId>,
        cell_template: Option<&TemplateId>,
    ) -> Self {
        if in_edit_mode {
            CellTemplate::Edit(column_editor.into())
        } else {
            CellTemplate::Display(cell_template.into())
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, CellTemplate::Edit(_))
    }
}
