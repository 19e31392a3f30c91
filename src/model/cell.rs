//! Per-cell interactive state

use serde::Serialize;

use super::column::Column;
use super::grid::GridId;
use super::template::{CellTemplate, TemplateId};
use super::value::CellValue;

/// Position of a cell: row index and the owning column's `index`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Display/edit state of one row × column intersection.
///
/// `is_focused` and `is_selected` move together on focus and blur but the
/// owning row may set them independently. Edit mode is only changed by the
/// edit-mode coordinator, never by blur.
#[derive(Debug, Clone)]
pub struct CellState {
    grid: GridId,
    position: CellPosition,
    value: CellValue,
    is_focused: bool,
    is_selected: bool,
    in_edit_mode: bool,
    cell_template: Option<TemplateId>,
}

impl CellState {
    pub fn new(grid: GridId, position: CellPosition, value: CellValue) -> Self {
        Self {
            grid,
            position,
            value,
            is_focused: false,
            is_selected: false,
            in_edit_mode: false,
            cell_template: None,
        }
    }

    /// Supply a display template that replaces the default one; `None`
    /// restores the default
    pub fn set_cell_template(&mut self, template: Option<TemplateId>) {
        self.cell_template = template;
    }

    pub fn grid_id(&self) -> &GridId {
        &self.grid
    }

    pub fn position(&self) -> CellPosition {
        self.position
    }

    pub fn row_index(&self) -> usize {
        self.position.row
    }

    pub fn column_index(&self) -> usize {
        self.position.col
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Highlight state as rendered: focused or part of a selection band
    pub fn focused(&self) -> bool {
        self.is_focused || self.is_selected
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    pub fn in_edit_mode(&self) -> bool {
        self.in_edit_mode
    }

    pub fn cell_template(&self) -> Option<&TemplateId> {
        self.cell_template.as_ref()
    }

    /// Template to render for the current state, recomputed on every call
    pub fn template(&self, column: &Column) -> CellTemplate {
        CellTemplate::select(
            self.in_edit_mode,
            column.inline_editor_template.as_ref(),
            self.cell_template.as_ref(),
        )
    }

    pub(crate) fn set_edit_mode(&mut self, editing: bool) {
        self.in_edit_mode = editing;
    }

    /// Replace the value, returning the previous one
    pub(crate) fn replace_value(&mut self, value: CellValue) -> CellValue {
        std::mem::replace(&mut self.value, value)
    }

    /// Same cell re-rendered at a new position (row removal shifts rows up)
    pub(crate) fn moved_to(mut self, position: CellPosition) -> Self {
        self.position = position;
        self
    }

    pub(crate) fn gain_focus(&mut self) {
        self.is_focused = true;
        self.is_selected = true;
    }

    pub(crate) fn lose_focus(&mut self) {
        self.is_focused = false;
        self.is_selected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template::TemplateSource;

    fn cell() -> CellState {
        CellState::new(GridId::from("g"), CellPosition::new(2, 3), CellValue::from("x"))
    }

    #[test]
    fn test_new_cell_flags_default_to_false() {
        let cell = cell();
        assert!(!cell.is_focused());
        assert!(!cell.is_selected());
        assert!(!cell.in_edit_mode());
        assert_eq!(cell.row_index(), 2);
        assert_eq!(cell.column_index(), 3);
    }

    #[test]
    fn test_focused_reflects_either_flag() {
        let mut cell = cell();
        cell.set_selected(true);
        assert!(cell.focused());
        assert!(!cell.is_focused());

        cell.set_selected(false);
        cell.set_focused(true);
        assert!(cell.focused());
    }

    #[test]
    fn test_template_follows_edit_mode() {
        let column = Column::new(3, "name").inline_editor(TemplateId::new("editor"));
        let mut cell = cell();
        cell.set_cell_template(Some(TemplateId::new("display")));

        assert_eq!(
            cell.template(&column),
            CellTemplate::Display(TemplateSource::Custom(TemplateId::new("display")))
        );

        cell.set_edit_mode(true);
        assert_eq!(
            cell.template(&column),
            CellTemplate::Edit(TemplateSource::Custom(TemplateId::new("editor")))
        );

        cell.set_edit_mode(false);
        cell.set_cell_template(None);
        assert_eq!(
            cell.template(&column),
            CellTemplate::Display(TemplateSource::Default)
        );
    }
}
