//! Table interaction state.
//!
//! `TableState` holds the two things a user changes by interacting with the
//! table: the sort and the selection. Every transition is a pure function
//! returning the next state, so the state machine can be exercised without a
//! table or a screen.

use crate::components::selection::SelectionSet;

use super::column::{Column, find_column};
use super::sort::{SortState, next_sort};

/// Three-state header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Some but not all displayed rows are selected.
    Indeterminate,
}

/// Sort and selection state of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    sort: Option<SortState>,
    selection: SelectionSet,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// State after a click on the header of `column_key`.
    ///
    /// Unknown and non-sortable columns leave the state unchanged.
    pub fn apply_sort<T>(&self, columns: &[Column<T>], column_key: &str) -> Self {
        match find_column(columns, column_key) {
            Some(column) if column.sortable => Self {
                sort: next_sort(self.sort.as_ref(), column_key),
                selection: self.selection.clone(),
            },
            _ => self.clone(),
        }
    }

    /// State after a single row checkbox changed.
    pub fn apply_selection_toggle(&self, id: &str, selected: bool) -> Self {
        let mut selection = self.selection.clone();
        selection.set(id, selected);
        Self {
            sort: self.sort.clone(),
            selection,
        }
    }

    /// State with exactly `ids` selected.
    pub fn apply_select_all<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut selection = SelectionSet::new();
        selection.select_all(ids);
        Self {
            sort: self.sort.clone(),
            selection,
        }
    }

    /// State with nothing selected.
    pub fn apply_clear_selection(&self) -> Self {
        Self {
            sort: self.sort.clone(),
            selection: SelectionSet::new(),
        }
    }

    /// Every displayed identity is selected. Never true for an empty table.
    pub fn all_selected(&self, displayed: &[String]) -> bool {
        !displayed.is_empty() && displayed.iter().all(|id| self.selection.is_selected(id))
    }

    /// At least one, but not every, displayed identity is selected.
    pub fn some_selected(&self, displayed: &[String]) -> bool {
        !self.all_selected(displayed) && displayed.iter().any(|id| self.selection.is_selected(id))
    }

    /// Header checkbox state for the displayed identities.
    pub fn header_checkbox(&self, displayed: &[String]) -> CheckState {
        if self.all_selected(displayed) {
            CheckState::Checked
        } else if self.some_selected(displayed) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}
