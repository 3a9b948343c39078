//! The DataTable component.

use log::{debug, trace, warn};

use crate::components::selection::SelectionSet;
use crate::error::PaginationError;

use super::column::{Column, validate_columns};
use super::config::DataTableConfig;
use super::identity::{RowKey, duplicate_identities};
use super::pagination::Pagination;
use super::sort::{SortState, sorted_indices};
use super::state::{CheckState, TableState};
use super::view::{TableView, build_view};

/// Selection callback, called with the selected records in display order.
pub type RowSelectHandler<T> = Box<dyn FnMut(&[&T])>;

/// Display order memoized on the records revision and the sort state.
#[derive(Debug, Default)]
struct OrderCache {
    revision: u64,
    sort: Option<SortState>,
    /// Display position -> index into `records`.
    indices: Vec<usize>,
    /// Identity of each displayed row, in display order.
    identities: Vec<String>,
}

/// A sortable, selectable table over an in-memory record set.
///
/// `DataTable<T>` owns:
/// - the records and column definitions handed in by the caller
/// - a [`TableState`] with the sort and the selection
/// - the memoized display order
/// - the selection callback
///
/// Records are never mutated or reordered in place; sorting only changes the
/// display order.
///
/// # Example
///
/// ```
/// use tabula::prelude::*;
///
/// #[derive(Debug)]
/// struct User { id: u32, name: String }
///
/// let users = vec![
///     User { id: 1, name: "B".into() },
///     User { id: 2, name: "A".into() },
/// ];
/// let columns = vec![Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable()];
/// let config = DataTableConfig::new()
///     .selectable(true)
///     .row_key(RowKey::field(|u: &User| u.id.into()));
///
/// let mut table = DataTable::new(users, columns, config);
/// table.set_sort("name");
/// let ids: Vec<u32> = table.display_order().iter().map(|u| u.id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
pub struct DataTable<T> {
    records: Vec<T>,
    columns: Vec<Column<T>>,
    config: DataTableConfig<T>,
    state: TableState,
    on_row_select: Option<RowSelectHandler<T>>,
    revision: u64,
    cache: OrderCache,
}

impl<T> DataTable<T> {
    /// Create a table.
    ///
    /// Column problems (empty or duplicate keys) are logged and otherwise
    /// ignored; the table renders what it can.
    pub fn new(records: Vec<T>, columns: Vec<Column<T>>, config: DataTableConfig<T>) -> Self {
        for error in validate_columns(&columns) {
            warn!("DataTable column configuration: {}", error);
        }
        let mut table = Self {
            records,
            columns,
            config,
            state: TableState::new(),
            on_row_select: None,
            revision: 1,
            cache: OrderCache::default(),
        };
        table.refresh_order();
        table
    }

    /// Register the selection callback.
    pub fn on_row_select<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&[&T]) + 'static,
    {
        self.on_row_select = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn config(&self) -> &DataTableConfig<T> {
        &self.config
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the record set.
    ///
    /// The selection is kept as-is. Identities that no longer appear simply
    /// stop matching, so they drop out of the next selection payload.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.invalidate();
    }

    /// Replace the column definitions.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        for error in validate_columns(&columns) {
            warn!("DataTable column configuration: {}", error);
        }
        self.columns = columns;
        self.invalidate();
    }

    /// Change how row identities are derived.
    pub fn set_row_key(&mut self, row_key: RowKey<T>) {
        self.config.row_key = row_key;
        self.invalidate();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.config.selectable = selectable;
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.config.pagination.as_ref()
    }

    pub fn pagination_mut(&mut self) -> Option<&mut Pagination> {
        self.config.pagination.as_mut()
    }

    pub fn set_pagination(&mut self, pagination: Option<Pagination>) {
        self.config.pagination = pagination;
    }

    // -------------------------------------------------------------------------
    // Display order
    // -------------------------------------------------------------------------

    fn invalidate(&mut self) {
        self.revision += 1;
        self.refresh_order();
    }

    fn refresh_order(&mut self) {
        if self.cache.revision == self.revision && self.cache.sort.as_ref() == self.state.sort() {
            trace!("DataTable display order unchanged (revision {})", self.revision);
            return;
        }

        let indices = sorted_indices(&self.records, &self.columns, self.state.sort())
            .unwrap_or_else(|| (0..self.records.len()).collect());
        let identities = self
            .config
            .row_key
            .identities(indices.iter().map(|&i| &self.records[i]));

        let duplicates = duplicate_identities(&identities);
        if !duplicates.is_empty() {
            warn!(
                "DataTable row keys are not unique, selection is ambiguous for: {:?}",
                duplicates
            );
        }

        self.cache = OrderCache {
            revision: self.revision,
            sort: self.state.sort().cloned(),
            indices,
            identities,
        };
    }

    /// Records in display order.
    pub fn display_order(&self) -> Vec<&T> {
        self.cache.indices.iter().map(|&i| &self.records[i]).collect()
    }

    /// Identities of the displayed rows, in display order.
    pub fn display_identities(&self) -> &[String] {
        &self.cache.identities
    }

    /// Displayed rows with their identities.
    pub fn display_rows(&self) -> impl Iterator<Item = (&str, &T)> {
        self.cache
            .identities
            .iter()
            .zip(&self.cache.indices)
            .map(|(id, &i)| (id.as_str(), &self.records[i]))
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    pub fn sort(&self) -> Option<&SortState> {
        self.state.sort()
    }

    /// Handle a click on the header of `column_key`.
    ///
    /// Cycles ascending, descending, unsorted. Clicks on unknown or
    /// non-sortable columns are ignored. Returns the new sort state.
    pub fn set_sort(&mut self, column_key: &str) -> Option<&SortState> {
        let next = self.state.apply_sort(&self.columns, column_key);
        if next != self.state {
            debug!("DataTable sort: {:?} -> {:?}", self.state.sort(), next.sort());
            self.state = next;
            self.refresh_order();
        }
        self.state.sort()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &SelectionSet {
        self.state.selection()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selection().is_selected(id)
    }

    /// Selected records in display order.
    ///
    /// Identities that are no longer displayed are skipped.
    pub fn selected_records(&self) -> Vec<&T> {
        selection_payload(&self.records, &self.cache, self.state.selection())
    }

    /// Handle a change of a single row checkbox.
    ///
    /// Emits and returns the selection payload. Does nothing (and emits
    /// nothing) when the table is not selectable.
    pub fn toggle_row_selection(&mut self, id: &str, selected: bool) -> Vec<&T> {
        if !self.config.selectable {
            debug!("DataTable ignored selection of '{}': not selectable", id);
            return Vec::new();
        }
        self.state = self.state.apply_selection_toggle(id, selected);
        debug!("DataTable row '{}' selected: {}", id, selected);
        self.emit_selection()
    }

    /// Handle a change of the header checkbox.
    ///
    /// `true` selects exactly the displayed rows, `false` clears the
    /// selection. Emits and returns the selection payload.
    pub fn set_all_selected(&mut self, selected: bool) -> Vec<&T> {
        if !self.config.selectable {
            debug!("DataTable ignored select-all: not selectable");
            return Vec::new();
        }
        self.state = if selected {
            self.state
                .apply_select_all(self.cache.identities.iter().map(String::as_str))
        } else {
            self.state.apply_clear_selection()
        };
        debug!(
            "DataTable select all: {} ({} rows)",
            selected,
            self.cache.identities.len()
        );
        self.emit_selection()
    }

    fn emit_selection(&mut self) -> Vec<&T> {
        let payload = selection_payload(&self.records, &self.cache, self.state.selection());
        if let Some(handler) = self.on_row_select.as_mut() {
            handler(&payload);
        }
        payload
    }

    /// Every displayed row is selected. False for an empty table.
    pub fn all_selected(&self) -> bool {
        self.state.all_selected(&self.cache.identities)
    }

    /// Some, but not all, displayed rows are selected.
    pub fn some_selected(&self) -> bool {
        self.state.some_selected(&self.cache.identities)
    }

    pub fn header_checkbox(&self) -> CheckState {
        self.state.header_checkbox(&self.cache.identities)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Forward a page request to the pagination coordinator.
    pub fn request_page(&mut self, target: usize) -> Result<(), PaginationError> {
        match self.config.pagination.as_mut() {
            Some(pagination) => pagination.request_page(target),
            None => Err(PaginationError::NotPaginated),
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the renderer-independent view of the table.
    pub fn view(&self) -> TableView {
        build_view(self)
    }
}

fn selection_payload<'a, T>(
    records: &'a [T],
    cache: &OrderCache,
    selection: &SelectionSet,
) -> Vec<&'a T> {
    cache
        .identities
        .iter()
        .zip(&cache.indices)
        .filter(|(id, _)| selection.is_selected(id))
        .map(|(_, &i)| &records[i])
        .collect()
}
