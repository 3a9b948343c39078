//! DataTable configuration.

use crate::style::{Size, Theme};

use super::identity::RowKey;
use super::pagination::Pagination;

/// Options recognized by [`DataTable`](super::DataTable).
///
/// Defaults match an unconfigured table: no selection, rows keyed by
/// position, no pagination footer.
///
/// ```
/// use tabula::components::{DataTableConfig, RowKey};
///
/// struct User { id: u32 }
///
/// let config = DataTableConfig::<User>::new()
///     .selectable(true)
///     .row_key(RowKey::field(|u: &User| u.id.into()))
///     .empty_text("Nobody here yet");
/// assert!(config.selectable);
/// ```
#[derive(Debug)]
pub struct DataTableConfig<T> {
    /// Show row checkboxes and track selection.
    pub selectable: bool,
    /// How row identities are derived.
    pub row_key: RowKey<T>,
    /// Show the loading placeholder instead of the table.
    pub loading: bool,
    pub loading_text: String,
    /// Shown when there are no records (and not loading).
    pub empty_text: String,
    pub size: Size,
    pub theme: Theme,
    /// Extra style hook passed through to renderers.
    pub class_name: String,
    /// Page footer. `None` hides it.
    pub pagination: Option<Pagination>,
}

impl<T> Default for DataTableConfig<T> {
    fn default() -> Self {
        Self {
            selectable: false,
            row_key: RowKey::Index,
            loading: false,
            loading_text: "Loading...".to_string(),
            empty_text: "No data available".to_string(),
            size: Size::Md,
            theme: Theme::Light,
            class_name: String::new(),
            pagination: None,
        }
    }
}

impl<T> DataTableConfig<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn row_key(mut self, row_key: RowKey<T>) -> Self {
        self.row_key = row_key;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}
