//! Renderer-independent description of what a table shows.
//!
//! Precedence: a loading table shows only the loading placeholder, an empty
//! table only the empty placeholder, and everything else the full table.

use crate::style::{Size, Theme};

use super::column::Alignment;
use super::data_table::DataTable;
use super::pagination::{PageWindow, Pagination};
use super::sort::SortDirection;
use super::state::CheckState;

/// What a table renders.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Loading { text: String },
    Empty { text: String },
    Table(TableBody),
}

impl TableView {
    pub fn is_loading(&self) -> bool {
        matches!(self, TableView::Loading { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TableView::Empty { .. })
    }

    pub fn body(&self) -> Option<&TableBody> {
        match self {
            TableView::Table(body) => Some(body),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBody {
    pub header: HeaderView,
    pub rows: Vec<RowView>,
    pub footer: Option<FooterView>,
    pub size: Size,
    pub theme: Theme,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    /// Header checkbox, present when the table is selectable.
    pub checkbox: Option<CheckState>,
    pub cells: Vec<HeaderCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub align: Alignment,
    pub width: Option<u16>,
    pub sortable: bool,
    /// Direction when this column is the active sort.
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub identity: String,
    /// Row checkbox, present when the table is selectable.
    pub checkbox: Option<bool>,
    pub cells: Vec<CellView>,
}

impl RowView {
    pub fn is_selected(&self) -> bool {
        self.checkbox.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub text: String,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub window: PageWindow,
    pub current: usize,
    pub page_count: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl FooterView {
    fn from_pagination(pagination: &Pagination) -> Self {
        Self {
            window: pagination.window(),
            current: pagination.current(),
            page_count: pagination.page_count(),
            previous_enabled: pagination.has_previous(),
            next_enabled: pagination.has_next(),
        }
    }

    /// "Page X of Y".
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current, self.page_count)
    }
}

pub(super) fn build_view<T>(table: &DataTable<T>) -> TableView {
    let config = table.config();
    if config.loading {
        return TableView::Loading {
            text: config.loading_text.clone(),
        };
    }
    if table.is_empty() {
        return TableView::Empty {
            text: config.empty_text.clone(),
        };
    }

    let sort = table.sort();
    let header = HeaderView {
        checkbox: config.selectable.then(|| table.header_checkbox()),
        cells: table
            .columns()
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                align: column.align,
                width: column.width,
                sortable: column.sortable,
                sort: sort
                    .filter(|s| column.sortable && s.column_key == column.key)
                    .map(|s| s.direction),
            })
            .collect(),
    };

    let rows = table
        .display_rows()
        .enumerate()
        .map(|(index, (identity, record))| RowView {
            identity: identity.to_string(),
            checkbox: config.selectable.then(|| table.is_selected(identity)),
            cells: table
                .columns()
                .iter()
                .map(|column| CellView {
                    text: column.cell_text(record, index),
                    align: column.align,
                })
                .collect(),
        })
        .collect();

    TableView::Table(TableBody {
        header,
        rows,
        footer: table.pagination().map(FooterView::from_pagination),
        size: config.size,
        theme: config.theme,
        class_name: config.class_name.clone(),
    })
}
