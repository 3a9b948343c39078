//! DataTable component.
//!
//! The table is split the way its state flows:
//!
//! - `value`, `column`: what a record looks like in a cell
//! - `sort`: the header click cycle and the display order
//! - `identity`: how rows are told apart for selection
//! - `state`: pure sort and selection transitions
//! - `pagination`: the display-only page footer
//! - `data_table`: the component tying it all together
//! - `view`, `render`: what gets drawn

mod column;
mod config;
mod data_table;
mod identity;
pub mod pagination;
pub mod render;
mod sort;
mod state;
mod value;
pub mod view;

pub use column::{Accessor, Alignment, CellRenderer, Column, find_column, validate_columns};
pub use config::DataTableConfig;
pub use data_table::{DataTable, RowSelectHandler};
pub use identity::{RowKey, duplicate_identities};
pub use pagination::{PageChangeHandler, PageWindow, Pagination};
pub use sort::{
    SortDirection, SortState, compare_for_sort, compute_display_order, next_sort, sorted_indices,
};
pub use state::{CheckState, TableState};
pub use value::{CellValue, collate};
pub use view::TableView;
