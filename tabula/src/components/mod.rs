//! Components provided by tabula.
//!
//! Each component owns its interaction state and exposes plain methods for
//! the events a host UI would deliver (header clicks, checkbox changes, text
//! edits). Rendering is split into a view model and a text renderer so the
//! state machine can be driven and tested without any screen.

pub mod input;
pub mod selection;
pub mod table;

pub use input::{InputField, InputId, InputType, Message, MessageKind, Modifier};
pub use selection::SelectionSet;
pub use table::{
    Alignment, CellValue, CheckState, Column, DataTable, DataTableConfig, PageWindow, Pagination,
    RowKey, SortDirection, SortState, TableState, TableView, compare_for_sort,
    compute_display_order, next_sort,
};
