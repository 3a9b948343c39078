//! tabula - view models for a data table and a styled text input.
//!
//! The crate holds the interaction state of two components and leaves the
//! drawing to whoever owns the screen:
//!
//! - [`DataTable`](components::DataTable) sorts, selects and paginates an
//!   in-memory record set and reports changes through callbacks.
//! - [`InputField`](components::InputField) is a controlled text input with a
//!   clear control, password reveal toggle and helper/error messages.
//!
//! Both components can be turned into plain text lines through their
//! `render` modules, which is what the demo binary uses.

pub mod components;
pub mod error;
pub mod style;
pub mod text;
pub mod validation;

pub mod prelude {
    pub use crate::components::{Alignment, CellValue, Column, DataTable, DataTableConfig, RowKey};
    pub use crate::components::{CheckState, SortDirection, SortState, TableState, TableView};
    pub use crate::components::{InputField, InputType, Message, MessageKind};
    pub use crate::components::{PageWindow, Pagination, SelectionSet};
    pub use crate::error::{ConfigError, PaginationError};
    pub use crate::style::{Size, Theme, Variant};
    pub use crate::validation::{Validatable, ValidationResult, Validator};
}
