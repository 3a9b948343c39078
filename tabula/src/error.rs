//! Error types for table configuration and pagination.

use thiserror::Error;

/// Problems found in a column set.
///
/// These never stop a table from rendering; the table logs them and falls
/// back to best-effort output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two columns share the same key.
    #[error("Duplicate column key '{0}'")]
    DuplicateColumnKey(String),

    /// A column was declared with an empty key.
    #[error("Column '{title}' has an empty key")]
    EmptyColumnKey {
        /// Title of the offending column.
        title: String,
    },
}

/// Errors raised by the pagination coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The table was configured without pagination.
    #[error("Table has no pagination configured")]
    NotPaginated,

    /// A page size of zero cannot produce a page window.
    #[error("Page size must be positive")]
    ZeroPageSize,

    /// The requested page lies outside `1..=page_count`.
    #[error("Page {requested} is out of range (1..={page_count})")]
    OutOfRange {
        /// The page that was asked for.
        requested: usize,
        /// Number of pages available.
        page_count: usize,
    },
}
