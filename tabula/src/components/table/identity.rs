//! Row identity strategies.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::value::CellValue;

/// How a row's identity string is derived.
///
/// Identities key the selection, so they should be unique among the rows on
/// screen. Nothing enforces that: duplicates make selection of those rows
/// ambiguous, and the table only logs a warning when it sees them.
pub enum RowKey<T> {
    /// The row's position in the display order.
    Index,
    /// The display text of a field read from the record.
    Field(Arc<dyn Fn(&T) -> CellValue + Send + Sync>),
    /// A caller function of the record and its display position.
    Func(Arc<dyn Fn(&T, usize) -> String + Send + Sync>),
}

impl<T> RowKey<T> {
    /// Identity read from a record field.
    pub fn field<F>(accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        RowKey::Field(Arc::new(accessor))
    }

    /// Identity computed by a caller function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&T, usize) -> String + Send + Sync + 'static,
    {
        RowKey::Func(Arc::new(f))
    }

    /// Identity of `record` shown at display position `index`.
    pub fn identity(&self, record: &T, index: usize) -> String {
        match self {
            RowKey::Index => index.to_string(),
            RowKey::Field(accessor) => accessor(record).to_string(),
            RowKey::Func(f) => f(record, index),
        }
    }

    /// Identities of a display-ordered sequence.
    pub fn identities<'a>(&self, rows: impl IntoIterator<Item = &'a T>) -> Vec<String>
    where
        T: 'a,
    {
        rows.into_iter()
            .enumerate()
            .map(|(index, record)| self.identity(record, index))
            .collect()
    }
}

impl<T> Default for RowKey<T> {
    fn default() -> Self {
        RowKey::Index
    }
}

impl<T> Clone for RowKey<T> {
    fn clone(&self) -> Self {
        match self {
            RowKey::Index => RowKey::Index,
            RowKey::Field(accessor) => RowKey::Field(Arc::clone(accessor)),
            RowKey::Func(f) => RowKey::Func(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for RowKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Index => f.write_str("RowKey::Index"),
            RowKey::Field(_) => f.write_str("RowKey::Field(..)"),
            RowKey::Func(_) => f.write_str("RowKey::Func(..)"),
        }
    }
}

/// Identities that occur more than once, in first-seen order.
pub fn duplicate_identities(ids: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.iter()
        .filter(|id| !seen.insert(id.as_str()) && reported.insert(id.as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_reported_once() {
        let ids: Vec<String> = ["a", "b", "a", "a", "c", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(duplicate_identities(&ids), vec!["a", "b"]);
    }

    #[test]
    fn test_index_identity_follows_display_position() {
        let key: RowKey<&str> = RowKey::Index;
        let rows = ["x", "y"];
        assert_eq!(key.identities(rows.iter()), vec!["0", "1"]);
    }
}
