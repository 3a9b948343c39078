//! Column definitions for the data table.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;

use super::value::CellValue;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Reads the value a column displays from a record.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Custom cell renderer: `(value, record, display index) -> cell text`.
pub type CellRenderer<T> = Arc<dyn Fn(&CellValue, &T, usize) -> String + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of the table: header text, how to read the
/// cell value from a record, alignment, width, and whether the column is
/// sortable.
///
/// # Examples
///
/// ```
/// use tabula::components::{Alignment, Column};
///
/// struct User { name: String, age: u32 }
///
/// let columns: Vec<Column<User>> = vec![
///     Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
///     Column::new("age", "Age", |u: &User| u.age.into())
///         .sortable()
///         .align(Alignment::Center)
///         .width(6),
/// ];
/// assert_eq!(columns.len(), 2);
/// ```
pub struct Column<T> {
    /// Unique identifier for this column.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Horizontal alignment of header and cells.
    pub align: Alignment,
    /// Fixed width in terminal columns. `None` sizes to content.
    pub width: Option<u16>,
    accessor: Accessor<T>,
    render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a new column reading its value through `accessor`.
    pub fn new<F>(key: impl Into<String>, title: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            align: Alignment::Left,
            width: None,
            accessor: Arc::new(accessor),
            render: None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Use a custom renderer for this column's cells.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &T, usize) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Read this column's value from a record.
    pub fn value(&self, record: &T) -> CellValue {
        (self.accessor)(record)
    }

    /// Text for this column's cell of `record` at display position `index`.
    ///
    /// Uses the custom renderer when present, otherwise the value's display
    /// text (`-` for a missing value).
    pub fn cell_text(&self, record: &T, index: usize) -> String {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(&value, record, index),
            None => value.display_text(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
            accessor: Arc::clone(&self.accessor),
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

/// Find a column by key.
pub fn find_column<'a, T>(columns: &'a [Column<T>], key: &str) -> Option<&'a Column<T>> {
    columns.iter().find(|c| c.key == key)
}

/// Check a column set for empty and duplicate keys.
///
/// Returns every problem found, in column order.
pub fn validate_columns<T>(columns: &[Column<T>]) -> Vec<ConfigError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();
    for column in columns {
        if column.key.is_empty() {
            errors.push(ConfigError::EmptyColumnKey {
                title: column.title.clone(),
            });
        } else if !seen.insert(column.key.as_str()) {
            errors.push(ConfigError::DuplicateColumnKey(column.key.clone()));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(key: &str, title: &str) -> Column<()> {
        Column::new(key, title, |_: &()| CellValue::Null)
    }

    #[test]
    fn test_validate_columns_reports_empty_and_duplicate_keys() {
        let columns = vec![
            column("name", "Name"),
            column("", "Untitled"),
            column("name", "Name again"),
            column("age", "Age"),
        ];
        assert_eq!(
            validate_columns(&columns),
            vec![
                ConfigError::EmptyColumnKey {
                    title: "Untitled".to_string()
                },
                ConfigError::DuplicateColumnKey("name".to_string()),
            ]
        );
    }

    #[test]
    fn test_cell_text_falls_back_to_dash() {
        let plain = column("x", "X");
        assert_eq!(plain.cell_text(&(), 0), "-");

        let rendered = column("x", "X").render(|_, _, index| format!("#{}", index + 1));
        assert_eq!(rendered.cell_text(&(), 2), "#3");
        assert!(find_column(&[plain], "x").is_some());
    }
}
