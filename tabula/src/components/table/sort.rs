//! Sort state and display ordering.

use std::cmp::Ordering;

use super::column::{Column, find_column};
use super::value::{CellValue, collate};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The single column the table is sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortState {
    pub column_key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column_key: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column_key: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Next sort state after a click on the header of `column_key`.
///
/// The same column cycles ascending, descending, unsorted. A different
/// column always starts ascending.
pub fn next_sort(current: Option<&SortState>, column_key: &str) -> Option<SortState> {
    match current {
        Some(sort) if sort.column_key == column_key => match sort.direction {
            SortDirection::Ascending => Some(SortState::descending(column_key)),
            SortDirection::Descending => None,
        },
        _ => Some(SortState::ascending(column_key)),
    }
}

/// Comparable form of one cell within a single sort pass.
///
/// All present keys of a pass share one variant, so comparing them is a
/// total order.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Null,
    Int(i64),
    Number(f64),
    Text(String),
}

/// Turn a column's values into keys that all compare the same way.
///
/// Whole-integer columns compare as integers and numeric columns as floats.
/// A column holding anything else, or numbers mixed with other types,
/// compares every present value by its collated display text.
fn sort_keys(values: Vec<CellValue>) -> Vec<SortKey> {
    let mut present = values.iter().filter(|v| !v.is_null());
    let all_int = present.clone().all(|v| matches!(v, CellValue::Int(_)));
    let all_numeric = present.all(|v| v.as_f64().is_some());

    values
        .into_iter()
        .map(|value| match value {
            CellValue::Null => SortKey::Null,
            CellValue::Int(i) if all_int => SortKey::Int(i),
            CellValue::Int(i) if all_numeric => SortKey::Number(i as f64),
            CellValue::Float(f) if all_numeric => SortKey::Number(f),
            other => SortKey::Text(other.to_string()),
        })
        .collect()
}

fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (SortKey::Null, SortKey::Null) => return Ordering::Equal,
        // Missing values go last in both directions
        (SortKey::Null, _) => return Ordering::Greater,
        (_, SortKey::Null) => return Ordering::Less,
        (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
        (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
        (SortKey::Text(a), SortKey::Text(b)) => collate(a, b),
        // sort_keys never mixes variants
        _ => Ordering::Equal,
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Compare two cell values for a sort in `direction`.
///
/// The pair is compared the way a column holding just these two values
/// would be. Missing values go last in both directions; only the comparison
/// of two present values is reversed for a descending sort.
pub fn compare_for_sort(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match sort_keys(vec![a.clone(), b.clone()]).as_slice() {
        [a, b] => compare_keys(a, b, direction),
        _ => Ordering::Equal,
    }
}

/// Display order as indices into `records`, or `None` when unsorted.
///
/// A sort naming an unknown column leaves the records unsorted.
pub fn sorted_indices<T>(
    records: &[T],
    columns: &[Column<T>],
    sort: Option<&SortState>,
) -> Option<Vec<usize>> {
    let sort = sort?;
    let column = find_column(columns, &sort.column_key)?;

    // Read each value once rather than on every comparison
    let keys = sort_keys(records.iter().map(|r| column.value(r)).collect());
    let mut indices: Vec<usize> = (0..records.len()).collect();
    indices.sort_by(|&a, &b| compare_keys(&keys[a], &keys[b], sort.direction));
    Some(indices)
}

/// The records in the order they are displayed under `sort`.
///
/// With no sort the records come back in input order. Every element is a
/// reference into `records`; nothing is copied.
pub fn compute_display_order<'a, T>(
    records: &'a [T],
    columns: &[Column<T>],
    sort: Option<&SortState>,
) -> Vec<&'a T> {
    match sorted_indices(records, columns, sort) {
        Some(indices) => indices.into_iter().map(|i| &records[i]).collect(),
        None => records.iter().collect(),
    }
}
