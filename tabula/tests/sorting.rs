use tabula::components::{compare_for_sort, compute_display_order, next_sort};
use tabula::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
    age: Option<u32>,
}

fn user(id: u32, name: &str, age: Option<u32>) -> User {
    User {
        id,
        name: name.to_string(),
        age,
    }
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
        Column::new("age", "Age", |u: &User| u.age.into()).sortable(),
        Column::new("id", "ID", |u: &User| u.id.into()),
    ]
}

fn ids(order: &[&User]) -> Vec<u32> {
    order.iter().map(|u| u.id).collect()
}

#[test]
fn test_unsorted_order_is_input_order_by_reference() {
    let records = vec![user(1, "B", None), user(2, "A", None)];
    let order = compute_display_order(&records, &columns(), None);
    assert_eq!(order.len(), 2);
    for (shown, original) in order.iter().zip(&records) {
        assert!(std::ptr::eq(*shown, original));
    }
}

#[test]
fn test_unknown_sort_column_leaves_input_order() {
    let records = vec![user(1, "B", None), user(2, "A", None)];
    let sort = SortState::ascending("missing");
    let order = compute_display_order(&records, &columns(), Some(&sort));
    assert_eq!(ids(&order), vec![1, 2]);
}

#[test]
fn test_sort_cycle_returns_to_unsorted() {
    let first = next_sort(None, "name");
    assert_eq!(first, Some(SortState::ascending("name")));
    let second = next_sort(first.as_ref(), "name");
    assert_eq!(second, Some(SortState::descending("name")));
    let third = next_sort(second.as_ref(), "name");
    assert_eq!(third, None);
}

#[test]
fn test_switching_column_resets_to_ascending() {
    let current = SortState::descending("name");
    assert_eq!(next_sort(Some(&current), "age"), Some(SortState::ascending("age")));
}

#[test]
fn test_nulls_last_in_both_directions() {
    let records = vec![
        user(1, "A", None),
        user(2, "B", Some(30)),
        user(3, "C", Some(20)),
        user(4, "D", None),
    ];
    let asc = compute_display_order(&records, &columns(), Some(&SortState::ascending("age")));
    assert_eq!(ids(&asc), vec![3, 2, 1, 4]);

    let desc = compute_display_order(&records, &columns(), Some(&SortState::descending("age")));
    assert_eq!(ids(&desc), vec![2, 3, 1, 4]);
}

#[test]
fn test_sort_is_stable_for_equal_values() {
    let records = vec![
        user(1, "same", Some(1)),
        user(2, "same", Some(1)),
        user(3, "same", Some(1)),
    ];
    let asc = compute_display_order(&records, &columns(), Some(&SortState::ascending("name")));
    assert_eq!(ids(&asc), vec![1, 2, 3]);
    let desc = compute_display_order(&records, &columns(), Some(&SortState::descending("name")));
    assert_eq!(ids(&desc), vec![1, 2, 3]);
}

#[test]
fn test_numbers_sort_numerically() {
    let records = vec![user(1, "A", Some(100)), user(2, "B", Some(9)), user(3, "C", Some(25))];
    let asc = compute_display_order(&records, &columns(), Some(&SortState::ascending("age")));
    assert_eq!(ids(&asc), vec![2, 3, 1]);
}

#[test]
fn test_text_sorts_case_insensitively() {
    let records = vec![user(1, "charlie", None), user(2, "Bravo", None), user(3, "alpha", None)];
    let asc = compute_display_order(&records, &columns(), Some(&SortState::ascending("name")));
    assert_eq!(ids(&asc), vec![3, 2, 1]);
}

#[test]
fn test_compare_for_sort_equal_values() {
    let a = CellValue::from("x");
    assert_eq!(
        compare_for_sort(&a, &a.clone(), SortDirection::Descending),
        std::cmp::Ordering::Equal
    );
    assert_eq!(
        compare_for_sort(&CellValue::Null, &CellValue::Null, SortDirection::Ascending),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn test_table_header_clicks_cycle() {
    let records = vec![user(1, "B", None), user(2, "A", None)];
    let mut table = DataTable::new(records, columns(), DataTableConfig::new());

    table.set_sort("name");
    assert_eq!(ids(&table.display_order()), vec![2, 1]);
    table.set_sort("name");
    assert_eq!(ids(&table.display_order()), vec![1, 2]);
    assert_eq!(table.sort(), Some(&SortState::descending("name")));
    table.set_sort("name");
    assert_eq!(table.sort(), None);
    assert_eq!(ids(&table.display_order()), vec![1, 2]);
}

#[test]
fn test_click_on_non_sortable_column_is_ignored() {
    let records = vec![user(2, "A", None), user(1, "B", None)];
    let mut table = DataTable::new(records, columns(), DataTableConfig::new());
    table.set_sort("name");
    assert_eq!(table.set_sort("id"), Some(&SortState::ascending("name")));
    assert_eq!(table.set_sort("nope"), Some(&SortState::ascending("name")));
}

#[test]
fn test_sorting_never_reorders_records() {
    let records = vec![user(1, "B", None), user(2, "A", None)];
    let mut table = DataTable::new(records.clone(), columns(), DataTableConfig::new());
    table.set_sort("name");
    assert_eq!(table.records(), records.as_slice());
}

#[test]
fn test_set_records_resorts() {
    let mut table = DataTable::new(vec![user(1, "B", None)], columns(), DataTableConfig::new());
    table.set_sort("name");
    table.set_records(vec![user(3, "C", None), user(4, "A", None)]);
    assert_eq!(ids(&table.display_order()), vec![4, 3]);
}

#[derive(Debug, Clone)]
struct Cell {
    id: usize,
    value: CellValue,
}

fn cell_columns() -> Vec<Column<Cell>> {
    vec![Column::new("value", "Value", |c: &Cell| c.value.clone()).sortable()]
}

fn cells(values: Vec<CellValue>) -> Vec<Cell> {
    values
        .into_iter()
        .enumerate()
        .map(|(id, value)| Cell { id, value })
        .collect()
}

fn cell_ids(order: &[&Cell]) -> Vec<usize> {
    order.iter().map(|c| c.id).collect()
}

#[test]
fn test_mixed_column_sorts_by_display_text() {
    let records = cells(vec![
        CellValue::Int(10),
        CellValue::Null,
        CellValue::Text("9".into()),
        CellValue::Bool(true),
        CellValue::Float(2.5),
    ]);
    let asc = compute_display_order(&records, &cell_columns(), Some(&SortState::ascending("value")));
    assert_eq!(cell_ids(&asc), vec![0, 4, 2, 3, 1]);

    let desc = compute_display_order(&records, &cell_columns(), Some(&SortState::descending("value")));
    assert_eq!(cell_ids(&desc), vec![3, 2, 4, 0, 1]);
}

#[test]
fn test_nan_column_sorts_after_numbers_before_nulls() {
    let records = cells(vec![
        CellValue::Float(3.0),
        CellValue::Float(f64::NAN),
        CellValue::Float(-1.0),
        CellValue::Null,
        CellValue::Int(2),
    ]);
    let asc = compute_display_order(&records, &cell_columns(), Some(&SortState::ascending("value")));
    assert_eq!(cell_ids(&asc), vec![2, 4, 0, 1, 3]);

    let desc = compute_display_order(&records, &cell_columns(), Some(&SortState::descending("value")));
    assert_eq!(cell_ids(&desc), vec![1, 0, 4, 2, 3]);
}

#[test]
fn test_large_mixed_columns_sort_without_panicking() {
    // Small LCG so every run sees the same columns
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as i64
    };

    for _ in 0..200 {
        let values: Vec<CellValue> = (0..64)
            .map(|_| match next() % 6 {
                0 => CellValue::Int(next() % 100),
                1 => CellValue::Text((next() % 100).to_string()),
                2 => CellValue::Bool(next() % 2 == 0),
                3 => CellValue::Float((next() % 1000) as f64 / 10.0),
                4 => CellValue::Float(f64::NAN),
                _ => CellValue::Null,
            })
            .collect();
        let nulls = values.iter().filter(|v| v.is_null()).count();
        let records = cells(values);

        for sort in [SortState::ascending("value"), SortState::descending("value")] {
            let mut table = DataTable::new(records.clone(), cell_columns(), DataTableConfig::new());
            while table.sort() != Some(&sort) {
                table.set_sort("value");
            }
            let order = table.display_order();
            assert_eq!(order.len(), 64);
            assert!(order[64 - nulls..].iter().all(|c| c.value.is_null()));
            assert!(order[..64 - nulls].iter().all(|c| !c.value.is_null()));
        }
    }
}

#[test]
fn test_nan_only_numeric_columns_sort_without_panicking() {
    let values: Vec<CellValue> = (0..64)
        .map(|i| match i % 4 {
            0 => CellValue::Float(f64::NAN),
            1 => CellValue::Int(64 - i),
            2 => CellValue::Null,
            _ => CellValue::Float(i as f64 / 3.0),
        })
        .collect();
    let records = cells(values);
    let desc = compute_display_order(&records, &cell_columns(), Some(&SortState::descending("value")));
    let shown: Vec<&CellValue> = desc.iter().map(|c| &c.value).collect();
    assert!(matches!(shown[0], CellValue::Float(f) if f.is_nan()));
    assert!(shown[48..].iter().all(|v| v.is_null()));
}
