use std::cell::RefCell;
use std::rc::Rc;

use tabula::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

fn user(id: u32, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
    }
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id.into()),
        Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
    ]
}

fn selectable_table(records: Vec<User>) -> (DataTable<User>, Rc<RefCell<Vec<Vec<u32>>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let config = DataTableConfig::new()
        .selectable(true)
        .row_key(RowKey::field(|u: &User| u.id.into()));
    let table = DataTable::new(records, columns(), config)
        .on_row_select(move |rows: &[&User]| sink.borrow_mut().push(rows.iter().map(|u| u.id).collect()));
    (table, calls)
}

fn ids(rows: &[&User]) -> Vec<u32> {
    rows.iter().map(|u| u.id).collect()
}

#[test]
fn test_sorted_selection_scenario() {
    let (mut table, calls) = selectable_table(vec![user(1, "B"), user(2, "A")]);

    table.set_sort("name");
    assert_eq!(ids(&table.display_order()), vec![2, 1]);

    let payload = table.toggle_row_selection("1", true);
    assert_eq!(ids(&payload), vec![1]);
    assert_eq!(table.header_checkbox(), CheckState::Indeterminate);
    assert!(table.some_selected());
    assert!(!table.all_selected());

    let payload = table.set_all_selected(true);
    assert_eq!(ids(&payload), vec![2, 1]);
    assert_eq!(table.header_checkbox(), CheckState::Checked);

    assert_eq!(*calls.borrow(), vec![vec![1], vec![2, 1]]);
}

#[test]
fn test_select_all_on_empty_table() {
    let (mut table, calls) = selectable_table(Vec::new());

    let payload = table.set_all_selected(true);
    assert!(payload.is_empty());
    assert!(!table.all_selected());
    assert!(!table.some_selected());
    assert_eq!(table.header_checkbox(), CheckState::Unchecked);
    assert_eq!(*calls.borrow(), vec![Vec::<u32>::new()]);
}

#[test]
fn test_toggling_every_row_matches_select_all() {
    let records = vec![user(1, "C"), user(2, "A"), user(3, "B")];
    let (mut one_by_one, _) = selectable_table(records.clone());
    let (mut all_at_once, _) = selectable_table(records);

    for id in ["1", "2", "3"] {
        one_by_one.toggle_row_selection(id, true);
    }
    all_at_once.set_all_selected(true);

    assert_eq!(one_by_one.selection(), all_at_once.selection());
    assert!(one_by_one.all_selected());
    assert_eq!(
        ids(&one_by_one.selected_records()),
        ids(&all_at_once.selected_records())
    );
}

#[test]
fn test_deselect_all_clears() {
    let (mut table, calls) = selectable_table(vec![user(1, "A"), user(2, "B")]);
    table.set_all_selected(true);
    let payload = table.set_all_selected(false);
    assert!(payload.is_empty());
    assert!(table.selection().is_empty());
    assert_eq!(calls.borrow().last(), Some(&Vec::new()));
}

#[test]
fn test_toggle_off_removes_row() {
    let (mut table, _) = selectable_table(vec![user(1, "A"), user(2, "B")]);
    table.set_all_selected(true);
    let payload = table.toggle_row_selection("2", false);
    assert_eq!(ids(&payload), vec![1]);
    assert!(!table.is_selected("2"));
}

#[test]
fn test_removed_record_drops_out_of_payload() {
    let (mut table, _) = selectable_table(vec![user(1, "A"), user(2, "B"), user(3, "C")]);
    table.toggle_row_selection("1", true);
    table.toggle_row_selection("2", true);

    table.set_records(vec![user(1, "A"), user(3, "C")]);

    // The stale identity is still held but never reported
    assert!(table.is_selected("2"));
    assert_eq!(ids(&table.selected_records()), vec![1]);
    let payload = table.toggle_row_selection("3", true);
    assert_eq!(ids(&payload), vec![1, 3]);
}

#[test]
fn test_stale_selection_does_not_count_toward_flags() {
    let (mut table, _) = selectable_table(vec![user(1, "A"), user(2, "B")]);
    table.toggle_row_selection("9", true);
    assert_eq!(table.header_checkbox(), CheckState::Unchecked);
    assert!(!table.some_selected());
}

#[test]
fn test_select_all_replaces_stale_identities() {
    let (mut table, _) = selectable_table(vec![user(1, "A")]);
    table.toggle_row_selection("9", true);
    table.set_all_selected(true);
    assert_eq!(table.selection().selected(), vec!["1".to_string()]);
}

#[test]
fn test_not_selectable_ignores_selection() {
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let mut table = DataTable::new(vec![user(1, "A")], columns(), DataTableConfig::new())
        .on_row_select(move |_: &[&User]| *sink.borrow_mut() += 1);

    assert!(table.toggle_row_selection("0", true).is_empty());
    assert!(table.set_all_selected(true).is_empty());
    assert!(table.selection().is_empty());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_index_identity_follows_display_order() {
    let config = DataTableConfig::new().selectable(true);
    let mut table = DataTable::new(vec![user(1, "B"), user(2, "A")], columns(), config);
    table.set_sort("name");
    assert_eq!(table.display_identities(), ["0".to_string(), "1".to_string()]);

    let payload = table.toggle_row_selection("0", true);
    assert_eq!(ids(&payload), vec![2]);
}

#[test]
fn test_func_row_key() {
    let config = DataTableConfig::new()
        .selectable(true)
        .row_key(RowKey::func(|u: &User, _| format!("user-{}", u.id)));
    let mut table = DataTable::new(vec![user(7, "A")], columns(), config);
    assert_eq!(table.display_identities(), ["user-7".to_string()]);
    assert_eq!(ids(&table.toggle_row_selection("user-7", true)), vec![7]);
}

#[test]
fn test_table_state_transitions_are_pure() {
    let state = TableState::new();
    let toggled = state.apply_selection_toggle("a", true);
    assert!(state.selection().is_empty());
    assert!(toggled.selection().is_selected("a"));

    let displayed = vec!["a".to_string(), "b".to_string()];
    assert_eq!(toggled.header_checkbox(&displayed), CheckState::Indeterminate);
    let all = toggled.apply_select_all(displayed.iter().map(String::as_str));
    assert_eq!(all.header_checkbox(&displayed), CheckState::Checked);
    assert_eq!(all.apply_clear_selection().header_checkbox(&displayed), CheckState::Unchecked);
}
