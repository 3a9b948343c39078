use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use tabula::components::table::render::render_lines;
use tabula::prelude::*;

use super::StoryRegistration;
use crate::output::StyledLine;

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: &'static str,
    email: &'static str,
    age: u32,
    active: bool,
    department: &'static str,
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Ananya",
            email: "ananya@example.com",
            age: 30,
            active: true,
            department: "Engineering",
        },
        User {
            id: 2,
            name: "Pooja Maheshwar",
            email: "pooja@example.com",
            age: 25,
            active: true,
            department: "Marketing",
        },
        User {
            id: 3,
            name: "Karan Khatri",
            email: "karan123@example.com",
            age: 35,
            active: false,
            department: "Sales",
        },
        User {
            id: 4,
            name: "Rajesh Kumar",
            email: "rajeshk12@example.com",
            age: 28,
            active: true,
            department: "HR",
        },
        User {
            id: 5,
            name: "Neelam Singh",
            email: "SinghNeelam24@example.com",
            age: 32,
            active: true,
            department: "Engineering",
        },
    ]
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |u: &User| u.name.into()).sortable(),
        Column::new("email", "Email", |u: &User| u.email.into()).sortable(),
        Column::new("age", "Age", |u: &User| u.age.into())
            .sortable()
            .align(Alignment::Center),
        Column::new("department", "Department", |u: &User| u.department.into()).sortable(),
        Column::new("status", "Status", |u: &User| {
            CellValue::from(if u.active { "Active" } else { "Inactive" })
        })
        .sortable(),
    ]
}

fn base_config(theme: Theme) -> DataTableConfig<User> {
    DataTableConfig::new()
        .theme(theme)
        .row_key(RowKey::field(|u: &User| u.id.into()))
}

fn table_lines(table: &DataTable<User>) -> Vec<StyledLine> {
    render_lines(&table.view()).into_iter().map(StyledLine::from).collect()
}

fn basic(theme: Theme) -> Vec<StyledLine> {
    let table = DataTable::new(sample_users(), user_columns(), base_config(theme));
    table_lines(&table)
}

fn with_selection(theme: Theme) -> Vec<StyledLine> {
    let selected = Rc::new(Cell::new(0));
    let sink = Rc::clone(&selected);
    let mut table = DataTable::new(
        sample_users(),
        user_columns(),
        base_config(theme).selectable(true),
    )
    .on_row_select(move |rows: &[&User]| sink.set(rows.len()));

    let mut lines = vec![StyledLine::muted("Select Karan, then Neelam:")];
    table.toggle_row_selection("3", true);
    table.toggle_row_selection("5", true);
    lines.extend(table_lines(&table));
    lines.push(StyledLine::muted(format!("Selected: {}", selected.get())));

    lines.push(StyledLine::blank());
    lines.push(StyledLine::muted("Header checkbox (select all):"));
    table.set_all_selected(true);
    lines.extend(table_lines(&table));
    lines.push(StyledLine::muted(format!("Selected: {}", selected.get())));
    lines
}

fn sizes(theme: Theme) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    for size in [Size::Sm, Size::Md, Size::Lg] {
        let table = DataTable::new(sample_users(), user_columns(), base_config(theme).size(size));
        lines.push(StyledLine::muted(format!("size: {}", size.as_str())));
        lines.extend(table_lines(&table));
        lines.push(StyledLine::blank());
    }
    lines
}

fn loading(theme: Theme) -> Vec<StyledLine> {
    let table = DataTable::new(sample_users(), user_columns(), base_config(theme).loading(true));
    table_lines(&table)
}

fn empty(theme: Theme) -> Vec<StyledLine> {
    let table = DataTable::new(Vec::new(), user_columns(), base_config(theme));
    table_lines(&table)
}

fn sorted(theme: Theme) -> Vec<StyledLine> {
    let mut table = DataTable::new(sample_users(), user_columns(), base_config(theme));
    let mut lines = Vec::new();
    for step in ["age", "age", "age"] {
        let label = match table.set_sort(step) {
            Some(sort) => format!("Click '{}': {:?}", step, sort.direction),
            None => format!("Click '{}': unsorted", step),
        };
        lines.push(StyledLine::muted(label));
        lines.extend(table_lines(&table));
        lines.push(StyledLine::blank());
    }
    lines
}

fn paginated(theme: Theme) -> Vec<StyledLine> {
    const PAGE_SIZE: usize = 2;
    let all = sample_users();
    let requested = Rc::new(RefCell::new(None));

    let mut lines = Vec::new();
    let mut page = 1;
    loop {
        let sink = Rc::clone(&requested);
        let pagination = match Pagination::new(page, PAGE_SIZE, all.len()) {
            Ok(p) => p.on_change(move |target, size| {
                info!("Paginated story moving to page {} (size {})", target, size);
                *sink.borrow_mut() = Some(target);
            }),
            Err(e) => return vec![StyledLine::muted(e.to_string())],
        };

        // The owner slices its data; the table shows what it is given
        let slice = all[pagination.page_range()].to_vec();
        let mut table = DataTable::new(
            slice,
            user_columns(),
            base_config(theme).pagination(pagination),
        );
        lines.push(StyledLine::muted(format!("Page {}:", page)));
        lines.extend(table_lines(&table));
        lines.push(StyledLine::blank());

        if table.request_page(page + 1).is_err() {
            break;
        }
        match requested.borrow_mut().take() {
            Some(next) => page = next,
            None => break,
        }
    }
    lines
}

fn dark(theme: Theme) -> Vec<StyledLine> {
    let config = base_config(theme).selectable(true);
    let mut table = DataTable::new(sample_users(), user_columns(), config);
    table.toggle_row_selection("2", true);
    table_lines(&table)
}

inventory::submit! { StoryRegistration::new("DataTable", "Basic", basic) }
inventory::submit! { StoryRegistration::new("DataTable", "WithSelection", with_selection) }
inventory::submit! { StoryRegistration::new("DataTable", "Sizes", sizes) }
inventory::submit! { StoryRegistration::new("DataTable", "Loading", loading) }
inventory::submit! { StoryRegistration::new("DataTable", "Empty", empty) }
inventory::submit! { StoryRegistration::new("DataTable", "Sorted", sorted) }
inventory::submit! { StoryRegistration::new("DataTable", "Paginated", paginated) }
inventory::submit! { StoryRegistration::new("DataTable", "Dark", dark).themed(Theme::Dark) }
