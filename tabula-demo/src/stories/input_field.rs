use std::cell::RefCell;
use std::rc::Rc;

use tabula::components::input::render::render_lines;
use tabula::prelude::*;

use super::StoryRegistration;
use crate::output::StyledLine;

fn field_lines(field: &InputField) -> Vec<StyledLine> {
    let mut lines: Vec<StyledLine> = render_lines(field).into_iter().map(StyledLine::from).collect();
    lines.push(StyledLine::blank());
    lines
}

fn base(theme: Theme) -> InputField {
    InputField::new()
        .label("Label")
        .placeholder("Type here...")
        .theme(theme)
}

/// Apply `edits` the way an owning form would: every reported change is
/// written back as the new value.
fn type_into(field: &mut InputField, pending: &Rc<RefCell<Option<String>>>, edits: &[&str]) {
    for edit in edits {
        field.input(edit);
        if let Some(value) = pending.borrow_mut().take() {
            field.set_value(value);
        }
    }
}

fn controlled(field: InputField) -> (InputField, Rc<RefCell<Option<String>>>) {
    let pending = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&pending);
    let field = field.on_change(move |v| *sink.borrow_mut() = Some(v.to_string()));
    (field, pending)
}

fn basic(theme: Theme) -> Vec<StyledLine> {
    let (mut field, pending) = controlled(base(theme).helper_text("We'll never share your info"));
    let mut lines = field_lines(&field);
    type_into(&mut field, &pending, &["A", "An", "Ana"]);
    lines.extend(field_lines(&field));
    lines
}

fn variants(theme: Theme) -> Vec<StyledLine> {
    [
        (Variant::Outlined, "Outlined"),
        (Variant::Filled, "Filled"),
        (Variant::Ghost, "Ghost"),
    ]
    .into_iter()
    .flat_map(|(variant, label)| field_lines(&base(theme).variant(variant).label(label)))
    .collect()
}

fn sizes(theme: Theme) -> Vec<StyledLine> {
    [(Size::Sm, "Small"), (Size::Md, "Medium"), (Size::Lg, "Large")]
        .into_iter()
        .flat_map(|(size, label)| field_lines(&base(theme).size(size).label(label)))
        .collect()
}

fn states(theme: Theme) -> Vec<StyledLine> {
    let disabled = base(theme)
        .label("Disabled")
        .disabled(true)
        .placeholder("Disabled input");
    let invalid = base(theme)
        .label("Invalid")
        .invalid(true)
        .error_message("This field is required");
    let loading = base(theme)
        .label("Loading")
        .loading(true)
        .placeholder("Fetching...");

    let mut lines = Vec::new();
    for field in [disabled, invalid, loading] {
        let modifiers: Vec<&str> = field.state_modifiers().iter().map(|m| m.as_str()).collect();
        lines.push(StyledLine::muted(format!("state: {}", modifiers.join(", "))));
        lines.extend(field_lines(&field));
    }
    lines
}

fn password(theme: Theme) -> Vec<StyledLine> {
    let (mut field, pending) = controlled(
        base(theme)
            .input_type(InputType::Password)
            .show_password_toggle(true)
            .label("Password")
            .placeholder("Enter password"),
    );
    type_into(&mut field, &pending, &["hunter2"]);

    let mut lines = field_lines(&field);
    field.toggle_password_visibility();
    lines.push(StyledLine::muted("After pressing the reveal toggle:"));
    lines.extend(field_lines(&field));
    lines
}

fn clearable(theme: Theme) -> Vec<StyledLine> {
    let (mut field, pending) = controlled(
        base(theme)
            .clearable(true)
            .label("Search")
            .placeholder("Type to search"),
    );
    type_into(&mut field, &pending, &["data table"]);

    let mut lines = field_lines(&field);
    field.clear();
    if let Some(value) = pending.borrow_mut().take() {
        field.set_value(value);
    }
    lines.push(StyledLine::muted("After pressing clear:"));
    lines.extend(field_lines(&field));
    lines
}

inventory::submit! { StoryRegistration::new("InputField", "Basic", basic) }
inventory::submit! { StoryRegistration::new("InputField", "Variants", variants) }
inventory::submit! { StoryRegistration::new("InputField", "Sizes", sizes) }
inventory::submit! { StoryRegistration::new("InputField", "States", states) }
inventory::submit! { StoryRegistration::new("InputField", "Password", password) }
inventory::submit! { StoryRegistration::new("InputField", "Clearable", clearable) }
