//! Demo sign-up form: several inputs checked with the validator.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use tabula::components::input::render::render_lines;
use tabula::prelude::*;

use crate::output::StyledLine;

/// Pending change reported by a field, keyed by field name.
type Pending = Rc<RefCell<Vec<(&'static str, String)>>>;

pub struct DemoForm {
    name: InputField,
    email: InputField,
    password: InputField,
    phone: InputField,
    website: InputField,
    age: InputField,
    pending: Pending,
}

fn watched(field: InputField, key: &'static str, pending: &Pending) -> InputField {
    let sink = Rc::clone(pending);
    field.on_change(move |v| sink.borrow_mut().push((key, v.to_string())))
}

impl DemoForm {
    pub fn new(theme: Theme) -> Self {
        let pending: Pending = Rc::new(RefCell::new(Vec::new()));
        Self {
            name: watched(
                InputField::new()
                    .label("Name")
                    .placeholder("Enter your name")
                    .required(true)
                    .theme(theme),
                "name",
                &pending,
            ),
            email: watched(
                InputField::new()
                    .label("Email")
                    .placeholder("Enter your email")
                    .helper_text("We'll never share your email with anyone else")
                    .input_type(InputType::Email)
                    .required(true)
                    .clearable(true)
                    .theme(theme),
                "email",
                &pending,
            ),
            password: watched(
                InputField::new()
                    .label("Password")
                    .placeholder("Enter your password")
                    .input_type(InputType::Password)
                    .show_password_toggle(true)
                    .required(true)
                    .theme(theme),
                "password",
                &pending,
            ),
            phone: watched(
                InputField::new()
                    .label("Phone")
                    .placeholder("+1 (555) 123-4567")
                    .input_type(InputType::Tel)
                    .variant(Variant::Filled)
                    .theme(theme),
                "phone",
                &pending,
            ),
            website: watched(
                InputField::new()
                    .label("Website")
                    .placeholder("https://example.com")
                    .input_type(InputType::Url)
                    .variant(Variant::Ghost)
                    .theme(theme),
                "website",
                &pending,
            ),
            age: watched(
                InputField::new()
                    .label("Age")
                    .placeholder("25")
                    .input_type(InputType::Number)
                    .max_length(3)
                    .size(Size::Sm)
                    .theme(theme),
                "age",
                &pending,
            ),
            pending,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut InputField> {
        match key {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            "phone" => Some(&mut self.phone),
            "website" => Some(&mut self.website),
            "age" => Some(&mut self.age),
            _ => None,
        }
    }

    /// Deliver a user edit to `key` and apply whatever the field reported.
    ///
    /// Editing a field clears its error, like the form does on typing.
    pub fn type_into(&mut self, key: &str, value: &str) {
        if let Some(field) = self.field_mut(key) {
            field.input(value);
        }
        let changes: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (key, value) in changes {
            if let Some(field) = self.field_mut(key) {
                field.set_value(value);
                field.clear_error();
            }
        }
    }

    /// Validate and write errors back onto the fields.
    pub fn submit(&mut self) -> ValidationResult {
        let result = Validator::new()
            .field(&self.name, "name")
            .required("Name is required")
            .field(&self.email, "email")
            .required("Email is required")
            .email("Please enter a valid email address")
            .field(&self.password, "password")
            .required("Password is required")
            .min_length(6, "Password must be at least 6 characters")
            .field(&self.age, "age")
            .constraints()
            .validate();

        result.apply("name", &mut self.name);
        result.apply("email", &mut self.email);
        result.apply("password", &mut self.password);
        result.apply("age", &mut self.age);
        info!("Form submitted: {} error(s)", result.errors().len());
        result
    }

    pub fn lines(&self) -> Vec<StyledLine> {
        let mut lines = Vec::new();
        for field in [
            &self.name,
            &self.email,
            &self.password,
            &self.phone,
            &self.website,
            &self.age,
        ] {
            lines.extend(render_lines(field).into_iter().map(StyledLine::from));
            lines.push(StyledLine::blank());
        }
        lines
    }
}

/// Scripted walkthrough: submit empty, fix the fields, submit again.
pub fn run_form(theme: Theme) -> Vec<StyledLine> {
    let mut form = DemoForm::new(theme);
    let mut lines = vec![StyledLine::title("Sign-up form"), StyledLine::blank()];

    form.type_into("email", "not-an-email");
    form.type_into("password", "abc");
    let result = form.submit();
    lines.push(StyledLine::muted(format!(
        "First submit: {} problem(s)",
        result.errors().len()
    )));
    lines.push(StyledLine::blank());
    lines.extend(form.lines());

    form.type_into("name", "Neelam Singh");
    form.type_into("email", "SinghNeelam24@example.com");
    form.type_into("password", "secret123");
    form.type_into("age", "32");
    form.type_into("age", "1000");
    form.type_into("website", "https://example.com");

    let result = form.submit();
    lines.push(StyledLine::muted(if result.is_valid() {
        "Form submitted successfully!".to_string()
    } else {
        format!("Second submit: {} problem(s)", result.errors().len())
    }));
    lines.push(StyledLine::blank());
    lines.extend(form.lines());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submit_reports_required_fields() {
        let mut form = DemoForm::new(Theme::Light);
        let result = form.submit();
        assert_eq!(result.error_for("name"), Some("Name is required"));
        assert_eq!(result.error_for("email"), Some("Email is required"));
        assert_eq!(result.error_for("password"), Some("Password is required"));
        assert!(form.name.is_invalid());
    }

    #[test]
    fn test_short_password_and_bad_email() {
        let mut form = DemoForm::new(Theme::Light);
        form.type_into("name", "Ananya");
        form.type_into("email", "ananya");
        form.type_into("password", "12345");
        let result = form.submit();
        assert_eq!(result.error_for("name"), None);
        assert_eq!(
            result.error_for("email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            result.error_for("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_typing_clears_error_and_respects_max_length() {
        let mut form = DemoForm::new(Theme::Light);
        form.submit();
        form.type_into("name", "K");
        assert!(!form.name.is_invalid());

        form.type_into("age", "32");
        form.type_into("age", "1000");
        assert_eq!(form.age.value(), "32");
    }

    #[test]
    fn test_walkthrough_ends_valid() {
        let lines = run_form(Theme::Dark);
        assert!(lines.iter().any(|l| l.text == "Form submitted successfully!"));
    }
}
