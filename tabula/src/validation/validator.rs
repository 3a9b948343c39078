//! Validator builder for fluent validation API.

use log::warn;
use regex::Regex;

use crate::components::{InputField, InputType};

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;

/// Type alias for validation rule closures.
type Rule<V> = Box<dyn Fn(&V) -> Result<(), String>>;

/// Internal representation of a field being validated.
struct FieldEntry<'a> {
    name: String,
    widget_id: String,
    validate: Box<dyn Fn() -> Vec<String> + 'a>,
}

/// Builder for validating multiple form fields.
///
/// Fields are borrowed until [`validate`](Validator::validate) runs. Only
/// the first failing rule of each field is reported.
pub struct Validator<'a> {
    fields: Vec<FieldEntry<'a>>,
}

impl<'a> Validator<'a> {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<W: Validatable>(self, widget: &'a W, name: impl Into<String>) -> FieldBuilder<'a, W> {
        FieldBuilder {
            validator: self,
            widget,
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Run every field's rules, keeping the first failure of each field.
    pub fn validate(self) -> ValidationResult {
        let errors = self
            .fields
            .iter()
            .filter_map(|field| {
                let message = (field.validate)().into_iter().next()?;
                Some(FieldError {
                    field_name: field.name.clone(),
                    widget_id: field.widget_id.clone(),
                    message,
                })
            })
            .collect();
        ValidationResult::from_errors(errors)
    }
}

impl Default for Validator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<'a, W: Validatable> {
    validator: Validator<'a>,
    widget: &'a W,
    name: String,
    rules: Vec<Rule<W::Value>>,
}

impl<'a, W: Validatable> FieldBuilder<'a, W>
where
    W::Value: 'a,
{
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field<W2: Validatable>(self, widget: &'a W2, name: impl Into<String>) -> FieldBuilder<'a, W2> {
        let validator = self.finalize();
        validator.field(widget, name)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator<'a> {
        let widget = self.widget;
        let rules = self.rules;

        let validate: Box<dyn Fn() -> Vec<String> + 'a> = Box::new(move || {
            let value = widget.validation_value();
            rules.iter().filter_map(|rule| rule(&value).err()).collect()
        });

        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name: self.name,
            widget_id: widget.widget_id(),
            validate,
        });

        validator
    }
}

// Built-in rules for String values
impl<W: Validatable<Value = String>> FieldBuilder<'_, W> {
    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the whole value to match a regex pattern.
    ///
    /// An invalid pattern is logged and the rule is skipped.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(re) => self.rule(move |v| v.is_empty() || re.is_match(v), msg),
            Err(e) => {
                warn!("Skipping validation pattern '{}': {}", pattern, e);
                self
            }
        }
    }

    /// Require a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() for non-empty
                } else {
                    email_address::EmailAddress::is_valid(v)
                }
            },
            msg,
        )
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: String, msg: impl Into<String>) -> Self {
        self.rule(move |v| v == &other, msg)
    }
}

impl FieldBuilder<'_, InputField> {
    /// Add the rules declared on the field itself: `required`, `min_length`,
    /// `max_length`, `pattern`, and an email check for email inputs.
    pub fn constraints(self) -> Self {
        let widget = self.widget;
        let label = widget.get_label().unwrap_or("This field").to_string();
        let mut builder = self;

        if widget.is_required() {
            builder = builder.required(format!("{} is required", label));
        }
        if let Some(min) = widget.get_min_length() {
            builder = builder.rule(
                move |v: &String| v.is_empty() || v.chars().count() >= min,
                format!("{} must be at least {} characters", label, min),
            );
        }
        if let Some(max) = widget.get_max_length() {
            builder = builder.max_length(max, format!("{} must be at most {} characters", label, max));
        }
        if let Some(pattern) = widget.get_pattern() {
            builder = builder.pattern(pattern, format!("{} has an invalid format", label));
        }
        if widget.get_input_type() == InputType::Email {
            builder = builder.email(format!("{} must be a valid email", label));
        }
        builder
    }
}
