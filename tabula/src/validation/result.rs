use super::validatable::Validatable;

/// The message a field failed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name the field was registered under in [`Validator::field`](super::Validator::field).
    pub field_name: String,
    pub widget_id: String,
    pub message: String,
}

/// Outcome of a [`Validator`](super::Validator) run.
///
/// Holds at most one error per field, in registration order. An empty
/// result means every field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub(crate) fn from_errors(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_invalid(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Widget a form should focus after a failed submit.
    pub fn first_invalid_widget(&self) -> Option<&str> {
        self.first_error().map(|e| e.widget_id.as_str())
    }

    pub fn error_for(&self, field_name: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field_name == field_name)
            .map(|e| e.message.as_str())
    }

    /// Copy the outcome for `field_name` onto `field`. A passing field has
    /// its previous error cleared.
    pub fn apply<W: Validatable>(&self, field_name: &str, field: &mut W) {
        match self.error_for(field_name) {
            Some(message) => field.set_error(message),
            None => field.clear_error(),
        }
    }
}
