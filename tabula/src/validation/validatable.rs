//! Validatable trait for fields that support validation.

/// Trait for fields that can be validated.
///
/// Provides a common interface for extracting values from fields and
/// setting/clearing validation errors.
pub trait Validatable {
    /// The value type used for validation.
    type Value;

    /// Extract the current value for validation.
    fn validation_value(&self) -> Self::Value;

    /// Set a validation error on this field.
    fn set_error(&mut self, msg: impl Into<String>);

    /// Clear the validation error.
    fn clear_error(&mut self);

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<&str>;

    /// Check if the field has a validation error.
    fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Identifier of the field, reported in [`FieldError`](super::FieldError).
    fn widget_id(&self) -> String;
}
