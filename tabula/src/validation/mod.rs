//! Form validation.
//!
//! A fluent, synchronous API for checking field values. Validation only
//! reads the fields; errors are written back with
//! [`ValidationResult::apply`].
//!
//! # Example
//!
//! ```
//! use tabula::components::InputField;
//! use tabula::validation::Validator;
//!
//! let mut name = InputField::new().label("Name");
//! let mut email = InputField::new().label("Email").with_value("not-an-email");
//!
//! let result = Validator::new()
//!     .field(&name, "name")
//!         .required("Name is required")
//!     .field(&email, "email")
//!         .required("Email is required")
//!         .email("Please enter a valid email")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! result.apply("name", &mut name);
//! result.apply("email", &mut email);
//! assert_eq!(email.message().map(|m| m.text), Some("Please enter a valid email".into()));
//! ```

mod result;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
