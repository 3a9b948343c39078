//! InputField component - a controlled, styled text input.

mod kind;
pub mod render;
mod state;

pub use kind::{InputType, Message, MessageKind, Modifier};
pub use state::{ChangeHandler, InputField, InputId, MASK_CHAR};
