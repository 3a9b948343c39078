/// The kind of value an input holds.
///
/// Only `Password` changes behaviour (masking and the reveal toggle); the rest
/// are hints for renderers and validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Tel,
    Url,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Url => "url",
        }
    }

    pub fn is_password(self) -> bool {
        self == InputType::Password
    }
}

/// Visual state flags of an input, in the order renderers apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Disabled,
    Invalid,
    Loading,
    Focused,
    HasValue,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Disabled => "disabled",
            Modifier::Invalid => "invalid",
            Modifier::Loading => "loading",
            Modifier::Focused => "focused",
            Modifier::HasValue => "has-value",
        }
    }
}

/// Which message an input shows under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Helper,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}
