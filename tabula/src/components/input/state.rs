use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::style::{Size, Theme, Variant};
use crate::validation::Validatable;

use super::kind::{InputType, Message, MessageKind, Modifier};

/// Character used to mask password values.
pub const MASK_CHAR: char = '•';

/// Unique identifier for an InputField instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input-field-{}", self.0)
    }
}

/// Change callback, called with the proposed new value.
pub type ChangeHandler = Box<dyn FnMut(&str)>;

/// A controlled text input.
///
/// The field never changes its own value in response to user edits. Edits,
/// clears and the like are reported through `on_change`, and the owner
/// decides whether to write the new value back with [`set_value`].
/// Only the focus flag and the password reveal flag are owned by the field.
///
/// [`set_value`]: InputField::set_value
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use tabula::components::{InputField, InputType};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut password = InputField::new()
///     .label("Password")
///     .input_type(InputType::Password)
///     .show_password_toggle(true)
///     .on_change(move |v| sink.borrow_mut().push(v.to_string()));
///
/// password.input("hunter2");
/// assert_eq!(*seen.borrow(), vec!["hunter2".to_string()]);
/// assert_eq!(password.value(), "");
/// ```
pub struct InputField {
    id: InputId,
    value: String,
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    required: bool,
    variant: Variant,
    size: Size,
    theme: Theme,
    input_type: InputType,
    clearable: bool,
    show_password_toggle: bool,
    max_length: Option<usize>,
    min_length: Option<usize>,
    pattern: Option<String>,
    on_change: Option<ChangeHandler>,

    // Owned interaction state
    focused: bool,
    show_password: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            value: String::new(),
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            required: false,
            variant: Variant::Outlined,
            size: Size::Md,
            theme: Theme::Light,
            input_type: InputType::Text,
            clearable: false,
            show_password_toggle: false,
            max_length: None,
            min_length: None,
            pattern: None,
            on_change: None,
            focused: false,
            show_password: false,
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn show_password_toggle(mut self, show: bool) -> Self {
        self.show_password_toggle = show;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn get_placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn get_variant(&self) -> Variant {
        self.variant
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    pub fn get_theme(&self) -> Theme {
        self.theme
    }

    pub fn get_input_type(&self) -> InputType {
        self.input_type
    }

    pub fn get_max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn get_min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn get_pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// Edits are accepted only when neither disabled nor loading.
    pub fn is_editable(&self) -> bool {
        !self.disabled && !self.loading
    }

    pub fn shows_clear_button(&self) -> bool {
        self.clearable && self.has_value() && !self.disabled
    }

    pub fn shows_password_toggle(&self) -> bool {
        self.input_type.is_password() && self.show_password_toggle && !self.disabled
    }

    /// The type the value is presented as.
    ///
    /// A password with a reveal toggle shows as plain text while revealed.
    pub fn effective_type(&self) -> InputType {
        if self.input_type.is_password() && self.show_password_toggle && self.show_password {
            InputType::Text
        } else {
            self.input_type
        }
    }

    /// The message under the field. An error message wins over helper text.
    pub fn message(&self) -> Option<Message> {
        if let Some(text) = &self.error_message {
            return Some(Message {
                kind: MessageKind::Error,
                text: text.clone(),
            });
        }
        self.helper_text.as_ref().map(|text| Message {
            kind: MessageKind::Helper,
            text: text.clone(),
        })
    }

    /// The value as it should be shown, masked for passwords.
    pub fn display_value(&self) -> String {
        if self.effective_type().is_password() {
            std::iter::repeat_n(MASK_CHAR, self.value.chars().count()).collect()
        } else {
            self.value.clone()
        }
    }

    /// Active state modifiers.
    pub fn state_modifiers(&self) -> Vec<Modifier> {
        [
            (self.disabled, Modifier::Disabled),
            (self.invalid, Modifier::Invalid),
            (self.loading, Modifier::Loading),
            (self.focused, Modifier::Focused),
            (self.has_value(), Modifier::HasValue),
        ]
        .into_iter()
        .filter_map(|(active, modifier)| active.then_some(modifier))
        .collect()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Write the value. This is how the owner applies a change.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn set_helper_text(&mut self, text: Option<String>) {
        self.helper_text = text;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// A user edit proposing `new_value`.
    ///
    /// Returns whether `on_change` was called.
    pub fn input(&mut self, new_value: &str) -> bool {
        if !self.is_editable() {
            debug!("{} ignored input: not editable", self.id);
            return false;
        }
        if let Some(max) = self.max_length
            && new_value.chars().count() > max
        {
            debug!("{} ignored input: longer than {} characters", self.id, max);
            return false;
        }
        self.emit_change(new_value);
        true
    }

    /// Activate the clear control. Returns whether `on_change("")` was called.
    pub fn clear(&mut self) -> bool {
        if !self.shows_clear_button() {
            return false;
        }
        self.emit_change("");
        true
    }

    /// Activate the password reveal toggle. Returns whether it flipped.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if !self.shows_password_toggle() {
            return false;
        }
        self.show_password = !self.show_password;
        debug!("{} password visible: {}", self.id, self.show_password);
        true
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn emit_change(&mut self, value: &str) {
        debug!("{} change: {} chars", self.id, value.chars().count());
        if let Some(handler) = self.on_change.as_mut() {
            handler(value);
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("input_type", &self.input_type)
            .field("value_len", &self.value.chars().count())
            .field("disabled", &self.disabled)
            .field("invalid", &self.invalid)
            .field("loading", &self.loading)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

impl Validatable for InputField {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value.clone()
    }

    fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
        self.invalid = true;
    }

    fn clear_error(&mut self) {
        self.error_message = None;
        self.invalid = false;
    }

    fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn widget_id(&self) -> String {
        self.id.to_string()
    }
}
