//! Plain-text rendering of an [`InputField`].

use crate::components::Alignment;
use crate::style::Size;
use crate::text::fit_to_width;

use super::kind::MessageKind;
use super::state::InputField;

/// What a rendered input line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Label,
    /// The framed value. `placeholder` is set when no value is shown.
    Field { placeholder: bool },
    Message(MessageKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    pub text: String,
    pub role: FieldRole,
}

const SPINNER_GLYPH: char = '◌';
const CLEAR_GLYPH: char = '×';
const PASSWORD_SHOWN_GLYPH: char = '◉';
const PASSWORD_HIDDEN_GLYPH: char = '◎';

/// Text width of the value area for each size.
pub fn field_width(size: Size) -> usize {
    match size {
        Size::Sm => 20,
        Size::Md => 28,
        Size::Lg => 36,
    }
}

/// Trailing control glyphs, in display order.
pub fn trailing_glyphs(field: &InputField) -> Vec<char> {
    let mut glyphs = Vec::new();
    if field.is_loading() {
        glyphs.push(SPINNER_GLYPH);
    }
    if field.shows_clear_button() {
        glyphs.push(CLEAR_GLYPH);
    }
    if field.shows_password_toggle() {
        glyphs.push(if field.is_password_visible() {
            PASSWORD_SHOWN_GLYPH
        } else {
            PASSWORD_HIDDEN_GLYPH
        });
    }
    glyphs
}

/// Render an input to text lines: optional label, the framed field, and an
/// optional message.
pub fn render_lines(field: &InputField) -> Vec<FieldLine> {
    let mut lines = Vec::with_capacity(3);

    if let Some(label) = field.get_label() {
        let text = if field.is_required() {
            format!("{} *", label)
        } else {
            label.to_string()
        };
        lines.push(FieldLine {
            text,
            role: FieldRole::Label,
        });
    }

    let (content, placeholder) = if field.has_value() {
        (field.display_value(), false)
    } else {
        (field.get_placeholder().unwrap_or_default().to_string(), true)
    };
    let glyphs: String = trailing_glyphs(field)
        .into_iter()
        .flat_map(|g| [' ', g])
        .collect();
    let (left, right) = field.get_variant().frame();
    let padding = " ".repeat(field.get_size().cell_padding());
    let width = field_width(field.get_size()).saturating_sub(glyphs.chars().count());
    lines.push(FieldLine {
        text: format!(
            "{}{}{}{}{}{}",
            left,
            padding,
            fit_to_width(&content, width, Alignment::Left),
            glyphs,
            padding,
            right
        ),
        role: FieldRole::Field { placeholder },
    });

    if let Some(message) = field.message() {
        lines.push(FieldLine {
            text: message.text,
            role: FieldRole::Message(message.kind),
        });
    }

    lines
}
