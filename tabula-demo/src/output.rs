//! Styled terminal output for rendered components.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use tabula::components::MessageKind;
use tabula::components::input::render::{FieldLine, FieldRole};
use tabula::components::table::render::{Line, LineRole};
use tabula::style::Theme;

/// How a demo line is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Header,
    Normal,
    Selected,
    Muted,
    Error,
}

#[derive(Debug, Clone)]
pub struct StyledLine {
    pub text: String,
    pub tone: Tone,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Title)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }

    pub fn blank() -> Self {
        Self::new("", Tone::Normal)
    }
}

impl From<Line> for StyledLine {
    fn from(line: Line) -> Self {
        let tone = match line.role {
            LineRole::Header => Tone::Header,
            LineRole::Row { selected: true } => Tone::Selected,
            LineRole::Row { selected: false } => Tone::Normal,
            LineRole::Separator | LineRole::Footer | LineRole::Placeholder => Tone::Muted,
        };
        Self::new(line.text, tone)
    }
}

impl From<FieldLine> for StyledLine {
    fn from(line: FieldLine) -> Self {
        let tone = match line.role {
            FieldRole::Label => Tone::Header,
            FieldRole::Field { placeholder: true } => Tone::Muted,
            FieldRole::Field { placeholder: false } => Tone::Normal,
            FieldRole::Message(MessageKind::Error) => Tone::Error,
            FieldRole::Message(MessageKind::Helper) => Tone::Muted,
        };
        Self::new(line.text, tone)
    }
}

fn rgb(r: u8, g: u8, b: u8) -> CtColor {
    CtColor::Rgb { r, g, b }
}

fn color(theme: Theme, tone: Tone) -> CtColor {
    match (theme, tone) {
        (Theme::Light, Tone::Title) => rgb(37, 99, 235),
        (Theme::Light, Tone::Header) => rgb(15, 23, 42),
        (Theme::Light, Tone::Normal) => rgb(51, 65, 85),
        (Theme::Light, Tone::Selected) => rgb(29, 78, 216),
        (Theme::Light, Tone::Muted) => rgb(100, 116, 139),
        (Theme::Light, Tone::Error) => rgb(220, 38, 38),
        (Theme::Dark, Tone::Title) => rgb(96, 165, 250),
        (Theme::Dark, Tone::Header) => rgb(241, 245, 249),
        (Theme::Dark, Tone::Normal) => rgb(203, 213, 225),
        (Theme::Dark, Tone::Selected) => rgb(147, 197, 253),
        (Theme::Dark, Tone::Muted) => rgb(148, 163, 184),
        (Theme::Dark, Tone::Error) => rgb(248, 113, 113),
    }
}

/// Write `lines` to `out` colored for `theme`.
pub fn write_lines(out: &mut impl Write, lines: &[StyledLine], theme: Theme) -> io::Result<()> {
    for line in lines {
        let bold = matches!(line.tone, Tone::Title | Tone::Header);
        queue!(out, SetForegroundColor(color(theme, line.tone)))?;
        if bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(&line.text))?;
        if bold {
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

pub fn print_lines(lines: &[StyledLine], theme: Theme) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_lines(&mut stdout, lines, theme)
}
