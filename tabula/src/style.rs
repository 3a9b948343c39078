//! Presentation options shared by the components.
//!
//! None of these change behaviour. Renderers read them to pick padding,
//! frames and colors.

/// Color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Component density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    /// Horizontal cell padding (in terminal columns) on each side.
    pub fn cell_padding(self) -> usize {
        match self {
            Size::Sm => 0,
            Size::Md => 1,
            Size::Lg => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }
}

/// Input field appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

impl Variant {
    /// Left and right frame characters used by the text renderer.
    pub fn frame(self) -> (&'static str, &'static str) {
        match self {
            Variant::Filled => ("▌", "▐"),
            Variant::Outlined => ("[", "]"),
            Variant::Ghost => (" ", " "),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Filled => "filled",
            Variant::Outlined => "outlined",
            Variant::Ghost => "ghost",
        }
    }
}
