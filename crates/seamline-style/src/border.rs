#![forbid(unsafe_code)]

//! Border glyph tables.

/// Border characters for drawing, one per edge and corner.
///
/// Edges are stored per side so a widget can swap just one of them (the
/// open bottom edge of an active tab, for instance) without touching the
/// others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderSet {
    pub top: char,
    pub bottom: char,
    pub left: char,
    pub right: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSet {
    /// Square corners (┌, ┐, └, ┘).
    pub const SINGLE: Self = Self::uniform('─', '│', ['┌', '┐', '└', '┘']);

    /// Rounded corners (╭, ╮, ╰, ╯).
    pub const ROUNDED: Self = Self::uniform('─', '│', ['╭', '╮', '╰', '╯']);

    /// Double lines (║, ═).
    pub const DOUBLE: Self = Self::uniform('═', '║', ['╔', '╗', '╚', '╝']);

    /// Thick lines (┃, ━).
    pub const THICK: Self = Self::uniform('━', '┃', ['┏', '┓', '┗', '┛']);

    const fn uniform(horizontal: char, vertical: char, corners: [char; 4]) -> Self {
        Self {
            top: horizontal,
            bottom: horizontal,
            left: vertical,
            right: vertical,
            top_left: corners[0],
            top_right: corners[1],
            bottom_left: corners[2],
            bottom_right: corners[3],
        }
    }

    /// Replace the bottom edge and both bottom corners.
    #[must_use]
    pub const fn with_bottom(mut self, left: char, middle: char, right: char) -> Self {
        self.bottom_left = left;
        self.bottom = middle;
        self.bottom_right = right;
        self
    }
}

/// Border style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BorderKind {
    /// No border; occupies no columns.
    None,
    /// Single line, square corners.
    Single,
    /// Single line, rounded corners.
    #[default]
    Rounded,
    /// Double line.
    Double,
    /// Thick line.
    Thick,
}

impl BorderKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Single,
        Self::Rounded,
        Self::Double,
        Self::Thick,
    ];

    /// Glyph table for this kind; `None` draws nothing.
    #[must_use]
    pub const fn border_set(&self) -> Option<BorderSet> {
        match self {
            Self::None => None,
            Self::Single => Some(BorderSet::SINGLE),
            Self::Rounded => Some(BorderSet::ROUNDED),
            Self::Double => Some(BorderSet::DOUBLE),
            Self::Thick => Some(BorderSet::THICK),
        }
    }

    /// Lowercase name, as accepted by [`BorderKind::from_name`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Rounded => "rounded",
            Self::Double => "double",
            Self::Thick => "thick",
        }
    }

    /// Parse a kind by name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}
