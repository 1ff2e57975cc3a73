#![forbid(unsafe_code)]

//! Theme system with semantic color slots.
//!
//! A [`Theme`] is an explicit value handed to every widget constructor.
//! There is no global registry: the host builds one at startup (usually via
//! `seamline::Config::theme`) and treats it as read-only afterwards.

use crate::border::BorderKind;
use crate::color::Color;
use crate::interactive::{InteractiveStyle, VisualState};
use crate::style::{ColorMode, Style};

/// Marker appended to truncated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Ellipsis {
    /// `…`, one column.
    #[default]
    Unicode,
    /// `...`, three columns.
    Ascii,
}

impl Ellipsis {
    /// The marker text.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::Unicode => "…",
            Self::Ascii => "...",
        }
    }

    /// Lowercase name, as accepted by [`Ellipsis::from_name`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
        }
    }

    /// Parse by name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Unicode, Self::Ascii]
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Semantic color slots plus the rendering switches every widget shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
    pub selection: Color,
    pub background: Color,
    /// Border drawn for widgets in the normal state.
    pub border_kind: BorderKind,
    pub color_mode: ColorMode,
    pub ellipsis: Ellipsis,
}

impl Default for Theme {
    /// The 256-color palette.
    fn default() -> Self {
        Self {
            primary: Color::Indexed(39),
            secondary: Color::Indexed(141),
            success: Color::Indexed(42),
            warning: Color::Indexed(214),
            error: Color::Indexed(203),
            info: Color::Indexed(75),
            text_primary: Color::Indexed(252),
            text_secondary: Color::Indexed(246),
            text_muted: Color::Indexed(241),
            border: Color::Indexed(240),
            border_focus: Color::Indexed(33),
            selection: Color::Indexed(237),
            background: Color::Reset,
            border_kind: BorderKind::Rounded,
            color_mode: ColorMode::Ansi,
            ellipsis: Ellipsis::Unicode,
        }
    }
}

impl Theme {
    /// Create a builder starting from the default palette.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Every slot set to the terminal default; attributes still apply.
    #[must_use]
    pub fn monochrome() -> Self {
        let reset = Color::Reset;
        Self {
            primary: reset,
            secondary: reset,
            success: reset,
            warning: reset,
            error: reset,
            info: reset,
            text_primary: reset,
            text_secondary: reset,
            text_muted: reset,
            border: reset,
            border_focus: reset,
            selection: reset,
            background: reset,
            ..Self::default()
        }
    }

    /// Paint `text` honoring this theme's color mode.
    #[must_use]
    pub fn paint(&self, style: Style, text: &str) -> String {
        style.paint(text, self.color_mode)
    }

    /// Foreground-only style for a slot.
    #[inline]
    #[must_use]
    pub const fn fg(&self, color: Color) -> Style {
        Style::new().fg(color)
    }

    /// Border kind for a widget in `state`.
    ///
    /// Normal uses the configured kind; selected is thick, focused is double,
    /// active is rounded.
    #[must_use]
    pub const fn border_kind_for(&self, state: VisualState) -> BorderKind {
        match state {
            VisualState::Normal => self.border_kind,
            VisualState::Selected => BorderKind::Thick,
            VisualState::Focused => BorderKind::Double,
            VisualState::Active => BorderKind::Rounded,
        }
    }

    /// Border colors per state: border, primary, primary, success.
    #[must_use]
    pub const fn border_styles(&self) -> InteractiveStyle {
        InteractiveStyle::new(self.fg(self.border))
            .selected(self.fg(self.primary))
            .focused(self.fg(self.primary))
            .active(self.fg(self.success))
    }

    /// Bold title colors per state: text, primary, primary, success.
    #[must_use]
    pub const fn title_styles(&self) -> InteractiveStyle {
        InteractiveStyle::new(self.fg(self.text_primary).bold())
            .selected(self.fg(self.primary))
            .focused(self.fg(self.primary))
            .active(self.fg(self.success))
    }
}

/// Builder for [`Theme`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing theme.
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn primary(mut self, color: Color) -> Self {
        self.theme.primary = color;
        self
    }

    pub fn secondary(mut self, color: Color) -> Self {
        self.theme.secondary = color;
        self
    }

    pub fn success(mut self, color: Color) -> Self {
        self.theme.success = color;
        self
    }

    pub fn warning(mut self, color: Color) -> Self {
        self.theme.warning = color;
        self
    }

    pub fn error(mut self, color: Color) -> Self {
        self.theme.error = color;
        self
    }

    pub fn info(mut self, color: Color) -> Self {
        self.theme.info = color;
        self
    }

    pub fn text_primary(mut self, color: Color) -> Self {
        self.theme.text_primary = color;
        self
    }

    pub fn text_secondary(mut self, color: Color) -> Self {
        self.theme.text_secondary = color;
        self
    }

    pub fn text_muted(mut self, color: Color) -> Self {
        self.theme.text_muted = color;
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.theme.border = color;
        self
    }

    pub fn border_focus(mut self, color: Color) -> Self {
        self.theme.border_focus = color;
        self
    }

    pub fn selection(mut self, color: Color) -> Self {
        self.theme.selection = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.theme.background = color;
        self
    }

    pub fn border_kind(mut self, kind: BorderKind) -> Self {
        self.theme.border_kind = kind;
        self
    }

    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.theme.color_mode = mode;
        self
    }

    pub fn ellipsis(mut self, ellipsis: Ellipsis) -> Self {
        self.theme.ellipsis = ellipsis;
        self
    }

    #[must_use]
    pub fn build(self) -> Theme {
        tracing::debug!(
            border_kind = self.theme.border_kind.name(),
            color_mode = ?self.theme.color_mode,
            ellipsis = self.theme.ellipsis.name(),
            "theme built"
        );
        self.theme
    }
}
