#![forbid(unsafe_code)]

//! Visual state variants for stateful widgets.
//!
//! [`InteractiveStyle`] holds style overrides for the four visual states a
//! widget can be in: normal, selected, focused, and active. Resolving the
//! current style merges the state's override on top of the base style using
//! [`Style::patch`].
//!
//! # Example
//!
//! ```
//! use seamline_style::{Color, Style};
//! use seamline_style::interactive::{InteractiveStyle, VisualState};
//!
//! let interactive = InteractiveStyle::new(Style::new().fg(Color::indexed(240)))
//!     .selected(Style::new().fg(Color::indexed(39)))
//!     .active(Style::new().fg(Color::indexed(42)));
//!
//! let current = interactive.resolve(VisualState::from_flags(true, false, false));
//! assert_eq!(current.fg, Some(Color::indexed(39)));
//! ```

#![forbid(unsafe_code)]

use crate::style::Style;

/// The visual state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Default state.
    #[default]
    Normal,
    /// Highlighted as the current choice in a list.
    Selected,
    /// Holds keyboard focus.
    Focused,
    /// Marked as the live item (the active profile, say).
    Active,
}

impl VisualState {
    /// Collapse independent state flags into one state.
    ///
    /// Priority: active, then focused, then selected.
    #[must_use]
    pub const fn from_flags(selected: bool, focused: bool, active: bool) -> Self {
        if active {
            Self::Active
        } else if focused {
            Self::Focused
        } else if selected {
            Self::Selected
        } else {
            Self::Normal
        }
    }
}

/// Style variants for different visual states.
///
/// Each variant is an optional [`Style`] overlay patched on top of `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractiveStyle {
    /// Base style applied in all states.
    pub normal: Style,
    /// Override applied when selected.
    pub selected: Option<Style>,
    /// Override applied when focused.
    pub focus: Option<Style>,
    /// Override applied when active.
    pub active: Option<Style>,
}

impl InteractiveStyle {
    /// Create an interactive style with the given base style.
    #[must_use]
    pub const fn new(normal: Style) -> Self {
        Self {
            normal,
            selected: None,
            focus: None,
            active: None,
        }
    }

    /// Set the selected style override.
    #[must_use]
    pub const fn selected(mut self, style: Style) -> Self {
        self.selected = Some(style);
        self
    }

    /// Set the focus style override.
    #[must_use]
    pub const fn focused(mut self, style: Style) -> Self {
        self.focus = Some(style);
        self
    }

    /// Set the active style override.
    #[must_use]
    pub const fn active(mut self, style: Style) -> Self {
        self.active = Some(style);
        self
    }

    /// Resolve the style for the given state.
    #[must_use]
    pub fn resolve(&self, state: VisualState) -> Style {
        let overlay = match state {
            VisualState::Normal => None,
            VisualState::Selected => self.selected.as_ref(),
            VisualState::Focused => self.focus.as_ref(),
            VisualState::Active => self.active.as_ref(),
        };
        match overlay {
            Some(overlay) => self.normal.patch(overlay),
            None => self.normal,
        }
    }

    /// Whether the given state has a specific override.
    #[must_use]
    pub fn has_override(&self, state: VisualState) -> bool {
        match state {
            VisualState::Normal => true,
            VisualState::Selected => self.selected.is_some(),
            VisualState::Focused => self.focus.is_some(),
            VisualState::Active => self.active.is_some(),
        }
    }
}

impl From<Style> for InteractiveStyle {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}
