#![forbid(unsafe_code)]

//! Placeholder shown when a list has nothing to display.

use seamline_layout::{Alignment, Sides, VerticalAlignment};
use seamline_style::Theme;

use crate::box_style::BoxStyle;
use crate::compose::place;
use crate::{Widget, trace_render};

/// Empty-state widget.
///
/// The box is clamped to [`EmptyState::MIN_WIDTH`]..=[`EmptyState::MAX_WIDTH`]
/// columns whatever width is requested.
#[derive(Debug, Clone)]
pub struct EmptyState {
    icon: String,
    title: String,
    description: String,
    action: String,
    width: usize,
    centered: bool,
    viewport: Option<(usize, usize)>,
    theme: Theme,
}

impl EmptyState {
    pub const MIN_WIDTH: usize = 30;
    pub const MAX_WIDTH: usize = 60;
    const PADDING: Sides = Sides::symmetric(2, 4);

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            icon: String::new(),
            title: String::new(),
            description: String::new(),
            action: String::new(),
            width: 40,
            centered: false,
            viewport: None,
            theme,
        }
    }

    /// "No items found" with a search hint.
    #[must_use]
    pub fn no_items_found(theme: Theme) -> Self {
        let mut state = Self::new(theme);
        state
            .set_icon("🔍")
            .set_title("No items found")
            .set_description("Try adjusting your search or filters");
        state
    }

    /// "No {kind}" for a collection that has never had entries.
    #[must_use]
    pub fn no_data(theme: Theme, kind: &str) -> Self {
        let mut state = Self::new(theme);
        state
            .set_icon("📭")
            .set_title(format!("No {kind}"))
            .set_description("Nothing to display yet");
        state
    }

    /// Placeholder for an unfinished feature.
    #[must_use]
    pub fn coming_soon(theme: Theme) -> Self {
        let mut state = Self::new(theme);
        state
            .set_icon("🚧")
            .set_title("Coming Soon")
            .set_description("This feature is under construction");
        state
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.icon = icon.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Hint for what the user can do next.
    pub fn set_action(&mut self, action: impl Into<String>) -> &mut Self {
        self.action = action.into();
        self
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    /// Center the box within the requested width when it is wider.
    pub fn set_centered(&mut self, centered: bool) -> &mut Self {
        self.centered = centered;
        self
    }

    /// Center the box in a full viewport instead.
    pub fn set_viewport(&mut self, width: usize, height: usize) -> &mut Self {
        self.viewport = Some((width, height));
        self
    }

    #[must_use]
    pub fn box_width(&self) -> usize {
        self.width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH)
    }

    fn lines(&self) -> Vec<String> {
        let theme = &self.theme;
        let mut lines = Vec::new();
        if !self.icon.is_empty() {
            lines.push(theme.paint(theme.fg(theme.text_secondary), &self.icon));
            lines.push(String::new());
        }
        if !self.title.is_empty() {
            lines.push(theme.paint(theme.fg(theme.text_primary).bold(), &self.title));
        }
        if !self.description.is_empty() {
            lines.push(theme.paint(theme.fg(theme.text_secondary), &self.description));
        }
        if !self.action.is_empty() {
            lines.push(String::new());
            lines.push(theme.paint(theme.fg(theme.primary).italic(), &self.action));
        }
        lines
    }

    /// The bordered box alone.
    #[must_use]
    pub fn render_box(&self) -> String {
        BoxStyle::themed(&self.theme, self.box_width())
            .padding(Self::PADDING)
            .alignment(Alignment::Center)
            .render_lines(&self.lines())
    }
}

impl Widget for EmptyState {
    fn render(&self) -> String {
        trace_render("empty_state", self.box_width(), || {
            let boxed = self.render_box();
            if let Some((w, h)) = self.viewport {
                return place(w, h, Alignment::Center, VerticalAlignment::Middle, &boxed);
            }
            if self.centered && self.width > self.box_width() {
                let height = boxed.split('\n').count();
                return place(
                    self.width,
                    height,
                    Alignment::Center,
                    VerticalAlignment::Top,
                    &boxed,
                );
            }
            boxed
        })
    }
}
