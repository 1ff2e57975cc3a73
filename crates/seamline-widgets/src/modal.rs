#![forbid(unsafe_code)]

//! Modal dialog widget.
//!
//! A rounded box with a title, body and footer separated by blank lines,
//! centered in a viewport. The box is `min(width, max_width, viewport - 4)`
//! columns wide so it never touches the viewport edges.

use seamline_layout::{Alignment, Sides, VerticalAlignment};
use seamline_style::{BorderKind, Color, Theme};

use crate::box_style::BoxStyle;
use crate::compose::place;
use crate::{Widget, trace_render};

/// Columns kept free around the modal inside the viewport.
const VIEWPORT_MARGIN: usize = 4;

/// Named width and color configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModalPreset {
    /// 70 columns, focus-colored border.
    Form,
    /// 50 columns, warning colors.
    Alert,
    /// 50 columns, error colors.
    Error,
    /// 50 columns, success colors.
    Success,
    /// 80 columns, up to 100.
    Large,
    /// 40 columns, up to 50.
    Small,
}

/// Modal dialog widget.
#[derive(Debug, Clone)]
pub struct Modal {
    title: String,
    icon: String,
    content: String,
    footer: String,
    width: usize,
    max_width: usize,
    viewport: Option<(usize, usize)>,
    border_color: Color,
    title_color: Color,
    theme: Theme,
}

impl Modal {
    pub const DEFAULT_WIDTH: usize = 60;
    pub const DEFAULT_MAX_WIDTH: usize = 80;
    const PADDING: Sides = Sides::symmetric(2, 3);

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            title: String::new(),
            icon: String::new(),
            content: String::new(),
            footer: String::new(),
            width: Self::DEFAULT_WIDTH,
            max_width: Self::DEFAULT_MAX_WIDTH,
            viewport: None,
            border_color: theme.border,
            title_color: theme.primary,
            theme,
        }
    }

    /// A modal with `preset` already applied.
    #[must_use]
    pub fn preset(theme: Theme, preset: ModalPreset) -> Self {
        let mut modal = Self::new(theme);
        modal.apply_preset(preset);
        modal
    }

    /// Apply a preset's width and colors.
    pub fn apply_preset(&mut self, preset: ModalPreset) -> &mut Self {
        let theme = self.theme;
        match preset {
            ModalPreset::Form => {
                self.width = 70;
                self.border_color = theme.border_focus;
            }
            ModalPreset::Alert => self.tone(50, theme.warning),
            ModalPreset::Error => self.tone(50, theme.error),
            ModalPreset::Success => self.tone(50, theme.success),
            ModalPreset::Large => {
                self.width = 80;
                self.max_width = 100;
            }
            ModalPreset::Small => {
                self.width = 40;
                self.max_width = 50;
            }
        }
        self
    }

    fn tone(&mut self, width: usize, color: Color) {
        self.width = width;
        self.border_color = color;
        self.title_color = color;
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.icon = icon.into();
        self
    }

    /// Body text; may span several lines.
    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = content.into();
        self
    }

    pub fn set_footer(&mut self, footer: impl Into<String>) -> &mut Self {
        self.footer = footer.into();
        self
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_max_width(&mut self, max_width: usize) -> &mut Self {
        self.max_width = max_width;
        self
    }

    /// Viewport the modal is centered in by [`Widget::render`].
    pub fn set_viewport(&mut self, width: usize, height: usize) -> &mut Self {
        self.viewport = Some((width, height));
        self
    }

    pub fn set_border_color(&mut self, color: Color) -> &mut Self {
        self.border_color = color;
        self
    }

    pub fn set_title_color(&mut self, color: Color) -> &mut Self {
        self.title_color = color;
        self
    }

    /// Requested box width before the box model's own minimum.
    #[must_use]
    pub fn box_width(&self) -> usize {
        let mut width = self.width.min(self.max_width);
        if let Some((viewport_w, _)) = self.viewport {
            width = width.min(viewport_w.saturating_sub(VIEWPORT_MARGIN));
        }
        width
    }

    fn box_style(&self) -> BoxStyle {
        BoxStyle::themed(&self.theme, self.box_width())
            .border(BorderKind::Rounded)
            .border_style(self.theme.fg(self.border_color))
            .padding(Self::PADDING)
    }

    fn sections(&self) -> Vec<String> {
        let theme = &self.theme;
        let mut lines = Vec::new();
        if !self.title.is_empty() {
            let title = if self.icon.is_empty() {
                self.title.clone()
            } else {
                format!("{} {}", self.icon, self.title)
            };
            lines.push(theme.paint(theme.fg(self.title_color).bold(), &title));
            lines.push(String::new());
        }
        let body = theme.fg(theme.text_primary);
        lines.extend(
            crate::block_lines(&self.content)
                .into_iter()
                .map(|line| theme.paint(body, line)),
        );
        if !self.footer.is_empty() {
            lines.push(String::new());
            lines.push(theme.paint(theme.fg(theme.text_secondary), &self.footer));
        }
        lines
    }

    /// The modal box alone, not placed in the viewport.
    #[must_use]
    pub fn render_box(&self) -> String {
        self.box_style().render_lines(&self.sections())
    }
}

impl Widget for Modal {
    /// The box centered in the viewport, or the bare box without one.
    fn render(&self) -> String {
        trace_render("modal", self.box_width(), || {
            let boxed = self.render_box();
            match self.viewport {
                Some((w, h)) => place(w, h, Alignment::Center, VerticalAlignment::Middle, &boxed),
                None => boxed,
            }
        })
    }
}
