#![forbid(unsafe_code)]

//! Card widget.
//!
//! A bordered panel stacking a title line (state glyph, icon, title and a
//! right-aligned subtitle), an optional description and metadata lines.
//! The visual state picks the border: thick when selected, double when
//! focused, rounded with a success border and a leading `●` when active.

use seamline_layout::Sides;
use seamline_style::{Style, Theme, VisualState};
use seamline_text::{display_width, spaces, truncate_with};

use crate::box_style::BoxStyle;
use crate::{Widget, trace_render};

/// Glyph shown before the title of an active card.
pub const ACTIVE_GLYPH: &str = "●";

/// One `key: value` line of card metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataItem {
    pub key: String,
    pub value: String,
    pub icon: String,
}

impl MetadataItem {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            icon: String::new(),
        }
    }

    /// Show `icon value` instead of `key: value`.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    fn text(&self) -> String {
        if self.icon.is_empty() {
            format!("{}: {}", self.key, self.value)
        } else {
            format!("{} {}", self.icon, self.value)
        }
    }
}

/// Card widget.
#[derive(Debug, Clone)]
pub struct Card {
    title: String,
    subtitle: String,
    description: String,
    icon: String,
    metadata: Vec<MetadataItem>,
    width: usize,
    selected: bool,
    focused: bool,
    active: bool,
    tint_selected: bool,
    theme: Theme,
}

impl Card {
    /// Default outer width.
    pub const DEFAULT_WIDTH: usize = 40;

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            icon: String::new(),
            metadata: Vec::new(),
            width: Self::DEFAULT_WIDTH,
            selected: false,
            focused: false,
            active: false,
            tint_selected: false,
            theme,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> &mut Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.icon = icon.into();
        self
    }

    pub fn set_metadata(&mut self, metadata: Vec<MetadataItem>) -> &mut Self {
        self.metadata = metadata;
        self
    }

    pub fn add_metadata(&mut self, item: MetadataItem) -> &mut Self {
        self.metadata.push(item);
        self
    }

    pub fn clear_metadata(&mut self) -> &mut Self {
        self.metadata.clear();
        self
    }

    /// Outer width; the inner width follows on the next render.
    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_selected(&mut self, selected: bool) -> &mut Self {
        self.selected = selected;
        self
    }

    pub fn set_focused(&mut self, focused: bool) -> &mut Self {
        self.focused = focused;
        self
    }

    pub fn set_active(&mut self, active: bool) -> &mut Self {
        self.active = active;
        self
    }

    /// Tint the background with the selection color while selected.
    pub fn set_tint_selected(&mut self, tint: bool) -> &mut Self {
        self.tint_selected = tint;
        self
    }

    #[must_use]
    pub fn state(&self) -> VisualState {
        VisualState::from_flags(self.selected, self.focused, self.active)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Inner content width at the normal padding.
    #[must_use]
    pub fn inner_width(&self) -> usize {
        self.box_style(Sides::symmetric(1, 2)).inner_width()
    }

    fn box_style(&self, padding: Sides) -> BoxStyle {
        let theme = &self.theme;
        let state = self.state();
        let mut style = BoxStyle::themed(theme, self.width)
            .border(theme.border_kind_for(state))
            .border_style(theme.border_styles().resolve(state))
            .padding(padding);
        if self.tint_selected && state == VisualState::Selected {
            style = style.style(Style::new().bg(theme.selection));
        }
        style
    }

    fn fit(&self, text: &str, width: usize) -> String {
        truncate_with(text, width, self.theme.ellipsis.marker()).into_owned()
    }

    /// State glyph, icon and title, with the subtitle pushed right.
    fn title_line(&self, inner: usize) -> String {
        let theme = &self.theme;
        let state = self.state();

        let mut prefix = String::new();
        if self.active {
            prefix.push_str(&theme.paint(theme.fg(theme.success), ACTIVE_GLYPH));
            prefix.push(' ');
        }
        if !self.icon.is_empty() {
            prefix.push_str(&self.icon);
            prefix.push(' ');
        }
        let prefix_w = display_width(&prefix);
        let title_style = theme.title_styles().resolve(state).bold();

        if self.subtitle.is_empty() {
            let title = self.fit(&self.title, inner.saturating_sub(prefix_w));
            return format!("{prefix}{}", theme.paint(title_style, &title));
        }

        let subtitle_w = display_width(&self.subtitle);
        let budget = inner.saturating_sub(subtitle_w + prefix_w + 2);
        let title = self.fit(&self.title, budget);
        let gap = inner
            .saturating_sub(prefix_w + display_width(&title) + subtitle_w)
            .max(2);
        format!(
            "{prefix}{}{}{}",
            theme.paint(title_style, &title),
            spaces(gap),
            theme.paint(theme.fg(theme.text_muted), &self.subtitle)
        )
    }

    fn content_lines(&self, inner: usize) -> Vec<String> {
        let theme = &self.theme;
        let mut lines = vec![self.title_line(inner)];
        if !self.description.is_empty() {
            let text = self.fit(&self.description, inner);
            lines.push(theme.paint(theme.fg(theme.text_secondary), &text));
        }
        for item in &self.metadata {
            let text = self.fit(&item.text(), inner);
            lines.push(theme.paint(theme.fg(theme.primary), &text));
        }
        lines
    }

    /// Single-line variant: title line only, one column of padding.
    #[must_use]
    pub fn render_compact(&self) -> String {
        trace_render("card.compact", self.width, || {
            let style = self.box_style(Sides::symmetric(0, 1));
            style.render(&self.title_line(style.inner_width()))
        })
    }
}

impl Widget for Card {
    fn render(&self) -> String {
        trace_render("card", self.width, || {
            let style = self.box_style(Sides::symmetric(1, 2));
            style.render_lines(&self.content_lines(style.inner_width()))
        })
    }
}
