#![forbid(unsafe_code)]

//! Search field: a prompt and a [`TextInput`] inside a rounded box.

use seamline_layout::Sides;
use seamline_style::{BorderKind, Color, Theme};
use seamline_text::{display_width, truncate_exact};

use crate::box_style::BoxStyle;
use crate::input::TextInput;
use crate::{Widget, trace_render};

/// Narrowest input area, in columns, prompt included.
const MIN_INNER_WIDTH: usize = 10;

/// Search field widget.
#[derive(Debug, Clone)]
pub struct SearchField {
    input: TextInput,
    prompt: String,
    width: usize,
    active: bool,
    padding: Sides,
    border_color: Color,
    focus_border_color: Color,
    theme: Theme,
}

impl SearchField {
    pub const DEFAULT_PROMPT: &'static str = "🔍 ";
    pub const DEFAULT_PLACEHOLDER: &'static str = "Type to search...";
    pub const DEFAULT_CHAR_LIMIT: usize = 100;

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let input = TextInput::themed(&theme)
            .with_placeholder(Self::DEFAULT_PLACEHOLDER)
            .with_char_limit(Self::DEFAULT_CHAR_LIMIT);
        Self {
            input,
            prompt: Self::DEFAULT_PROMPT.to_string(),
            width: 40,
            active: false,
            padding: Sides::symmetric(0, 1),
            border_color: theme.border,
            focus_border_color: theme.border_focus,
            theme,
        }
    }

    /// Activate the field and show the cursor.
    pub fn focus(&mut self) -> &mut Self {
        self.set_active(true)
    }

    pub fn blur(&mut self) -> &mut Self {
        self.set_active(false)
    }

    pub fn set_active(&mut self, active: bool) -> &mut Self {
        self.active = active;
        self.input.set_focused(active);
        self
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.input.set_value(value);
        self.input.move_end();
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.input.clear();
        self
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) -> &mut Self {
        self.prompt = prompt.into();
        self
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.input.set_placeholder(placeholder);
        self
    }

    pub fn set_char_limit(&mut self, limit: Option<usize>) -> &mut Self {
        self.input.set_char_limit(limit);
        self
    }

    /// Padding as (vertical, horizontal) or full [`Sides`].
    pub fn set_padding(&mut self, padding: impl Into<Sides>) -> &mut Self {
        self.padding = padding.into();
        self
    }

    /// Border colors for the idle and active states.
    pub fn set_border_colors(&mut self, normal: Color, focused: Color) -> &mut Self {
        self.border_color = normal;
        self.focus_border_color = focused;
        self
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    /// The input being edited, for key handling by the caller.
    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    #[must_use]
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Content columns inside the border and padding.
    #[must_use]
    pub fn inner_width(&self) -> usize {
        self.width
            .saturating_sub(2 + self.padding.horizontal())
            .max(MIN_INNER_WIDTH)
    }

    /// Width of every rendered row.
    #[must_use]
    pub fn outer_width(&self) -> usize {
        self.inner_width() + 2 + self.padding.horizontal()
    }

    fn line(&self, inner: usize) -> String {
        let theme = &self.theme;
        let prompt_w = display_width(&self.prompt).min(inner);
        let prompt = truncate_exact(&self.prompt, prompt_w);
        let mut line = theme.paint(theme.fg(theme.primary), &prompt);
        line.push_str(&self.input.view(inner - display_width(&prompt)));
        line
    }
}

impl Widget for SearchField {
    fn render(&self) -> String {
        trace_render("search", self.outer_width(), || {
            let border = if self.active {
                self.focus_border_color
            } else {
                self.border_color
            };
            let style = BoxStyle::themed(&self.theme, self.outer_width())
                .border(BorderKind::Rounded)
                .border_style(self.theme.fg(border))
                .padding(self.padding);
            style.render(&self.line(style.inner_width()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_uniform, plain_theme};
    use seamline_style::Style;

    #[test]
    fn idle_shows_prompt_and_placeholder() {
        let field = SearchField::new(plain_theme());
        let out = field.render();
        assert_uniform(&out, 40);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with('╭'));
        assert!(rows[1].starts_with("│ 🔍 Type to search..."));
    }

    #[test]
    fn typed_value_replaces_placeholder() {
        let mut field = SearchField::new(plain_theme());
        field.set_value("git");
        assert_eq!(field.value(), "git");
        let out = field.render();
        assert!(out.contains("🔍 git"));
        assert!(!out.contains("Type to search"));
        field.clear();
        assert!(field.render().contains("Type to search"));
    }

    #[test]
    fn narrow_width_keeps_minimum_input() {
        let mut field = SearchField::new(plain_theme());
        field.set_width(4);
        assert_eq!(field.inner_width(), 10);
        assert_uniform(&field.render(), 14);
    }

    #[test]
    fn char_limit_defaults_to_hundred() {
        let mut field = SearchField::new(plain_theme());
        field.set_value("x".repeat(150));
        assert_eq!(field.value().len(), 100);
        field.set_char_limit(None).set_value("y".repeat(150));
        assert_eq!(field.value().len(), 150);
    }

    #[test]
    fn long_value_scrolls_within_width() {
        let mut field = SearchField::new(plain_theme());
        field.set_width(20).focus();
        field.input_mut().insert_str("a long query that does not fit");
        let out = field.render();
        assert_uniform(&out, 20);
        assert!(out.contains("fit"));
    }

    #[test]
    fn focus_switches_border_color() {
        let theme = Theme::default();
        let mut field = SearchField::new(theme);
        let focus = Style::new().fg(theme.border_focus).sgr().unwrap_or_default();
        assert!(!field.render().contains(&focus));
        field.focus();
        assert!(field.is_active());
        assert!(field.input().focused());
        assert!(field.render().contains(&focus));
        field.blur();
        assert!(!field.render().contains(&focus));
    }

    #[test]
    fn custom_prompt_and_padding() {
        let mut field = SearchField::new(plain_theme());
        field.set_prompt("> ").set_padding((0, 0)).set_width(12);
        field.set_value("abc");
        let out = field.render();
        assert_eq!(out.split('\n').nth(1), Some("│> abc     │"));
    }
}
