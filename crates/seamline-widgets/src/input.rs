#![forbid(unsafe_code)]

//! Single-line text input.
//!
//! Value editing with a grapheme cursor, a character limit counted in
//! graphemes, and a pure [`TextInput::view`] that scrolls horizontally so
//! the cursor stays visible. Shared by [`SearchField`](crate::SearchField)
//! and [`FormField`](crate::FormField).

use seamline_layout::Alignment;
use seamline_style::{ColorMode, Style, Theme};
use seamline_text::{grapheme_width, pad, spaces, truncate_exact};
use unicode_segmentation::UnicodeSegmentation;

/// A single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Placeholder text.
    placeholder: String,
    /// Maximum length in graphemes (None = unlimited).
    char_limit: Option<usize>,
    /// Whether the input is focused (controls cursor output).
    focused: bool,
    style: Style,
    placeholder_style: Style,
    cursor_style: Style,
    color_mode: ColorMode,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self {
            cursor_style: Style::new().reverse(),
            ..Self::default()
        }
    }

    /// An input styled from `theme`.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            style: theme.fg(theme.text_primary),
            placeholder_style: theme.fg(theme.text_muted),
            color_mode: theme.color_mode,
            ..Self::new()
        }
    }

    // --- Builder methods ---

    /// Set the text value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self.cursor = self.grapheme_count();
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set maximum length in graphemes (builder).
    #[must_use]
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.set_char_limit(Some(limit));
        self
    }

    // --- Value access ---

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, clamping cursor and length.
    ///
    /// Control characters are removed; line breaks and tabs become spaces.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.value = Self::sanitize_input_text(&value);
        self.enforce_limit();
        self.cursor = self.cursor.min(self.grapheme_count());
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Get the cursor position (grapheme index).
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of graphemes in the value.
    pub fn len(&self) -> usize {
        self.grapheme_count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn char_limit(&self) -> Option<usize> {
        self.char_limit
    }

    /// Set or remove the limit. An existing longer value is cut to fit.
    pub fn set_char_limit(&mut self, limit: Option<usize>) {
        self.char_limit = limit;
        self.enforce_limit();
        self.cursor = self.cursor.min(self.grapheme_count());
    }

    /// Check if the input is focused.
    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Set focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_placeholder_style(&mut self, style: Style) {
        self.placeholder_style = style;
    }

    pub fn set_cursor_style(&mut self, style: Style) {
        self.cursor_style = style;
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    // --- Editing operations ---

    fn sanitize_input_text(text: &str) -> String {
        // Map line breaks/tabs to spaces, filter other control chars
        text.chars()
            .map(|c| {
                if c == '\n' || c == '\r' || c == '\t' {
                    ' '
                } else {
                    c
                }
            })
            .filter(|c| !c.is_control())
            .collect()
    }

    /// Insert text at the cursor.
    ///
    /// Line breaks and tabs become spaces, other control characters are
    /// dropped, and the insertion is cut to the remaining character limit.
    pub fn insert_str(&mut self, text: &str) {
        let clean_text = Self::sanitize_input_text(text);
        if clean_text.is_empty() {
            return;
        }

        let current_count = self.grapheme_count();
        let avail = match self.char_limit {
            // Allow one grapheme when full in case it merges (combining mark).
            Some(max) if current_count >= max => 1,
            Some(max) => max - current_count,
            None => usize::MAX,
        };

        let end_byte = clean_text
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .nth(avail)
            .unwrap_or(clean_text.len());
        let to_insert = &clean_text[..end_byte];

        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, to_insert);

        let new_total = self.grapheme_count();
        if self.char_limit.is_some_and(|max| new_total > max) {
            self.value.drain(byte_offset..byte_offset + to_insert.len());
            return;
        }

        let delta = new_total.saturating_sub(current_count);
        self.cursor = (self.cursor + delta).min(new_total);
    }

    /// Insert one character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        // Strict control character filtering to prevent terminal corruption
        if c.is_control() {
            return;
        }

        let old_count = self.grapheme_count();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);

        let new_count = self.grapheme_count();
        if self.char_limit.is_some_and(|max| new_count > max) {
            self.value.drain(byte_offset..byte_offset + c.len_utf8());
            return;
        }

        // A combining mark merges with the previous grapheme; the cursor stays.
        if new_count > old_count {
            self.cursor += 1;
        }
    }

    /// Delete the grapheme before the cursor (backspace).
    pub fn delete_backward(&mut self) {
        if self.cursor > 0 {
            let byte_start = self.grapheme_byte_offset(self.cursor - 1);
            let byte_end = self.grapheme_byte_offset(self.cursor);
            self.value.drain(byte_start..byte_end);
            self.cursor -= 1;
        }
    }

    /// Delete the grapheme under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.grapheme_count() {
            let byte_start = self.grapheme_byte_offset(self.cursor);
            let byte_end = self.grapheme_byte_offset(self.cursor + 1);
            self.value.drain(byte_start..byte_end);
        }
    }

    /// Delete from the start of the previous word to the cursor.
    pub fn delete_word_backward(&mut self) {
        let old_cursor = self.cursor;
        self.move_word_left();
        if self.cursor < old_cursor {
            let byte_start = self.grapheme_byte_offset(self.cursor);
            let byte_end = self.grapheme_byte_offset(old_cursor);
            self.value.drain(byte_start..byte_end);
        }
    }

    // --- Cursor movement ---

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    fn get_grapheme_class(g: &str) -> u8 {
        if g.chars().all(char::is_whitespace) {
            0
        } else if g.chars().any(char::is_alphanumeric) {
            1
        } else {
            2
        }
    }

    /// Move to the start of the previous word.
    pub fn move_word_left(&mut self) {
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let mut pos = self.cursor.min(graphemes.len());

        // 1. Skip separators (whitespace + punctuation)
        while pos > 0 && Self::get_grapheme_class(graphemes[pos - 1]) != 1 {
            pos -= 1;
        }
        // 2. Skip the previous word
        while pos > 0 && Self::get_grapheme_class(graphemes[pos - 1]) == 1 {
            pos -= 1;
        }

        self.cursor = pos;
    }

    /// Move past the current word to the start of the next one.
    pub fn move_word_right(&mut self) {
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let max = graphemes.len();
        let mut pos = self.cursor.min(max);

        while pos < max && Self::get_grapheme_class(graphemes[pos]) == 1 {
            pos += 1;
        }
        while pos < max && Self::get_grapheme_class(graphemes[pos]) != 1 {
            pos += 1;
        }

        self.cursor = pos;
    }

    // --- Rendering ---

    /// Render exactly `width` columns.
    ///
    /// The visible window starts at the smallest grapheme boundary that
    /// keeps the cursor cell on screen. When focused, the cursor cell is
    /// painted with the cursor style; at the end of the value it is a
    /// blank cell. An empty value shows the placeholder.
    #[must_use]
    pub fn view(&self, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        if self.value.is_empty() {
            return self.placeholder_view(width);
        }

        let scroll = self.scroll_for(width);
        let mut before = String::new();
        let mut at_cursor = String::new();
        let mut after = String::new();
        let mut used = 0;
        let mut pos = 0;
        let mut cursor_drawn = false;

        for (i, g) in self.value.graphemes(true).enumerate() {
            let w = grapheme_width(g);
            let start = pos;
            pos += w;
            if start < scroll {
                continue;
            }
            if used + w > width {
                break;
            }
            used += w;
            if i < self.cursor {
                before.push_str(g);
            } else if i == self.cursor && self.focused {
                at_cursor.push_str(g);
                cursor_drawn = true;
            } else {
                after.push_str(g);
            }
        }
        if self.focused && !cursor_drawn && self.cursor >= self.grapheme_count() && used < width {
            at_cursor.push(' ');
            used += 1;
        }

        let mut out = String::with_capacity(self.value.len() + width + 32);
        out.push_str(&self.style.paint(&before, self.color_mode));
        out.push_str(&self.cursor_style.paint(&at_cursor, self.color_mode));
        out.push_str(&self.style.paint(&after, self.color_mode));
        out.push_str(&spaces(width - used));
        out
    }

    fn placeholder_view(&self, width: usize) -> String {
        let fit = |w: usize| pad(&truncate_exact(&self.placeholder, w), w, Alignment::Left);
        if !self.focused {
            return self.placeholder_style.paint(&fit(width), self.color_mode);
        }
        let cursor = self.cursor_style.paint(" ", self.color_mode);
        let rest = self.placeholder_style.paint(&fit(width - 1), self.color_mode);
        format!("{cursor}{rest}")
    }

    /// Columns scrolled off the left edge for a `width`-column view.
    fn scroll_for(&self, width: usize) -> usize {
        let cursor_visual = self.cursor_visual_pos();
        let cursor_cell = self
            .value
            .graphemes(true)
            .nth(self.cursor)
            .map_or(1, grapheme_width)
            .max(1);
        let needed = cursor_visual + cursor_cell;
        if needed <= width {
            return 0;
        }
        let scroll = needed - width;

        // Snap forward so the window never starts inside a wide glyph.
        let mut boundary = 0;
        for g in self.value.graphemes(true) {
            if boundary >= scroll {
                break;
            }
            boundary += grapheme_width(g);
        }
        boundary.max(scroll)
    }

    // --- Internal helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn cursor_visual_pos(&self) -> usize {
        self.value
            .graphemes(true)
            .take(self.cursor)
            .map(grapheme_width)
            .sum()
    }

    fn enforce_limit(&mut self) {
        if let Some(max) = self.char_limit {
            let end = self.grapheme_byte_offset(max);
            self.value.truncate(end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seamline_text::display_width;

    fn plain() -> TextInput {
        let mut input = TextInput::new();
        input.set_color_mode(ColorMode::Plain);
        input
    }

    #[test]
    fn test_empty_input() {
        let input = TextInput::new();
        assert!(input.value().is_empty());
        assert_eq!(input.cursor(), 0);
        assert!(input.is_empty());
    }

    #[test]
    fn test_with_value() {
        let input = TextInput::new().with_value("hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_set_value_clamps_cursor() {
        let mut input = TextInput::new().with_value("hello world");
        input.set_value("hi");
        assert_eq!(input.value(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_set_value_sanitizes() {
        let mut input = TextInput::new();
        input.set_value("a\tb\x1b[2Jc\n");
        assert_eq!(input.value(), "a b[2Jc ");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().with_value("hello");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_insert_char() {
        let mut input = TextInput::new();
        input.insert_char('a');
        input.insert_char('b');
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_insert_char_mid() {
        let mut input = TextInput::new().with_value("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_insert_control_char_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\x1b');
        input.insert_char('\u{7}');
        assert!(input.is_empty());
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::new().with_char_limit(3);
        for c in "abcdef".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_char_limit_counts_graphemes() {
        let mut input = TextInput::new().with_char_limit(2);
        input.insert_str("🇯🇵🇺🇸🇫🇷");
        assert_eq!(input.value(), "🇯🇵🇺🇸");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_combining_mark_merges_at_limit() {
        let mut input = TextInput::new().with_char_limit(1);
        input.insert_char('e');
        input.insert_char('\u{0301}');
        assert_eq!(input.value(), "e\u{0301}");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_lowering_limit_cuts_value() {
        let mut input = TextInput::new().with_value("abcdef");
        input.set_char_limit(Some(4));
        assert_eq!(input.value(), "abcd");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_insert_str_sanitizes_and_advances() {
        let mut input = TextInput::new();
        input.insert_str("one\ttwo\u{7}");
        assert_eq!(input.value(), "one two");
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn test_delete_backward() {
        let mut input = TextInput::new().with_value("hello");
        input.delete_backward();
        assert_eq!(input.value(), "hell");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_delete_backward_at_start() {
        let mut input = TextInput::new().with_value("hello");
        input.move_home();
        input.delete_backward();
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete_forward() {
        let mut input = TextInput::new().with_value("hello");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.value(), "ello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete_forward_at_end() {
        let mut input = TextInput::new().with_value("hello");
        input.delete_forward();
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().with_value("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_word_movement() {
        let mut input = TextInput::new().with_value("hello, big world");
        input.move_word_left();
        assert_eq!(input.cursor(), 11);
        input.move_word_left();
        assert_eq!(input.cursor(), 7);
        input.move_word_left();
        assert_eq!(input.cursor(), 0);
        input.move_word_right();
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut input = TextInput::new().with_value("find the thing");
        input.delete_word_backward();
        assert_eq!(input.value(), "find the ");
        assert_eq!(input.cursor(), 9);
    }

    #[test]
    fn test_unicode_grapheme_handling() {
        let mut input = TextInput::new().with_value("café");
        assert_eq!(input.len(), 4);
        input.delete_backward();
        assert_eq!(input.value(), "caf");
    }

    #[test]
    fn test_flag_emoji_grapheme_delete_and_cursor() {
        let mut input = TextInput::new().with_value("a🇺🇸b");
        assert_eq!(input.len(), 3);
        input.move_left();
        input.delete_backward();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_combining_grapheme_delete_and_cursor() {
        let mut input = TextInput::new().with_value("a\u{0301}b");
        assert_eq!(input.len(), 2);
        input.move_left();
        input.delete_backward();
        assert_eq!(input.value(), "b");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn view_shows_placeholder_when_empty() {
        let mut input = plain().with_placeholder("Type to search...");
        assert_eq!(input.view(8), "Type to ");
        input.set_focused(true);
        assert_eq!(input.view(8), " Type to");
    }

    #[test]
    fn view_pads_short_values() {
        let input = plain().with_value("abc");
        assert_eq!(input.view(6), "abc   ");
    }

    #[test]
    fn view_scrolls_to_cursor() {
        let mut input = plain().with_value("abcdefgh");
        input.set_focused(true);
        // Cursor at end needs one blank cell: window shows "efgh" + cursor.
        assert_eq!(input.view(5), "efgh ");
        input.move_home();
        assert_eq!(input.view(5), "abcde");
    }

    #[test]
    fn view_never_starts_inside_wide_glyph() {
        let mut input = plain().with_value("日本語");
        input.set_focused(true);
        let view = input.view(4);
        assert_eq!(view, "語  ");
        assert_eq!(display_width(&view), 4);
    }

    #[test]
    fn view_paints_cursor_when_focused() {
        let mut input = TextInput::new().with_value("ab");
        input.set_focused(true);
        input.move_home();
        assert_eq!(input.view(3), "\x1b[7ma\x1b[0mb ");
    }

    #[test]
    fn view_width_zero_is_empty() {
        assert_eq!(TextInput::new().with_value("x").view(0), "");
    }
}
