#![forbid(unsafe_code)]

//! The box model: border, padding and content in a fixed outer width.
//!
//! ```text
//! ┌──────────┐   outer_width = 12
//! │  text    │   border columns = 2
//! └──────────┘   padding left + right = 4, inner width = 6
//! ```
//!
//! [`BoxStyle::render`] pads every content line to the inner width (after
//! truncating anything wider), adds padding and border glyphs, and paints
//! them. Every row of the result is exactly [`BoxStyle::outer_width`]
//! columns wide, including empty content and content full of wide glyphs.

use seamline_layout::{Alignment, Sides};
use seamline_style::{BorderKind, BorderSet, ColorMode, Style, Theme};
use seamline_text::{ELLIPSIS, display_width, pad_with, sanitize, spaces};

use crate::borders::Borders;

/// Border, padding and size of a rectangular block.
///
/// `BoxStyle` is pure configuration: it owns no content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    border: BorderKind,
    borders: Borders,
    glyphs: Option<BorderSet>,
    padding: Sides,
    outer_width: usize,
    outer_height: Option<usize>,
    border_style: Style,
    style: Style,
    alignment: Alignment,
    color_mode: ColorMode,
    ellipsis: &'static str,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::new(0)
    }
}

impl BoxStyle {
    /// Rounded border on all sides, no padding.
    pub const fn new(outer_width: usize) -> Self {
        Self {
            border: BorderKind::Rounded,
            borders: Borders::ALL,
            glyphs: None,
            padding: Sides::all(0),
            outer_width,
            outer_height: None,
            border_style: Style::new(),
            style: Style::new(),
            alignment: Alignment::Left,
            color_mode: ColorMode::Ansi,
            ellipsis: ELLIPSIS,
        }
    }

    /// A box using the theme's normal border kind, border color, color mode
    /// and truncation marker.
    pub fn themed(theme: &Theme, outer_width: usize) -> Self {
        Self::new(outer_width)
            .border(theme.border_kind)
            .border_style(theme.fg(theme.border))
            .color_mode(theme.color_mode)
            .ellipsis(theme.ellipsis.marker())
    }

    /// Inner content width for a box of `outer_width` columns.
    ///
    /// `outer - border columns - horizontal padding`, never less than 1.
    #[must_use]
    pub fn derive(outer_width: usize, border: BorderKind, padding: Sides) -> usize {
        Self::new(outer_width)
            .border(border)
            .padding(padding)
            .inner_width()
    }

    #[must_use]
    pub const fn border(mut self, border: BorderKind) -> Self {
        self.border = border;
        self
    }

    /// Sides that carry a border. Ignored for [`BorderKind::None`].
    #[must_use]
    pub const fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Replace the glyph table of the border kind.
    #[must_use]
    pub const fn glyphs(mut self, glyphs: BorderSet) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    #[must_use]
    pub const fn width(mut self, outer_width: usize) -> Self {
        self.outer_width = outer_width;
        self
    }

    /// Fix the outer height. Content is clipped or extended with blank rows.
    #[must_use]
    pub const fn height(mut self, outer_height: usize) -> Self {
        self.outer_height = Some(outer_height);
        self
    }

    #[must_use]
    pub const fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Style painted over content and padding (a background tint, say).
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub const fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    #[must_use]
    pub const fn ellipsis(mut self, marker: &'static str) -> Self {
        self.ellipsis = marker;
        self
    }

    /// Sides that actually draw a border.
    #[must_use]
    pub const fn effective_borders(&self) -> Borders {
        match self.border {
            BorderKind::None => Borders::NONE,
            _ => self.borders,
        }
    }

    /// Glyphs used for the border, if any.
    #[must_use]
    pub fn border_set(&self) -> Option<BorderSet> {
        match self.border {
            BorderKind::None => None,
            kind => self.glyphs.or(kind.border_set()),
        }
    }

    #[must_use]
    pub const fn padding_sides(&self) -> Sides {
        self.padding
    }

    /// Inner content width, never less than 1.
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        let frame = self.effective_borders().columns() + self.padding.horizontal();
        let inner = self.outer_width.saturating_sub(frame);
        if inner == 0 { 1 } else { inner }
    }

    /// Width of every rendered row.
    ///
    /// Equal to the configured width unless that is too small to hold the
    /// border, the padding and one content column.
    #[must_use]
    pub const fn outer_width(&self) -> usize {
        self.inner_width() + self.effective_borders().columns() + self.padding.horizontal()
    }

    /// Inner content height, if the outer height is fixed. Never less than 1.
    #[must_use]
    pub const fn inner_height(&self) -> Option<usize> {
        match self.outer_height {
            Some(height) => {
                let frame = self.effective_borders().rows() + self.padding.vertical();
                let inner = height.saturating_sub(frame);
                Some(if inner == 0 { 1 } else { inner })
            }
            None => None,
        }
    }

    /// Number of rows [`render`](Self::render) produces for `content_rows`
    /// content lines.
    #[must_use]
    pub const fn outer_height(&self, content_rows: usize) -> usize {
        let rows = match self.inner_height() {
            Some(inner) => inner,
            None if content_rows == 0 => 1,
            None => content_rows,
        };
        rows + self.effective_borders().rows() + self.padding.vertical()
    }

    /// Render newline-separated `content` inside the box.
    #[must_use]
    pub fn render(&self, content: &str) -> String {
        self.render_lines(&crate::block_lines(content))
    }

    /// Render pre-split content lines inside the box.
    #[must_use]
    pub fn render_lines<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let inner = self.inner_width();
        let interior = inner + self.padding.horizontal();
        let borders = self.effective_borders();
        let set = self.border_set().unwrap_or(BorderSet::SINGLE);

        let mut body: Vec<String> = lines
            .iter()
            .map(|line| self.content_row(line.as_ref(), inner))
            .collect();
        if body.is_empty() {
            body.push(self.content_row("", inner));
        }
        if let Some(height) = self.inner_height() {
            body.truncate(height);
            while body.len() < height {
                body.push(self.content_row("", inner));
            }
        }

        let blank = self.fill(&spaces(interior));
        let mut rows = Vec::with_capacity(self.outer_height(body.len()));
        if borders.contains(Borders::TOP) {
            rows.push(self.edge_row(borders, set.top_left, set.top, set.top_right, interior));
        }
        let padded = std::iter::repeat_n(&blank, self.padding.top)
            .chain(body.iter())
            .chain(std::iter::repeat_n(&blank, self.padding.bottom));
        for row in padded {
            let mut line = String::with_capacity(row.len() + 32);
            if borders.contains(Borders::LEFT) {
                line.push_str(&self.paint_glyph(set.left));
            }
            line.push_str(row);
            if borders.contains(Borders::RIGHT) {
                line.push_str(&self.paint_glyph(set.right));
            }
            rows.push(line);
        }
        if borders.contains(Borders::BOTTOM) {
            rows.push(self.edge_row(
                borders,
                set.bottom_left,
                set.bottom,
                set.bottom_right,
                interior,
            ));
        }

        debug_assert!(
            rows.iter()
                .all(|row| display_width(row) == self.outer_width()),
            "box rows must all be {} columns",
            self.outer_width()
        );
        rows.join("\n")
    }

    fn content_row(&self, line: &str, inner: usize) -> String {
        let clean = sanitize(line);
        let fitted = pad_with(&clean, inner, self.alignment, self.ellipsis);
        let mut row = String::with_capacity(fitted.len() + self.padding.horizontal());
        row.push_str(&spaces(self.padding.left));
        row.push_str(&fitted);
        row.push_str(&spaces(self.padding.right));
        self.fill(&row)
    }

    fn fill(&self, row: &str) -> String {
        self.style.paint(row, self.color_mode)
    }

    fn paint_glyph(&self, glyph: char) -> String {
        let mut buf = [0u8; 4];
        self.border_style
            .paint(glyph.encode_utf8(&mut buf), self.color_mode)
    }

    fn edge_row(
        &self,
        borders: Borders,
        left: char,
        middle: char,
        right: char,
        interior: usize,
    ) -> String {
        let mut edge = String::with_capacity((interior + 2) * 3);
        if borders.contains(Borders::LEFT) {
            edge.push(left);
        }
        edge.extend(std::iter::repeat_n(middle, interior));
        if borders.contains(Borders::RIGHT) {
            edge.push(right);
        }
        self.border_style.paint(&edge, self.color_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_uniform;
    use seamline_style::Color;

    fn plain(width: usize) -> BoxStyle {
        BoxStyle::new(width).color_mode(ColorMode::Plain)
    }

    #[test]
    fn derive_subtracts_border_and_padding() {
        let inner = BoxStyle::derive(10, BorderKind::Single, Sides::new(0, 2, 0, 2));
        assert_eq!(inner, 4);
    }

    #[test]
    fn derive_clamps_to_one() {
        assert_eq!(BoxStyle::derive(3, BorderKind::Double, Sides::all(2)), 1);
        assert_eq!(BoxStyle::derive(0, BorderKind::None, Sides::all(0)), 1);
    }

    #[test]
    fn no_border_kind_consumes_no_columns() {
        assert_eq!(BoxStyle::derive(10, BorderKind::None, Sides::all(0)), 10);
    }

    #[test]
    fn outer_width_grows_when_too_small() {
        let style = BoxStyle::new(3).padding((0, 2));
        assert_eq!(style.inner_width(), 1);
        assert_eq!(style.outer_width(), 7);
        assert_uniform(&style.render("abc"), 7);
    }

    #[test]
    fn renders_single_border() {
        let out = plain(8).border(BorderKind::Single).render("hi");
        assert_eq!(out, "┌──────┐\n│hi    │\n└──────┘");
    }

    #[test]
    fn renders_padding() {
        let out = plain(8)
            .border(BorderKind::Rounded)
            .padding((1, 1))
            .render("ab");
        let expected = [
            "╭──────╮",
            "│      │",
            "│ ab   │",
            "│      │",
            "╰──────╯",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_content_is_one_blank_row() {
        let out = plain(4).border(BorderKind::Single).render("");
        assert_eq!(out, "┌──┐\n│  │\n└──┘");
    }

    #[test]
    fn overlong_content_is_truncated() {
        let out = plain(8).border(BorderKind::Single).render("hello world");
        assert_eq!(out.lines().nth(1), Some("│hello…│"));
    }

    #[test]
    fn wide_glyphs_keep_rows_uniform() {
        let style = plain(9).border(BorderKind::Thick).padding((0, 1));
        let out = style.render("日本語テスト\n🧩 ok\n⚙\u{FE0F} gear");
        assert_uniform(&out, 9);
    }

    #[test]
    fn fixed_height_clips_and_extends() {
        let style = plain(6).border(BorderKind::Single).height(4);
        let clipped = style.render("a\nb\nc\nd");
        assert_eq!(clipped.lines().count(), 4);
        assert_eq!(clipped.lines().nth(2), Some("│b   │"));
        let extended = style.render("a");
        assert_eq!(extended, "┌────┐\n│a   │\n│    │\n└────┘");
    }

    #[test]
    fn partial_borders() {
        let out = plain(6)
            .border(BorderKind::Rounded)
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .render("x");
        assert_eq!(out, "│x   │\n╰────╯");
    }

    #[test]
    fn glyph_override() {
        let set = BorderSet::ROUNDED.with_bottom('┘', ' ', '└');
        let out = plain(5).glyphs(set).render("a");
        assert_eq!(out.lines().last(), Some("┘   └"));
    }

    #[test]
    fn alignment_applies_to_content() {
        let out = plain(7)
            .border(BorderKind::None)
            .alignment(Alignment::Right)
            .render("ab\nc");
        assert_eq!(out, "     ab\n      c");
    }

    #[test]
    fn cursor_moving_sequences_are_removed() {
        let out = plain(6).border(BorderKind::None).render("a\x1b[2Jb\rc");
        assert_eq!(out, "abc   ");
    }

    #[test]
    fn border_and_fill_are_painted() {
        let out = BoxStyle::new(4)
            .border(BorderKind::Single)
            .border_style(Style::new().fg(Color::Indexed(240)))
            .style(Style::new().bg(Color::Indexed(237)))
            .render("a");
        assert_uniform(&out, 4);
        assert!(out.starts_with("\x1b[38;5;240m┌──┐\x1b[0m"));
        assert!(out.contains("\x1b[48;5;237ma \x1b[0m"));
    }

    #[test]
    fn ascii_ellipsis_marker() {
        let out = plain(8)
            .border(BorderKind::None)
            .ellipsis("...")
            .render("hello world");
        assert_eq!(out, "hello...");
    }

    #[test]
    fn themed_uses_theme_settings() {
        let theme = Theme::builder()
            .border_kind(BorderKind::Double)
            .color_mode(ColorMode::Plain)
            .build();
        let out = BoxStyle::themed(&theme, 4).render("");
        assert_eq!(out, "╔══╗\n║  ║\n╚══╝");
    }

    #[test]
    fn outer_height_counts_frame() {
        let style = BoxStyle::new(10).padding((1, 2));
        assert_eq!(style.outer_height(3), 7);
        assert_eq!(style.outer_height(0), 5);
        assert_eq!(style.height(4).inner_height(), Some(1));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = BorderKind> {
        proptest::sample::select(BorderKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn every_row_is_outer_width(
            content in "[a-z日🧩 \n]{0,40}",
            width in 0usize..60,
            kind in arb_kind(),
            pad_v in 0usize..3,
            pad_h in 0usize..4,
        ) {
            let style = BoxStyle::new(width).border(kind).padding((pad_v, pad_h));
            let out = style.render(&content);
            let expected = style.outer_width();
            prop_assert!(expected >= width);
            for row in out.split('\n') {
                prop_assert_eq!(display_width(row), expected);
            }
        }
    }
}
