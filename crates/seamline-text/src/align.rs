#![forbid(unsafe_code)]

//! Fitting text into a fixed number of columns.

use seamline_layout::{Alignment, align_offset};

use crate::truncate::{ELLIPSIS, truncate_with};
use crate::width::display_width;

/// Truncate `text` to `width` columns, then space-fill to exactly `width`.
///
/// Centered text puts the odd column of slack on the right.
///
/// ```
/// use seamline_layout::Alignment;
/// use seamline_text::pad;
///
/// assert_eq!(pad("ab", 5, Alignment::Left), "ab   ");
/// assert_eq!(pad("ab", 5, Alignment::Center), " ab  ");
/// assert_eq!(pad("ab", 5, Alignment::Right), "   ab");
/// ```
#[must_use]
pub fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    pad_with(text, width, alignment, ELLIPSIS)
}

/// [`pad`] with a custom truncation marker.
#[must_use]
pub fn pad_with(text: &str, width: usize, alignment: Alignment, ellipsis: &str) -> String {
    let fitted = truncate_with(text, width, ellipsis);
    let used = display_width(&fitted);
    // A wide glyph dropped at the edge can leave `used` one short.
    let slack = width.saturating_sub(used);
    let left = align_offset(width, used, alignment);
    let right = slack - left;

    let mut out = String::with_capacity(fitted.len() + slack);
    push_spaces(&mut out, left);
    out.push_str(&fitted);
    push_spaces(&mut out, right);
    out
}

/// `count` spaces.
#[must_use]
pub fn spaces(count: usize) -> String {
    " ".repeat(count)
}

/// Repeat `glyph` until it fills `width` columns.
///
/// A two-column glyph that does not divide `width` evenly leaves the last
/// column as a space so the result is always exactly `width` wide.
#[must_use]
pub fn repeat_to_width(glyph: &str, width: usize) -> String {
    let glyph_width = display_width(glyph);
    if glyph_width == 0 {
        return spaces(width);
    }
    let count = width / glyph_width;
    let mut out = glyph.repeat(count);
    push_spaces(&mut out, width - count * glyph_width);
    out
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_each_alignment() {
        assert_eq!(pad("abc", 7, Alignment::Left), "abc    ");
        assert_eq!(pad("abc", 7, Alignment::Center), "  abc  ");
        assert_eq!(pad("abc", 7, Alignment::Right), "    abc");
    }

    #[test]
    fn odd_slack_goes_right_when_centered() {
        assert_eq!(pad("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn overlong_text_is_truncated_first() {
        assert_eq!(pad("hello world", 6, Alignment::Right), "hello…");
    }

    #[test]
    fn wide_glyph_at_edge_is_backfilled() {
        // "日本語" at 5 columns: "日本…" is exactly 5.
        assert_eq!(pad("日本語", 5, Alignment::Left), "日本…");
        // At 3 columns with no marker room: "日…" is 3.
        assert_eq!(pad("日本語", 3, Alignment::Left), "日…");
        // At 2 columns: budget 1 for text, only the marker remains.
        assert_eq!(pad("日本語", 2, Alignment::Left), "… ");
    }

    #[test]
    fn styled_text_measures_visibly() {
        let painted = "\x1b[31mok\x1b[0m";
        assert_eq!(pad(painted, 4, Alignment::Left), format!("{painted}  "));
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(pad("abc", 0, Alignment::Center), "");
    }

    #[test]
    fn ascii_marker() {
        assert_eq!(pad_with("hello world", 8, Alignment::Left, "..."), "hello...");
    }

    #[test]
    fn repeat_fills_exactly() {
        assert_eq!(repeat_to_width("─", 4), "────");
        assert_eq!(repeat_to_width("日", 5), "日日 ");
        assert_eq!(repeat_to_width("", 2), "  ");
    }
}
