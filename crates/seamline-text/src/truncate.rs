#![forbid(unsafe_code)]

//! Text truncation with a configurable marker.
//!
//! Truncation walks glyphs left to right and stops before the first one that
//! would overflow the budget, so a two-column glyph is either kept whole or
//! dropped whole. Escape sequences pass through with zero width; when the
//! kept prefix leaves a style open, a reset is appended after the marker so
//! the style never bleeds into whatever follows.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::ansi::{Segment, is_sgr, is_sgr_reset, segments};
use crate::width::{display_width, grapheme_width};

/// Default truncation marker (one column).
pub const ELLIPSIS: &str = "…";

const RESET: &str = "\x1b[0m";

/// Truncate `text` to `max_width` columns, appending [`ELLIPSIS`] when cut.
///
/// # Examples
/// ```
/// use seamline_text::truncate;
///
/// assert_eq!(truncate("hello world", 6), "hello…");
/// assert_eq!(truncate("日本語テスト", 5), "日本…");
/// assert_eq!(truncate("short", 10), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> Cow<'_, str> {
    truncate_with(text, max_width, ELLIPSIS)
}

/// Truncate `text` to `max_width` columns, appending `ellipsis` when cut.
///
/// - `max_width == 0` yields an empty string.
/// - Text that already fits is returned borrowed, unchanged.
/// - If `ellipsis` alone is wider than `max_width`, the marker itself is
///   truncated and no text is kept.
#[must_use]
pub fn truncate_with<'a>(text: &'a str, max_width: usize, ellipsis: &str) -> Cow<'a, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    if display_width(text) <= max_width {
        return Cow::Borrowed(text);
    }

    let ellipsis_width = display_width(ellipsis);
    if ellipsis_width > max_width {
        return Cow::Owned(truncate_exact(ellipsis, max_width).into_owned());
    }

    let (mut result, styled) = take_prefix(text, max_width - ellipsis_width);
    result.push_str(ellipsis);
    if styled {
        result.push_str(RESET);
    }
    Cow::Owned(result)
}

/// Truncate `text` to at most `max_width` columns with no marker.
#[must_use]
pub fn truncate_exact(text: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(text) <= max_width {
        return Cow::Borrowed(text);
    }
    let (mut result, styled) = take_prefix(text, max_width);
    if styled {
        result.push_str(RESET);
    }
    Cow::Owned(result)
}

/// Copy the longest prefix of `text` that fits in `budget` columns.
///
/// Returns the prefix and whether an SGR style is still open at its end.
fn take_prefix(text: &str, budget: usize) -> (String, bool) {
    let mut out = String::with_capacity(text.len().min(budget * 4 + 16));
    let mut used = 0;
    let mut styled = false;

    'walk: for segment in segments(text) {
        match segment {
            Segment::Escape(seq) => {
                if is_sgr(seq) {
                    styled = !is_sgr_reset(seq);
                }
                out.push_str(seq);
            }
            Segment::Text(run) => {
                for grapheme in run.graphemes(true) {
                    let width = grapheme_width(grapheme);
                    if used + width > budget {
                        break 'walk;
                    }
                    out.push_str(grapheme);
                    used += width;
                }
            }
        }
    }
    (out, styled)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                "[a-z ]{1,4}",
                Just("日".to_string()),
                Just("テ".to_string()),
                Just("🧩".to_string()),
                Just("⚙\u{FE0F}".to_string()),
                Just("e\u{0301}".to_string()),
                Just("\x1b[31m".to_string()),
                Just("\x1b[0m".to_string()),
            ],
            0..12,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn never_exceeds_budget(text in arb_text(), max in 0usize..30) {
            prop_assert!(display_width(&truncate(&text, max)) <= max);
            prop_assert!(display_width(&truncate_exact(&text, max)) <= max);
            prop_assert!(display_width(&truncate_with(&text, max, "...")) <= max);
        }

        #[test]
        fn untouched_when_it_fits(text in arb_text()) {
            let width = display_width(&text).max(1);
            let out = truncate(&text, width);
            prop_assert_eq!(out.as_ref(), text.as_str());
        }

        #[test]
        fn cut_text_ends_with_marker(text in arb_text(), max in 1usize..30) {
            if display_width(&text) > max {
                let out = truncate(&text, max);
                let visible = crate::ansi::strip_ansi(&out).into_owned();
                prop_assert!(visible.ends_with(ELLIPSIS));
            }
        }

        #[test]
        fn prefix_is_a_glyph_prefix(text in arb_text(), max in 0usize..30) {
            let visible = crate::ansi::strip_ansi(&text).into_owned();
            let cut = crate::ansi::strip_ansi(&truncate_exact(&text, max)).into_owned();
            prop_assert!(visible.starts_with(&cut));
        }
    }
}
