#![forbid(unsafe_code)]

//! Display width of characters, grapheme clusters, and strings in terminal
//! cells.
//!
//! # Rules
//!
//! 1. Control characters are zero width.
//! 2. Pictographs in [`WIDE_PICTOGRAPH_RANGES`](crate::width_table::WIDE_PICTOGRAPH_RANGES)
//!    are two columns; everything else follows East Asian Width.
//! 3. A multi-scalar grapheme is measured as one unit:
//!    - a regional indicator pair (flag) is 2;
//!    - a trailing VS16, skin tone, or keycap makes it 2;
//!    - a ZWJ makes it 2 only after a pictograph base;
//!    - a trailing VS15 makes it 1;
//!    - otherwise it is as wide as its base (combining marks add nothing).
//! 4. Escape sequences are invisible.
//!
//! Rule 3 is where one-column drift comes from: `⚙️` is `U+2699 U+FE0F`, a
//! narrow base plus a zero-width selector, yet terminals draw it two wide.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::ansi::strip_ansi;
use crate::width_table::{self, Modifier};

/// Display width of a single scalar.
///
/// - `0` for control characters, combining marks, and zero-width scalars
/// - `2` for wide characters (CJK, fullwidth forms, pictographs)
/// - `1` otherwise
#[inline]
#[must_use]
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    if width_table::is_wide_pictograph(c) {
        return 2;
    }
    c.width().unwrap_or(0)
}

/// Display width of a grapheme cluster.
///
/// # Examples
/// ```
/// use seamline_text::grapheme_width;
///
/// assert_eq!(grapheme_width("e\u{0301}"), 1);
/// assert_eq!(grapheme_width("⚙\u{FE0F}"), 2);
/// assert_eq!(grapheme_width("🇺🇸"), 2);
/// ```
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }
    if width_table::is_regional_indicator(first) {
        return 2;
    }

    let mut narrow = false;
    for c in chars {
        match width_table::modifier(c) {
            Some(Modifier::Wide) => return 2,
            Some(Modifier::Narrow) => narrow = true,
            Some(Modifier::Joiner) if width_table::is_pictograph_base(first) => return 2,
            Some(Modifier::Joiner) | None => {}
        }
    }
    if narrow {
        return 1;
    }
    char_width(first)
}

/// Width of printable ASCII text, or `None` if the fast path does not apply.
///
/// For printable ASCII (0x20-0x7E) the width equals the byte length.
#[inline]
#[must_use]
pub fn ascii_width(text: &str) -> Option<usize> {
    text.bytes()
        .all(|b| (0x20..0x7F).contains(&b))
        .then_some(text.len())
}

/// Display width of a string in terminal cells.
///
/// Escape sequences are ignored, so painted text measures the same as its
/// plain form. Printable ASCII takes a byte-count fast path; with the
/// `thread_local_cache` feature everything else goes through a per-thread
/// [`WidthCache`](crate::cache::WidthCache).
#[must_use]
pub fn display_width(text: &str) -> usize {
    if let Some(width) = ascii_width(text) {
        return width;
    }
    #[cfg(feature = "thread_local_cache")]
    {
        crate::cache::with_thread_cache(|cache| cache.get_or_compute(text))
    }
    #[cfg(not(feature = "thread_local_cache"))]
    {
        measure(text)
    }
}

/// Uncached measurement used by [`display_width`] and the width cache.
#[must_use]
pub(crate) fn measure(text: &str) -> usize {
    strip_ansi(text).graphemes(true).map(grapheme_width).sum()
}

/// Check if a string contains any glyph wider than one column.
#[must_use]
pub fn has_wide_chars(text: &str) -> bool {
    strip_ansi(text)
        .graphemes(true)
        .any(|g| grapheme_width(g) > 1)
}
