#![forbid(unsafe_code)]

//! Text measurement for Seamline.
//!
//! # Role in Seamline
//! Every border, seam, and padded line depends on knowing exactly how many
//! terminal columns a string occupies. `seamline-text` owns that question:
//! glyph width, escape-aware measurement, truncation that never splits a
//! wide glyph, and fixed-width padding.
//!
//! # This crate provides
//! - [`display_width`], [`grapheme_width`], [`char_width`]
//! - [`strip_ansi`] and [`sanitize`] for painted strings
//! - [`truncate`], [`truncate_with`], [`truncate_exact`]
//! - [`pad`] for fitting text into a column budget
//! - [`WidthCache`] for memoized measurement

pub mod align;
pub mod ansi;
pub mod cache;
pub mod truncate;
pub mod width;
pub mod width_table;

pub use align::{pad, pad_with, repeat_to_width, spaces};
pub use ansi::{sanitize, strip_ansi};
pub use cache::{WidthCache, WidthCacheStats};
pub use truncate::{ELLIPSIS, truncate, truncate_exact, truncate_with};
pub use width::{ascii_width, char_width, display_width, grapheme_width, has_wide_chars};

/// Width of the widest line in a multi-line block.
#[must_use]
pub fn block_width(block: &str) -> usize {
    block.lines().map(display_width).max().unwrap_or(0)
}
