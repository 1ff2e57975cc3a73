#![forbid(unsafe_code)]

//! Joining and placing rendered blocks.

use seamline_layout::{Alignment, VerticalAlignment, align_offset, vertical_offset};
use seamline_text::{block_width, pad, spaces, truncate_exact};

use crate::block_lines;

/// Join blocks left to right.
///
/// Shorter blocks are extended with blank rows of their own width, placed
/// according to `alignment`, so every output row has the same width.
#[must_use]
pub fn join_horizontal(blocks: &[&str], alignment: VerticalAlignment) -> String {
    let split: Vec<(Vec<&str>, usize)> = blocks
        .iter()
        .map(|block| (block_lines(block), block_width(block)))
        .collect();
    let height = split.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);

    let mut rows = vec![String::new(); height];
    for (lines, width) in &split {
        let top = vertical_offset(height, lines.len(), alignment);
        for (y, row) in rows.iter_mut().enumerate() {
            match y.checked_sub(top).and_then(|i| lines.get(i)) {
                Some(line) => row.push_str(&pad(line, *width, Alignment::Left)),
                None => row.push_str(&spaces(*width)),
            }
        }
    }
    rows.join("\n")
}

/// Stack blocks top to bottom with no separator rows.
#[must_use]
pub fn stack_vertical(blocks: &[&str]) -> String {
    blocks.join("\n")
}

/// Place `block` inside a `width` x `height` viewport.
///
/// Offsets follow `max(0, floor((viewport - size) / 2))` when centered; a
/// block larger than the viewport is pinned to the origin and clipped.
/// The result is exactly `height` rows of exactly `width` columns.
#[must_use]
pub fn place(
    width: usize,
    height: usize,
    horizontal: Alignment,
    vertical: VerticalAlignment,
    block: &str,
) -> String {
    let lines = block_lines(block);
    let block_w = block_width(block);
    let left = spaces(align_offset(width, block_w, horizontal));
    let top = vertical_offset(height, lines.len(), vertical);
    let blank = spaces(width);

    (0..height)
        .map(|y| match y.checked_sub(top).and_then(|i| lines.get(i)) {
            Some(line) => fit(&format!("{left}{line}"), width),
            None => blank.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Clip `line` to `width` columns without a marker, then space-fill.
fn fit(line: &str, width: usize) -> String {
    pad(&truncate_exact(line, width), width, Alignment::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_uniform;

    #[test]
    fn join_pads_shorter_blocks() {
        let out = join_horizontal(&["ab\ncd\nef", "X"], VerticalAlignment::Top);
        assert_eq!(out, "abX\ncd \nef ");
    }

    #[test]
    fn join_bottom_alignment() {
        let out = join_horizontal(&["a\nb", "Z"], VerticalAlignment::Bottom);
        assert_eq!(out, "a \nbZ");
    }

    #[test]
    fn join_nothing_is_empty() {
        assert_eq!(join_horizontal(&[], VerticalAlignment::Top), "");
    }

    #[test]
    fn stack_joins_with_newlines() {
        assert_eq!(stack_vertical(&["ab", "cd"]), "ab\ncd");
    }

    #[test]
    fn place_centers() {
        let out = place(6, 3, Alignment::Center, VerticalAlignment::Middle, "ab");
        assert_eq!(out, "      \n  ab  \n      ");
    }

    #[test]
    fn place_floors_odd_offsets() {
        let out = place(5, 4, Alignment::Center, VerticalAlignment::Middle, "ab");
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], " ab  ");
    }

    #[test]
    fn place_clips_oversized_blocks() {
        let out = place(3, 1, Alignment::Center, VerticalAlignment::Middle, "abcdef\nghi");
        assert_eq!(out, "abc");
    }

    #[test]
    fn place_keeps_wide_glyphs_whole() {
        let out = place(3, 1, Alignment::Left, VerticalAlignment::Top, "日本語");
        assert_eq!(out, "日 ");
        assert_uniform(&out, 3);
    }

    #[test]
    fn place_zero_height_is_empty() {
        assert_eq!(place(4, 0, Alignment::Left, VerticalAlignment::Top, "x"), "");
    }
}
