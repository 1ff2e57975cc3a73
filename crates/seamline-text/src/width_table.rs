#![forbid(unsafe_code)]

//! Width data for pictographs and emoji modifiers.
//!
//! `unicode-width` follows East Asian Width, which leaves several emoji
//! blocks narrow even though every mainstream terminal draws them across
//! two cells. The ranges below force those blocks wide. The modifier set
//! lists the scalars that never occupy a cell of their own but change how
//! the preceding base is presented.

/// Inclusive scalar ranges forced to width 2. Sorted and non-overlapping.
pub const WIDE_PICTOGRAPH_RANGES: &[(u32, u32)] = &[
    // Misc Symbols and Pictographs
    (0x1F300, 0x1F5FF),
    // Emoticons
    (0x1F600, 0x1F64F),
    // Transport and Map Symbols
    (0x1F680, 0x1F6FF),
    // Supplemental Symbols and Pictographs
    (0x1F900, 0x1F9FF),
    // Symbols and Pictographs Extended-A
    (0x1FA70, 0x1FAFF),
];

/// Zero width joiner.
pub const ZWJ: char = '\u{200D}';
/// Variation selector 15: text presentation.
pub const VS15: char = '\u{FE0E}';
/// Variation selector 16: emoji presentation.
pub const VS16: char = '\u{FE0F}';
/// Combining enclosing keycap.
pub const KEYCAP: char = '\u{20E3}';
/// Fitzpatrick skin tone modifiers.
pub const SKIN_TONES: (u32, u32) = (0x1F3FB, 0x1F3FF);
/// Miscellaneous Symbols and Dingbats: narrow bases that still start
/// joined emoji sequences.
pub const SYMBOL_BASES: (u32, u32) = (0x2600, 0x27BF);
/// Regional indicator symbols (flag halves).
pub const REGIONAL_INDICATORS: (u32, u32) = (0x1F1E6, 0x1F1FF);

/// How a trailing modifier affects the width of its grapheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Forces the grapheme to two columns (VS16, skin tone, keycap).
    Wide,
    /// Forces the grapheme to one column (VS15).
    Narrow,
    /// Joins pictographs (ZWJ). Wide only after a pictograph base.
    Joiner,
}

/// Whether `c` falls in one of the forced-wide pictograph ranges.
#[must_use]
pub fn is_wide_pictograph(c: char) -> bool {
    let cp = c as u32;
    WIDE_PICTOGRAPH_RANGES
        .binary_search_by(|&(start, end)| {
            if cp < start {
                std::cmp::Ordering::Greater
            } else if cp > end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Whether `c` can start a joined emoji sequence.
#[must_use]
pub fn is_pictograph_base(c: char) -> bool {
    is_wide_pictograph(c) || in_range(c, SYMBOL_BASES)
}

/// Classify `c` as a presentation modifier.
#[must_use]
pub fn modifier(c: char) -> Option<Modifier> {
    match c {
        VS16 | KEYCAP => Some(Modifier::Wide),
        ZWJ => Some(Modifier::Joiner),
        VS15 => Some(Modifier::Narrow),
        _ if in_range(c, SKIN_TONES) => Some(Modifier::Wide),
        _ => None,
    }
}

/// Whether `c` is a regional indicator symbol.
#[inline]
#[must_use]
pub fn is_regional_indicator(c: char) -> bool {
    in_range(c, REGIONAL_INDICATORS)
}

#[inline]
fn in_range(c: char, (start, end): (u32, u32)) -> bool {
    (start..=end).contains(&(c as u32))
}
