#![forbid(unsafe_code)]

//! Text styles encoded as SGR escape sequences.
//!
//! A [`Style`] is a foreground color, a background color, and a set of
//! attribute flags. Painting wraps text in `ESC[...m` / `ESC[0m`; styles that
//! set nothing paint nothing, and [`ColorMode::Plain`] disables painting
//! entirely so output stays free of escapes (e.g. under `NO_COLOR`).

use crate::color::Color;

/// The SGR sequence that resets every attribute.
pub const RESET: &str = "\x1b[0m";

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

impl StyleFlags {
    const SGR_CODES: [(Self, &'static str); 5] = [
        (Self::BOLD, "1"),
        (Self::DIM, "2"),
        (Self::ITALIC, "3"),
        (Self::UNDERLINE, "4"),
        (Self::REVERSE, "7"),
    ];
}

/// Whether painting emits escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorMode {
    /// Emit SGR sequences.
    #[default]
    Ansi,
    /// Emit bare text.
    Plain,
}

/// Unified text style.
///
/// `None` colors inherit from whatever surrounds the painted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: StyleFlags,
}

impl Style {
    /// An empty style.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    #[inline]
    #[must_use]
    pub const fn add(mut self, flags: StyleFlags) -> Self {
        self.attrs = self.attrs.union(flags);
        self
    }

    #[inline]
    #[must_use]
    pub const fn bold(self) -> Self {
        self.add(StyleFlags::BOLD)
    }

    #[inline]
    #[must_use]
    pub const fn dim(self) -> Self {
        self.add(StyleFlags::DIM)
    }

    #[inline]
    #[must_use]
    pub const fn italic(self) -> Self {
        self.add(StyleFlags::ITALIC)
    }

    #[inline]
    #[must_use]
    pub const fn underline(self) -> Self {
        self.add(StyleFlags::UNDERLINE)
    }

    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        self.add(StyleFlags::REVERSE)
    }

    /// Merge `other` on top of `self`: colors `other` sets win, flags union.
    #[must_use]
    pub fn patch(self, other: &Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: self.attrs | other.attrs,
        }
    }

    /// Whether painting with this style would emit nothing.
    #[inline]
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// The opening SGR sequence, or `None` for a plain style.
    #[must_use]
    pub fn sgr(&self) -> Option<String> {
        if self.is_plain() {
            return None;
        }
        let mut params = String::with_capacity(24);
        for (flag, code) in StyleFlags::SGR_CODES {
            if self.attrs.contains(flag) {
                push_param(&mut params, code);
            }
        }
        if let Some(fg) = self.fg {
            separate(&mut params);
            fg.write_fg_params(&mut params);
        }
        if let Some(bg) = self.bg {
            separate(&mut params);
            bg.write_bg_params(&mut params);
        }
        Some(format!("\x1b[{params}m"))
    }

    /// Wrap `text` in this style's escape sequences.
    ///
    /// Resets already embedded in `text` are followed by this style's opening
    /// sequence again, so painting an already painted fragment (a bordered
    /// line with styled content, say) keeps the outer style after the inner
    /// one ends. Empty text and [`ColorMode::Plain`] return `text` unchanged.
    #[must_use]
    pub fn paint(&self, text: &str, mode: ColorMode) -> String {
        if mode == ColorMode::Plain || text.is_empty() {
            return text.to_string();
        }
        let Some(open) = self.sgr() else {
            return text.to_string();
        };
        let mut out = String::with_capacity(text.len() + open.len() * 2 + RESET.len());
        out.push_str(&open);
        if text.contains(RESET) {
            let reopened = format!("{RESET}{open}");
            out.push_str(&text.replace(RESET, &reopened));
        } else {
            out.push_str(text);
        }
        out.push_str(RESET);
        out
    }
}

fn separate(params: &mut String) {
    if !params.is_empty() {
        params.push(';');
    }
}

fn push_param(params: &mut String, code: &str) {
    separate(params);
    params.push_str(code);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        prop_oneof![
            Just(Color::Reset),
            any::<u8>().prop_map(Color::Ansi),
            any::<u8>().prop_map(Color::Indexed),
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::Rgb(r, g, b)),
        ]
    }

    fn arb_style() -> impl Strategy<Value = Style> {
        (
            proptest::option::of(arb_color()),
            proptest::option::of(arb_color()),
            any::<u8>(),
        )
            .prop_map(|(fg, bg, bits)| Style {
                fg,
                bg,
                attrs: StyleFlags::from_bits_truncate(bits),
            })
    }

    proptest! {
        #[test]
        fn sgr_is_a_single_well_formed_sequence(style in arb_style()) {
            if let Some(sgr) = style.sgr() {
                prop_assert!(sgr.starts_with("\x1b["));
                prop_assert!(sgr.ends_with('m'));
                let params = &sgr[2..sgr.len() - 1];
                prop_assert!(params.chars().all(|c| c.is_ascii_digit() || c == ';'));
            } else {
                prop_assert!(style.is_plain());
            }
        }

        #[test]
        fn paint_keeps_text_intact(style in arb_style(), text in "[a-z ]{1,20}") {
            let painted = style.paint(&text, ColorMode::Ansi);
            prop_assert!(painted.contains(&text));
            if !style.is_plain() {
                prop_assert!(painted.ends_with(RESET));
            }
        }
    }
}
