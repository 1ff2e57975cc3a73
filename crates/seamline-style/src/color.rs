#![forbid(unsafe_code)]

//! Color tokens and their SGR encodings.

use std::fmt::Write as _;

/// An opaque terminal color token.
///
/// The engine never computes palette values; it only encodes whatever token
/// the host application (or [`Theme`](crate::Theme)) hands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    /// The terminal's default color.
    #[default]
    Reset,
    /// One of the 16 basic ANSI colors (0-7 normal, 8-15 bright).
    Ansi(u8),
    /// An entry of the 256-color palette.
    Indexed(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Ansi(0);
    pub const RED: Self = Self::Ansi(1);
    pub const GREEN: Self = Self::Ansi(2);
    pub const YELLOW: Self = Self::Ansi(3);
    pub const BLUE: Self = Self::Ansi(4);
    pub const MAGENTA: Self = Self::Ansi(5);
    pub const CYAN: Self = Self::Ansi(6);
    pub const WHITE: Self = Self::Ansi(7);

    /// Shorthand for [`Color::Rgb`].
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Shorthand for [`Color::Indexed`].
    #[inline]
    #[must_use]
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }

    /// Whether this token is the terminal default.
    #[inline]
    #[must_use]
    pub const fn is_reset(&self) -> bool {
        matches!(self, Self::Reset)
    }

    /// Append the SGR parameters selecting this color as foreground.
    pub fn write_fg_params(&self, out: &mut String) {
        self.write_params(out, Layer::Foreground);
    }

    /// Append the SGR parameters selecting this color as background.
    pub fn write_bg_params(&self, out: &mut String) {
        self.write_params(out, Layer::Background);
    }

    fn write_params(&self, out: &mut String, layer: Layer) {
        let (reset, base, bright, extended) = match layer {
            Layer::Foreground => (39, 30, 90, 38),
            Layer::Background => (49, 40, 100, 48),
        };
        // Writing into a String cannot fail.
        let _ = match *self {
            Self::Reset => write!(out, "{reset}"),
            Self::Ansi(n) if n < 8 => write!(out, "{}", base + u16::from(n)),
            Self::Ansi(n) if n < 16 => write!(out, "{}", bright + u16::from(n - 8)),
            Self::Ansi(n) | Self::Indexed(n) => write!(out, "{extended};5;{n}"),
            Self::Rgb(r, g, b) => write!(out, "{extended};2;{r};{g};{b}"),
        };
    }
}

#[derive(Clone, Copy)]
enum Layer {
    Foreground,
    Background,
}
