#![forbid(unsafe_code)]

//! Which sides of a box carry a border.

pub use seamline_style::{BorderKind, BorderSet};

bitflags::bitflags! {
    /// Bitflags for which borders to render.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const NONE   = 0b0000;
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

impl Borders {
    /// Columns consumed by the left and right borders.
    #[inline]
    #[must_use]
    pub const fn columns(self) -> usize {
        self.contains(Self::LEFT) as usize + self.contains(Self::RIGHT) as usize
    }

    /// Rows consumed by the top and bottom borders.
    #[inline]
    #[must_use]
    pub const fn rows(self) -> usize {
        self.contains(Self::TOP) as usize + self.contains(Self::BOTTOM) as usize
    }
}
