#![forbid(unsafe_code)]

//! Geometric primitives.

/// Per-side spacing in cells (padding or margin).
///
/// Field order follows CSS shorthand: top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Sides {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Sides {
    /// Explicit spacing for each side.
    #[inline]
    #[must_use]
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same spacing on every side.
    #[inline]
    #[must_use]
    pub const fn all(value: usize) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical spacing on top and bottom, horizontal spacing on left and right.
    #[inline]
    #[must_use]
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal spacing (`left + right`).
    #[inline]
    #[must_use]
    pub const fn horizontal(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Total vertical spacing (`top + bottom`).
    #[inline]
    #[must_use]
    pub const fn vertical(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }
}

impl From<(usize, usize)> for Sides {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

impl From<(usize, usize, usize, usize)> for Sides {
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Self::new(top, right, bottom, left)
    }
}
