#![forbid(unsafe_code)]

//! Layout primitives for fixed-width character grids.
//!
//! # Role in Seamline
//! `seamline-layout` is the geometry vocabulary shared by text measurement and
//! widgets: per-side padding, horizontal/vertical alignment, centering, and
//! the proportional splitter that divides a total width into weighted parts
//! whose sizes sum *exactly* to the total.
//!
//! Everything here is integer arithmetic on terminal columns. There is no
//! constraint solving; widgets that need sub-panels ask [`split`] for exact
//! widths and lay them out left to right.

pub mod geometry;
pub mod split;

pub use geometry::Sides;
pub use split::{Region, regions, split};

/// Horizontal alignment of content within a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment of a block within a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Offset that centers `size` inside `viewport`.
///
/// `max(0, floor((viewport - size) / 2))`: a block larger than the viewport
/// is pinned to the origin rather than given a negative offset.
#[inline]
#[must_use]
pub const fn center_offset(viewport: usize, size: usize) -> usize {
    viewport.saturating_sub(size) / 2
}

/// Offset of a `size`-wide item inside `total` columns for the given alignment.
#[inline]
#[must_use]
pub const fn align_offset(total: usize, size: usize, alignment: Alignment) -> usize {
    match alignment {
        Alignment::Left => 0,
        Alignment::Center => center_offset(total, size),
        Alignment::Right => total.saturating_sub(size),
    }
}

/// Offset of a `size`-tall block inside `total` rows for the given alignment.
#[inline]
#[must_use]
pub const fn vertical_offset(total: usize, size: usize, alignment: VerticalAlignment) -> usize {
    match alignment {
        VerticalAlignment::Top => 0,
        VerticalAlignment::Middle => center_offset(total, size),
        VerticalAlignment::Bottom => total.saturating_sub(size),
    }
}
