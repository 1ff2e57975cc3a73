#![forbid(unsafe_code)]

//! Proportional splitting of a total width into weighted parts.
//!
//! # Algorithm
//!
//! Largest-remainder apportionment:
//!
//! 1. `width_i = floor(total * w_i / Σw)` for every part.
//! 2. The leftover `total - Σ width_i` (always `< n`) is handed out one
//!    column at a time to the parts with the largest fractional remainder.
//! 3. Ties go to the earliest index.
//!
//! The result is deterministic and `Σ width_i == total` holds exactly for
//! every input, which is what lets widgets place sub-panels side by side
//! without a one-column drift at the right edge.
//!
//! # Example
//! ```
//! use seamline_layout::split;
//!
//! assert_eq!(split(80, &[2, 2, 3]), vec![23, 23, 34]);
//! ```

/// A contiguous horizontal span produced by [`regions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Column where the region starts.
    pub offset: usize,
    /// Width of the region in columns.
    pub width: usize,
}

impl Region {
    /// Create a region.
    #[inline]
    #[must_use]
    pub const fn new(offset: usize, width: usize) -> Self {
        Self { offset, width }
    }

    /// Column just past the region's right edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.width)
    }

    /// Whether the region has zero width.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }
}

/// Split `total` columns into parts proportional to `weights`.
///
/// The returned widths always sum to `total` when `weights` is non-empty.
/// An all-zero weight vector is treated as equal weights; an empty weight
/// vector yields no parts.
#[must_use]
pub fn split(total: usize, weights: &[u32]) -> Vec<usize> {
    if weights.is_empty() {
        return Vec::new();
    }

    let weight_sum: u128 = weights.iter().map(|&w| u128::from(w)).sum();
    let weight_at = |i: usize| -> u128 {
        if weight_sum == 0 {
            1
        } else {
            u128::from(weights[i])
        }
    };
    let denominator = if weight_sum == 0 {
        weights.len() as u128
    } else {
        weight_sum
    };

    let mut widths = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    let mut allocated: usize = 0;

    for i in 0..weights.len() {
        let numerator = total as u128 * weight_at(i);
        // numerator / denominator <= total, so the cast cannot truncate.
        let base = (numerator / denominator) as usize;
        widths.push(base);
        remainders.push(numerator % denominator);
        allocated += base;
    }

    let leftover = total - allocated;
    if leftover > 0 {
        let mut order: Vec<usize> = (0..weights.len()).collect();
        order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]).then(a.cmp(&b)));
        for &i in order.iter().take(leftover) {
            widths[i] += 1;
        }
    }

    debug_assert_eq!(widths.iter().sum::<usize>(), total);
    widths
}

/// Split `total` columns into contiguous [`Region`]s starting at offset 0.
///
/// Regions are non-overlapping, laid out left to right, and the last region
/// ends exactly at `total`.
#[must_use]
pub fn regions(total: usize, weights: &[u32]) -> Vec<Region> {
    let mut offset = 0;
    split(total, weights)
        .into_iter()
        .map(|width| {
            let region = Region::new(offset, width);
            offset += width;
            region
        })
        .collect()
}
