#![forbid(unsafe_code)]

//! Continuous bottom edges for a row of adjacent tabs.
//!
//! Each tab is an independent rounded box. Drawn naively, two neighbors
//! meet as `╯╰`, a visible break in the line separating the tabs from the
//! panel below. [`SeamJoiner`] rewrites the bottom corners so the row reads
//! as one rule that opens under the active tab:
//!
//! ```text
//! ╭──────────╮╭──────────╮╭──────╮
//! │ Profiles ││ Settings ││ Help │
//! ├──────────┴┘          └┴──────┴────────╮
//! ```
//!
//! The corner pair at every seam is looked up from whether the tab on
//! each side is active; the first tab's left corner and the last tab's
//! right corner have no neighbor and are corrected separately.

use seamline_style::BorderSet;

/// Bottom-edge glyphs for one tab in a joined row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEdge {
    pub left: char,
    pub middle: char,
    pub right: char,
}

/// Chooses the bottom corners of adjacent tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeamJoiner {
    count: usize,
    active: Option<usize>,
    filler: bool,
}

impl SeamJoiner {
    /// Every valid `(left tab's right corner, right tab's left corner)` pair.
    pub const JUNCTIONS: [(char, char); 4] = [
        Self::junction(true, false),
        Self::junction(false, true),
        Self::junction(false, false),
        Self::junction(true, true),
    ];

    /// A joiner for `count` tabs. `filler` is whether a separator segment
    /// continues the rule after the last tab.
    #[must_use]
    pub const fn new(count: usize, active: Option<usize>, filler: bool) -> Self {
        Self {
            count,
            active,
            filler,
        }
    }

    /// Corner pair where a tab meets its right-hand neighbor.
    ///
    /// | left     | right    | glyphs  |
    /// |----------|----------|---------|
    /// | active   | inactive | `└` `┴` |
    /// | inactive | active   | `┴` `┘` |
    /// | inactive | inactive | `┴` `┴` |
    /// | active   | active   | `└` `┘` |
    #[must_use]
    pub const fn junction(left_active: bool, right_active: bool) -> (char, char) {
        match (left_active, right_active) {
            (true, false) => ('└', '┴'),
            (false, true) => ('┴', '┘'),
            (false, false) => ('┴', '┴'),
            (true, true) => ('└', '┘'),
        }
    }

    fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Bottom edge of tab `index`.
    #[must_use]
    pub fn edge(&self, index: usize) -> TabEdge {
        let active = self.is_active(index);
        let middle = if active { ' ' } else { '─' };

        let left = if index == 0 {
            if active { '│' } else { '├' }
        } else {
            Self::junction(self.is_active(index - 1), active).1
        };

        let right = if index + 1 < self.count {
            Self::junction(active, self.is_active(index + 1)).0
        } else if self.filler {
            Self::junction(active, false).0
        } else if active {
            '│'
        } else {
            '┤'
        };

        TabEdge {
            left,
            middle,
            right,
        }
    }

    /// Rounded glyph table for tab `index` with its bottom edge joined.
    #[must_use]
    pub fn border_for(&self, index: usize) -> BorderSet {
        let edge = self.edge(index);
        BorderSet::ROUNDED.with_bottom(edge.left, edge.middle, edge.right)
    }
}
