#![forbid(unsafe_code)]

//! Tab bar widget.
//!
//! A row of rounded tab boxes whose bottom edges are joined by
//! [`SeamJoiner`] into one rule that opens under the active tab. The row
//! is always exactly the configured width: a filler segment continues the
//! rule when the tabs are narrower, and tabs shrink proportionally when
//! they are wider.

use seamline_layout::{VerticalAlignment, split};
use seamline_style::{BorderKind, Theme};
use seamline_text::{display_width, repeat_to_width, spaces};
#[cfg(feature = "tracing")]
use web_time::Instant;

use crate::borders::Borders;
use crate::box_style::BoxStyle;
use crate::compose::{join_horizontal, stack_vertical};
use crate::seam::SeamJoiner;
use crate::Widget;

/// Narrowest possible tab: two border columns, one padding column on each
/// side, one content column.
pub const MIN_TAB_WIDTH: usize = 5;

/// Rows in the tab row.
pub const TAB_ROW_HEIGHT: usize = 3;

/// Smallest content panel: bottom border, one padding row on each side,
/// one content row.
pub const MIN_CONTENT_HEIGHT: usize = 4;

/// A single tab entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tab {
    id: String,
    title: String,
    icon: String,
}

impl Tab {
    /// Create a new tab with an id and a title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: String::new(),
        }
    }

    /// Set the icon shown before the title.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `icon title`, or just the title.
    #[must_use]
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}

/// Tab bar widget.
#[derive(Debug, Clone)]
pub struct TabBar {
    tabs: Vec<Tab>,
    active: usize,
    width: usize,
    theme: Theme,
}

impl TabBar {
    /// An empty tab bar, 80 columns wide.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            tabs: Vec::new(),
            active: 0,
            width: 80,
            theme,
        }
    }

    /// Replace the tabs. The active index is clamped into the new range.
    pub fn set_tabs(&mut self, tabs: Vec<Tab>) -> &mut Self {
        self.tabs = tabs;
        self.active = self.active.min(self.tabs.len().saturating_sub(1));
        self
    }

    pub fn add_tab(&mut self, tab: Tab) -> &mut Self {
        self.tabs.push(tab);
        self
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    /// Make tab `index` active. An index outside the tab list is ignored
    /// and the previous active tab is kept.
    pub fn set_active_index(&mut self, index: usize) -> &mut Self {
        if index < self.tabs.len() {
            self.switch_to(index, "index");
        }
        self
    }

    /// Make the tab with `id` active. An unknown id is ignored.
    pub fn set_active_by_id(&mut self, id: &str) -> &mut Self {
        if let Some(index) = self.tabs.iter().position(|tab| tab.id == id) {
            self.switch_to(index, "id");
        }
        self
    }

    /// Activate the next tab, wrapping to the first.
    pub fn select_next(&mut self) -> &mut Self {
        if !self.tabs.is_empty() {
            let next = (self.active_index() + 1) % self.tabs.len();
            self.switch_to(next, "next");
        }
        self
    }

    /// Activate the previous tab, wrapping to the last.
    pub fn select_previous(&mut self) -> &mut Self {
        if !self.tabs.is_empty() {
            let count = self.tabs.len();
            let previous = (self.active_index() + count - 1) % count;
            self.switch_to(previous, "previous");
        }
        self
    }

    fn switch_to(&mut self, index: usize, _reason: &str) {
        if index == self.active {
            return;
        }
        #[cfg(feature = "tracing")]
        Self::log_switch(_reason, self.active, index);
        self.active = index;
    }

    #[cfg(feature = "tracing")]
    fn log_switch(reason: &str, from: usize, to: usize) {
        tracing::debug!(message = "tabs.switch", reason, from, to);
    }

    /// Active index, clamped into the tab list (0 when empty).
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active.min(self.tabs.len().saturating_sub(1))
    }

    #[must_use]
    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active_index())
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Width of the rendered row: the configured width, raised so every
    /// tab fits at [`MIN_TAB_WIDTH`].
    #[must_use]
    pub fn outer_width(&self) -> usize {
        if self.tabs.is_empty() {
            self.width.max(3)
        } else {
            self.width.max(self.tabs.len() * MIN_TAB_WIDTH)
        }
    }

    /// Per-tab outer widths and the filler width after the last tab.
    fn layout(&self) -> (Vec<usize>, usize) {
        let outer = self.outer_width();
        let natural: Vec<usize> = self
            .tabs
            .iter()
            .map(|tab| (display_width(&tab.label()) + MIN_TAB_WIDTH - 1).max(MIN_TAB_WIDTH))
            .collect();
        let total: usize = natural.iter().sum();
        if total <= outer {
            return (natural, outer - total);
        }

        // Overflow: every tab keeps its minimum, the rest is shared in
        // proportion to how much more each one wants.
        let floor = self.tabs.len() * MIN_TAB_WIDTH;
        let wants: Vec<u32> = natural
            .iter()
            .map(|w| u32::try_from(w.saturating_sub(MIN_TAB_WIDTH)).unwrap_or(u32::MAX))
            .collect();
        let widths = split(outer - floor, &wants)
            .into_iter()
            .map(|extra| MIN_TAB_WIDTH + extra)
            .collect();
        (widths, 0)
    }

    fn render_row(&self) -> String {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();

        let outer = self.outer_width();
        let (widths, filler) = self.layout();

        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "tabs.render",
            tab_count = self.tabs.len(),
            active_tab = self.active_index(),
            overflow = !self.tabs.is_empty() && filler == 0,
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        let theme = &self.theme;
        let rule_style = theme.fg(theme.border);
        let out = if self.tabs.is_empty() {
            let rule = format!("╭{}╮", "─".repeat(outer - 2));
            let blank = spaces(outer);
            stack_vertical(&[&blank, &blank, &theme.paint(rule_style, &rule)])
        } else {
            let active = self.active_index();
            let joiner = SeamJoiner::new(self.tabs.len(), Some(active), filler > 0);
            let mut blocks: Vec<String> = self
                .tabs
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (tab, &width))| {
                    let label_style = if i == active {
                        theme.fg(theme.primary).bold()
                    } else {
                        theme.fg(theme.text_secondary)
                    };
                    BoxStyle::themed(theme, width)
                        .border(BorderKind::Rounded)
                        .glyphs(joiner.border_for(i))
                        .padding((0, 1))
                        .render(&theme.paint(label_style, &tab.label()))
                })
                .collect();
            if filler > 0 {
                let blank = spaces(filler);
                let rule = format!("{}╮", repeat_to_width("─", filler - 1));
                blocks.push(stack_vertical(&[&blank, &blank, &theme.paint(rule_style, &rule)]));
            }
            let refs: Vec<&str> = blocks.iter().map(String::as_str).collect();
            join_horizontal(&refs, VerticalAlignment::Top)
        };

        #[cfg(feature = "tracing")]
        {
            let elapsed_us = render_start.elapsed().as_micros() as u64;
            render_span.record("render_duration_us", elapsed_us);
        }
        out
    }

    /// The tab row above a content panel of `content_height` rows.
    ///
    /// The panel has no top border, so it fuses with the open bottom edge
    /// of the active tab. It is as wide as the tab row and at least
    /// [`MIN_CONTENT_HEIGHT`] rows tall.
    #[must_use]
    pub fn render_with_content(&self, content: &str, content_height: usize) -> String {
        let row = self.render_row();
        let outer = self.outer_width();
        // Narrow rows give up side padding before the panel outgrows them.
        let side = (outer.saturating_sub(3) / 2).min(2);
        let panel = BoxStyle::themed(&self.theme, outer)
            .border(BorderKind::Rounded)
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .padding((1, side))
            .height(content_height.max(MIN_CONTENT_HEIGHT))
            .render(content);
        stack_vertical(&[&row, &panel])
    }
}

impl Widget for TabBar {
    fn render(&self) -> String {
        self.render_row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_uniform, plain_theme};
    #[cfg(feature = "tracing")]
    use tracing_test::traced_test;

    fn bar(titles: &[&str], width: usize) -> TabBar {
        let mut bar = TabBar::new(plain_theme());
        bar.set_tabs(
            titles
                .iter()
                .map(|t| Tab::new(t.to_lowercase(), *t))
                .collect(),
        )
        .set_width(width);
        bar
    }

    fn bottom(out: &str) -> Vec<char> {
        out.split('\n').nth(2).unwrap_or_default().chars().collect()
    }

    #[test]
    fn label_with_and_without_icon() {
        assert_eq!(Tab::new("x", "Help").label(), "Help");
        assert_eq!(Tab::new("x", "Help").icon("❓").label(), "❓ Help");
    }

    #[test]
    fn renders_joined_row() {
        let out = bar(&["A", "B"], 14).render();
        let expected = [
            "╭───╮╭───╮    ",
            "│ A ││ B │    ",
            "│   └┴───┴───╮",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn second_tab_active() {
        let mut bar = bar(&["A", "B"], 10);
        bar.set_active_index(1);
        let out = bar.render();
        assert_eq!(out.split('\n').nth(2), Some("├───┴┘   │"));
    }

    #[test]
    fn four_tabs_at_100_columns() {
        let out = bar(&["Extensions", "Profiles", "Settings", "Help"], 100).render();
        assert_uniform(&out, 100);
        let row = bottom(&out);
        // "Extensions" is 14 columns with border and padding.
        assert_eq!((row[13], row[14]), SeamJoiner::junction(true, false));
        assert_eq!(row[0], '│');
        assert_eq!(row[99], '╮');
    }

    #[test]
    fn zero_tabs_render_filler_only() {
        let out = bar(&[], 6).render();
        assert_eq!(out, "      \n      \n╭────╮");
    }

    #[test]
    fn overflow_shrinks_tabs_to_fit() {
        let out = bar(&["Extensions", "Profiles", "Settings"], 24).render();
        assert_uniform(&out, 24);
        assert!(out.contains('…'));
    }

    #[test]
    fn empty_title_takes_minimum_width() {
        let mut bar = TabBar::new(plain_theme());
        bar.set_tabs(vec![Tab::new("a", ""), Tab::new("b", "B")])
            .set_width(30);
        let out = bar.render();
        assert_uniform(&out, 30);
        assert_eq!(out.split('\n').nth(2), Some("│   └┴───┴───────────────────╮"));
    }

    #[test]
    fn empty_title_in_overflowing_row() {
        let mut bar = TabBar::new(plain_theme());
        bar.set_tabs(vec![Tab::new("a", ""), Tab::new("e", "Extensions")])
            .set_width(12);
        assert_uniform(&bar.render(), 12);
        bar.set_active_index(1);
        assert_uniform(&bar.render_with_content("x", 4), 12);
    }

    #[test]
    fn width_clamped_to_minimum_tabs() {
        let bar = bar(&["Alpha", "Beta", "Gamma"], 4);
        assert_eq!(bar.outer_width(), 15);
        assert_uniform(&bar.render(), 15);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut bar = bar(&["A", "B", "C"], 30);
        bar.set_active_index(1);
        bar.set_active_index(7);
        assert_eq!(bar.active_index(), 1);
        bar.set_active_by_id("nope");
        assert_eq!(bar.active_index(), 1);
        bar.set_active_by_id("c");
        assert_eq!(bar.active_index(), 2);
    }

    #[test]
    fn select_wraps_both_ways() {
        let mut bar = bar(&["A", "B", "C"], 30);
        bar.select_previous();
        assert_eq!(bar.active_index(), 2);
        bar.select_next();
        assert_eq!(bar.active_index(), 0);
        assert_eq!(bar.active_tab().map(Tab::id), Some("a"));
    }

    #[test]
    fn set_tabs_clamps_active() {
        let mut bar = bar(&["A", "B", "C"], 30);
        bar.set_active_index(2);
        bar.set_tabs(vec![Tab::new("x", "X")]);
        assert_eq!(bar.active_index(), 0);
        bar.set_tabs(Vec::new());
        assert!(bar.active_tab().is_none());
    }

    #[test]
    fn render_with_content_fuses_panel() {
        let out = bar(&["A", "B"], 14).render_with_content("hello", 5);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), TAB_ROW_HEIGHT + 5);
        assert_eq!(rows[3], "│            │");
        assert_eq!(rows[4], "│  hello     │");
        assert_eq!(rows[7], "╰────────────╯");
        assert_uniform(&out, 14);
    }

    #[test]
    fn render_with_content_minimum_height() {
        let out = bar(&["A"], 10).render_with_content("", 0);
        assert_eq!(out.split('\n').count(), TAB_ROW_HEIGHT + MIN_CONTENT_HEIGHT);
    }

    #[test]
    fn render_is_idempotent() {
        let bar = bar(&["Extensions", "Profiles"], 40);
        assert_eq!(bar.render(), bar.render());
    }

    #[test]
    fn colored_row_keeps_width() {
        let mut bar = TabBar::new(Theme::default());
        bar.set_tabs(vec![
            Tab::new("e", "Extensions").icon("🧩"),
            Tab::new("p", "Profiles").icon("👤"),
        ])
        .set_width(50);
        assert_uniform(&bar.render_with_content("body", 6), 50);
    }

    #[cfg(feature = "tracing")]
    #[traced_test]
    #[test]
    fn switching_tabs_logs_reason_and_indices() {
        let mut bar = bar(&["A", "B", "C"], 20);
        let _ = bar.render();
        bar.select_next();
        assert!(logs_contain("tabs.switch"));
        assert!(logs_contain("reason=\"next\" from=0 to=1"));

        bar.set_active_index(1);
        bar.set_active_index(9);
        assert!(!logs_contain("to=9"));
    }
}
