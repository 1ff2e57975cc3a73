#![forbid(unsafe_code)]

//! Status bar widget.
//!
//! A top rule over one row split into three weighted regions: status items
//! on the left, a transient message in the middle, key hints on the right.
//! Region widths come from [`split`], so they always sum to the row width;
//! an empty region is blank space of its full width, never collapsed.

use seamline_layout::{Alignment, split};
use seamline_style::Theme;
use seamline_text::{pad_with, repeat_to_width};

use crate::{Widget, trace_render};

/// Separator between left items and between key hints.
pub const SEPARATOR: &str = " • ";

/// Default region weights (left, middle, right).
pub const DEFAULT_WEIGHTS: [u32; 3] = [2, 2, 3];

/// One item in the left region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusItem {
    pub label: String,
    pub value: String,
    pub icon: String,
}

impl StatusItem {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: String::new(),
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// `icon value`, `icon label` when there is no value, else `label: value`.
    fn text(&self) -> String {
        match (self.icon.is_empty(), self.value.is_empty()) {
            (false, false) => format!("{} {}", self.icon, self.value),
            (false, true) => format!("{} {}", self.icon, self.label),
            (true, _) => format!("{}: {}", self.label, self.value),
        }
    }
}

/// A key hint in the right region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBinding {
    pub key: String,
    pub description: String,
}

impl KeyBinding {
    #[must_use]
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MessageKind {
    #[default]
    Info,
    Warning,
    Error,
}

impl MessageKind {
    /// Icon used when the message does not supply one.
    #[must_use]
    pub const fn default_icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ\u{FE0F}",
            Self::Warning => "⚠\u{FE0F}",
            Self::Error => "❌",
        }
    }
}

/// A transient message for the middle region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
    pub icon: Option<String>,
    pub details: Option<String>,
}

impl StatusMessage {
    #[must_use]
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            icon: None,
            details: None,
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, text)
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, text)
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Extra text shown after the message (info messages only).
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// `Tab` switch, `L` launch, `?` help, `q` quit.
#[must_use]
pub fn common_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("Tab", "Switch"),
        KeyBinding::new("L", "Launch"),
        KeyBinding::new("?", "Help"),
        KeyBinding::new("q", "Quit"),
    ]
}

/// Current profile and enabled/total counts.
#[must_use]
pub fn profile_status_items(name: &str, enabled: usize, total: usize) -> Vec<StatusItem> {
    let name = if name.is_empty() { "No Profile" } else { name };
    vec![
        StatusItem::new("Profile", name).icon("👤"),
        StatusItem::new("Extensions", format!("{enabled}/{total}")).icon("🧩"),
    ]
}

/// Status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    middle: String,
    right: String,
    weights: [u32; 3],
    width: usize,
    theme: Theme,
}

impl StatusBar {
    /// Narrowest bar: one padding column each side and one region column.
    pub const MIN_WIDTH: usize = 3;

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            left: String::new(),
            middle: String::new(),
            right: String::new(),
            weights: DEFAULT_WEIGHTS,
            width: 80,
            theme,
        }
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_weights(&mut self, weights: [u32; 3]) -> &mut Self {
        self.weights = weights;
        self
    }

    /// Raw, pre-formatted left region.
    pub fn set_left(&mut self, content: impl Into<String>) -> &mut Self {
        self.left = content.into();
        self
    }

    /// Raw, pre-formatted middle region.
    pub fn set_middle(&mut self, content: impl Into<String>) -> &mut Self {
        self.middle = content.into();
        self
    }

    /// Raw, pre-formatted right region.
    pub fn set_right(&mut self, content: impl Into<String>) -> &mut Self {
        self.right = content.into();
        self
    }

    pub fn set_left_items(&mut self, items: &[StatusItem]) -> &mut Self {
        self.left = items
            .iter()
            .map(StatusItem::text)
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        self
    }

    /// Show `message` in the middle region. An empty message clears it.
    pub fn set_message(&mut self, message: StatusMessage) -> &mut Self {
        if message.text.is_empty() {
            self.middle.clear();
            return self;
        }
        let theme = &self.theme;
        let style = match message.kind {
            MessageKind::Info => theme.fg(theme.primary),
            MessageKind::Warning => theme.fg(theme.warning),
            MessageKind::Error => theme.fg(theme.error).bold(),
        };
        let icon = message
            .icon
            .as_deref()
            .unwrap_or_else(|| message.kind.default_icon());
        let mut middle = theme.paint(style, &format!(" {icon} {} ", message.text));
        if let Some(details) = message.details.as_deref().filter(|_| message.kind == MessageKind::Info)
        {
            middle.push_str(&theme.paint(theme.fg(theme.text_secondary), &format!("- {details} ")));
        }
        self.middle = middle;
        self
    }

    pub fn set_key_bindings(&mut self, bindings: &[KeyBinding]) -> &mut Self {
        let theme = &self.theme;
        let key_style = theme.fg(theme.primary).bold();
        let desc_style = theme.fg(theme.text_secondary);
        self.right = bindings
            .iter()
            .map(|b| {
                format!(
                    "{} {}",
                    theme.paint(key_style, &b.key),
                    theme.paint(desc_style, &b.description)
                )
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        self
    }

    /// Empty all three regions.
    pub fn clear(&mut self) -> &mut Self {
        self.left.clear();
        self.middle.clear();
        self.right.clear();
        self
    }

    #[must_use]
    pub fn outer_width(&self) -> usize {
        self.width.max(Self::MIN_WIDTH)
    }

    fn regions(&self, width: usize) -> String {
        let marker = self.theme.ellipsis.marker();
        let widths = split(width, &self.weights);
        let parts = [
            (&self.left, Alignment::Left),
            (&self.middle, Alignment::Center),
            (&self.right, Alignment::Right),
        ];
        widths
            .iter()
            .zip(parts)
            .map(|(&w, (text, alignment))| pad_with(text, w, alignment, marker))
            .collect()
    }

    /// The three regions across the full width, without rule or padding.
    #[must_use]
    pub fn render_content(&self) -> String {
        self.regions(self.width)
    }
}

impl Widget for StatusBar {
    fn render(&self) -> String {
        let width = self.outer_width();
        trace_render("status_bar", width, || {
            let theme = &self.theme;
            let rule = theme.paint(theme.fg(theme.border), &repeat_to_width("─", width));
            let row = format!(" {} ", self.regions(width - 2));
            let row = theme.paint(theme.fg(theme.text_secondary), &row);
            format!("{rule}\n{row}")
        })
    }
}
