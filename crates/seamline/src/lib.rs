#![forbid(unsafe_code)]

//! Seamline public facade crate.
//!
//! Re-exports the measurement, layout, style and widget crates and adds the
//! pieces an application needs around them: [`Config`] read from the
//! environment, the [`Error`] type, and optional logging setup.
//!
//! ```
//! use seamline::prelude::*;
//!
//! let theme = Config::default().theme();
//! let mut card = Card::new(theme);
//! card.set_title("Markdown Assistant").set_subtitle("v1.2.0").set_width(40);
//! let block = card.render();
//! assert!(block.lines().all(|row| seamline::text::display_width(row) == 40));
//! ```

use std::fmt;

pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;

pub use config::{ColorChoice, Config};
pub use error::{ConfigError, Error, Result};

// --- Measurement and layout re-exports --------------------------------------

pub use seamline_layout::{Alignment, Region, Sides, VerticalAlignment, split};
pub use seamline_text::{display_width, pad, truncate, truncate_with};

// --- Style re-exports --------------------------------------------------------

pub use seamline_style::{
    BorderKind, BorderSet, Color, ColorMode, Ellipsis, Style, Theme, ThemeBuilder, VisualState,
};

// --- Widget re-exports -------------------------------------------------------

pub use seamline_widgets::{
    BoxStyle, Card, EmptyState, FieldKind, FormField, KeyBinding, MessageKind, MetadataItem,
    Modal, ModalPreset, SearchField, SeamJoiner, StatusBar, StatusItem, StatusMessage, Tab,
    TabBar, TextInput, ValidationError, Widget, join_horizontal, place, stack_vertical,
};

/// Write `widget`'s block to `out`, followed by a newline.
pub fn write_widget<W: fmt::Write>(out: &mut W, widget: &dyn Widget) -> Result<()> {
    out.write_str(&widget.render())?;
    out.write_char('\n')?;
    Ok(())
}

// --- Prelude -----------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, BorderKind, Card, ColorMode, Config, EmptyState, Error, FieldKind, FormField,
        MetadataItem, Modal, ModalPreset, Result, SearchField, StatusBar, Tab, TabBar, Theme,
        Widget,
    };

    pub use crate::{layout, style, text, widgets};
}

pub use seamline_layout as layout;
pub use seamline_style as style;
pub use seamline_text as text;
pub use seamline_widgets as widgets;
