#![forbid(unsafe_code)]

//! Bordered, fixed-width widgets for Seamline.
//!
//! Every widget renders to a `String` of newline-separated rows. Each row
//! has exactly the widget's outer width in terminal columns; color comes
//! from SGR escapes that measurement ignores.
//!
//! The building blocks are [`BoxStyle`] (border + padding + content),
//! [`SeamJoiner`] (continuous edges between adjacent tabs) and the
//! [`compose`] helpers for joining and placing finished blocks.

pub mod borders;
pub mod box_style;
pub mod card;
pub mod compose;
pub mod empty_state;
pub mod form_field;
pub mod input;
pub mod modal;
pub mod search;
pub mod seam;
pub mod status_bar;
pub mod tabs;

pub use borders::{BorderKind, BorderSet, Borders};
pub use box_style::BoxStyle;
pub use card::{Card, MetadataItem};
pub use compose::{join_horizontal, place, stack_vertical};
pub use empty_state::EmptyState;
pub use form_field::{FieldKind, FormField, ValidationError, Validator};
pub use input::TextInput;
pub use modal::{Modal, ModalPreset};
pub use search::SearchField;
pub use seam::{SeamJoiner, TabEdge};
pub use status_bar::{KeyBinding, MessageKind, StatusBar, StatusItem, StatusMessage};
pub use tabs::{Tab, TabBar};

/// A `Widget` renders itself to a block of text.
///
/// Rendering is a pure function of the widget's fields: calling `render`
/// twice with no setter call in between yields identical output.
pub trait Widget {
    /// Render the widget. Every row is the widget's outer width.
    fn render(&self) -> String;
}

/// Run `f` inside a `widget_render` debug span when tracing is enabled.
#[inline]
pub(crate) fn trace_render<R>(widget: &'static str, width: usize, f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "tracing")]
    {
        let render_start = web_time::Instant::now();
        let render_span = tracing::debug_span!(
            "widget_render",
            widget,
            width,
            render_duration_us = tracing::field::Empty
        );
        let _render_guard = render_span.enter();
        let out = f();
        let elapsed_us = render_start.elapsed().as_micros() as u64;
        render_span.record("render_duration_us", elapsed_us);
        out
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (widget, width);
        f()
    }
}

/// Lines of `block`, with an empty block yielding one empty line.
pub(crate) fn block_lines(block: &str) -> Vec<&str> {
    if block.is_empty() {
        vec![""]
    } else {
        block.split('\n').collect()
    }
}
