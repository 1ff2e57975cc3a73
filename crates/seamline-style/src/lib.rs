#![forbid(unsafe_code)]

//! Style types for Seamline.
//!
//! # Role in Seamline
//! `seamline-style` is the shared vocabulary for colors, text attributes, and
//! border glyphs. Widgets use these types to stay visually consistent; the
//! crate has no knowledge of text measurement or layout.
//!
//! # This crate provides
//! - [`Color`] tokens and their SGR encodings.
//! - [`Style`] for painting text with escape sequences.
//! - [`BorderKind`] / [`BorderSet`] glyph tables.
//! - [`InteractiveStyle`] for per-state overrides.
//! - [`Theme`] for semantic color slots.

/// Border glyph tables.
pub mod border;
/// Color tokens.
pub mod color;
/// Per-state style variants for stateful widgets.
pub mod interactive;
/// SGR text styles.
pub mod style;
/// Theme system with semantic color slots.
pub mod theme;

pub use border::{BorderKind, BorderSet};
pub use color::Color;
pub use interactive::{InteractiveStyle, VisualState};
pub use style::{ColorMode, RESET, Style, StyleFlags};
pub use theme::{Ellipsis, Theme, ThemeBuilder};
