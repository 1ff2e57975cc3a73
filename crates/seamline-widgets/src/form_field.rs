#![forbid(unsafe_code)]

//! Labelled form field with validation.
//!
//! A text field is a single-bordered [`TextInput`]; a checkbox is a
//! `[✓]` / `[ ]` marker. Help text appears while focused and the last
//! validation error is shown as `Error: <message>` beneath the field.

use std::fmt;

use seamline_layout::{Alignment, Sides, VerticalAlignment};
use seamline_style::{BorderKind, Theme};
use seamline_text::{pad_with, spaces};

use crate::box_style::BoxStyle;
use crate::compose::join_horizontal;
use crate::input::TextInput;
use crate::{Widget, trace_render};

/// Message stored when a required field is empty.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Custom validation; `Err` carries the message shown under the field.
pub type Validator = Box<dyn Fn(&str) -> Result<(), String>>;

/// Kind of input a [`FormField`] collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKind {
    #[default]
    Text,
    Checkbox,
}

/// A failed [`FormField::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Form field widget.
pub struct FormField {
    label: String,
    kind: FieldKind,
    input: TextInput,
    checked: bool,
    required: bool,
    help: String,
    error: Option<ValidationError>,
    validator: Option<Validator>,
    focused: bool,
    width: usize,
    theme: Theme,
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("value", &self.value())
            .field("required", &self.required)
            .field("focused", &self.focused)
            .field("error", &self.error)
            .field("validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

impl FormField {
    pub const DEFAULT_WIDTH: usize = 40;
    const CHECKED: &'static str = "[✓]";
    const UNCHECKED: &'static str = "[ ]";

    #[must_use]
    pub fn new(theme: Theme, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            kind,
            input: TextInput::themed(&theme),
            checked: false,
            required: false,
            help: String::new(),
            error: None,
            validator: None,
            focused: false,
            width: Self::DEFAULT_WIDTH,
            theme,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Current value; `"true"` or `"false"` for a checkbox.
    #[must_use]
    pub fn value(&self) -> &str {
        match self.kind {
            FieldKind::Text => self.input.value(),
            FieldKind::Checkbox if self.checked => "true",
            FieldKind::Checkbox => "false",
        }
    }

    /// Replace the text value. Ignored by checkboxes.
    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        if self.kind == FieldKind::Text {
            self.input.set_value(value);
            self.input.move_end();
        }
        self
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.input.set_placeholder(placeholder);
        self
    }

    /// Help line shown while the field is focused.
    pub fn set_help(&mut self, help: impl Into<String>) -> &mut Self {
        self.help = help.into();
        self
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.required = required;
        self
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_focused(&mut self, focused: bool) -> &mut Self {
        self.focused = focused;
        self.input.set_focused(focused);
        self
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_validator(
        &mut self,
        validator: impl Fn(&str) -> Result<(), String> + 'static,
    ) -> &mut Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Tick or clear a checkbox. Ignored by text fields.
    pub fn set_checked(&mut self, checked: bool) -> &mut Self {
        if self.kind == FieldKind::Checkbox {
            self.checked = checked;
        }
        self
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The text input, for key handling by the caller.
    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// Error from the last [`validate`](Self::validate), if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) -> &mut Self {
        self.error = None;
        self
    }

    /// Check the value and keep the outcome for display.
    ///
    /// A required field fails when its trimmed value is empty, or when it
    /// is an unticked checkbox. Otherwise the custom validator decides.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let missing = match self.kind {
            FieldKind::Text => self.input.value().trim().is_empty(),
            FieldKind::Checkbox => !self.checked,
        };
        let outcome = if self.required && missing {
            Err(ValidationError::new(REQUIRED_MESSAGE))
        } else if let Some(validator) = &self.validator {
            validator(self.value()).map_err(ValidationError::new)
        } else {
            Ok(())
        };
        self.error = outcome.as_ref().err().cloned();
        outcome
    }

    fn field_style(&self) -> BoxStyle {
        let theme = &self.theme;
        let border = if self.focused {
            theme.border_focus
        } else {
            theme.border
        };
        BoxStyle::themed(theme, self.width)
            .border(BorderKind::Single)
            .border_style(theme.fg(border))
            .padding(Sides::symmetric(0, 1))
    }

    /// Width of every row of [`render`](Widget::render).
    #[must_use]
    pub fn outer_width(&self) -> usize {
        self.field_style().outer_width()
    }

    fn label_text(&self) -> String {
        if self.required {
            format!("{} *:", self.label)
        } else {
            format!("{}:", self.label)
        }
    }

    fn label_line(&self, width: usize, alignment: Alignment) -> String {
        let theme = &self.theme;
        let style = if self.focused {
            theme.fg(theme.primary).bold()
        } else {
            theme.fg(theme.text_primary)
        };
        let text = pad_with(&self.label_text(), width, alignment, theme.ellipsis.marker());
        theme.paint(style, &text)
    }

    fn checkbox(&self) -> &'static str {
        if self.checked {
            Self::CHECKED
        } else {
            Self::UNCHECKED
        }
    }

    fn boxed_field(&self, content: &str) -> String {
        self.field_style().render(content)
    }

    fn text_box(&self) -> String {
        let style = self.field_style();
        style.render(&self.input.view(style.inner_width()))
    }

    /// Help and error lines, each `width` columns.
    fn notes(&self, width: usize) -> Vec<String> {
        let theme = &self.theme;
        let marker = theme.ellipsis.marker();
        let mut lines = Vec::new();
        if self.focused && !self.help.is_empty() {
            let text = pad_with(&self.help, width, Alignment::Left, marker);
            lines.push(theme.paint(theme.fg(theme.text_secondary), &text));
        }
        if let Some(error) = &self.error {
            let text = pad_with(&format!("Error: {error}"), width, Alignment::Left, marker);
            lines.push(theme.paint(theme.fg(theme.error), &text));
        }
        lines
    }

    /// Label on the left, right-aligned in `label_width` columns, then a
    /// two-column gap and the boxed field. Help and error lines are
    /// indented under the field.
    #[must_use]
    pub fn render_inline(&self, label_width: usize) -> String {
        trace_render("form_field.inline", label_width + 2 + self.outer_width(), || {
            let label = self.label_line(label_width, Alignment::Right);
            let field = match self.kind {
                FieldKind::Text => self.text_box(),
                FieldKind::Checkbox => self.boxed_field(self.checkbox()),
            };
            let gap = spaces(2);
            let mut rows = vec![join_horizontal(
                &[label.as_str(), gap.as_str(), field.as_str()],
                VerticalAlignment::Top,
            )];
            let indent = spaces(label_width + 2);
            rows.extend(
                self.notes(self.outer_width())
                    .into_iter()
                    .map(|note| format!("{indent}{note}")),
            );
            rows.join("\n")
        })
    }
}

impl Widget for FormField {
    fn render(&self) -> String {
        let width = self.outer_width();
        trace_render("form_field", width, || {
            let theme = &self.theme;
            let mut rows = vec![self.label_line(width, Alignment::Left)];
            match self.kind {
                FieldKind::Text => rows.push(self.text_box()),
                FieldKind::Checkbox => {
                    let style = if self.focused {
                        theme.fg(theme.primary)
                    } else {
                        theme.fg(theme.text_primary)
                    };
                    let marker = pad_with(self.checkbox(), width, Alignment::Left, "");
                    rows.push(theme.paint(style, &marker));
                }
            }
            rows.extend(self.notes(width));
            rows.join("\n")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_uniform, plain_theme};

    fn text_field() -> FormField {
        let mut field = FormField::new(plain_theme(), "Name", FieldKind::Text);
        field.set_width(20);
        field
    }

    #[test]
    fn stacked_text_layout() {
        let mut field = text_field();
        field.set_value("octo").set_required(true);
        let out = field.render();
        assert_uniform(&out, 20);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].trim_end(), "Name *:");
        assert!(rows[1].starts_with('┌'));
        assert_eq!(rows[2], "│ octo             │");
        assert!(rows[3].starts_with('└'));
    }

    #[test]
    fn required_empty_fails() {
        let mut field = text_field();
        field.set_width(40).set_required(true).set_value("   ");
        let err = field.validate();
        assert_eq!(err, Err(ValidationError::new(REQUIRED_MESSAGE)));
        let out = field.render();
        assert!(out.contains("Error: This field is required"));
        assert_uniform(&out, 40);

        field.set_value("x");
        assert!(field.validate().is_ok());
        assert!(field.error().is_none());
        assert!(!field.render().contains("Error:"));
    }

    #[test]
    fn custom_validator_message() {
        let mut field = text_field();
        field.set_validator(|v| {
            if v.contains(' ') {
                Err("No spaces allowed".to_string())
            } else {
                Ok(())
            }
        });
        field.set_value("a b");
        let err = field.validate();
        assert_eq!(err.map_err(|e| e.to_string()), Err("No spaces allowed".into()));
        field.set_value("ab");
        assert!(field.validate().is_ok());
    }

    #[test]
    fn help_only_when_focused() {
        let mut field = text_field();
        field.set_help("Your display name");
        assert!(!field.render().contains("Your display name"));
        field.set_focused(true);
        let out = field.render();
        assert!(out.contains("Your display name"));
        assert_uniform(&out, 20);
    }

    #[test]
    fn checkbox_states() {
        let mut field = FormField::new(plain_theme(), "Enabled", FieldKind::Checkbox);
        field.set_width(12);
        assert_eq!(field.value(), "false");
        let rows: Vec<String> = field.render().split('\n').map(String::from).collect();
        assert_eq!(rows, ["Enabled:    ", "[ ]         "]);
        field.set_checked(true);
        assert_eq!(field.value(), "true");
        assert!(field.render().contains("[✓]"));
        field.set_value("ignored");
        assert_eq!(field.value(), "true");
    }

    #[test]
    fn required_checkbox_must_be_ticked() {
        let mut field = FormField::new(plain_theme(), "Accept", FieldKind::Checkbox);
        field.set_required(true);
        assert!(field.validate().is_err());
        field.set_checked(true);
        assert!(field.validate().is_ok());
    }

    #[test]
    fn set_checked_ignored_by_text() {
        let mut field = text_field();
        field.set_checked(true);
        assert!(!field.is_checked());
    }

    #[test]
    fn inline_layout() {
        let mut field = text_field();
        field.set_width(40).set_required(true);
        assert!(field.validate().is_err());
        let out = field.render_inline(8);
        assert_uniform(&out, 8 + 2 + 40);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with(" Name *:  ┌"));
        assert!(rows[1].starts_with("          │"));
        assert!(rows[3].starts_with("          Error: This field is required"));
    }

    #[test]
    fn colored_render_keeps_width() {
        let mut field = FormField::new(Theme::default(), "Repository", FieldKind::Text);
        field
            .set_placeholder("https://…")
            .set_help("Where to clone from")
            .set_focused(true);
        let _ = field.set_required(true).validate();
        assert_uniform(&field.render(), FormField::DEFAULT_WIDTH);
        assert_uniform(&field.render_inline(12), 12 + 2 + FormField::DEFAULT_WIDTH);
    }

    #[test]
    fn debug_hides_validator() {
        let mut field = text_field();
        field.set_validator(|_| Ok(()));
        let debug = format!("{field:?}");
        assert!(debug.contains("validator: true"));
    }
}
