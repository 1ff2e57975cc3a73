#![forbid(unsafe_code)]

//! Environment-driven configuration.
//!
//! | Variable            | Values                                  | Default   |
//! |---------------------|-----------------------------------------|-----------|
//! | `SEAMLINE_COLOR`    | `auto`, `always`, `never`               | `auto`    |
//! | `SEAMLINE_BORDER`   | `rounded`, `single`, `double`, `thick`  | `rounded` |
//! | `SEAMLINE_ELLIPSIS` | `unicode`, `ascii`                      | `unicode` |
//!
//! `NO_COLOR` set to any non-empty value turns `auto` into `never`.
//!
//! [`Config::from_env_with`] is strict and reports the first bad value.
//! [`Config::detect`] logs bad values and keeps the defaults instead.

use seamline_style::{BorderKind, ColorMode, Ellipsis, Theme, ThemeBuilder};

use crate::error::ConfigError;

/// Color output override (`auto`, `always` or `never`).
pub const ENV_COLOR: &str = "SEAMLINE_COLOR";
/// Border kind for widgets in their normal state.
pub const ENV_BORDER: &str = "SEAMLINE_BORDER";
/// Truncation marker (`unicode` or `ascii`).
pub const ENV_ELLIPSIS: &str = "SEAMLINE_ELLIPSIS";
/// The cross-tool convention for disabling color.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

const COLOR_CHOICES: &str = "auto, always, never";
const BORDER_CHOICES: &str = "rounded, single, double, thick";
const ELLIPSIS_CHOICES: &str = "unicode, ascii";

/// Whether rendered output carries SGR escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorChoice {
    /// Color unless `NO_COLOR` is set.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" | "on" => Some(Self::Always),
            "never" | "off" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Rendering configuration shared by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub color: ColorChoice,
    pub border: BorderKind,
    pub ellipsis: Ellipsis,
}

impl Config {
    /// Parse from the process environment, rejecting invalid values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Parse using a custom environment lookup (for tests).
    pub fn from_env_with<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            color: lookup(&get_env, ENV_COLOR, COLOR_CHOICES, ColorChoice::parse)?
                .unwrap_or_default(),
            border: lookup(&get_env, ENV_BORDER, BORDER_CHOICES, parse_border)?
                .unwrap_or_default(),
            ellipsis: lookup(&get_env, ENV_ELLIPSIS, ELLIPSIS_CHOICES, Ellipsis::from_name)?
                .unwrap_or_default(),
        };
        config.apply_no_color(&get_env);
        Ok(config)
    }

    /// Lenient detection from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    /// Lenient detection using a custom environment lookup.
    ///
    /// Each invalid value is logged at `warn` and replaced by its default;
    /// the other variables still apply.
    #[must_use]
    pub fn detect_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            color: lenient(lookup(&get_env, ENV_COLOR, COLOR_CHOICES, ColorChoice::parse)),
            border: lenient(lookup(&get_env, ENV_BORDER, BORDER_CHOICES, parse_border)),
            ellipsis: lenient(lookup(
                &get_env,
                ENV_ELLIPSIS,
                ELLIPSIS_CHOICES,
                Ellipsis::from_name,
            )),
        };
        config.apply_no_color(&get_env);
        tracing::debug!(
            color = ?config.color,
            border = config.border.name(),
            ellipsis = config.ellipsis.name(),
            "configuration detected"
        );
        config
    }

    fn apply_no_color<F>(&mut self, get_env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_color = get_env(ENV_NO_COLOR).is_some_and(|v| !v.is_empty());
        if self.color == ColorChoice::Auto && no_color {
            self.color = ColorChoice::Never;
        }
    }

    /// Whether painting emits escapes under this configuration.
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        match self.color {
            ColorChoice::Never => ColorMode::Plain,
            ColorChoice::Auto | ColorChoice::Always => ColorMode::Ansi,
        }
    }

    /// The default palette with this configuration's switches applied.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_from(Theme::default())
    }

    /// `base` with this configuration's switches applied.
    #[must_use]
    pub fn theme_from(&self, base: Theme) -> Theme {
        ThemeBuilder::from_theme(base)
            .border_kind(self.border)
            .color_mode(self.color_mode())
            .ellipsis(self.ellipsis)
            .build()
    }
}

fn parse_border(value: &str) -> Option<BorderKind> {
    BorderKind::from_name(value).filter(|kind| *kind != BorderKind::None)
}

/// `Ok(None)` when unset or blank, the parsed value, or an error naming the
/// variable.
fn lookup<F, T>(
    get_env: &F,
    key: &'static str,
    expected: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = get_env(key) else {
        return Ok(None);
    };
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse(&value).map(Some).ok_or(ConfigError::InvalidValue {
        key,
        value,
        expected,
    })
}

fn lenient<T: Default>(parsed: Result<Option<T>, ConfigError>) -> T {
    match parsed {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid configuration value");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    fn map_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn get_env<'a>(map: &'a HashMap<String, String>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_is_default() {
        let env = map_env(&[]);
        let config = Config::from_env_with(get_env(&env)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.color_mode(), ColorMode::Ansi);
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn values_parse_case_insensitively() {
        let env = map_env(&[
            (ENV_COLOR, "Never"),
            (ENV_BORDER, " DOUBLE "),
            (ENV_ELLIPSIS, "ascii"),
        ]);
        let config = Config::from_env_with(get_env(&env)).unwrap();
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.border, BorderKind::Double);
        assert_eq!(config.ellipsis, Ellipsis::Ascii);

        let theme = config.theme();
        assert_eq!(theme.color_mode, ColorMode::Plain);
        assert_eq!(theme.border_kind, BorderKind::Double);
        assert_eq!(theme.ellipsis.marker(), "...");
    }

    #[test]
    fn no_color_only_overrides_auto() {
        let env = map_env(&[(ENV_NO_COLOR, "1")]);
        let config = Config::from_env_with(get_env(&env)).unwrap();
        assert_eq!(config.color, ColorChoice::Never);

        let env = map_env(&[(ENV_NO_COLOR, "1"), (ENV_COLOR, "always")]);
        let config = Config::from_env_with(get_env(&env)).unwrap();
        assert_eq!(config.color_mode(), ColorMode::Ansi);

        let env = map_env(&[(ENV_NO_COLOR, "")]);
        let config = Config::from_env_with(get_env(&env)).unwrap();
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn strict_parse_reports_bad_value() {
        let env = map_env(&[(ENV_BORDER, "dotted")]);
        let err = Config::from_env_with(get_env(&env)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_BORDER,
                value: "dotted".into(),
                expected: BORDER_CHOICES,
            }
        );
    }

    #[test]
    fn none_is_not_a_configurable_border() {
        let env = map_env(&[(ENV_BORDER, "none")]);
        assert!(Config::from_env_with(get_env(&env)).is_err());
    }

    #[test]
    fn blank_value_counts_as_unset() {
        let env = map_env(&[(ENV_ELLIPSIS, "  ")]);
        let config = Config::from_env_with(get_env(&env)).unwrap();
        assert_eq!(config.ellipsis, Ellipsis::Unicode);
    }

    #[traced_test]
    #[test]
    fn lenient_detect_warns_and_keeps_defaults() {
        let env = map_env(&[(ENV_COLOR, "sometimes"), (ENV_BORDER, "thick")]);
        let config = Config::detect_with(get_env(&env));
        assert_eq!(config.color, ColorChoice::Auto);
        assert_eq!(config.border, BorderKind::Thick);
        assert!(logs_contain("ignoring invalid configuration value"));
        assert!(logs_contain("SEAMLINE_COLOR"));
    }

    #[test]
    fn theme_from_keeps_palette() {
        let base = Theme::monochrome();
        let env = map_env(&[(ENV_BORDER, "single")]);
        let theme = Config::from_env_with(get_env(&env)).unwrap().theme_from(base);
        assert_eq!(theme.primary, base.primary);
        assert_eq!(theme.border_kind, BorderKind::Single);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = Config {
            color: ColorChoice::Never,
            border: BorderKind::Thick,
            ellipsis: Ellipsis::Ascii,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"color":"never","border":"thick","ellipsis":"ascii"}"#
        );
        let partial: Config = serde_json::from_str(r#"{"border":"double"}"#).unwrap();
        assert_eq!(partial.border, BorderKind::Double);
        assert_eq!(partial.color, ColorChoice::Auto);
    }
}
