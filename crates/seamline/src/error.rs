#![forbid(unsafe_code)]

//! Seamline error model.
//!
//! Rendering never fails. Errors come only from configuration parsing and
//! from writing finished blocks into a caller's [`std::fmt::Write`].

use std::fmt;

/// An environment value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `key` held `value`, which is not one of `expected`.
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "invalid {key}={value:?}: expected {expected}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level error type for Seamline APIs.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be parsed.
    Config(ConfigError),
    /// The destination writer refused output.
    Format(fmt::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Format(err) => write!(f, "write failed: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::Format(err)
    }
}

/// Standard result type for Seamline APIs.
pub type Result<T> = std::result::Result<T, Error>;
