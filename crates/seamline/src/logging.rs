#![forbid(unsafe_code)]

//! Formatted logging for binaries built on Seamline.
//!
//! Libraries only emit `tracing` events; installing a subscriber is the
//! application's choice. [`init`] installs one that writes to stderr,
//! filtered by `SEAMLINE_LOG` (an `EnvFilter` directive such as
//! `seamline_widgets=debug`).

use tracing_subscriber::EnvFilter;

/// Filter directive variable.
pub const ENV_LOG: &str = "SEAMLINE_LOG";

/// Directive used when `SEAMLINE_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(std::env::var(ENV_LOG).ok()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}

fn filter(directive: Option<String>) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
