//! Environment-driven configuration.
//!
//! Every loader has a `*_from_env` entry point and a lookup-based variant so
//! tests can supply values without touching the process environment.

use thiserror::Error;

pub mod cors;
pub mod jwt;
pub mod server;

/// Startup configuration failure. The server refuses to start on any of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable '{var}' is not set")]
    Missing { var: &'static str },
    #[error("environment variable '{var}' holds a known placeholder value; set a real secret")]
    PlaceholderSecret { var: &'static str },
    #[error("'{value}' in '{var}' is not a supported algorithm (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm { var: &'static str, value: String },
    #[error("'{value}' in '{var}' is not a valid port number")]
    InvalidPort { var: &'static str, value: String },
}

/// Read a variable through `lookup`, treating blank values as unset.
///
/// The value is returned verbatim; callers trim where whitespace is noise.
pub(crate) fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|v| !v.trim().is_empty())
}

/// Lookup backed by the process environment.
pub(crate) fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}
