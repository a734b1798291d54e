//! Browser origin allowlist.

use super::process_env;

pub const CORS_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";

const LOCAL_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: LOCAL_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CorsSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    /// Read `CORS_ALLOWED_ORIGINS` (comma-separated) through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            allowed_origins: allowed_origins(&lookup(CORS_ORIGINS_VAR).unwrap_or_default()),
        }
    }
}

/// Parse a comma-separated origin list, ignoring blank, `null` and
/// non-http(s) entries. Falls back to localhost when nothing valid remains.
pub fn allowed_origins(raw: &str) -> Vec<String> {
    let parsed: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        CorsSettings::default().allowed_origins
    } else {
        parsed
    }
}
