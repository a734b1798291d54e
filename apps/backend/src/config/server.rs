//! Listener configuration.

use super::{non_empty, process_env, ConfigError};

pub const HOST_VAR: &str = "BACKEND_HOST";
pub const PORT_VAR: &str = "BACKEND_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Address the HTTP server binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = non_empty(&lookup, HOST_VAR)
            .map(|h| h.trim().to_string())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_empty(&lookup, PORT_VAR) {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw,
            })?,
        };

        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ServerSettings::from_lookup(|_| None).unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8000);
    }

    #[test]
    fn test_overrides() {
        let settings = ServerSettings::from_lookup(|key| match key {
            HOST_VAR => Some("127.0.0.1".to_string()),
            PORT_VAR => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(
            settings,
            ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 9090,
            }
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let settings = ServerSettings::from_lookup(|key| match key {
            HOST_VAR => Some(" 127.0.0.1 ".to_string()),
            PORT_VAR => Some("9090\n".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 9090);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerSettings::from_lookup(|key| {
            (key == PORT_VAR).then(|| "not-a-port".to_string())
        })
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: PORT_VAR,
                value: "not-a-port".to_string(),
            }
        );
    }
}
