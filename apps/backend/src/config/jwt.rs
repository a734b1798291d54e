//! JWT signing configuration.
//!
//! `JWT_SECRET_KEY` is mandatory. There is no fallback secret: a missing,
//! blank or well-known placeholder value is a startup error.

use jsonwebtoken::Algorithm;

use super::{non_empty, process_env, ConfigError};
use crate::state::security_config::SecurityConfig;

pub const JWT_SECRET_VAR: &str = "JWT_SECRET_KEY";
pub const JWT_ALGORITHM_VAR: &str = "JWT_ALGORITHM";

/// Secrets that shipped as defaults in older deployments of this service.
const PLACEHOLDER_SECRETS: &[&str] = &["your-secret-key", "your-default-secret-key-if-not-set"];

/// Build the signing configuration from the process environment.
pub fn security_config_from_env() -> Result<SecurityConfig, ConfigError> {
    security_config_from_lookup(process_env)
}

/// Build the signing configuration from an arbitrary variable lookup.
pub fn security_config_from_lookup<F>(lookup: F) -> Result<SecurityConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secret = jwt_secret(&lookup)?;
    let algorithm = jwt_algorithm(&lookup)?;
    Ok(SecurityConfig::new(secret).with_algorithm(algorithm))
}

fn jwt_secret<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secret = non_empty(lookup, JWT_SECRET_VAR).ok_or(ConfigError::Missing {
        var: JWT_SECRET_VAR,
    })?;

    if PLACEHOLDER_SECRETS.contains(&secret.trim()) {
        return Err(ConfigError::PlaceholderSecret {
            var: JWT_SECRET_VAR,
        });
    }

    Ok(secret)
}

fn jwt_algorithm<F>(lookup: &F) -> Result<Algorithm, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, JWT_ALGORITHM_VAR) {
        None => Ok(Algorithm::HS256),
        Some(raw) => parse_hmac_algorithm(&raw).ok_or_else(|| ConfigError::UnsupportedAlgorithm {
            var: JWT_ALGORITHM_VAR,
            value: raw.trim().to_string(),
        }),
    }
}

/// Parse a symmetric (HMAC) algorithm name, case-insensitively.
///
/// Asymmetric algorithms are rejected since the service only holds a shared
/// secret.
pub fn parse_hmac_algorithm(raw: &str) -> Option<Algorithm> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HS256" => Some(Algorithm::HS256),
        "HS384" => Some(Algorithm::HS384),
        "HS512" => Some(Algorithm::HS512),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use jsonwebtoken::Algorithm;
    use serial_test::serial;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_hs256() {
        let cfg = security_config_from_lookup(lookup_from(&[(
            JWT_SECRET_VAR,
            "a-perfectly-fine-secret",
        )]))
        .unwrap();

        assert_eq!(cfg.algorithm, Algorithm::HS256);
        assert_eq!(cfg.jwt_secret, b"a-perfectly-fine-secret".to_vec());
    }

    #[test]
    fn test_algorithm_is_case_insensitive() {
        let cfg = security_config_from_lookup(lookup_from(&[
            (JWT_SECRET_VAR, "secret-value"),
            (JWT_ALGORITHM_VAR, "hs512"),
        ]))
        .unwrap();

        assert_eq!(cfg.algorithm, Algorithm::HS512);
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let err = security_config_from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                var: JWT_SECRET_VAR
            }
        );
    }

    #[test]
    fn test_blank_secret_is_an_error() {
        let err = security_config_from_lookup(lookup_from(&[(JWT_SECRET_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
    }

    #[test]
    fn test_secret_is_kept_verbatim() {
        let cfg = security_config_from_lookup(lookup_from(&[(JWT_SECRET_VAR, " padded secret\t")]))
            .unwrap();

        assert_eq!(cfg.jwt_secret, b" padded secret\t".to_vec());
    }

    #[test]
    fn test_placeholder_secrets_rejected() {
        for placeholder in PLACEHOLDER_SECRETS {
            let err = security_config_from_lookup(lookup_from(&[(JWT_SECRET_VAR, *placeholder)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::PlaceholderSecret {
                    var: JWT_SECRET_VAR
                }
            );
        }
    }

    #[test]
    fn test_asymmetric_algorithm_rejected() {
        let err = security_config_from_lookup(lookup_from(&[
            (JWT_SECRET_VAR, "secret-value"),
            (JWT_ALGORITHM_VAR, "RS256"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::UnsupportedAlgorithm {
                var: JWT_ALGORITHM_VAR,
                value: "RS256".to_string(),
            }
        );
    }

    #[test]
    #[serial]
    fn test_from_process_env() {
        std::env::set_var(JWT_SECRET_VAR, "env-backed-secret");
        std::env::set_var(JWT_ALGORITHM_VAR, "HS384");

        let cfg = security_config_from_env().unwrap();
        assert_eq!(cfg.algorithm, Algorithm::HS384);
        assert_eq!(cfg.jwt_secret, b"env-backed-secret".to_vec());

        std::env::remove_var(JWT_SECRET_VAR);
        std::env::remove_var(JWT_ALGORITHM_VAR);
    }
}
