//! Claim sets carried by backend-issued tokens.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Business identifier stamped into tokens from `POST /api/token`.
pub const DEMO_BUSINESS_ID: &str = "demo123";
/// Role stamped into tokens from `POST /api/token`.
pub const DEMO_ROLE: &str = "admin";
/// Access token lifetime: two hours.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

/// Claims included in tokens minted by this service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub business_id: String,
    pub role: String,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl TokenClaims {
    /// The fixed demo claim set, expiring [`ACCESS_TOKEN_TTL_SECS`] after `now`.
    ///
    /// Returns `None` only if `now` is before the Unix epoch.
    pub fn demo(now: SystemTime) -> Option<Self> {
        let iat = now.duration_since(UNIX_EPOCH).ok()?.as_secs() as i64;

        Some(Self {
            business_id: DEMO_BUSINESS_ID.to_string(),
            role: DEMO_ROLE.to_string(),
            exp: iat + ACCESS_TOKEN_TTL_SECS,
        })
    }
}

/// Claims accepted on protected routes.
///
/// Tokens from other issuers may omit either field or carry non-string
/// values (e.g. a numeric `business_id`); the `CurrentBusiness` extractor
/// decides what is mandatory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BusinessClaims {
    #[serde(default)]
    pub business_id: Option<Value>,
    #[serde(default)]
    pub role: Option<Value>,
    pub exp: i64,
}

impl BusinessClaims {
    pub fn business_id(&self) -> Option<String> {
        self.business_id.as_ref().and_then(claim_text)
    }

    pub fn role(&self) -> Option<String> {
        self.role.as_ref().and_then(claim_text)
    }
}

/// Text form of a claim value: strings as-is, `null` as absent, anything
/// else as its JSON rendering.
pub fn claim_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_demo_claims_expire_two_hours_out() {
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let claims = TokenClaims::demo(now).unwrap();

        assert_eq!(claims.business_id, "demo123");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp, 1_700_000_000 + 7200);
    }

    #[test]
    fn test_demo_claims_serialize_with_fixed_keys() {
        let claims = TokenClaims::demo(UNIX_EPOCH + Duration::from_secs(10)).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["business_id", "exp", "role"]);
    }

    #[test]
    fn test_business_claims_tolerate_missing_fields() {
        let parsed: BusinessClaims = serde_json::from_str(r#"{"exp": 5}"#).unwrap();
        assert_eq!(parsed.business_id(), None);
        assert_eq!(parsed.role(), None);
    }

    #[test]
    fn test_business_claims_accept_non_string_values() {
        let parsed: BusinessClaims =
            serde_json::from_str(r#"{"business_id": 11, "role": "admin", "exp": 5}"#).unwrap();
        assert_eq!(parsed.business_id().as_deref(), Some("11"));
        assert_eq!(parsed.role().as_deref(), Some("admin"));
    }

    #[test]
    fn test_null_business_id_is_absent() {
        let parsed: BusinessClaims =
            serde_json::from_str(r#"{"business_id": null, "exp": 5}"#).unwrap();
        assert_eq!(parsed.business_id(), None);
    }
}
