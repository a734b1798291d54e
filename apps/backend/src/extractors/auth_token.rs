use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};

use crate::AppError;

/// Bearer token taken from the `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// Parse `Bearer <token>`; the scheme is matched case-insensitively.
    pub fn from_header_value(value: &str) -> Result<Self, AppError> {
        let mut parts = value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                Ok(AuthToken {
                    token: token.to_string(),
                })
            }
            _ => Err(AppError::unauthorized_missing_bearer()),
        }
    }

    pub fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let auth_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(AppError::unauthorized_missing_bearer)?
            .to_str()
            .map_err(|_| AppError::unauthorized_missing_bearer())?;

        Self::from_header_value(auth_value)
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(Self::from_req(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bearer() {
        let parsed = AuthToken::from_header_value("Bearer abc.def.ghi").unwrap();
        assert_eq!(parsed.token, "abc.def.ghi");

        let lower = AuthToken::from_header_value("bearer abc").unwrap();
        assert_eq!(lower.token, "abc");
    }

    #[test]
    fn test_rejects_malformed_headers() {
        for value in ["", "Bearer", "Basic abc", "Bearer a b", "abc"] {
            assert!(
                matches!(
                    AuthToken::from_header_value(value),
                    Err(AppError::UnauthorizedMissingBearer)
                ),
                "expected rejection for {value:?}"
            );
        }
    }
}
