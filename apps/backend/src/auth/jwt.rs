use std::time::SystemTime;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Header, Validation};
use serde::de::DeserializeOwned;

use crate::auth::claims::TokenClaims;
use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Sign `claims` with the configured secret and algorithm.
pub fn mint_access_token(
    claims: &TokenClaims,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    encode(&Header::new(security.algorithm), claims, &security.encoding_key()).map_err(|e| {
        AppError::internal_with_code(
            ErrorCode::TokenSigningFailed,
            format!("Failed to encode JWT: {e}"),
        )
    })
}

/// Build the demo claim set for `now` and sign it.
pub fn mint_demo_token(
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<(String, TokenClaims), AppError> {
    let claims = TokenClaims::demo(now)
        .ok_or_else(|| AppError::internal("Failed to get current time"))?;
    let token = mint_access_token(&claims, security)?;
    Ok((token, claims))
}

/// Verify a token and deserialize its claims into `C`.
///
/// The algorithm is pinned to the configured one and `exp` is required and
/// checked.
///
/// Errors:
/// - Expired token → `AppError::UnauthorizedExpiredJwt`
/// - Bad signature, wrong algorithm, malformed token → `AppError::UnauthorizedInvalidJwt`
pub fn verify_claims<C>(token: &str, security: &SecurityConfig) -> Result<C, AppError>
where
    C: DeserializeOwned,
{
    let validation = Validation::new(security.algorithm);

    decode::<C>(token, &security.decoding_key(), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
            _ => AppError::unauthorized_invalid_jwt(),
        })
}

/// Verify a token minted by this service and return its claims.
pub fn verify_access_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<TokenClaims, AppError> {
    verify_claims::<TokenClaims>(token, security)
}
