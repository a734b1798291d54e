//! Offline token inspection for diagnostics.
//!
//! Unlike [`crate::auth::jwt::verify_claims`], inspection never fails just
//! because verification fails: it reports what went wrong and still shows
//! the (unverified) payload, the header algorithm and the expiry.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::auth::claims::claim_text;
use crate::auth::company_id::{extract_business_id, user_id_string};

/// How a token should be inspected.
#[derive(Debug, Clone, Copy)]
pub enum InspectMode<'a> {
    /// Verify signature and `exp` with this secret, using the header's algorithm.
    Verify { secret: &'a [u8] },
    /// Decode the payload without any verification.
    Insecure,
}

/// Why verification of an otherwise decodable token failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectFailure {
    Expired,
    InvalidSignature,
    InvalidToken,
}

/// Tokens that cannot be inspected at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InspectError {
    #[error("token string is empty")]
    EmptyToken,
    #[error("invalid token header: {0}")]
    InvalidHeader(String),
    #[error("could not decode token payload: {0}")]
    InvalidPayload(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    /// `alg` named in the (unverified) header, verbatim
    pub algorithm: String,
    /// True only when signature and expiry were checked and passed
    pub verified: bool,
    pub failure: Option<InspectFailure>,
    /// Human-readable failure detail from the JWT library
    pub failure_detail: Option<String>,
    pub payload: Option<Value>,
    pub subject: Option<String>,
    pub role: Option<String>,
    pub company_id: Option<String>,
    pub user_id: Option<Value>,
    pub business_id: Option<String>,
    pub issued_at: Option<String>,
    pub expires_at: Option<String>,
    pub expired: Option<bool>,
}

impl TokenReport {
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// Inspect `token` against the current wall clock.
pub fn inspect_token(token: &str, mode: InspectMode<'_>) -> Result<TokenReport, InspectError> {
    inspect_token_at(token, mode, SystemTime::now())
}

/// Inspect `token`, judging expiry relative to `now`.
///
/// The header is read without the JWT library so tokens naming algorithms
/// it does not know (`none` included) can still be inspected; such tokens
/// fail verification as [`InspectFailure::InvalidToken`].
pub fn inspect_token_at(
    token: &str,
    mode: InspectMode<'_>,
    now: SystemTime,
) -> Result<TokenReport, InspectError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(InspectError::EmptyToken);
    }

    let (header_segment, payload_segment) = split_segments(token).ok_or_else(|| {
        InspectError::InvalidHeader("expected three dot-separated segments".to_string())
    })?;

    let header = decode_json_segment(header_segment).map_err(InspectError::InvalidHeader)?;
    let algorithm = header
        .get("alg")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| InspectError::InvalidHeader("header has no alg".to_string()))?;
    debug!(%algorithm, "decoded token header");

    let (payload, verified, failure, failure_detail) = match mode {
        InspectMode::Insecure => {
            warn!("bypassing signature and expiry verification");
            let payload =
                decode_json_segment(payload_segment).map_err(InspectError::InvalidPayload)?;
            (Some(payload), false, None, None)
        }
        InspectMode::Verify { secret } => match verify(token, secret) {
            Ok(claims) => (Some(claims), true, None, None),
            Err((failure, detail)) => {
                warn!(?failure, error = %detail, "token verification failed");
                let payload = decode_json_segment(payload_segment).ok();
                (payload, false, Some(failure), Some(detail))
            }
        },
    };

    let now_secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();

    let mut report = TokenReport {
        algorithm,
        verified,
        failure,
        failure_detail,
        payload: None,
        subject: None,
        role: None,
        company_id: None,
        user_id: None,
        business_id: None,
        issued_at: None,
        expires_at: None,
        expired: None,
    };

    if let Some(claims) = payload.as_ref().and_then(Value::as_object) {
        fill_from_claims(&mut report, claims, now_secs);
    }
    report.payload = payload;

    Ok(report)
}

/// Verify signature and `exp` using the algorithm named in the header.
fn verify(token: &str, secret: &[u8]) -> Result<Value, (InspectFailure, String)> {
    let header = decode_header(token)
        .map_err(|e| (InspectFailure::InvalidToken, e.to_string()))?;

    let mut validation = Validation::new(header.alg);
    validation.leeway = 0;
    validation.required_spec_claims.clear();

    decode::<Value>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            let failure = match e.kind() {
                ErrorKind::ExpiredSignature => InspectFailure::Expired,
                ErrorKind::InvalidSignature => InspectFailure::InvalidSignature,
                _ => InspectFailure::InvalidToken,
            };
            (failure, e.to_string())
        })
}

fn fill_from_claims(report: &mut TokenReport, claims: &Map<String, Value>, now_secs: i64) {
    report.subject = claims
        .get("sub")
        .and_then(Value::as_str)
        .map(str::to_string);
    report.role = claims.get("role").and_then(claim_text);
    report.company_id = claims
        .get("companyId")
        .and_then(Value::as_str)
        .map(str::to_string);
    report.user_id = claims.get("userId").filter(|v| !v.is_null()).cloned();

    let user_id = report.user_id.as_ref().and_then(user_id_string);
    report.business_id = match (&report.company_id, user_id) {
        (Some(company_id), Some(user_id)) => extract_business_id(company_id, &user_id),
        _ => None,
    };

    report.issued_at = timestamp_claim(claims, "iat").and_then(format_timestamp);

    if let Some(exp) = timestamp_claim(claims, "exp") {
        report.expires_at = format_timestamp(exp);
        report.expired = Some(exp < now_secs);
    }
}

/// Numeric date claim in seconds; fractional values are truncated.
fn timestamp_claim(claims: &Map<String, Value>, name: &str) -> Option<i64> {
    claims
        .get(name)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
}

fn format_timestamp(secs: i64) -> Option<String> {
    OffsetDateTime::from_unix_timestamp(secs)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
}

/// Header and payload segments of a compact JWS.
fn split_segments(token: &str) -> Option<(&str, &str)> {
    let mut segments = token.split('.');
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(header), Some(payload), Some(_), None) => Some((header, payload)),
        _ => None,
    }
}

/// Decode a base64url segment holding a JSON object, checking nothing else.
fn decode_json_segment(segment: &str) -> Result<Value, String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| e.to_string())?;

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| e.to_string())?;

    if !value.is_object() {
        return Err("segment is not a JSON object".to_string());
    }

    Ok(value)
}
