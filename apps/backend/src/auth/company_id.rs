//! Business id recovery from upstream `companyId` claims.
//!
//! Upstream identity tokens carry a `companyId` shaped like
//! `Faz-<userId>-<businessId>-<yyyy>-<mm>-<random>`. The business id is the
//! third hyphen-separated field, accepted only when the prefix, user id,
//! year and month all check out.

use serde_json::Value;
use tracing::debug;

const COMPANY_PREFIX: &str = "faz";

/// Render a `userId` claim the way it appears inside `companyId`.
pub fn user_id_string(user_id: &Value) -> Option<String> {
    match user_id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract the business id from `company_id`, cross-checking `user_id`.
pub fn extract_business_id(company_id: &str, user_id: &str) -> Option<String> {
    if company_id.is_empty() {
        debug!("companyId is empty");
        return None;
    }

    let parts: Vec<&str> = company_id.split('-').collect();
    if parts.len() < 6 {
        debug!(company_id, parts = parts.len(), "companyId has too few parts");
        return None;
    }

    if !parts[0].eq_ignore_ascii_case(COMPANY_PREFIX) {
        debug!(prefix = parts[0], "companyId prefix is not Faz");
        return None;
    }

    if parts[1] != user_id {
        debug!(
            embedded = parts[1],
            user_id, "companyId user id does not match token userId"
        );
        return None;
    }

    let (year, month) = (parts[3], parts[4]);
    if !is_year(year) || !is_month(month) {
        debug!(year, month, "companyId year or month is malformed");
        return None;
    }

    Some(parts[2].to_string())
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_month(s: &str) -> bool {
    s.len() == 2
        && s.bytes().all(|b| b.is_ascii_digit())
        && matches!(s.parse::<u8>(), Ok(1..=12))
}
