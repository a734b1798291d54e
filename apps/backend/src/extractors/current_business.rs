use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Serialize;
use tracing::debug;

use crate::auth::claims::BusinessClaims;
use crate::auth::jwt::verify_claims;
use crate::error::AppError;
use crate::extractors::auth_token::AuthToken;
use crate::state::app_state::AppState;

/// Business principal recovered from a verified bearer token.
///
/// Missing/malformed bearer and verification failures are 401; a valid
/// token without a non-null `business_id` is 403. Non-string claim values
/// are rendered as text (`11` becomes `"11"`).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrentBusiness {
    pub business_id: String,
    pub role: Option<String>,
}

impl CurrentBusiness {
    fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let token = AuthToken::from_req(req)?;

        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))?;

        let claims: BusinessClaims = verify_claims(&token.token, &app_state.security)?;

        let business_id = claims.business_id().ok_or_else(|| {
            debug!("verified token has no business_id claim");
            AppError::forbidden_missing_business_id()
        })?;

        Ok(CurrentBusiness {
            business_id,
            role: claims.role(),
        })
    }
}

impl FromRequest for CurrentBusiness {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(Self::from_req(req))
    }
}
