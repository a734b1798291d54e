use std::time::SystemTime;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::jwt::mint_demo_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub const TOKEN_TYPE_BEARER: &str = "bearer";

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Issue a demo access token.
///
/// The caller is not authenticated and any request body is ignored.
async fn issue_token(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (access_token, claims) = mint_demo_token(SystemTime::now(), &app_state.security)?;

    info!(
        business_id = %claims.business_id,
        role = %claims.role,
        exp = claims.exp,
        "issued access token"
    );

    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/token").route(web::post().to(issue_token)));
}
