use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::TRACE_ID_HEADER;
use crate::config::cors::CorsSettings;

/// Build CORS middleware for the configured origins.
///
/// Only the methods and headers the API uses are allowed.
pub fn cors_middleware(settings: &CorsSettings) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static(TRACE_ID_HEADER)])
        .max_age(3600);

    for origin in &settings.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
