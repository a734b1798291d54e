use actix_web::web;

pub mod health;
pub mod token;
pub mod users;

/// Register every application route.
///
/// Shared by `main.rs` and the integration tests so both exercise the same
/// paths; middleware is applied by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root welcome + health check: /, /health
    cfg.configure(health::configure_routes);

    // Token issuance: /api/token
    cfg.configure(token::configure_routes);

    // Authenticated user routes: /api/v1/users/**
    cfg.service(web::scope("/api/v1/users").configure(users::configure_routes));
}
