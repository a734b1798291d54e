#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod trace_ctx;
pub mod utils;

// Re-exports for public API
pub use auth::claims::{BusinessClaims, TokenClaims};
pub use auth::jwt::{mint_access_token, mint_demo_token, verify_access_token, verify_claims};
pub use config::ConfigError;
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::{AuthToken, CurrentBusiness};
pub use middleware::{RequestTrace, StructuredLogger, TraceSpan};
pub use state::{AppState, SecurityConfig};
pub use utils::slug::generate_slug;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
