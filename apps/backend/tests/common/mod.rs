#![allow(dead_code)]

// tests/common/mod.rs
use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::web;
use catalog_backend::{AppState, SecurityConfig};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::test_logging::init();
}

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

pub fn test_state(security: SecurityConfig) -> web::Data<AppState> {
    web::Data::new(AppState::new(security))
}

pub fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
