use super::security_config::SecurityConfig;
use crate::config::cors::CorsSettings;

/// Application state shared (read-only) across actix workers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Browser origins accepted by the CORS layer
    pub cors: CorsSettings,
}

impl AppState {
    /// State with the localhost-only CORS allowlist.
    pub fn new(security: SecurityConfig) -> Self {
        Self {
            security,
            cors: CorsSettings::default(),
        }
    }

    pub fn with_cors(mut self, cors: CorsSettings) -> Self {
        self.cors = cors;
        self
    }
}
