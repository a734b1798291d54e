use actix_web::{web, HttpServer};
use catalog_backend::app::build_app;
use catalog_backend::config::cors::CorsSettings;
use catalog_backend::config::jwt::security_config_from_env;
use catalog_backend::config::server::ServerSettings;
use catalog_backend::state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let server = match ServerSettings::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid listener configuration");
            std::process::exit(1);
        }
    };

    let security = match security_config_from_env() {
        Ok(security) => security,
        Err(e) => {
            error!(error = %e, "refusing to start without a usable JWT secret");
            std::process::exit(1);
        }
    };

    let cors = CorsSettings::from_env();

    info!(
        host = %server.host,
        port = server.port,
        algorithm = ?security.algorithm,
        cors_origins = ?cors.allowed_origins,
        "starting catalog backend"
    );

    let data = web::Data::new(AppState::new(security).with_cors(cors));

    HttpServer::new(move || build_app(data.clone()))
        .bind((server.host.as_str(), server.port))?
        .run()
        .await
}
