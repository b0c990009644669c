use std::env;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::observability::init_metrics;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Server settings from `SERVER_HOST`/`SERVER_PORT`; unset or unparsable
/// values keep the defaults.
fn server_from_vars(host: Option<String>, port: Option<String>) -> ServerConfig {
    let defaults = ServerConfig::default();
    let host = host.unwrap_or(defaults.host);
    let port = port
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(defaults.port);
    ServerConfig { host, port }
}

fn server_from_env() -> ServerConfig {
    server_from_vars(env::var("SERVER_HOST").ok(), env::var("SERVER_PORT").ok())
}

/// Load `CONFIG_PATH` (default `config.toml`), falling back to env vars
/// when the file does not exist
pub fn load_config() -> Result<AppConfig, StartupError> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(e) if configs::is_not_found(&e) => {
            let path = configs::config_path();
            warn!(%path, "config file not found; using SERVER_HOST/SERVER_PORT and defaults");
            AppConfig { server: server_from_env(), ..AppConfig::default() }
        }
        Err(e) => return Err(StartupError::InvalidConfig(e.to_string())),
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    init_logging_from_env();
    init_metrics();

    let cfg = load_config()?;
    let state = AppState { pagination: cfg.pagination, steps: cfg.steps };
    let app: Router = routes::build_router(state, build_cors());

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    info!(addr = %listener.local_addr()?, "starting pager server");
    axum::serve(listener, app).await?;
    Ok(())
}
