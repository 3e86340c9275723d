use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::init_logging;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the config file when present; otherwise fall back to
/// `SERVER_HOST`/`SERVER_PORT`. A present but invalid file is an error.
fn load_config() -> anyhow::Result<(AppConfig, bool)> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        return Ok((configs::load_from_file(&path)?, true));
    }
    let mut cfg = AppConfig::default();
    cfg.server.host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    cfg.server.port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8081);
    cfg.normalize_and_validate()?;
    Ok((cfg, false))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}: {e}", cfg.bind_addr())))
}

/// Build the application with a fresh in-memory store.
pub fn app() -> Router {
    routes::build_router(ServerState::in_memory(), build_cors())
}

/// Public entry: load config, init logging, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let (cfg, from_file) = load_config()?;
    init_logging(cfg.logging.format);
    if !from_file {
        warn!("config file not found; using SERVER_HOST/SERVER_PORT");
    }

    let addr = bind_addr(&cfg)?;
    let app = app();

    info!(%addr, "starting customer-locations server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
