use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::{runtime, storage::IdPolicy};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Open the stores named in `cfg` and build the router around them.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let policy: IdPolicy = cfg
        .storage
        .id_policy
        .parse()
        .map_err(StartupError::InvalidConfig)?;

    runtime::ensure_env(&cfg.storage.data_dir).await?;
    let state = ServerState::from_files(&cfg.storage.products_file, &cfg.storage.carts_file, policy).await;
    info!(
        products = %cfg.storage.products_file,
        carts = %cfg.storage.carts_file,
        ?policy,
        "stores opened"
    );

    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = AppConfig::load_or_env()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
