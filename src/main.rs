//! HTTP server binary for the Compliance Validation Engine.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use compliance_engine::api::{AppState, create_router};
use compliance_engine::config::RulesLoader;
use compliance_engine::error::EngineResult;

#[tokio::main]
async fn main() -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = std::env::var("COMPLIANCE_CONFIG_DIR")
        .unwrap_or_else(|_| "./config/kodeks_pracy".to_string());
    let rules = RulesLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        statute = %rules.statute().name,
        "Loaded rule configuration"
    );

    let app = create_router(AppState::new(rules));

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    info!(%addr, "Listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");

    Ok(())
}
