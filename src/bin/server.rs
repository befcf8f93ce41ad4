//! UmmahMap HTTP Server Binary
//!
//! Entry point for the UmmahMap REST API server. It loads configuration,
//! builds the outbound HTTP client shared by both upstream adapters, sets
//! up the router, and starts serving requests.
//!
//! # Environment Variables
//!
//! - `GOOGLE_MAPS_API_KEY`: Places-search credential (nearest-mosque lookups
//!   fail with a 400 when unset)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use ummah_map::config::AppConfig;
use ummah_map::http::{create_router, AppState};
use ummah_map::upstream::{build_http_client, AladhanClient, GooglePlacesClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting UmmahMap HTTP Server");

    // Load configuration once; it is immutable for the process lifetime.
    let config = Arc::new(AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?);
    if config.google_maps_api_key.is_none() {
        warn!("GOOGLE_MAPS_API_KEY not set; nearest-mosque lookups will be rejected");
    }

    // One outbound client with the fixed upstream timeout, shared by both adapters.
    let http_client = build_http_client()?;
    let places = Arc::new(GooglePlacesClient::new(http_client.clone()));
    let prayer_times = Arc::new(AladhanClient::new(http_client));

    let state = AppState::new(config.clone(), places, prayer_times);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
