use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use great_circle_map::{
    config::Config, router, services::geocoder::NominatimGeocoder, AppState, MapSettings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "great_circle_map=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting great-circle map service");
    info!(
        "Geocoding via {} (timeout {}s)",
        config.geocoder_url, config.geocoder_timeout_secs
    );

    let geocoder = NominatimGeocoder::from_config(&config)?;
    let state = AppState::new(Arc::new(geocoder), MapSettings::from_config(&config))?;
    let app = router(state);

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    info!("Shutting down...");
    Ok(())
}
