pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use config::Config;
use libraries::{map_renderer::TileLayer, page::PageRenderer};
use services::geocoder::Geocoder;

/// How routes are drawn
#[derive(Debug, Clone)]
pub struct MapSettings {
    pub tiles: TileLayer,
    pub path_points: usize,
}

impl MapSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tiles: TileLayer {
                url: config.tile_url.clone(),
                attribution: config.tile_attribution.clone(),
            },
            path_points: config.path_points,
        }
    }
}

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<dyn Geocoder>,
    pub pages: Arc<PageRenderer>,
    pub map: MapSettings,
}

impl AppState {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        map: MapSettings,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            geocoder,
            pages: Arc::new(PageRenderer::new()?),
            map,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
