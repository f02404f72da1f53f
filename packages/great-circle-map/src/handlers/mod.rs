pub mod index;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

pub use index::{index, submit};

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "great-circle-map",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Failures that are our fault rather than the user's. Geocoding failures never
/// end up here; they degrade to a blank map instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to render page: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to render map: {0}")]
    Map(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
