use serde::Deserialize;
use std::error::Error;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::config::Config;
use crate::models::Coordinate;

pub type GeocodeFuture<'a> = Pin<Box<dyn Future<Output = Result<Coordinate, GeocodeError>> + Send + 'a>>;

/// Resolves a free-text place name to a coordinate.
pub trait Geocoder: Send + Sync + 'static {
    fn geocode<'a>(&'a self, place: &'a str) -> GeocodeFuture<'a>;
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("no match found for place name")]
    NotFound,

    #[error("geocoding request timed out")]
    Timeout,

    #[error("geocoder returned HTTP {0}")]
    Status(u16),

    #[error("geocoding request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("geocoder returned an invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeocodeError::Timeout
        } else {
            GeocodeError::Request(e)
        }
    }
}

/// One entry of a Nominatim `/search` response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

/// Geocoder backed by a Nominatim-compatible `/search` endpoint
#[derive(Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.geocoder_url.clone(),
            &config.geocoder_user_agent,
            Duration::from_secs(config.geocoder_timeout_secs),
        )
    }

    async fn search(&self, place: &str) -> Result<Coordinate, GeocodeError> {
        tracing::debug!("Geocoding '{}' via {}", place, self.base_url);

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| {
                // Log full error chain for debugging
                let mut error_msg = format!("Geocoding request for '{}' failed: {}", place, e);
                let mut source = e.source();
                while let Some(err) = source {
                    error_msg.push_str(&format!("\n  Caused by: {}", err));
                    source = err.source();
                }
                tracing::warn!("{}", error_msg);
                GeocodeError::from(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Geocoder returned HTTP {}", status);
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let results: Vec<SearchResult> = response.json().await?;
        let first = results.into_iter().next().ok_or(GeocodeError::NotFound)?;

        let coordinate = parse_coordinate(&first.lat, &first.lon)?;
        tracing::info!(
            "Resolved '{}' to ({}, {}) [{}]",
            place,
            coordinate.latitude,
            coordinate.longitude,
            first.display_name
        );

        Ok(coordinate)
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode<'a>(&'a self, place: &'a str) -> GeocodeFuture<'a> {
        Box::pin(self.search(place))
    }
}

fn parse_coordinate(lat: &str, lon: &str) -> Result<Coordinate, GeocodeError> {
    let latitude = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidCoordinate(format!("lat={lat}")))?;
    let longitude = lon
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidCoordinate(format!("lon={lon}")))?;

    let coordinate = Coordinate::new(latitude, longitude);
    if !coordinate.is_valid() {
        return Err(GeocodeError::InvalidCoordinate(format!("{lat},{lon}")));
    }
    Ok(coordinate)
}
