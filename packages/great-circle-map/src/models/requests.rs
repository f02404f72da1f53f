use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Form submitted from the index page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapForm {
    pub city1: Option<String>,
    pub city2: Option<String>,
    /// Present (with any value) when the Reset button was pressed
    pub reset: Option<String>,
}

impl MapForm {
    pub fn is_reset(&self) -> bool {
        self.reset.is_some()
    }

    /// Both place names, trimmed, when neither is blank
    pub fn place_names(&self) -> Option<(&str, &str)> {
        let first = self.city1.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let second = self.city2.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((first, second))
    }
}

/// One echoed place name and its geocode, if it resolved
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlaceResult {
    pub name: String,
    pub coordinate: Option<Coordinate>,
}

/// Everything the index template needs
#[derive(Debug, Clone, Default, Serialize)]
pub struct MapPage {
    pub first: PlaceResult,
    pub second: PlaceResult,
    pub distance_km: Option<f64>,
    pub map_html: String,
}

impl MapPage {
    pub fn blank(map_html: String) -> Self {
        Self {
            map_html,
            ..Default::default()
        }
    }

    /// Distance as shown on the page
    pub fn distance_display(&self) -> Option<String> {
        self.distance_km.map(|d| format!("{:.2}", d))
    }
}
