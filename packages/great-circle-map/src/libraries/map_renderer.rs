use serde::Serialize;

use crate::models::Coordinate;

/// Zoom level that shows the whole world in a typical page-width map
pub const WORLD_ZOOM: u8 = 2;

const LEAFLET_VERSION: &str = "1.9.4";

/// Tile source drawn under the overlays
#[derive(Debug, Clone, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub location: [f64; 2],
    pub popup: String,
    pub color: String,
}

impl Marker {
    pub fn new(location: &Coordinate, popup: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            location: location.lat_lng(),
            popup: popup.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolyLine {
    pub points: Vec<[f64; 2]>,
    pub color: String,
    pub weight: f64,
}

impl PolyLine {
    pub fn new(points: &[Coordinate], color: impl Into<String>, weight: f64) -> Self {
        Self {
            points: points.iter().map(Coordinate::lat_lng).collect(),
            color: color.into(),
            weight,
        }
    }
}

/// An embeddable Leaflet map: a container `<div>` plus the script that fills it.
/// The page must load Leaflet's CSS and JS (see [`leaflet_assets`]).
#[derive(Debug, Clone, Serialize)]
pub struct LeafletMap {
    #[serde(skip)]
    element_id: String,
    center: [f64; 2],
    zoom: u8,
    tiles: Option<TileLayer>,
    markers: Vec<Marker>,
    polylines: Vec<PolyLine>,
    bounds: Option<[[f64; 2]; 2]>,
}

impl LeafletMap {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            element_id: "map".to_string(),
            center: center.lat_lng(),
            zoom,
            tiles: None,
            markers: Vec::new(),
            polylines: Vec::new(),
            bounds: None,
        }
    }

    pub fn tile_layer(mut self, tiles: TileLayer) -> Self {
        self.tiles = Some(tiles);
        self
    }

    pub fn add_marker(&mut self, marker: Marker) -> &mut Self {
        self.markers.push(marker);
        self
    }

    pub fn add_polyline(&mut self, line: PolyLine) -> &mut Self {
        self.polylines.push(line);
        self
    }

    /// Fit the initial viewport to the given south-west/north-east corners
    pub fn fit_bounds(&mut self, south_west: &Coordinate, north_east: &Coordinate) -> &mut Self {
        self.bounds = Some([south_west.lat_lng(), north_east.lat_lng()]);
        self
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn polylines(&self) -> &[PolyLine] {
        &self.polylines
    }

    /// Render the map markup. The layer data goes in as one JSON object,
    /// so no user text is ever spliced into JavaScript source.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let data = script_json(self)?;
        let id = script_json(&self.element_id)?;

        Ok(format!(
            r#"<div id="{id_attr}" class="gc-map"></div>
<script>
(function () {{
  var data = {data};
  var map = L.map({id}).setView(data.center, data.zoom);
  if (data.tiles) {{
    L.tileLayer(data.tiles.url, {{ attribution: data.tiles.attribution, maxZoom: 19 }}).addTo(map);
  }}
  data.markers.forEach(function (m) {{
    L.circleMarker(m.location, {{ radius: 8, color: m.color, fillColor: m.color, fillOpacity: 0.8 }})
      .bindPopup(m.popup)
      .addTo(map);
  }});
  data.polylines.forEach(function (line) {{
    L.polyline(line.points, {{ color: line.color, weight: line.weight }}).addTo(map);
  }});
  if (data.bounds) {{
    map.fitBounds(data.bounds);
  }}
}})();
</script>"#,
            id_attr = self.element_id,
        ))
    }
}

/// `<link>` and `<script>` tags loading Leaflet from a CDN
pub fn leaflet_assets() -> String {
    format!(
        r#"<link rel="stylesheet" href="https://unpkg.com/leaflet@{v}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{v}/dist/leaflet.js"></script>"#,
        v = LEAFLET_VERSION
    )
}

/// Blank map of the whole world with no overlays
pub fn world_map(tiles: TileLayer) -> LeafletMap {
    LeafletMap::new(Coordinate::new(0.0, 0.0), WORLD_ZOOM).tile_layer(tiles)
}

// JSON is valid JavaScript, but "</script>" inside a string literal would still
// close the element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
