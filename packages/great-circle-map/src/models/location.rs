use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Validate that coordinates are within valid WGS84 ranges
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Leaflet orders pairs as `[lat, lon]`
    pub fn lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

// geo points are (x, y) = (lon, lat)
impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(p: Point<f64>) -> Self {
        Coordinate::new(p.y(), p.x())
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(c: Coord<f64>) -> Self {
        Coordinate::new(c.y, c.x)
    }
}

/// Geodesic route between two coordinates
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub distance_km: f64,
    /// First and last entries are the route endpoints
    pub path: Vec<Coordinate>,
}

impl Route {
    pub fn start(&self) -> Option<&Coordinate> {
        self.path.first()
    }

    pub fn end(&self) -> Option<&Coordinate> {
        self.path.last()
    }
}
