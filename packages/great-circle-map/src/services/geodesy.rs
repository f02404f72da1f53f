use geo::{GeodesicDistance, GeodesicIntermediate, Point, Rect};

use crate::models::{Coordinate, Route};

/// Geodesic distance between two points in kilometres on the WGS84 ellipsoid
pub fn calculate_distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let p1: Point<f64> = (*from).into();
    let p2: Point<f64> = (*to).into();

    p1.geodesic_distance(&p2) / 1000.0
}

/// Build the geodesic path from `from` to `to` with `intermediate_points`
/// evenly spaced interior points. The endpoints are the inputs, untouched.
pub fn great_circle_route(from: &Coordinate, to: &Coordinate, intermediate_points: usize) -> Route {
    let p1: Point<f64> = (*from).into();
    let p2: Point<f64> = (*to).into();
    let segments = (intermediate_points + 1) as f64;

    let mut path = Vec::with_capacity(intermediate_points + 2);
    path.push(*from);
    path.extend((1..=intermediate_points).map(|i| {
        let fraction = i as f64 / segments;
        Coordinate::from(p1.geodesic_intermediate(&p2, fraction))
    }));
    path.push(*to);

    Route {
        distance_km: calculate_distance_km(from, to),
        path,
    }
}

/// South-west and north-east corners of the box spanning both points
pub fn bounds(a: &Coordinate, b: &Coordinate) -> (Coordinate, Coordinate) {
    let p1: Point<f64> = (*a).into();
    let p2: Point<f64> = (*b).into();
    let rect = Rect::new(p1, p2);
    (rect.min().into(), rect.max().into())
}
