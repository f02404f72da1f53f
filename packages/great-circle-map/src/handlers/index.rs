use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{debug, info, warn};

use crate::{
    libraries::map_renderer::{world_map, Marker, PolyLine},
    models::{Coordinate, MapForm, MapPage, PlaceResult},
    services::geodesy::{bounds, great_circle_route},
    AppState,
};

use super::AppError;

/// Initial load: empty form over a blank world map
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = blank_page(&state)?;
    Ok(Html(state.pages.render_index(&page)?))
}

/// Form submission: either a reset or two place names to connect
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<MapForm>,
) -> Result<Response, AppError> {
    if form.is_reset() {
        debug!("Reset requested, redirecting to blank form");
        return Ok(Redirect::to("/").into_response());
    }

    let page = build_page(&state, &form).await?;
    Ok(Html(state.pages.render_index(&page)?).into_response())
}

/// Resolve the submitted names and assemble the page. Any geocoding failure
/// leaves the distance empty and the map blank.
pub async fn build_page(state: &AppState, form: &MapForm) -> Result<MapPage, AppError> {
    let Some((first_name, second_name)) = form.place_names() else {
        debug!("Incomplete submission, showing blank map");
        let mut page = blank_page(state)?;
        page.first.name = form.city1.clone().unwrap_or_default();
        page.second.name = form.city2.clone().unwrap_or_default();
        return Ok(page);
    };

    let first = resolve(state, first_name).await;
    let second = resolve(state, second_name).await;

    let (Some(a), Some(b)) = (first.coordinate, second.coordinate) else {
        let mut page = blank_page(state)?;
        page.first = first;
        page.second = second;
        return Ok(page);
    };

    let (map_html, distance_km) = route_map(state, &a, &b)?;
    info!(
        "Route {} -> {}: {:.2} km",
        first.name, second.name, distance_km
    );

    Ok(MapPage {
        first,
        second,
        distance_km: Some(distance_km),
        map_html,
    })
}

async fn resolve(state: &AppState, name: &str) -> PlaceResult {
    let coordinate = match state.geocoder.geocode(name).await {
        Ok(coordinate) => Some(coordinate),
        Err(e) => {
            warn!("Could not geocode '{}': {}", name, e);
            None
        }
    };

    PlaceResult {
        name: name.to_string(),
        coordinate,
    }
}

fn blank_page(state: &AppState) -> Result<MapPage, AppError> {
    let map_html = world_map(state.map.tiles.clone()).render()?;
    Ok(MapPage::blank(map_html))
}

fn route_map(state: &AppState, a: &Coordinate, b: &Coordinate) -> Result<(String, f64), AppError> {
    let route = great_circle_route(a, b, state.map.path_points);
    let (south_west, north_east) = bounds(a, b);

    let mut map = world_map(state.map.tiles.clone());
    map.add_marker(Marker::new(a, "Location 1", "blue"))
        .add_marker(Marker::new(b, "Location 2", "red"))
        .add_polyline(PolyLine::new(&route.path, "blue", 2.5))
        .fit_bounds(&south_west, &north_east);

    Ok((map.render()?, route.distance_km))
}
