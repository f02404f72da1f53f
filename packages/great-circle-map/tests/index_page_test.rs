use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

use great_circle_map::{
    config::Config,
    handlers::index::build_page,
    models::{Coordinate, MapForm},
    router,
    services::geocoder::{GeocodeError, GeocodeFuture, Geocoder},
    AppState, MapSettings,
};

/// Answers from a fixed table; "Slowville" behaves like a timed-out lookup.
struct TableGeocoder {
    places: HashMap<&'static str, Coordinate>,
}

impl TableGeocoder {
    fn new() -> Self {
        let places = HashMap::from([
            ("Paris", Coordinate::new(48.8566, 2.3522)),
            ("Berlin", Coordinate::new(52.5200, 13.4050)),
            ("Sydney", Coordinate::new(-33.8688, 151.2093)),
            ("Null Island", Coordinate::new(0.0, 0.0)),
        ]);
        Self { places }
    }
}

impl Geocoder for TableGeocoder {
    fn geocode<'a>(&'a self, place: &'a str) -> GeocodeFuture<'a> {
        Box::pin(async move {
            if place == "Slowville" {
                return Err(GeocodeError::Timeout);
            }
            self.places.get(place).copied().ok_or(GeocodeError::NotFound)
        })
    }
}

fn state() -> AppState {
    AppState::new(
        Arc::new(TableGeocoder::new()),
        MapSettings::from_config(&Config::default()),
    )
    .unwrap()
}

fn server() -> TestServer {
    TestServer::new(router(state())).unwrap()
}

fn form(city1: &str, city2: &str) -> MapForm {
    MapForm {
        city1: Some(city1.to_string()),
        city2: Some(city2.to_string()),
        reset: None,
    }
}

#[tokio::test]
async fn test_get_renders_blank_world_map() {
    let response = server().get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"name="city1""#));
    assert!(html.contains(r#""center":[0.0,0.0]"#));
    assert!(html.contains(r#""markers":[]"#));
    assert!(!html.contains("Great-circle distance:"));
}

#[tokio::test]
async fn test_post_two_places_renders_route() {
    let response = server().post("/").form(&form("Paris", "Berlin")).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Great-circle distance:"));
    assert!(html.contains(r#""popup":"Location 1""#));
    assert!(html.contains(r#""popup":"Location 2""#));
    assert!(html.contains(r#""color":"red""#));
    assert!(html.contains(r#""bounds":[[48.8566,2.3522],[52.52,13.405]]"#));
    assert!(html.contains("Paris: 48.8566, 2.3522"));
}

#[tokio::test]
async fn test_unknown_place_shows_names_without_distance() {
    let response = server().post("/").form(&form("Paris", "Atlantis")).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"value="Atlantis""#));
    assert!(html.contains("Paris: 48.8566, 2.3522"));
    assert!(html.contains("Could not locate both places."));
    assert!(html.contains(r#""markers":[]"#));
    assert!(!html.contains("Great-circle distance:"));
}

#[tokio::test]
async fn test_geocoder_timeout_degrades_to_blank_map() {
    let response = server().post("/").form(&form("Slowville", "Berlin")).await;
    response.assert_status_ok();
    assert!(!response.text().contains("Great-circle distance:"));
}

#[tokio::test]
async fn test_missing_name_skips_geocoding() {
    let response = server()
        .post("/")
        .form(&MapForm {
            city1: Some("Paris".to_string()),
            city2: None,
            reset: None,
        })
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"value="Paris""#));
    assert!(!html.contains("Paris: 48.8566"));
    assert!(!html.contains("Great-circle distance:"));
}

#[tokio::test]
async fn test_reset_redirects_to_blank_form() {
    let server = server();
    let response = server
        .post("/")
        .form(&MapForm {
            city1: Some("Paris".to_string()),
            city2: Some("Berlin".to_string()),
            reset: Some("1".to_string()),
        })
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let blank = server.get("/").await.text();
    assert!(!blank.contains("Paris"));
    assert!(blank.contains(r#""markers":[]"#));
}

#[tokio::test]
async fn test_distance_is_symmetric_and_non_negative() {
    let state = state();
    let pairs = [("Paris", "Berlin"), ("Paris", "Sydney"), ("Null Island", "Berlin")];

    for (a, b) in pairs {
        let there = build_page(&state, &form(a, b)).await.unwrap().distance_km.unwrap();
        let back = build_page(&state, &form(b, a)).await.unwrap().distance_km.unwrap();
        assert!(there >= 0.0);
        assert!((there - back).abs() < 1e-6, "{a}/{b}: {there} vs {back}");
    }
}

#[tokio::test]
async fn test_zero_coordinates_still_resolve() {
    let page = build_page(&state(), &form("Null Island", "Paris")).await.unwrap();
    assert_eq!(page.first.coordinate, Some(Coordinate::new(0.0, 0.0)));
    assert!(page.distance_km.is_some());
}

#[tokio::test]
async fn test_failed_lookup_has_no_distance() {
    let state = state();
    for (a, b) in [("Atlantis", "Paris"), ("Paris", "Atlantis"), ("Atlantis", "Slowville")] {
        let page = build_page(&state, &form(a, b)).await.unwrap();
        assert_eq!(page.distance_km, None);
    }
}

#[tokio::test]
async fn test_health() {
    let response = server().get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "great-circle-map");
}

#[tokio::test]
async fn test_form_post_without_form_content_type_is_rejected() {
    let response = router(state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from("city1=Paris&city2=Berlin"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
