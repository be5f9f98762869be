#![cfg(feature = "http-server")]

//! HTTP API integration tests driven through the router.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use chrono::{NaiveDate, TimeZone, Utc};
use tower::ServiceExt;

use planetary_hours::api::EphemerisWindow;
use planetary_hours::ephemeris::{EphemerisSource, StaticEphemeris};
use planetary_hours::http::{create_router, AppState};

fn test_window() -> EphemerisWindow {
    EphemerisWindow::new(
        Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 11, 6, 0, 0).unwrap(),
    )
    .unwrap()
}

fn router_with_seeded_source() -> axum::Router {
    let mut source = StaticEphemeris::new();
    source.insert(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(), test_window());
    let state = AppState::new(Arc::new(source) as Arc<dyn EphemerisSource>);
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = router_with_seeded_source();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_post_compute_hours() {
    let app = router_with_seeded_source();
    let body = serde_json::json!({
        "date": "2024-03-10",
        "latitude": 51.4769,
        "longitude": 0.0,
        "window": {
            "sunrise": "2024-03-10T06:00:00Z",
            "sunset": "2024-03-10T18:00:00Z",
            "next_sunrise": "2024-03-11T06:00:00Z"
        }
    });

    let response = app
        .oneshot(
            Request::post("/v1/planetary-hours")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["day_ruler"], "Sun");
    assert_eq!(json["weekday"], "Sunday");
    assert_eq!(json["solar_hours"].as_array().unwrap().len(), 12);
    assert_eq!(json["solar_hours"][4]["start"], "2024-03-10T10:00:00Z");
}

#[tokio::test]
async fn test_post_invalid_window_rejected() {
    let app = router_with_seeded_source();
    let body = serde_json::json!({
        "date": "2024-03-10",
        "latitude": 51.4769,
        "longitude": 0.0,
        "window": {
            "sunrise": "2024-03-10T18:00:00Z",
            "sunset": "2024-03-10T06:00:00Z",
            "next_sunrise": "2024-03-11T06:00:00Z"
        }
    });

    let response = app
        .oneshot(
            Request::post("/v1/planetary-hours")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_lookup_hours() {
    let app = router_with_seeded_source();

    let response = app
        .oneshot(
            Request::get("/v1/planetary-hours?date=2024-03-10&lat=51.4769&lng=0.0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["day_ruler"], "Sun");
    assert_eq!(json["lunar_hours"][0]["ruler"], "Jupiter");
}

#[tokio::test]
async fn test_get_unknown_date_is_not_found() {
    let app = router_with_seeded_source();

    let response = app
        .oneshot(
            Request::get("/v1/planetary-hours?date=2030-01-01&lat=0.0&lng=0.0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_invalid_latitude_rejected() {
    let app = router_with_seeded_source();

    let response = app
        .oneshot(
            Request::get("/v1/planetary-hours?date=2024-03-10&lat=123.0&lng=0.0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
