use std::sync::{atomic::AtomicU64, Arc};
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, HeaderValue, Request, StatusCode};
use outlet_mock_core::wire;
use prost::Message;
use tower::ServiceExt;

use super::outlets::{negotiate_encoding, parse_delay, parse_outlet_count, Encoding};
use super::*;

const SECRET: &str = "test-secret";

fn test_state(sizing: SizingConfig, default_outlet_count: usize) -> AppState {
    AppState {
        sizing,
        default_outlet_id: Arc::from("outlet-001"),
        default_outlet_count,
        seed: None,
        generated: Arc::new(AtomicU64::new(0)),
    }
}

fn test_app(state: AppState) -> Router {
    build_app(state, AuthState::new(SECRET))
}

fn outlets_request(headers: &[(&str, &str)]) -> Request<Body> {
    outlets_request_to("/outlets", headers)
}

fn outlets_request_to(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).expect("request")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&body).expect("json parse")
}

#[tokio::test]
async fn health_reports_healthy_without_credentials() {
    let app = test_app(test_state(SizingConfig::disabled(), 1));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(json_body(response).await, serde_json::json!({"status": "healthy"}));
}

#[tokio::test]
async fn missing_secret_is_rejected_before_generation() {
    let state = test_state(SizingConfig::compact(), 5);
    let app = test_app(state.clone());

    let response = app
        .oneshot(outlets_request(&[]))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error"]["code"], "unauthorized");
    assert_eq!(state.generated_outlets(), 0);
}

#[tokio::test]
async fn wrong_secret_is_rejected() {
    let state = test_state(SizingConfig::compact(), 5);
    let app = test_app(state.clone());

    for headers in [
        [("x-api-key", "not-the-secret")],
        [("authorization", "Bearer not-the-secret")],
        [("authorization", SECRET)],
    ] {
        let response = app
            .clone()
            .oneshot(outlets_request(&headers))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    assert_eq!(state.generated_outlets(), 0);
}

#[tokio::test]
async fn api_key_header_returns_requested_outlets() {
    let state = test_state(SizingConfig::compact(), 100);
    let app = test_app(state.clone());

    let response = app
        .oneshot(outlets_request(&[("x-api-key", SECRET), ("x-outlet-num", "3")]))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE),
        Some(&HeaderValue::from_static("application/json"))
    );
    let json = json_body(response).await;
    let details = json["details"].as_array().expect("details array");
    assert_eq!(details.len(), 3);
    assert_eq!(details[0]["outletId"], "outlet-001");
    assert_eq!(details[0]["status"], "OUTLET_STATUS_ACTIVE");
    assert!(details[0]["statistics"]["creditInfo"].is_object());
    assert_eq!(state.generated_outlets(), 3);
}

#[tokio::test]
async fn bearer_token_is_accepted() {
    let app = test_app(test_state(SizingConfig::disabled(), 100));
    let response = app
        .oneshot(outlets_request(&[
            ("authorization", "Bearer test-secret"),
            ("x-outlet-num", "2"),
        ]))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["details"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn malformed_outlet_count_is_bad_request() {
    let state = test_state(SizingConfig::compact(), 100);
    let app = test_app(state.clone());

    for bad in ["abc", "-1", "1.5"] {
        let response = app
            .clone()
            .oneshot(outlets_request(&[("x-api-key", SECRET), ("x-outlet-num", bad)]))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "value {bad}");
        assert_eq!(json_body(response).await["error"]["code"], "bad_request");
    }
    assert_eq!(state.generated_outlets(), 0);
}

#[tokio::test]
async fn default_count_and_outlet_id_apply_when_absent() {
    let app = test_app(test_state(SizingConfig::disabled(), 4));
    let response = app
        .oneshot(outlets_request(&[("x-api-key", SECRET)]))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let details = json["details"].as_array().expect("details array");
    assert_eq!(details.len(), 4);
    assert!(details.iter().all(|d| d["outletId"] == "outlet-001"));
}

#[tokio::test]
async fn outlet_id_query_is_used() {
    let app = test_app(test_state(SizingConfig::disabled(), 1));
    let response = app
        .oneshot(outlets_request_to(
            "/outlets?outlet_id=store-77",
            &[("x-api-key", SECRET)],
        ))
        .await
        .expect("response");

    let json = json_body(response).await;
    assert_eq!(json["details"][0]["outletId"], "store-77");
}

#[tokio::test]
async fn single_order_single_item_end_to_end() {
    let sizing = SizingConfig {
        average_number_of_orders: 1,
        average_order_items_per_order: 1,
        ..SizingConfig::disabled()
    };
    let app = test_app(test_state(sizing, 100));
    let response = app
        .oneshot(outlets_request(&[("x-api-key", SECRET), ("x-outlet-num", "1")]))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let details = json["details"].as_array().expect("details array");
    assert_eq!(details.len(), 1);
    let outlet = &details[0];
    assert_eq!(outlet["orderHistory"].as_array().map(Vec::len), Some(1));
    assert_eq!(
        outlet["orderHistory"][0]["items"].as_array().map(Vec::len),
        Some(1)
    );
    assert_eq!(outlet["statistics"]["totalOrdersYtd"], 1);
    for empty in ["visitHistory", "outletsNearby", "notes", "assetList", "checklist", "news"] {
        assert_eq!(outlet[empty].as_array().map(Vec::len), Some(0), "{empty}");
    }
}

#[tokio::test]
async fn fifty_outlets_requested_fifty_returned() {
    let app = test_app(test_state(SizingConfig::compact(), 100));
    let response = app
        .oneshot(outlets_request(&[("x-api-key", SECRET), ("x-outlet-num", "50")]))
        .await
        .expect("response");

    let json = json_body(response).await;
    let details = json["details"].as_array().expect("details array");
    assert_eq!(details.len(), 50);
    let codes: std::collections::HashSet<String> = details
        .iter()
        .map(|d| format!("{}|{}", d["code"], d["location"]["address"]))
        .collect();
    assert!(codes.len() > 40);
}

#[tokio::test]
async fn protobuf_accept_header_yields_binary_response() {
    let app = test_app(test_state(SizingConfig::compact(), 100));
    let response = app
        .oneshot(outlets_request(&[
            ("x-api-key", SECRET),
            ("x-outlet-num", "2"),
            ("accept", "application/protobuf"),
        ]))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE),
        Some(&HeaderValue::from_static("application/protobuf"))
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let decoded = wire::OutletDetailsResponse::decode(body.as_ref()).expect("protobuf decode");
    assert_eq!(decoded.details.len(), 2);
    assert_eq!(decoded.details[0].outlet_id, "outlet-001");
    assert!(decoded.details[0].statistics.is_some());
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = test_app(test_state(SizingConfig::disabled(), 1));
    let response = app
        .oneshot(outlets_request(&[
            ("x-api-key", SECRET),
            ("x-request-id", "req-abc"),
        ]))
        .await
        .expect("response");

    assert_eq!(
        response.headers().get("x-request-id"),
        Some(&HeaderValue::from_static("req-abc"))
    );
}

#[test]
fn api_error_codes_map_to_statuses() {
    let cases = [
        ("bad_request", StatusCode::BAD_REQUEST),
        ("validation_error", StatusCode::BAD_REQUEST),
        ("unauthorized", StatusCode::UNAUTHORIZED),
        ("encoding_error", StatusCode::INTERNAL_SERVER_ERROR),
        ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, status) in cases {
        let response = ApiError::new("req-1", code, "message").into_response();
        assert_eq!(response.status(), status, "{code}");
    }
}

fn headers_with(name: &'static str, value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(name, HeaderValue::from_static(value));
    headers
}

#[test]
fn outlet_count_parsing() {
    assert_eq!(parse_outlet_count(&HeaderMap::new(), 100), Ok(100));
    assert_eq!(parse_outlet_count(&headers_with(OUTLET_NUM_HEADER, ""), 7), Ok(7));
    assert_eq!(parse_outlet_count(&headers_with(OUTLET_NUM_HEADER, " 12 "), 7), Ok(12));
    assert_eq!(parse_outlet_count(&headers_with(OUTLET_NUM_HEADER, "0"), 7), Ok(0));
    assert!(parse_outlet_count(&headers_with(OUTLET_NUM_HEADER, "abc"), 7).is_err());
    assert!(parse_outlet_count(&headers_with(OUTLET_NUM_HEADER, "-1"), 7).is_err());
}

#[test]
fn delay_parsing_ignores_non_positive_values() {
    assert_eq!(parse_delay(&HeaderMap::new()), None);
    assert_eq!(parse_delay(&headers_with(DELAY_MS_HEADER, "0")), None);
    assert_eq!(parse_delay(&headers_with(DELAY_MS_HEADER, "-5")), None);
    assert_eq!(parse_delay(&headers_with(DELAY_MS_HEADER, "soon")), None);
    assert_eq!(
        parse_delay(&headers_with(DELAY_MS_HEADER, "250")),
        Some(Duration::from_millis(250))
    );
}

#[test]
fn encoding_negotiation() {
    assert_eq!(negotiate_encoding(&HeaderMap::new()), Encoding::Json);
    assert_eq!(
        negotiate_encoding(&headers_with("accept", "application/json")),
        Encoding::Json
    );
    assert_eq!(
        negotiate_encoding(&headers_with("accept", "application/protobuf")),
        Encoding::Protobuf
    );
    assert_eq!(
        negotiate_encoding(&headers_with(
            "accept",
            "text/html, application/x-protobuf;q=0.9"
        )),
        Encoding::Protobuf
    );
}
