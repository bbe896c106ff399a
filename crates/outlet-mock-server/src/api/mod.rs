mod outlets;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use outlet_mock_core::{AppConfig, SizingConfig};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, require_secret, AuthState, API_KEY_HEADER};

pub(crate) const OUTLET_NUM_HEADER: &str = "x-outlet-num";
pub(crate) const DELAY_MS_HEADER: &str = "x-delay-ms";

#[derive(Clone)]
pub struct AppState {
    pub sizing: SizingConfig,
    pub default_outlet_id: Arc<str>,
    pub default_outlet_count: usize,
    /// Fixed batch seed; `None` draws one per request.
    pub seed: Option<u64>,
    /// Outlets generated since startup.
    pub generated: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig, sizing: SizingConfig) -> Self {
        Self {
            sizing,
            default_outlet_id: Arc::from(config.default_outlet_id.as_str()),
            default_outlet_count: config.default_outlet_count,
            seed: config.seed,
            generated: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn generated_outlets(&self) -> u64 {
        self.generated.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(API_KEY_HEADER),
            HeaderName::from_static(OUTLET_NUM_HEADER),
            HeaderName::from_static(DELAY_MS_HEADER),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
}

fn protected_router(auth: AuthState) -> Router<AppState> {
    Router::new()
        .route("/outlets", get(outlets::get_outlets))
        .layer(axum::middleware::from_fn_with_state(auth, require_secret))
}

pub fn build_app(state: AppState, auth: AuthState) -> Router {
    let public_routes = Router::new().route("/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(protected_router(auth))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "healthy" })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
