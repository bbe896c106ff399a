use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use outlet_mock_core::{AppConfig, ConfigError};
use serde::Serialize;
use subtle::ConstantTimeEq;
use uuid::Uuid;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Shared-secret auth settings used by middleware.
#[derive(Clone)]
pub struct AuthState {
    secret: Arc<str>,
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("secret", &"[redacted]")
            .finish()
    }
}

impl AuthState {
    #[must_use]
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Builds auth config from the resolved application secret.
    ///
    /// In development a missing secret falls back to the placeholder key and
    /// logs a warning. Other environments fail startup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] outside development when no secret is set.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        if config.secret_key.is_none() {
            tracing::warn!(
                env = %config.env,
                "OUTLET_MOCK_SECRET_KEY not set; using the development placeholder secret"
            );
        }
        Ok(Self::new(config.resolve_secret_key()?))
    }

    fn allows(&self, candidate: &str) -> bool {
        self.secret.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    error: MiddlewareError,
}

#[derive(Debug, Serialize)]
struct MiddlewareError {
    code: &'static str,
    message: &'static str,
}

impl IntoResponse for MiddlewareErrorBody {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(self)).into_response()
    }
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware rejecting requests that carry neither a matching bearer token
/// nor a matching `X-API-Key`.
pub async fn require_secret(State(auth): State<AuthState>, req: Request, next: Next) -> Response {
    if presented_credentials(req.headers()).any(|token| auth.allows(token)) {
        return next.run(req).await;
    }

    tracing::warn!(path = %req.uri().path(), "rejected request without valid credentials");
    MiddlewareErrorBody {
        error: MiddlewareError {
            code: "unauthorized",
            message: "missing or invalid API key",
        },
    }
    .into_response()
}

fn presented_credentials(headers: &HeaderMap) -> impl Iterator<Item = &str> {
    let bearer = extract_bearer_token(headers.get(AUTHORIZATION));
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.trim().is_empty());
    bearer.into_iter().chain(api_key)
}

fn extract_bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|s| !s.trim().is_empty())
}
