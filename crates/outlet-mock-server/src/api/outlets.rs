use std::{sync::atomic::Ordering, time::Duration};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Extension,
};
use outlet_mock_core::{wire, OutletDetailsResponse};
use outlet_mock_gen::{generate_outlets, BatchRequest};
use prost::Message;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState, DELAY_MS_HEADER, OUTLET_NUM_HEADER};

pub(super) const PROTOBUF_CONTENT_TYPE: &str = "application/protobuf";
const PROTOBUF_ALIASES: [&str; 2] = [PROTOBUF_CONTENT_TYPE, "application/x-protobuf"];

#[derive(Debug, Deserialize)]
pub(super) struct OutletQuery {
    pub outlet_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Encoding {
    Json,
    Protobuf,
}

pub(super) async fn get_outlets(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<OutletQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let count = parse_outlet_count(&headers, state.default_outlet_count)
        .map_err(|message| ApiError::new(req_id.0.clone(), "bad_request", message))?;

    match parse_delay(&headers) {
        Some(delay) => tokio::time::sleep(delay).await,
        None if headers.contains_key(DELAY_MS_HEADER) => {
            tracing::warn!("ignoring X-Delay-Ms: expected a positive integer of milliseconds");
        }
        None => {}
    }

    let outlet_id = query
        .outlet_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| state.default_outlet_id.to_string());
    let encoding = negotiate_encoding(&headers);

    state
        .generated
        .fetch_add(u64::try_from(count).unwrap_or(u64::MAX), Ordering::Relaxed);

    let details = generate_outlets(BatchRequest {
        outlet_id: outlet_id.clone(),
        count,
        sizing: state.sizing,
        seed: state.seed,
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, outlet_id = %outlet_id, "outlet generation failed");
        ApiError::new(req_id.0.clone(), "internal_error", "outlet generation failed")
    })?;

    tracing::debug!(
        count,
        ?encoding,
        total_generated = state.generated_outlets(),
        "serving outlets"
    );

    let response = OutletDetailsResponse { details };
    match encoding {
        Encoding::Protobuf => {
            let body = wire::OutletDetailsResponse::from(&response).encode_to_vec();
            Ok((
                [(header::CONTENT_TYPE, HeaderValue::from_static(PROTOBUF_CONTENT_TYPE))],
                body,
            )
                .into_response())
        }
        Encoding::Json => {
            let body = serde_json::to_vec(&response).map_err(|e| {
                tracing::error!(error = %e, "failed to encode outlets as JSON");
                ApiError::new(req_id.0, "encoding_error", "failed to encode response")
            })?;
            Ok((
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response())
        }
    }
}

/// Number of outlets requested via `X-Outlet-Num`; absent or blank means `default`.
pub(super) fn parse_outlet_count(headers: &HeaderMap, default: usize) -> Result<usize, String> {
    let Some(value) = headers.get(OUTLET_NUM_HEADER) else {
        return Ok(default);
    };
    let raw = value
        .to_str()
        .map_err(|_| "X-Outlet-Num must be ASCII".to_string())?
        .trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<usize>()
        .map_err(|_| format!("invalid X-Outlet-Num \"{raw}\": expected a non-negative integer"))
}

/// Artificial latency from `X-Delay-Ms`. Anything but a positive integer is ignored.
pub(super) fn parse_delay(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(DELAY_MS_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

pub(super) fn negotiate_encoding(headers: &HeaderMap) -> Encoding {
    let wants_protobuf = headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|media| media.split(';').next().unwrap_or_default().trim())
        .any(|media| {
            PROTOBUF_ALIASES
                .iter()
                .any(|alias| media.eq_ignore_ascii_case(alias))
        });

    if wants_protobuf {
        Encoding::Protobuf
    } else {
        Encoding::Json
    }
}
