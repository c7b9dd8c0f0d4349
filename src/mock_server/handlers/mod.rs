//! HTTP request handlers for the mock server.
//!
//! Every handler answers with a Greip envelope: `{"status": "success",
//! "data": ...}` or `{"status": "error", "description": ...}`.

pub mod lookup;
pub mod payment;
pub mod validation;

pub use lookup::*;
pub use payment::*;
pub use validation::*;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::mock_server::state::{MockState, RecordedRequest};

/// State handle shared by all handlers.
pub type SharedState = Arc<RwLock<MockState>>;

/// Successful envelope around `data`.
pub fn success<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "data": data,
        })),
    )
        .into_response()
}

/// Error envelope. The upstream reports API errors with a 200 status.
pub fn failure(description: &str) -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "error",
            "description": description,
        })),
    )
        .into_response()
}

/// Record the request, then apply the forced status and token check.
///
/// Returns the response to send instead of running the handler, if any.
async fn admit(
    state: &SharedState,
    endpoint: &str,
    headers: &HeaderMap,
    query: &HashMap<String, String>,
    body: Option<Value>,
) -> Option<Response> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut state = state.write().await;
    state.record(RecordedRequest {
        endpoint: endpoint.to_string(),
        query: query.clone(),
        body,
        authorization: authorization.clone(),
    });

    if let Some(status) = state.forced_status {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Some((status, "mock failure").into_response());
    }

    if !state.is_authorized(authorization.as_deref()) {
        return Some(
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "status": "error",
                    "description": "Invalid API Key",
                })),
            )
                .into_response(),
        );
    }

    None
}

/// A query value that is present and non-empty.
fn required<'a>(query: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    query
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// The comma-separated `params` list.
fn requested_sections(query: &HashMap<String, String>) -> Vec<&str> {
    query
        .get("params")
        .map(|p| p.split(',').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}
