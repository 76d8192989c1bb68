//! HTTP handlers: the relay route, the catalog routes, and health.

use {
    axum::{
        Json,
        body::Bytes,
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    },
    serde_json::{Value, json},
    tracing::warn,
};

use leetscope_relay::RelayRequest;

use crate::server::AppState;

// ── Relay ────────────────────────────────────────────────────────────────────

/// Handle `POST /api/graphql`.
///
/// A missing or malformed JSON body is treated the same as a missing query:
/// the caller gets a 400 and nothing goes upstream.
pub async fn relay_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: RelayRequest = serde_json::from_slice(&body).unwrap_or_default();

    match state.relay.forward(&request).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            warn!(status = err.status_code(), error = %err, "relay call failed");
            relay_error_response(&err)
        },
    }
}

/// Handle `OPTIONS /api/graphql`. The CORS layer attaches the permissive
/// headers; the route only has to exist so bare preflights get a 200.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

fn relay_error_response(err: &leetscope_relay::Error) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut body = json!({ "error": err.to_string() });
    if let Some(details) = err.details() {
        body["details"] = Value::String(details);
    }
    (status, Json(body)).into_response()
}

// ── Catalog ──────────────────────────────────────────────────────────────────

pub async fn endpoints_handler(State(state): State<AppState>) -> Json<Value> {
    let endpoints: Vec<_> = state.catalog.iter().collect();
    Json(json!({
        "categories": state.catalog.categories(),
        "endpoints": endpoints,
    }))
}

pub async fn endpoint_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.catalog.get(&id) {
        Some(def) => Json(def).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown endpoint: {id}") })),
        )
            .into_response(),
    }
}

// ── Health ───────────────────────────────────────────────────────────────────

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "ok": true, "endpoints": state.catalog.len() }))
}
