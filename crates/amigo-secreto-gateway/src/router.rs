//! Gateway router - turns HTTP requests into handler requests and back

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;

/// Path the lookup handler is mounted on
pub const LOOKUP_ROUTE: &str = "/api/buscar";

/// Create the gateway router that handles all incoming requests
///
/// The lookup route accepts every method so the handler itself can answer
/// non-POST requests with its own 405.
pub fn create_gateway_router(_state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route(LOOKUP_ROUTE, any(handle_lookup))
        .fallback(not_found)
}

/// Health check endpoint for the gateway
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn not_found() -> Response {
    into_http_response(amigo_secreto_sdk::Response::not_found_msg("not found"))
}

/// First address in `X-Forwarded-For`, if present
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers.get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}

/// Handle a request to the lookup endpoint
async fn handle_lookup(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let request_id = Uuid::new_v4().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Incoming request"
    );

    let headers: std::collections::HashMap<String, String> = request.headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();
    let client_ip = client_ip(request.headers());

    let body_bytes = match axum::body::to_bytes(request.into_body(), state.config.max_body_bytes).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(request_id = %request_id, "Failed to read body: {}", e);
            return into_http_response(amigo_secreto_sdk::Response::payload_too_large("payload too large"));
        }
    };

    // A body that is not UTF-8 carries no code.
    let body = if body_bytes.is_empty() {
        None
    } else {
        match String::from_utf8(body_bytes.to_vec()) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(request_id = %request_id, "Dropping non UTF-8 body: {}", e);
                None
            }
        }
    };

    let sdk_request = amigo_secreto_sdk::Request {
        method,
        path,
        headers,
        body,
        client_ip,
        request_id: request_id.clone(),
    };

    let sdk_response = handler_buscar::respond(&state.store, sdk_request).await;
    tracing::debug!(request_id = %request_id, status = sdk_response.status, "Request handled");

    into_http_response(sdk_response)
}

/// Convert a handler response into an HTTP response
fn into_http_response(sdk_response: amigo_secreto_sdk::Response) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::from_u16(sdk_response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (key, value) in sdk_response.headers {
        builder = builder.header(&key, &value);
    }

    match builder.body(Body::from(sdk_response.body.unwrap_or_default())) {
        Ok(response) => response,
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response(),
    }
}
