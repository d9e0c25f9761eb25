//! Request Pipeline (CORS preflight -> Auth Gate) and Logging
//!
//! The stages run in the order of [`PIPELINE`], independent of how layers are
//! registered on the router. The first stage returning a response ends the
//! request; otherwise it is dispatched to the routes.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::auth::authorize;
use super::handlers::AppState;

pub const CORS_ALLOW_METHODS: &str = "GET,OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Origin,Content-Type,Accept,Authorization,x-api-key";

/// A pipeline stage: `Some(response)` short-circuits the request
pub type Stage = fn(&AppState, &Request) -> Option<Response>;

pub const PIPELINE: &[(&str, Stage)] = &[("cors_preflight", cors_preflight), ("auth", auth_gate)];

/// Run every stage in order, returning the first terminal response
pub fn run_stages(state: &AppState, request: &Request) -> Option<Response> {
    PIPELINE.iter().find_map(|(name, stage)| {
        let response = stage(state, request)?;
        debug!(stage = %name, status = %response.status().as_u16(), "Pipeline short-circuited");
        Some(response)
    })
}

/// Pipeline middleware; every response leaves with the allow-all CORS headers
pub async fn pipeline_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = match run_stages(&state, &request) {
        Some(response) => response,
        None => next.run(request).await,
    };
    apply_cors_headers(response.headers_mut());
    response
}

/// Any `OPTIONS` request is a preflight and is answered before authentication
pub fn cors_preflight(_state: &AppState, request: &Request) -> Option<Response> {
    if request.method() != Method::OPTIONS {
        return None;
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("0"));
    Some(response)
}

pub fn auth_gate(state: &AppState, request: &Request) -> Option<Response> {
    let denied = authorize(&state.config.auth, request.headers(), request.uri().query()).err()?;
    warn!(
        method = %request.method(),
        path = %request.uri().path(),
        auth = %state.config.auth,
        "Request denied by auth gate"
    );
    Some(denied.into_response())
}

pub fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}

/// Request logging middleware
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        latency_ms = %start.elapsed().as_millis(),
        "Request completed"
    );

    response
}
