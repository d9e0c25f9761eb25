//! Shared helpers: drive the full router in-process, no socket needed

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use stac_auth_mock::{create_router, AppState, AuthMethod, ErrorBody, ServerConfig};
use std::sync::Arc;
use tower::ServiceExt;

pub const USERNAME: &str = "testuser";
pub const PASSWORD: &str = "testpass";
pub const API_KEY: &str = "test-api-key-12345";

pub const ROUTES: [&str; 4] = ["/", "/conformance", "/collections", "/collections/test-collection"];

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn error(&self) -> ErrorBody {
        serde_json::from_slice(&self.body).expect("response body is an error document")
    }
}

pub fn app(auth: AuthMethod) -> Router {
    app_with(ServerConfig {
        auth,
        ..ServerConfig::default()
    })
}

pub fn app_with(config: ServerConfig) -> Router {
    create_router(Arc::new(AppState::new(config)))
}

pub fn basic_mode() -> AuthMethod {
    AuthMethod::Basic {
        username: USERNAME.to_string(),
        password: PASSWORD.to_string(),
    }
}

pub fn apikey_mode() -> AuthMethod {
    AuthMethod::ApiKey {
        key: API_KEY.to_string(),
    }
}

pub fn basic_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}

pub fn get(uri: &str) -> Request<Body> {
    request(Method::GET, uri, &[])
}

pub fn request(method: Method, uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse { status, headers, body }
}
