//! Integration tests for the STAC resource routes

mod common;

use axum::http::{header, Method, StatusCode};
use common::*;
use stac_auth_mock::{AuthMethod, ErrorBody};

#[tokio::test]
async fn test_root_catalog() {
    let app = app(AuthMethod::None);
    let response = send(&app, get("/")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = response.json();
    assert_eq!(body["type"], "Catalog");
    assert_eq!(body["id"], "test-catalog");
    assert_eq!(body["stac_version"], "1.0.0");

    let rels: Vec<&str> = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["rel"].as_str().unwrap())
        .collect();
    assert_eq!(rels, ["root", "self", "conformance", "data", "child", "child"]);
    assert_eq!(body["links"][1]["href"], "http://localhost:3000/");
    assert_eq!(body["links"][2]["href"], "http://localhost:3000/conformance");
}

#[tokio::test]
async fn test_conformance() {
    let app = app(AuthMethod::None);
    let body = send(&app, get("/conformance")).await.json();

    let classes = body["conformsTo"].as_array().unwrap();
    assert_eq!(classes.len(), 5);
    assert!(classes.contains(&"https://api.stacspec.org/v1.0.0/collections".into()));
}

#[tokio::test]
async fn test_collection_list() {
    let app = app(AuthMethod::None);
    let body = send(&app, get("/collections")).await.json();

    let ids: Vec<&str> = body["collections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["test-collection", "sample-imagery"]);
    assert_eq!(body["links"][2]["rel"], "self");
    assert_eq!(body["links"][2]["href"], "http://localhost:3000/collections");
}

#[tokio::test]
async fn test_single_collection() {
    let app = app(AuthMethod::None);
    let response = send(&app, get("/collections/test-collection")).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["id"], "test-collection");
    assert_eq!(body["type"], "Collection");
    assert_eq!(body["license"], "CC-BY-4.0");
    assert_eq!(body["providers"][0]["name"], "Test Provider");
    assert_eq!(body["extent"]["temporal"]["interval"][0][0], "2023-01-01T00:00:00Z");
    assert_eq!(body["extent"]["spatial"]["bbox"][0][0].as_f64(), Some(-180.0));
}

#[tokio::test]
async fn test_collection_matches_list_entry() {
    let app = app(AuthMethod::None);
    let list = send(&app, get("/collections")).await.json();
    let single = send(&app, get("/collections/sample-imagery")).await.json();
    assert_eq!(list["collections"][1], single);
}

#[tokio::test]
async fn test_unknown_collection_is_not_found() {
    let app = app(AuthMethod::None);
    let response = send(&app, get("/collections/does-not-exist")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.error(),
        ErrorBody {
            code: "NotFound".to_string(),
            description: "Collection 'does-not-exist' not found".to_string(),
        }
    );
}

#[tokio::test]
async fn test_collection_lookup_is_case_sensitive() {
    let app = app(AuthMethod::None);
    let response = send(&app, get("/collections/Test-Collection")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app(AuthMethod::None);
    let response = send(&app, get("/search")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_gets_are_byte_identical() {
    let app = app(AuthMethod::None);
    for route in ROUTES {
        let first = send(&app, get(route)).await;
        let second = send(&app, get(route)).await;
        assert_eq!(first.body, second.body, "{} changed between requests", route);
    }
}

#[tokio::test]
async fn test_responses_carry_cors_headers() {
    let app = app(AuthMethod::None);
    let response = send(&app, get("/collections")).await;
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_preflight() {
    let app = app(AuthMethod::None);
    let response = send(
        &app,
        request(
            Method::OPTIONS,
            "/collections",
            &[
                ("origin", "http://localhost:8080"),
                ("access-control-request-method", "GET"),
            ],
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "GET,OPTIONS"
    );
    let allowed = response
        .headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap();
    for name in ["Authorization", "x-api-key", "Content-Type"] {
        assert!(allowed.contains(name), "{} missing from allowed headers", name);
    }
    assert!(response.body.is_empty());
}
