//! API Route Configuration

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};
use super::middleware::{logging_middleware, pipeline_middleware};

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root_catalog))
        .route("/conformance", get(handlers::conformance))
        .route("/collections", get(handlers::list_collections))
        .route("/collections/:collection_id", get(handlers::get_collection))
        // Registered before the layers so unknown paths still pass through the pipeline
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            pipeline_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
