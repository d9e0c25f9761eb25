//! API Request Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::catalog::StacCatalog;
use crate::config::ServerConfig;
use crate::models::{Catalog, Collection, CollectionList, Conformance, StacError};

/// Shared application state, read-only after construction
pub struct AppState {
    pub config: ServerConfig,
    pub catalog: StacCatalog,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let catalog = StacCatalog::new(&config.public_url);
        Self { config, catalog }
    }
}

pub async fn root_catalog(State(state): State<Arc<AppState>>) -> Json<Catalog> {
    Json(state.catalog.root().clone())
}

pub async fn conformance(State(state): State<Arc<AppState>>) -> Json<Conformance> {
    Json(state.catalog.conformance().clone())
}

pub async fn list_collections(State(state): State<Arc<AppState>>) -> Json<CollectionList> {
    Json(state.catalog.collections().clone())
}

pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(collection_id): Path<String>,
) -> Result<Json<Collection>, StacError> {
    match state.catalog.find_collection(&collection_id) {
        Some(collection) => Ok(Json(collection.clone())),
        None => {
            debug!(collection_id = %collection_id, "Unknown collection requested");
            Err(StacError::CollectionNotFound(collection_id))
        }
    }
}

pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
