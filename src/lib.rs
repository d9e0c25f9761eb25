//! STAC Auth Mock Library
//!
//! Minimal STAC API surface (root catalog, conformance, collections) served
//! behind a selectable authentication gate:
//! - `none`   - every request allowed
//! - `basic`  - HTTP Basic with a static username/password
//! - `apikey` - static key via `x-api-key` header or `api_key` query param

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;

pub use api::{create_router, AppState};
pub use catalog::StacCatalog;
pub use config::{AuthMethod, ConfigError, ServerConfig};
pub use models::{ErrorBody, StacError};
