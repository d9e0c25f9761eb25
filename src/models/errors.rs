//! Domain Errors
//!
//! Only two errors are part of the HTTP contract. Both render as
//! `{"code": ..., "description": ...}` JSON.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const BASIC_CHALLENGE: &str = "Basic realm=\"STAC API\"";
pub const INVALID_CREDENTIALS: &str = "Access denied. Valid credentials required.";
pub const INVALID_API_KEY: &str = "Access denied. Valid API key required.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StacError {
    /// Auth gate rejection. `challenge` becomes the `WWW-Authenticate` header.
    #[error("{description}")]
    Unauthorized {
        description: &'static str,
        challenge: Option<&'static str>,
    },
    #[error("Collection '{0}' not found")]
    CollectionNotFound(String),
}

impl StacError {
    /// Missing or wrong HTTP Basic credentials
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized {
            description: INVALID_CREDENTIALS,
            challenge: Some(BASIC_CHALLENGE),
        }
    }

    /// Missing or wrong API key; both cases look the same to the caller
    pub fn invalid_api_key() -> Self {
        Self::Unauthorized {
            description: INVALID_API_KEY,
            challenge: None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StacError::Unauthorized { .. } => "Unauthorized",
            StacError::CollectionNotFound(_) => "NotFound",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            StacError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            StacError::CollectionNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            description: self.to_string(),
        }
    }
}

impl IntoResponse for StacError {
    fn into_response(self) -> Response {
        let mut response = (self.status(), Json(self.body())).into_response();
        if let StacError::Unauthorized { challenge: Some(challenge), .. } = self {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(challenge));
        }
        response
    }
}

/// Wire shape of every domain error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub description: String,
}
