//! STAC Document Types
//!
//! One concrete shape per resource. Field order follows the STAC JSON
//! layout so serialized documents read the way clients expect them.

use serde::{Deserialize, Serialize};

pub const STAC_VERSION: &str = "1.0.0";
pub const MEDIA_TYPE_JSON: &str = "application/json";

/// Typed link between STAC documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    /// JSON link with the given relation
    pub fn json(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            media_type: MEDIA_TYPE_JSON.to_string(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Root catalog document (`GET /`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "type")]
    pub kind: String,
    pub stac_version: String,
    pub id: String,
    pub title: String,
    pub description: String,
    pub links: Vec<Link>,
}

/// Conformance document (`GET /conformance`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conformance {
    #[serde(rename = "conformsTo")]
    pub conforms_to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub roles: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialExtent {
    /// west, south, east, north
    pub bbox: Vec<[f64; 4]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalExtent {
    /// RFC 3339 start/end pairs
    pub interval: Vec<[String; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

/// Collection document (`GET /collections/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub stac_version: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub license: String,
    pub providers: Vec<Provider>,
    pub extent: Extent,
    pub links: Vec<Link>,
}

/// Collection listing (`GET /collections`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionList {
    pub collections: Vec<Collection>,
    pub links: Vec<Link>,
}
