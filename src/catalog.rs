//! Static STAC Fixtures
//!
//! Every document is built once at startup from the public base URL and
//! never changes afterwards.

use crate::models::{
    Catalog, Collection, CollectionList, Conformance, Extent, Link, Provider, SpatialExtent,
    TemporalExtent, STAC_VERSION,
};

pub const CATALOG_ID: &str = "test-catalog";

pub const CONFORMANCE_CLASSES: [&str; 5] = [
    "https://api.stacspec.org/v1.0.0/core",
    "https://api.stacspec.org/v1.0.0/collections",
    "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/core",
    "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/oas30",
    "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/geojson",
];

/// Read-only set of documents served by the router
#[derive(Debug, Clone)]
pub struct StacCatalog {
    root: Catalog,
    conformance: Conformance,
    collections: CollectionList,
}

impl StacCatalog {
    pub fn new(base_url: &str) -> Self {
        let collections = vec![
            collection(
                base_url,
                CollectionSeed {
                    id: "test-collection",
                    title: "Test Collection",
                    description: "A test collection for authentication testing",
                    keywords: &["test", "sample"],
                    provider: ("Test Provider", &["processor", "host"], "https://example.com"),
                    bbox: [-180.0, -90.0, 180.0, 90.0],
                    interval: ["2023-01-01T00:00:00Z", "2023-12-31T23:59:59Z"],
                },
            ),
            collection(
                base_url,
                CollectionSeed {
                    id: "sample-imagery",
                    title: "Sample Imagery Collection",
                    description: "Sample satellite imagery for testing",
                    keywords: &["imagery", "satellite", "test"],
                    provider: (
                        "Sample Satellite Company",
                        &["producer"],
                        "https://example-satellite.com",
                    ),
                    bbox: [-74.2, 40.6, -73.7, 40.9],
                    interval: ["2023-06-01T00:00:00Z", "2023-08-31T23:59:59Z"],
                },
            ),
        ];

        let mut root_links = vec![
            Link::json("root", format!("{}/", base_url)),
            Link::json("self", format!("{}/", base_url)),
            Link::json("conformance", format!("{}/conformance", base_url)),
            Link::json("data", format!("{}/collections", base_url)),
        ];
        root_links.extend(collections.iter().map(|c| {
            Link::json("child", format!("{}/collections/{}", base_url, c.id))
                .with_title(c.title.clone())
        }));

        Self {
            root: Catalog {
                kind: "Catalog".to_string(),
                stac_version: STAC_VERSION.to_string(),
                id: CATALOG_ID.to_string(),
                title: "Test STAC Catalog".to_string(),
                description: "A simple test catalog for STAC Browser authentication testing"
                    .to_string(),
                links: root_links,
            },
            conformance: Conformance {
                conforms_to: CONFORMANCE_CLASSES.iter().map(|s| s.to_string()).collect(),
            },
            collections: CollectionList {
                collections,
                links: vec![
                    Link::json("root", format!("{}/", base_url)),
                    Link::json("parent", format!("{}/", base_url)),
                    Link::json("self", format!("{}/collections", base_url)),
                ],
            },
        }
    }

    pub fn root(&self) -> &Catalog {
        &self.root
    }

    pub fn conformance(&self) -> &Conformance {
        &self.conformance
    }

    pub fn collections(&self) -> &CollectionList {
        &self.collections
    }

    /// Exact, case-sensitive match on the collection id
    pub fn find_collection(&self, id: &str) -> Option<&Collection> {
        self.collections.collections.iter().find(|c| c.id == id)
    }
}

struct CollectionSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    provider: (&'static str, &'static [&'static str], &'static str),
    bbox: [f64; 4],
    interval: [&'static str; 2],
}

fn collection(base_url: &str, seed: CollectionSeed) -> Collection {
    let (provider_name, roles, provider_url) = seed.provider;
    Collection {
        kind: "Collection".to_string(),
        id: seed.id.to_string(),
        stac_version: STAC_VERSION.to_string(),
        title: seed.title.to_string(),
        description: seed.description.to_string(),
        keywords: seed.keywords.iter().map(|k| k.to_string()).collect(),
        license: "CC-BY-4.0".to_string(),
        providers: vec![Provider {
            name: provider_name.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            url: provider_url.to_string(),
        }],
        extent: Extent {
            spatial: SpatialExtent { bbox: vec![seed.bbox] },
            temporal: TemporalExtent {
                interval: vec![[seed.interval[0].to_string(), seed.interval[1].to_string()]],
            },
        },
        links: vec![
            Link::json("root", format!("{}/", base_url)),
            Link::json("parent", format!("{}/", base_url)),
            Link::json("self", format!("{}/collections/{}", base_url, seed.id)),
        ],
    }
}
