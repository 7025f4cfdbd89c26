//! Catalog loading errors
//!
//! Loading is the only fallible step. Once a [`Catalog`](crate::Catalog) exists,
//! every lookup and query reports absence as `None` or an empty list.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Layer;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Id {0} is used by both a component and an element")]
    SharedId(String),

    #[error("Component {component} references unknown zone {zone}")]
    UnknownZone { component: String, zone: String },

    #[error("Component {0} has no categories")]
    EmptyCategories(String),

    #[error("Element {element} uses category {category}, which is not declared for layer {layer}")]
    UndeclaredCategory {
        element: String,
        category: String,
        layer: Layer,
    },

    #[error("Category {category} is declared twice for layer {layer}")]
    DuplicateCategory { category: String, layer: Layer },

    #[error("Expected exactly {expected} themes, found {found}")]
    ThemeCount { expected: usize, found: usize },
}
