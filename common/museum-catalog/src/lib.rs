//! Museum Catalog
//!
//! In-memory catalog of UI components grouped into themed zones, plus a
//! parallel catalog of atomic-design elements.
//!
//! # Usage
//!
//! ```rust,ignore
//! use museum_catalog::{Catalog, Museum, SearchCriteria, SuggestRequest};
//!
//! let museum = Museum::new(Catalog::builtin()?);
//! let heroes = museum.search_components(&SearchCriteria::new().with_tags(["hero"]).with_limit(2));
//! let ideas = museum.suggest(&SuggestRequest::new("landing page").with_aesthetic("neon"));
//! ```
//!
//! - Store: validated, immutable collections loaded once
//! - Index: by-id, by-layer, by-category and by-zone position maps
//! - Query: faceted filtering with catalog-order results
//! - Suggest: keyword buckets mapped to bounded queries

pub mod error;
pub mod index;
pub mod museum;
pub mod query;
pub mod store;
pub mod suggest;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use error::CatalogError;
pub use index::CatalogIndex;
pub use museum::Museum;
pub use query::{SearchCriteria, Searchable, DEFAULT_LIMIT};
pub use store::{Catalog, CatalogDocument, THEME_COUNT};
pub use suggest::{
    classify, IntentBucket, SuggestRequest, SuggestResponse, Suggestion, FALLBACK_REASON,
};
pub use types::*;
