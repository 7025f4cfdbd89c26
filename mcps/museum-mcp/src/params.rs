//! Tool parameter types for the museum MCP server

use museum_catalog::{Layer, SearchCriteria, SuggestRequest};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for searching atomic-design elements
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct SearchElementsParams {
    /// Case-insensitive text matched against name, description and tags
    #[serde(default)]
    pub query: Option<String>,
    /// Restrict to one layer: atom, molecule, organism or template
    #[serde(default)]
    pub layer: Option<Layer>,
    /// Restrict to one element category (e.g., "buttons", "heroes")
    #[serde(default)]
    pub category: Option<String>,
    /// Match elements carrying at least one of these tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Maximum number of results (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
}

impl From<SearchElementsParams> for SearchCriteria {
    fn from(params: SearchElementsParams) -> Self {
        SearchCriteria {
            query: params.query,
            layer: params.layer,
            category: params.category,
            zone: None,
            tags: params.tags.unwrap_or_default(),
            limit: params.limit,
        }
    }
}

/// Parameters for searching zone components
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct SearchComponentsParams {
    /// Case-insensitive text matched against name, description and tags
    #[serde(default)]
    pub query: Option<String>,
    /// Restrict to components carrying this category
    #[serde(default)]
    pub category: Option<String>,
    /// Restrict to one zone id (e.g., "neon-alley")
    #[serde(default)]
    pub zone: Option<String>,
    /// Match components carrying at least one of these tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Maximum number of results (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
}

impl From<SearchComponentsParams> for SearchCriteria {
    fn from(params: SearchComponentsParams) -> Self {
        SearchCriteria {
            query: params.query,
            layer: None,
            category: params.category,
            zone: params.zone,
            tags: params.tags.unwrap_or_default(),
            limit: params.limit,
        }
    }
}

/// Parameters for looking up a component or element
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetElementParams {
    /// Component or element id
    pub id: String,
}

/// Parameters for listing element categories
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct ListCategoriesParams {
    /// Only categories of this layer
    #[serde(default)]
    pub layer: Option<Layer>,
}

/// Parameters for looking up a theme
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetThemeParams {
    /// Theme id (e.g., "midnight")
    pub id: String,
}

/// Parameters for searching zones
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct SearchZonesParams {
    /// Text matched against zone name, aesthetic and tags; omit to list all zones
    #[serde(default)]
    pub query: Option<String>,
}

/// Parameters for looking up a zone
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetZoneParams {
    /// Zone id (e.g., "arcade-basement")
    pub id: String,
}

/// Parameters for component suggestions
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct SuggestComponentsParams {
    /// What you are building (e.g., "landing page with pricing")
    #[serde(default)]
    pub description: String,
    /// Preferred look (e.g., "neon", "glass"); matching zone is attached to each suggestion
    #[serde(default)]
    pub aesthetic: Option<String>,
    /// Maximum number of suggestions (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
}

impl From<SuggestComponentsParams> for SuggestRequest {
    fn from(params: SuggestComponentsParams) -> Self {
        SuggestRequest {
            description: params.description,
            aesthetic: params.aesthetic,
            limit: params.limit,
        }
    }
}
