//! MCP Server implementation for the component museum
//!
//! Exposes catalog search, lookups and suggestions as tools. Every tool is a
//! read over the shared, immutable [`Museum`].

use std::sync::Arc;

use museum_catalog::{CatalogError, Museum, SearchCriteria, SuggestRequest};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::MuseumConfig;
use crate::error::ToolCallError;
use crate::params::*;
use crate::types::{
    CategoriesResponse, ComponentsResponse, ElementsResponse, ThemesResponse, ZoneDetail,
    ZonesResponse,
};

const INSTRUCTIONS: &str = "Component museum MCP server. Search a catalog of UI components \
     grouped into themed zones and of atomic-design elements (atoms, molecules, organisms, \
     templates), look entries up by id, browse themes, zones and categories, and get \
     component suggestions for a plain-language description.";

/// The main museum MCP Server
#[derive(Clone)]
pub struct MuseumMcpServer {
    museum: Arc<Museum>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl MuseumMcpServer {
    pub fn new(museum: Museum) -> Self {
        Self {
            museum: Arc::new(museum),
            tool_router: Self::tool_router(),
        }
    }

    /// Build a server over the catalog named by `config`
    pub fn from_config(config: &MuseumConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(config.load_museum()?))
    }

    pub fn museum(&self) -> &Museum {
        &self.museum
    }

    // ========================================================================
    // Search Tools
    // ========================================================================

    #[tool(
        description = "Search atomic-design elements by free text, layer (atom, molecule, organism, template), category and tags. Tags match if any one is present. Results keep catalog order; default limit 10."
    )]
    async fn search_elements(
        &self,
        Parameters(params): Parameters<SearchElementsParams>,
    ) -> Result<CallToolResult, McpError> {
        let criteria = SearchCriteria::from(params);
        let elements = self.museum.search_elements(&criteria);
        debug!(count = elements.len(), "search_elements");

        json_success(&ElementsResponse {
            count: elements.len(),
            elements,
        })
    }

    #[tool(
        description = "Search zone components by free text, category, zone and tags. Tags match if any one is present. Results keep catalog order; default limit 10."
    )]
    async fn search_components(
        &self,
        Parameters(params): Parameters<SearchComponentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let criteria = SearchCriteria::from(params);
        let components = self.museum.search_components(&criteria);
        debug!(count = components.len(), "search_components");

        json_success(&ComponentsResponse {
            count: components.len(),
            components,
        })
    }

    #[tool(
        description = "Suggest elements for a plain-language description such as 'landing page with pricing' or 'login form'. Optionally pass an aesthetic (e.g., 'neon') to get a matching zone attached to each suggestion."
    )]
    async fn suggest_components(
        &self,
        Parameters(params): Parameters<SuggestComponentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = SuggestRequest::from(params);
        let response = self.museum.suggest(&request);
        debug!(count = response.count, "suggest_components");

        json_success(&response)
    }

    // ========================================================================
    // Lookup Tools
    // ========================================================================

    #[tool(
        description = "Get a component or element by id. Components are checked first; the result carries a 'kind' field."
    )]
    async fn get_element(
        &self,
        Parameters(params): Parameters<GetElementParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.museum.by_id(&params.id) {
            Some(entry) => {
                debug!(id = entry.id(), name = entry.name(), "get_element");
                json_success(&entry)
            }
            None => Ok(not_found(format!("No component or element with id '{}'", params.id))),
        }
    }

    #[tool(description = "Get a theme by id, including its color palette.")]
    async fn get_theme(
        &self,
        Parameters(params): Parameters<GetThemeParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.museum.theme_by_id(&params.id) {
            Some(theme) => json_success(theme),
            None => Ok(not_found(format!("No theme with id '{}'", params.id))),
        }
    }

    #[tool(description = "Get a zone by id together with the components exhibited in it.")]
    async fn get_zone(
        &self,
        Parameters(params): Parameters<GetZoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(zone) = self.museum.zone_by_id(&params.id) else {
            return Ok(not_found(format!("No zone with id '{}'", params.id)));
        };
        let components = self.museum.by_zone(&zone.id);

        json_success(&ZoneDetail {
            zone,
            component_count: components.len(),
            components,
        })
    }

    // ========================================================================
    // Reference Tools
    // ========================================================================

    #[tool(description = "List the six color themes.")]
    async fn list_themes(&self) -> Result<CallToolResult, McpError> {
        let themes = self.museum.all_themes();
        json_success(&ThemesResponse {
            count: themes.len(),
            themes,
        })
    }

    #[tool(
        description = "Search zones by name, aesthetic or tag (case-insensitive). Omit the query to list every zone."
    )]
    async fn search_zones(
        &self,
        Parameters(params): Parameters<SearchZonesParams>,
    ) -> Result<CallToolResult, McpError> {
        let zones = self.museum.search_zones(params.query.as_deref());
        debug!(count = zones.len(), "search_zones");

        json_success(&ZonesResponse {
            count: zones.len(),
            zones,
        })
    }

    #[tool(
        description = "List element categories with their live element counts, optionally for one layer."
    )]
    async fn list_categories(
        &self,
        Parameters(params): Parameters<ListCategoriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let categories = self.museum.categories(params.layer);
        json_success(&CategoriesResponse {
            count: categories.len(),
            categories,
        })
    }

    // ========================================================================
    // Status Tools
    // ========================================================================

    #[tool(
        description = "Get catalog totals: components, elements per layer, zones, themes and categories."
    )]
    async fn get_catalog_status(&self) -> Result<CallToolResult, McpError> {
        json_success(&self.museum.stats())
    }
}

// ============================================================================
// In-process dispatch
// ============================================================================

impl MuseumMcpServer {
    pub fn server_name(&self) -> &str {
        "museum"
    }

    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Run a tool by name without a transport
    pub async fn call_tool(
        &self,
        name: &str,
        params: Value,
    ) -> Result<CallToolResult, ToolCallError> {
        let result = match name {
            "search_elements" => {
                let params: SearchElementsParams = serde_json::from_value(params)?;
                self.search_elements(Parameters(params)).await
            }
            "search_components" => {
                let params: SearchComponentsParams = serde_json::from_value(params)?;
                self.search_components(Parameters(params)).await
            }
            "suggest_components" => {
                let params: SuggestComponentsParams = serde_json::from_value(params)?;
                self.suggest_components(Parameters(params)).await
            }
            "get_element" => {
                let params: GetElementParams = serde_json::from_value(params)?;
                self.get_element(Parameters(params)).await
            }
            "get_theme" => {
                let params: GetThemeParams = serde_json::from_value(params)?;
                self.get_theme(Parameters(params)).await
            }
            "get_zone" => {
                let params: GetZoneParams = serde_json::from_value(params)?;
                self.get_zone(Parameters(params)).await
            }
            "list_themes" => self.list_themes().await,
            "search_zones" => {
                let params: SearchZonesParams = serde_json::from_value(params)?;
                self.search_zones(Parameters(params)).await
            }
            "list_categories" => {
                let params: ListCategoriesParams = serde_json::from_value(params)?;
                self.list_categories(Parameters(params)).await
            }
            "get_catalog_status" => self.get_catalog_status().await,
            _ => return Err(ToolCallError::UnknownTool(name.to_string())),
        };

        result.map_err(Into::into)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for MuseumMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn json_success<T: Serialize + ?Sized>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn not_found(message: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message)])
}
