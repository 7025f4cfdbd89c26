//! Museum MCP Library
//!
//! Catalog search and component suggestions for a museum of UI components.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use museum_mcp::{MuseumConfig, MuseumMcpServer};
//!
//! let server = MuseumMcpServer::from_config(&MuseumConfig::default())?;
//! let result = server
//!     .call_tool("search_elements", serde_json::json!({ "layer": "organism", "tags": ["hero"] }))
//!     .await?;
//! ```
//!
//! - Zone-scoped components and atomic-design elements from one immutable catalog
//! - Faceted search by text, layer, category, zone and tags
//! - Keyword-driven suggestions with optional aesthetic zone matching

pub mod config;
pub mod error;
pub mod params;
pub mod server;
pub mod telemetry;
pub mod types;

// Re-export main server type
pub use server::MuseumMcpServer;

pub use config::{LogFormat, MuseumConfig};
pub use error::ToolCallError;

// Re-export parameter types for direct API usage
pub use params::*;
