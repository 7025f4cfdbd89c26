//! Configuration for the museum MCP server
//!
//! Every flag can also be set through its environment variable, so the server
//! can be configured from an `.mcp.json` `env` block without arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use museum_catalog::{Catalog, CatalogError, Museum};

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Clone, Debug, Parser)]
#[command(name = "museum-mcp", version, about = "Component museum MCP server")]
pub struct MuseumConfig {
    /// Catalog file (.json or .toml) to serve instead of the built-in catalog
    #[arg(long, env = "MUSEUM_CATALOG_PATH")]
    pub catalog_path: Option<PathBuf>,

    /// Log format written to stderr
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "text", ignore_case = true)]
    pub log_format: LogFormat,
}

impl Default for MuseumConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl MuseumConfig {
    /// Load the configured catalog and build its index
    pub fn load_museum(&self) -> Result<Museum, CatalogError> {
        let catalog = match &self.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        Ok(Museum::new(catalog))
    }
}
