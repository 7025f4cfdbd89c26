//! Museum MCP Server
//!
//! Serves the component museum catalog over MCP stdio.
//!
//! # Usage
//!
//! Run directly: `museum-mcp` (or `museum-mcp --catalog-path my-catalog.toml`)
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "museum": { "command": "./museum-mcp" } } }
//! ```

use clap::Parser;
use rmcp::{transport::io::stdio, ServiceExt};

use museum_mcp::{telemetry, MuseumConfig, MuseumMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = MuseumConfig::parse();
    telemetry::init_tracing(&["museum_mcp", "museum_catalog"], config.log_format)?;

    tracing::info!("Starting museum MCP server");

    let server = MuseumMcpServer::from_config(&config)?;
    let stats = server.museum().stats();
    tracing::info!(
        components = stats.components,
        elements = stats.elements,
        zones = stats.zones,
        "Catalog ready"
    );

    let service = server.serve(stdio()).await?;

    tracing::info!("Museum MCP server running");

    service.waiting().await?;

    tracing::info!("Museum MCP server stopped");

    Ok(())
}
