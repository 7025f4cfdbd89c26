//! Errors for in-process tool dispatch

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Failure to run a tool through [`MuseumMcpServer::call_tool`](crate::MuseumMcpServer::call_tool)
///
/// Catalog misses are not errors here; they come back as tool results with
/// `is_error` set.
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("tool not found: {0}")]
    UnknownTool(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    #[error("mcp error: {0}")]
    Mcp(String),
}

impl From<McpError> for ToolCallError {
    fn from(err: McpError) -> Self {
        ToolCallError::Mcp(err.message.to_string())
    }
}
