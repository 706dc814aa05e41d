//! Plain-text handlers for the non-MCP paths.

use axum::http::StatusCode;

/// Body served at `/`.
pub const STATUS_TEXT: &str = "Web Search Agent is running. Use the /mcp endpoint to interact.";

/// Body served for unknown paths.
pub const NOT_FOUND_TEXT: &str = "Not found. Use the /mcp endpoint.";

/// Liveness check, answered for any method.
pub async fn status() -> &'static str {
    STATUS_TEXT
}

/// Fallback for every path the router does not know.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_TEXT)
}
