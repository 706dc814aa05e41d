//! HTTP surface of the search agent, built on the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Plain-text status handlers
//! - [`api::routes`](crate::api::routes) - Router configuration
//!
//! # Endpoints
//!
//! - `GET/POST /mcp` - MCP streamable HTTP endpoint (see [`mcp`](crate::mcp))
//! - `/` - Liveness text, always `200`
//! - anything else - `404` with a hint pointing at `/mcp`

/// Plain-text status handlers.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
