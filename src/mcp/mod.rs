//! Model Context Protocol agent
//!
//! [`server::SearchAgent`] implements the rmcp server handler with a single
//! `search` tool. It is served either over streamable HTTP (mounted at `/mcp`
//! by [`api::routes`](crate::api::routes)) or over stdio.

/// rmcp server handler, HTTP service and stdio entry point.
pub mod server;

pub use server::{SearchAgent, SearchParams, http_service, start_stdio_server};
