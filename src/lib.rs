//! # Web Search Agent
//!
//! An MCP (Model Context Protocol) server exposing a single `search` tool.
//! The tool forwards a query to the Brave Search API and returns the top
//! results as text to the calling language model.
//!
//! ## Overview
//!
//! The crate can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `search-agent` binary
//! 2. **As a library** - Mount the router or call the search tool directly
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use search_agent::{AppState, Config, api::routes::create_router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Config::load("search-agent.toml")?);
//!     let app = create_router(&state);
//!
//!     let listener = tokio::net::TcpListener::bind(state.config.server.bind_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Calling the Tool Directly
//!
//! ```rust,ignore
//! use search_agent::{SearchConfig, SearchTool};
//!
//! let tool = SearchTool::new(SearchConfig::with_api_key("BSA..."));
//! match tool.search("rust 2024 edition").await {
//!     Ok(results) => println!("{} results", results.len()),
//!     Err(e) => eprintln!("{:?}: {}", e.kind(), e),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP routes
//! - [`mcp`] - MCP agent and transports
//! - [`tools`] - The Brave-backed search tool
//! - [`types`] - Search results and error types
//! - [`utils`] - Configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// Model Context Protocol (MCP) agent.
pub mod mcp;
/// Built-in tools (web search).
pub mod tools;
/// Core types (results, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use mcp::SearchAgent;
pub use tools::search::SearchTool;
pub use types::{AppError, Result, SearchError, SearchErrorKind, SearchResult};
pub use utils::config::{Config, SearchConfig};

use std::sync::Arc;

/// Application state shared by the HTTP router and the CLI
#[derive(Clone)]
pub struct AppState {
    /// Resolved configuration
    pub config: Arc<Config>,
    /// Search tool bound to `config.search`
    pub search_tool: SearchTool,
}

impl AppState {
    /// Build state from a resolved configuration.
    pub fn new(config: Config) -> Self {
        let search_tool = SearchTool::new(config.search.clone());
        Self {
            config: Arc::new(config),
            search_tool,
        }
    }
}
