//! Tools exposed to the calling model
//!
//! # Web Search
//!
//! [`search`](crate::tools::search) queries the Brave Search API and returns
//! the top results as text:
//! ```ignore
//! let tool = SearchTool::new(SearchConfig::with_api_key(key));
//! let text = tool.run("rust async runtimes").await;
//! ```
//!
//! Callers that need to tell a missing key apart from an upstream or network
//! failure use [`search::search_web`] or [`search::SearchTool::search`],
//! which return a typed [`SearchError`](crate::types::SearchError).

/// Web search tool using the Brave Search API.
pub mod search;
