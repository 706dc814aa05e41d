//! Search tool implementation using the Brave Search API
//!
//! One invocation makes one outbound GET. The outcome is kept typed in
//! [`search_web`] and flattened to a single text block by
//! [`render_response`], so the calling model always receives readable text.

use crate::types::{SearchError, SearchResult};
use crate::utils::config::SearchConfig;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, error, info};

/// Maximum number of results included in a response.
pub const MAX_RESULTS: usize = 5;

/// Delimiter placed between formatted results.
pub const RESULT_SEPARATOR: &str = "\n\n---\n\n";

/// Text returned when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str =
    "Error: Search API key is not configured by the administrator.";

/// Text returned when the provider has no results for the query.
pub const NO_RESULTS_MESSAGE: &str = "No relevant search results found.";

/// Header carrying the Brave subscription token.
pub const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// Build the provider URL for `query`.
///
/// The query is percent-encoded so reserved characters such as `&`, `?` and
/// spaces reach the provider literally.
pub fn search_url(endpoint: &str, query: &str) -> String {
    format!("{}?q={}", endpoint, urlencoding::encode(query))
}

/// Run a single search against the configured provider.
///
/// Returns at most [`MAX_RESULTS`] results in provider order. No request is
/// made when the configuration has no API key.
pub async fn search_web(
    client: &reqwest::Client,
    config: &SearchConfig,
    query: &str,
) -> Result<Vec<SearchResult>, SearchError> {
    let api_key = config.api_key().ok_or(SearchError::MissingApiKey)?;

    let response = client
        .get(search_url(&config.endpoint, query))
        .header(ACCEPT, "application/json")
        .header(SUBSCRIPTION_TOKEN_HEADER, api_key)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        return Err(SearchError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    let data: Value = serde_json::from_str(&body)?;

    Ok(extract_results(&data))
}

/// Pull `web.results` out of a provider response.
///
/// A missing `web` object or a `results` field that is not an array yields
/// an empty list rather than an error.
pub fn extract_results(data: &Value) -> Vec<SearchResult> {
    data.get("web")
        .and_then(|web| web.get("results"))
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .take(MAX_RESULTS)
                .map(SearchResult::from_value)
                .collect()
        })
        .unwrap_or_default()
}

/// Format results as `Title/URL/Snippet` blocks joined by [`RESULT_SEPARATOR`].
pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .take(MAX_RESULTS)
        .map(|r| format!("Title: {}\nURL: {}\nSnippet: {}", r.title, r.url, r.description))
        .collect::<Vec<_>>()
        .join(RESULT_SEPARATOR)
}

/// Flatten a search outcome into the text handed back to the model.
pub fn render_response(outcome: &Result<Vec<SearchResult>, SearchError>) -> String {
    match outcome {
        Ok(results) if results.is_empty() => NO_RESULTS_MESSAGE.to_string(),
        Ok(results) => format_results(results),
        Err(SearchError::MissingApiKey) => MISSING_KEY_MESSAGE.to_string(),
        Err(e) => format!("Error: Failed to perform search. Details: {}", e),
    }
}

/// Web search tool bound to a resolved configuration.
///
/// Holds no per-call state; concurrent invocations share only the HTTP
/// connection pool.
#[derive(Clone)]
pub struct SearchTool {
    client: reqwest::Client,
    config: SearchConfig,
}

impl SearchTool {
    /// Create a tool with its own HTTP client.
    pub fn new(config: SearchConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("search-agent/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self::with_client(client, config)
    }

    /// Create a tool that reuses an existing HTTP client.
    pub fn with_client(client: reqwest::Client, config: SearchConfig) -> Self {
        Self { client, config }
    }

    /// The configuration this tool searches with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Typed search, for callers that need to tell failures apart.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        search_web(&self.client, &self.config, query).await
    }

    /// Search and render the outcome as text. Never fails.
    pub async fn run(&self, query: &str) -> String {
        info!(query = %query, "Received search query");

        let outcome = self.search(query).await;
        match &outcome {
            Ok(results) => debug!(count = results.len(), "Search completed"),
            Err(SearchError::MissingApiKey) => {
                error!("{} is not set; search is unavailable", crate::utils::config::API_KEY_ENV)
            }
            Err(e) => error!(kind = ?e.kind(), status = ?e.status(), "Search failed: {}", e),
        }

        render_response(&outcome)
    }
}
