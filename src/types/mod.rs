use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============= Search Types =============

/// A single web result as returned by the search provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page title
    pub title: String,
    /// Page URL
    pub url: String,
    /// Snippet describing the page
    pub description: String,
}

impl SearchResult {
    /// Read a result from a raw provider entry.
    ///
    /// Fields that are missing or not strings become empty strings.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            title: field("title"),
            url: field("url"),
            description: field("description"),
        }
    }
}

// ============= Error Types =============

/// Failures of a single search invocation.
///
/// Every variant is turned into text before it reaches the calling model,
/// but callers embedding the library can branch on the category.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// No API key was configured.
    #[error("Search API key is not configured")]
    MissingApiKey,

    /// The provider answered with a non-success status.
    #[error("Brave API error: {status} {body}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The provider body was not valid JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Coarse category of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    /// Missing configuration
    Configuration,
    /// Non-2xx from the provider
    Upstream,
    /// Transport failure
    Network,
    /// Malformed provider output
    Parse,
}

impl SearchError {
    /// Category of this failure.
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            SearchError::MissingApiKey => SearchErrorKind::Configuration,
            SearchError::Upstream { .. } => SearchErrorKind::Upstream,
            SearchError::Network(_) => SearchErrorKind::Network,
            SearchError::Parse(_) => SearchErrorKind::Parse,
        }
    }

    /// HTTP status returned by the provider, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Upstream { status, .. } => Some(*status),
            SearchError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors raised while starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Listener bind or socket failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias used by the server and configuration layers.
pub type Result<T> = std::result::Result<T, AppError>;
