//! Search tool tests against a mocked Brave Search API
//!
//! These tests use wiremock to stand in for the provider and validate:
//! - Request shape (encoded query, headers)
//! - Result formatting and truncation
//! - Empty and malformed provider responses
//! - Upstream and network failures

use search_agent::tools::search::{
    MISSING_KEY_MESSAGE, NO_RESULTS_MESSAGE, RESULT_SEPARATOR, SearchTool,
};
use search_agent::{SearchConfig, SearchError, SearchErrorKind};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/res/v1/web/search";

// ============= Helper Functions =============

fn tool_for(server: &MockServer) -> SearchTool {
    SearchTool::new(SearchConfig {
        api_key: Some("test-key".to_string()),
        endpoint: format!("{}{}", server.uri(), SEARCH_PATH),
    })
}

/// Create a Brave-style response with `n` results
fn mock_results(n: usize) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (1..=n)
        .map(|i| {
            json!({
                "title": format!("Result {}", i),
                "url": format!("https://example.com/{}", i),
                "description": format!("Description {}", i),
                "language": "en"
            })
        })
        .collect();

    json!({
        "type": "search",
        "query": { "original": "weather" },
        "web": { "type": "search", "results": results }
    })
}

async fn mount_json(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============= Request Shape =============

#[tokio::test]
async fn test_request_carries_headers_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "weather"))
        .and(header("accept", "application/json"))
        .and(header("x-subscription-token", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_results(1)))
        .expect(1)
        .mount(&server)
        .await;

    let results = tool_for(&server).search("weather").await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_reserved_characters_are_percent_encoded() {
    let server = MockServer::start().await;
    let query = "cats & dogs? a=b+c #1";

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_results(1)))
        .expect(1)
        .mount(&server)
        .await;

    tool_for(&server).search(query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("q=cats%20%26%20dogs%3F%20a%3Db%2Bc%20%231")
    );
}

// ============= Formatting =============

#[tokio::test]
async fn test_three_results_scenario() {
    let server = MockServer::start().await;
    mount_json(&server, mock_results(3)).await;

    let text = tool_for(&server).run("weather").await;
    let entries: Vec<&str> = text.split(RESULT_SEPARATOR).collect();

    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[0],
        "Title: Result 1\nURL: https://example.com/1\nSnippet: Description 1"
    );
    assert_eq!(
        entries[2],
        "Title: Result 3\nURL: https://example.com/3\nSnippet: Description 3"
    );
}

#[tokio::test]
async fn test_results_truncated_to_five_in_order() {
    let server = MockServer::start().await;
    mount_json(&server, mock_results(8)).await;

    let text = tool_for(&server).run("weather").await;
    let entries: Vec<&str> = text.split(RESULT_SEPARATOR).collect();

    assert_eq!(entries.len(), 5);
    for (i, entry) in entries.iter().enumerate() {
        assert!(entry.starts_with(&format!("Title: Result {}\n", i + 1)));
    }
    assert!(!text.contains("Result 6"));
}

// ============= Empty and Malformed Responses =============

#[tokio::test]
async fn test_empty_results_scenario() {
    let server = MockServer::start().await;
    mount_json(&server, json!({ "web": { "results": [] } })).await;

    let text = tool_for(&server).run("zzzznoresults").await;
    assert_eq!(text, "No relevant search results found.");
}

#[tokio::test]
async fn test_missing_web_section_is_empty() {
    let server = MockServer::start().await;
    mount_json(&server, json!({ "type": "search", "mixed": {} })).await;

    assert_eq!(tool_for(&server).run("weather").await, NO_RESULTS_MESSAGE);
}

#[tokio::test]
async fn test_non_array_results_is_empty() {
    let server = MockServer::start().await;
    mount_json(&server, json!({ "web": { "results": { "title": "odd" } } })).await;

    let results = tool_for(&server).search("weather").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let tool = tool_for(&server);
    let err = tool.search("weather").await.unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::Parse);

    let text = tool.run("weather").await;
    assert!(text.starts_with("Error: Failed to perform search. Details: "));
}

// ============= Failures =============

#[tokio::test]
async fn test_missing_key_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_results(1)))
        .expect(0)
        .mount(&server)
        .await;

    let tool = SearchTool::new(SearchConfig {
        api_key: None,
        endpoint: format!("{}{}", server.uri(), SEARCH_PATH),
    });

    assert_eq!(
        tool.run("weather").await,
        "Error: Search API key is not configured by the administrator."
    );
    assert_eq!(tool.run("anything").await, MISSING_KEY_MESSAGE);
}

#[tokio::test]
async fn test_upstream_error_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let tool = tool_for(&server);

    let err = tool.search("weather").await.unwrap_err();
    assert!(matches!(
        err,
        SearchError::Upstream { status: 500, ref body } if body == "rate limited"
    ));

    let text = tool.run("weather").await;
    assert!(text.contains("500"));
    assert!(text.contains("rate limited"));
}

#[tokio::test]
async fn test_unauthorized_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "type": "ErrorResponse" })))
        .mount(&server)
        .await;

    let err = tool_for(&server).search("weather").await.unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::Upstream);
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_network_failure_is_reported_as_text() {
    // Bind and drop a listener to get a port nothing is serving on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let tool = SearchTool::new(SearchConfig {
        api_key: Some("test-key".to_string()),
        endpoint: format!("http://127.0.0.1:{}{}", port, SEARCH_PATH),
    });

    let err = tool.search("weather").await.unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::Network);

    let text = tool.run("weather").await;
    assert!(text.starts_with("Error: Failed to perform search. Details: "));
}
