use crate::tools::search::SearchTool;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
    transport::streamable_http_server::{StreamableHttpService, session::local::LocalSessionManager},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name advertised to MCP clients.
pub const SERVER_NAME: &str = "Web Search Agent";

/// Parameters for web search
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchParams {
    /// The search query to look up on the internet
    pub query: String,
}

/// MCP agent exposing the `search` tool
#[derive(Clone)]
pub struct SearchAgent {
    search_tool: SearchTool,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SearchAgent {
    /// Create an agent that searches with `search_tool`.
    pub fn new(search_tool: SearchTool) -> Self {
        Self {
            search_tool,
            tool_router: Self::tool_router(),
        }
    }

    /// Definitions of every tool this agent serves.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Search the web and return the top results as text
    #[tool(description = "Search the internet and return the top results with titles, URLs and snippets")]
    async fn search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.search_tool.run(&params.query).await;

        // Failures are reported as content so the model can read them.
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for SearchAgent {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Web Search Agent - use the `search` tool to look up current information on the internet"
                    .into(),
            ),
        }
    }
}

/// Streamable HTTP service that creates one agent per MCP session.
pub fn http_service(search_tool: SearchTool) -> StreamableHttpService<SearchAgent, LocalSessionManager> {
    StreamableHttpService::new(
        move || Ok(SearchAgent::new(search_tool.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    )
}

/// Start the MCP server with stdio transport
pub async fn start_stdio_server(search_tool: SearchTool) -> crate::types::Result<()> {
    use rmcp::{ServiceExt, transport::io::stdio};

    let server = SearchAgent::new(search_tool);
    let transport = stdio();

    let running = server
        .serve(transport)
        .await
        .map_err(|e| crate::types::AppError::Internal(format!("MCP server error: {}", e)))?;

    running
        .waiting()
        .await
        .map_err(|e| crate::types::AppError::Internal(format!("MCP server error: {}", e)))?;

    Ok(())
}
