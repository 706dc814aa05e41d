use crate::AppState;
use crate::api::handlers;
use crate::mcp;
use crate::types::Result;
use axum::{Router, routing::any};
use std::future::Future;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Build the application router.
///
/// Exactly `/mcp` is handed to the rmcp streamable HTTP service unchanged;
/// `/mcp/...` subpaths fall through to the not-found handler like any other
/// unknown path.
pub fn create_router(state: &AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    Router::new()
        .route("/", any(handlers::status))
        .route_service("/mcp", mcp::http_service(state.search_tool.clone()))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve<F>(state: &AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = state.config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(addr = %addr, "Server started");
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
