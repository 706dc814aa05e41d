use anyhow::{Context, Result};
use search_agent::{
    AppState, Config,
    api::routes::serve,
    cli::{Cli, Commands, output::Output},
    mcp,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let mut config = Config::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        stdio: false,
    });

    // Stdout carries the MCP stream in stdio mode and the tool text in search mode.
    let log_to_stderr = matches!(command, Commands::Serve { stdio: true, .. } | Commands::Search { .. });
    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.server.log_level.clone()
    };
    init_tracing(&default_level, cli.log_json, log_to_stderr);

    match command {
        Commands::Serve { host, port, stdio } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = AppState::new(config);

            if !state.config.search.has_api_key() {
                warn!(
                    "{} is not set; the search tool will report that it is not configured",
                    search_agent::utils::config::API_KEY_ENV
                );
            }

            if stdio {
                info!("Serving MCP over stdio");
                mcp::start_stdio_server(state.search_tool.clone()).await?;
            } else {
                serve_http(state, &output).await?;
            }
        }
        Commands::Search { query } => {
            let state = AppState::new(config);
            println!("{}", state.search_tool.run(&query).await);
        }
        Commands::Config => output.config_report(&config, &cli.config),
    }

    Ok(())
}

async fn serve_http(state: AppState, output: &Output) -> Result<()> {
    output.listening(&state.config.server.bind_addr());
    serve(&state, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

fn init_tracing(default_level: &str, json: bool, to_stderr: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match (json, to_stderr) {
        (true, true) => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        (true, false) => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        (false, true) => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        (false, false) => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
