//! CLI module for the search agent
//!
//! Provides command-line interface parsing for the search-agent binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

/// Colored terminal output.
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Web Search Agent - MCP server with a Brave-backed search tool
#[derive(Parser, Debug)]
#[command(
    name = "search-agent",
    version,
    about = "Web Search Agent - MCP server exposing a web search tool",
    long_about = "Serves a single MCP tool, `search`, that forwards queries to the Brave Search API\n\
                  and returns the top results as text.\n\n\
                  Run without arguments to start the HTTP server. The API key is read from BRAVE_API_KEY.",
    after_help = "EXAMPLES:\n    \
                  search-agent                        # Start the HTTP server on 127.0.0.1:8787\n    \
                  search-agent serve --stdio          # Serve MCP over stdin/stdout\n    \
                  search-agent search \"rust tokio\"    # Run one search and print the result\n    \
                  search-agent config                 # Show the resolved configuration"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "search-agent.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server (default)
    Serve {
        /// Host address to bind, overrides config and HOST
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides config and PORT
        #[arg(long)]
        port: Option<u16>,

        /// Serve MCP over stdin/stdout instead of HTTP
        #[arg(long)]
        stdio: bool,
    },

    /// Run the search tool once and print its response
    Search {
        /// The search query
        query: String,
    },

    /// Show the resolved configuration
    Config,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
