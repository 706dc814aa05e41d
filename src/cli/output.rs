//! Colored output for the search-agent CLI
//!
//! Only the two reports the binary prints live here: the startup notice for
//! `serve` and the resolved settings for `config`.

use crate::utils::config::{API_KEY_ENV, Config};
use owo_colors::OwoColorize;
use std::path::Path;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the name/version line followed by the HTTP and MCP addresses.
    pub fn listening(&self, addr: &str) {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        let mcp_url = format!("http://{}/mcp", addr);

        if self.colored {
            println!(
                "\n   {} {}\n",
                "Web Search Agent".bright_cyan().bold(),
                version.dimmed()
            );
            println!("  {} http://{}", "listening".green().bold(), addr);
            println!("  {} {}", "mcp".blue().bold(), mcp_url.bright_white());
        } else {
            println!("\n   Web Search Agent {}\n", version);
            println!("  [LISTENING] http://{}", addr);
            println!("  [MCP] {}", mcp_url);
        }
    }

    /// Print the resolved configuration without revealing the API key.
    pub fn config_report(&self, config: &Config, path: &Path) {
        let key_state = if config.search.has_api_key() {
            "configured"
        } else {
            "not configured"
        };
        let rows = [
            ("file", path.display().to_string()),
            ("bind address", config.server.bind_addr()),
            ("log level", config.server.log_level.clone()),
            ("search endpoint", config.search.endpoint.clone()),
            ("api key", key_state.to_string()),
        ];

        if self.colored {
            println!("\n  {}", "Configuration".bright_white().bold().underline());
            for (key, value) in &rows {
                println!("    {}: {}", key.dimmed(), value.bright_white());
            }
        } else {
            println!("\n  === Configuration ===");
            for (key, value) in &rows {
                println!("    {}: {}", key, value);
            }
        }

        if !config.search.has_api_key() {
            let hint = format!("Searches report an error until {} is set:", API_KEY_ENV);
            let cmd = format!("$ export {}=<your token>", API_KEY_ENV);
            if self.colored {
                println!("\n  {} {}", "⚠".yellow().bold(), hint.yellow());
                println!("     {}", cmd.bright_cyan());
            } else {
                println!("\n  [WARN] {}", hint);
                println!("     {}", cmd);
            }
        }
    }
}
