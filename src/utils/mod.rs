/// Layered configuration (defaults, TOML file, environment).
pub mod config;
