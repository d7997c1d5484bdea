//! hookline: string, URL and JSON helpers behind a hook-dispatched CLI.
//!
//! Main entry point: loads configuration, initializes logging, registers
//! every command as a hook handler and dispatches the requested one.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use hookline_core::config::AppConfig;
use hookline_core::config::logging::LoggingConfig;
use hookline_core::AppResult;

mod commands;
mod output;

use commands::{Cli, CommandRegistry};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = run(cli, config).await {
        tracing::debug!(kind = %e.kind, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging on stderr so stdout only carries command output.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Build the command registry and run the selected command.
async fn run(cli: Cli, config: AppConfig) -> AppResult<()> {
    tracing::debug!("Starting hookline v{}", env!("CARGO_PKG_VERSION"));

    let registry = CommandRegistry::with_config(config.hooks.clone());
    commands::install(&registry).await;

    tracing::debug!(commands = registry.hook_names().await.len(), "Commands registered");

    cli.execute(&registry).await
}
