//! RecipeShare CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

mod commands;
mod output;

use commands::Cli;
use recipeshare_core::config::{ClientConfig, LoggingConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            output::error(e.user_message());
            std::process::exit(2);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = cli.execute(&config).await {
        tracing::debug!(kind = %e.kind, "Command failed");
        output::error(e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing. `RUST_LOG` overrides the configured level.
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
