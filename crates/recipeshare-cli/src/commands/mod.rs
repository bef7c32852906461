//! CLI command definitions and dispatch.

pub mod recipe;
pub mod session;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::{Output, OutputFormat};
use recipeshare_core::config::ClientConfig;
use recipeshare_core::error::AppError;
use recipeshare_service::ClientContext;

/// RecipeShare command-line client
#[derive(Debug, Parser)]
#[command(name = "recipeshare", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (loads config/default.toml then config/<ENV>.toml)
    #[arg(short, long, default_value = "development")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login(session::LoginArgs),
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// Recipe management
    Recipe(recipe::RecipeArgs),
    /// User profile management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &ClientConfig) -> Result<(), AppError> {
        let ctx = ClientContext::from_config(config).await?;
        let out = Output::new(self.format);

        match &self.command {
            Commands::Login(args) => session::login(args, &ctx, out).await,
            Commands::Logout => session::logout(&ctx, out).await,
            Commands::Whoami => session::whoami(&ctx, out).await,
            Commands::Recipe(args) => recipe::execute(args, &ctx, out).await,
            Commands::User(args) => user::execute(args, &ctx, out).await,
        }
    }
}

/// Helper: map a prompt failure into a client error
pub(crate) fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}
