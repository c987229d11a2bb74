//! CLI command definitions and dispatch.

pub mod admin;
pub mod booking;
pub mod migrate;
pub mod movie;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use boxoffice_core::config::{AppConfig, DatabaseProvider};
use boxoffice_core::error::AppError;
use boxoffice_database::Stores;

use crate::output::{self, OutputFormat};

/// BoxOffice: movie ticket booking service
#[derive(Debug, Parser)]
#[command(name = "boxoffice", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the per-environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to apply
    #[arg(short, long, env = "BOXOFFICE_ENV", default_value = "development")]
    pub env: String,

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
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account provisioning
    Admin(admin::AdminArgs),
    /// User listing
    User(user::UserArgs),
    /// Movie catalog listing
    Movie(movie::MovieArgs),
    /// Booking listing
    Booking(booking::BookingArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config_dir, &self.env)?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Admin(args) => admin::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Movie(args) => movie::execute(args, &config, self.format).await,
            Commands::Booking(args) => booking::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: connect the configured stores for a one-shot command.
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    if config.database.provider == DatabaseProvider::Memory {
        output::print_warning("database.provider is \"memory\"; nothing persists past this command");
    }
    Stores::connect(&config.database).await
}
