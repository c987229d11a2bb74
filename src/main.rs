//! BoxOffice server
//!
//! Loads configuration, installs logging, and serves the HTTP API until
//! interrupted.

use boxoffice_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("BOXOFFICE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = boxoffice_api::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    tracing::info!(env = %env, provider = %config.database.provider, "Configuration loaded");

    if let Err(e) = boxoffice_api::run_server(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
