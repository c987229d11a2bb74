//! Admin account provisioning.

use std::sync::Arc;

use clap::{Args, Subcommand};

use boxoffice_auth::{JwtEncoder, PasswordHasher};
use boxoffice_core::config::AppConfig;
use boxoffice_core::error::AppError;
use boxoffice_service::AuthService;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin account
    Create {
        /// Username (will prompt if not provided)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Create { username, password } => {
            let username = match username {
                Some(u) => u.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin username")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let stores = super::open_stores(config).await?;
            let auth = AuthService::new(
                Arc::clone(&stores.users),
                Arc::new(PasswordHasher::new(&config.auth.argon2)?),
                Arc::new(JwtEncoder::new(&config.auth)?),
                config.auth.allow_admin_registration,
            );

            let user = auth.create_admin(&username, &password).await?;
            stores.close().await;

            output::print_success(&format!(
                "Admin user '{}' created (id: {})",
                user.username, user.id
            ));
        }
    }

    Ok(())
}
