//! User listing.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use boxoffice_core::config::AppConfig;
use boxoffice_core::error::AppError;
use boxoffice_entity::User;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List {
        /// Only show admins
        #[arg(long)]
        admins: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    is_admin: bool,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.get(),
            username: u.username.clone(),
            is_admin: u.is_admin,
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;

    match &args.command {
        UserCommand::List { admins } => {
            let users = stores.users.find_all().await?;
            let rows: Vec<UserRow> = users
                .iter()
                .filter(|u| !admins || u.is_admin)
                .map(UserRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    stores.close().await;
    Ok(())
}
