//! Booking listing.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use boxoffice_core::config::AppConfig;
use boxoffice_core::error::AppError;
use boxoffice_core::types::UserId;
use boxoffice_entity::Booking;

use crate::output::{self, OutputFormat};

/// Arguments for booking commands
#[derive(Debug, Args)]
pub struct BookingArgs {
    #[command(subcommand)]
    pub command: BookingCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingCommand {
    /// List bookings
    List {
        /// Only bookings held by this user id
        #[arg(long)]
        user: Option<i64>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct BookingRow {
    id: i64,
    user_id: i64,
    movie_id: i64,
    created_at: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.get(),
            user_id: b.user_id.get(),
            movie_id: b.movie_id.get(),
            created_at: b.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub async fn execute(
    args: &BookingArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;

    match &args.command {
        BookingCommand::List { user } => {
            let bookings = match user {
                Some(id) => stores.bookings.find_all_by_user(UserId::new(*id)).await?,
                None => stores.bookings.find_all().await?,
            };
            let rows: Vec<BookingRow> = bookings.iter().map(BookingRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    stores.close().await;
    Ok(())
}
