//! Movie catalog listing.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use boxoffice_core::config::AppConfig;
use boxoffice_core::error::AppError;
use boxoffice_entity::Movie;

use crate::output::{self, OutputFormat};

/// Arguments for movie commands
#[derive(Debug, Args)]
pub struct MovieArgs {
    #[command(subcommand)]
    pub command: MovieCommand,
}

#[derive(Debug, Subcommand)]
pub enum MovieCommand {
    /// List the catalog
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct MovieRow {
    id: i64,
    title: String,
    description: String,
    showtime: String,
}

impl From<&Movie> for MovieRow {
    fn from(m: &Movie) -> Self {
        Self {
            id: m.id.get(),
            title: m.title.clone(),
            description: m.description.clone(),
            showtime: m.showtime.to_rfc3339(),
        }
    }
}

pub async fn execute(
    args: &MovieArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;

    match &args.command {
        MovieCommand::List => {
            let movies = stores.movies.find_all().await?;
            let rows: Vec<MovieRow> = movies.iter().map(MovieRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    stores.close().await;
    Ok(())
}
