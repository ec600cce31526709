mod commands;
mod native;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eshoku_core::EshokuConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::share::Via;

#[derive(Parser)]
#[command(name = "eshoku")]
#[command(about = "Look up e-Shoku rooms and share invitations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a room and the action available to the viewer
    Room {
        /// Room id (UUID)
        id: String,

        /// Resolve the room as this signed-in user id
        #[arg(short, long)]
        viewer: Option<String>,

        /// Print the full room page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the share links for a room, or open one
    Share {
        /// Room id (UUID)
        id: String,

        /// Resolve the share text as this signed-in user id
        #[arg(short, long)]
        viewer: Option<String>,

        /// Open this share target instead of printing links
        #[arg(long, value_enum)]
        via: Option<Via>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = EshokuConfig::load().context("Failed to load eshoku configuration")?;

    match cli.command {
        Commands::Room { id, viewer, json } => {
            commands::room::run(&config, &id, viewer.as_deref(), json).await
        }
        Commands::Share { id, viewer, via } => {
            commands::share::run(&config, &id, viewer.as_deref(), via).await
        }
    }
}
