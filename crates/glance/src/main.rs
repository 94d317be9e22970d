//! Glance - Terminal business-intelligence dashboard
//!
//! Renders a static analysis snapshot (metric cards, feature health,
//! recommendations) with a floating assistant chat, and exports the
//! snapshot as JSON.

mod app;
mod commands;
mod event_loop;
mod logging;
mod theme;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use glance_common::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glance")]
#[command(about = "Terminal dashboard for the business-intelligence snapshot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the analysis report to a JSON file
    Export {
        /// Directory to write the report into (default: configured export dir)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the analysis report JSON to stdout
    Report,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            logging::init(true)?;
            let config = Config::load()?;
            event_loop::run(config).await
        }
        Some(Commands::Export { output }) => {
            logging::init(false)?;
            let config = Config::load()?;
            commands::export(output, &config)
        }
        Some(Commands::Report) => {
            logging::init(false)?;
            commands::report()
        }
    }
}
