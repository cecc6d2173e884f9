use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_DATABASE_URL, get_bind_address, get_database_url};
use commands::{export_charts, serve};

#[derive(Parser)]
#[command(name = "climate")]
#[command(about = "Climate observation web application serving charts and a JSON API")]
#[command(version)]
pub struct Cli {
    /// Runs `serve` with settings from the environment when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Database URL
        ///
        /// Examples:
        ///   SQLite: sqlite://Resources/hawaii.sqlite?mode=ro
        ///   SQLite: sqlite:///absolute/path/to/hawaii.sqlite
        #[arg(short, long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:5000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,
    },
    /// Render both charts to PNG files without starting the server
    ExportCharts {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,

        /// Directory the PNG files are written to. Created if missing.
        #[arg(short, long, default_value = "charts")]
        output_dir: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Serve { database_url, bind_address }) => {
                serve(&database_url, &bind_address).await?;
            }
            Some(Commands::ExportCharts { database_url, output_dir }) => {
                export_charts(&database_url, &output_dir).await?;
            }
            None => {
                serve(&get_database_url(), &get_bind_address()).await?;
            }
        }
        Ok(())
    }
}
