//! Command-line arguments for playlist-api
//!
//! Each flag can also be set through its environment variable; clap applies
//! the flag first, then the variable.

use clap::{Parser, Subcommand};
use playlist_common::config::ConfigOverrides;
use std::path::PathBuf;

/// Command-line arguments for playlist-api
#[derive(Parser, Debug)]
#[command(name = "playlist-api")]
#[command(about = "HTTP API over a normalized playlist dataset")]
#[command(version)]
pub struct Cli {
    /// TOML config file (optional)
    #[arg(short, long, env = "PLAYLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Column-oriented playlist JSON document
    #[arg(short, long, env = "PLAYLIST_DATA_PATH")]
    pub data: Option<PathBuf>,

    /// Host to bind
    #[arg(long, env = "PLAYLIST_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PLAYLIST_PORT")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the HTTP API (default)
    Serve,

    /// Normalize the playlist document and write it as CSV
    Export {
        /// Destination CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Cli {
    /// Values that take priority over the TOML config
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_path: self.data.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}
