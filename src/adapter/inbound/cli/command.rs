//! Command-line interface definitions.
//!
//! The binary has a single job, so there are no subcommands: flags select
//! the configuration file and override where the server listens.

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::config::settings::Config;

/// Market, product and stock movement HTTP API
#[derive(Parser, Debug)]
#[command(name = "mercado")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Address to bind, overriding `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
