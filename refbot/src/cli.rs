//! CLI parser and config loading.

use crate::config::RefbotConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "refbot")]
#[command(about = "GOST R 7.0.5-2008 reference bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the reference for a DOI or eLibrary link, or for a JSON record with --json.
    Format {
        #[arg(required_unless_present = "json", conflicts_with = "json")]
        query: Option<String>,
        /// Canonical metadata record (kebab-case JSON); rendered without network access.
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },
}

/// Load RefbotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<RefbotConfig> {
    RefbotConfig::load(token)
}
