//! Binary for the reference bot. `run` starts polling; `format` prints one reference and exits.

use anyhow::Result;
use clap::Parser;
use gost_citation::SystemClock;
use refbot::{format_json_file, format_query, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Format { query, json } => {
            let citation = match (json, query) {
                (Some(path), _) => format_json_file(&path, &SystemClock)?,
                (None, Some(query)) => {
                    let config = load_config(None)?;
                    format_query(&config, &query, &SystemClock).await?
                }
                (None, None) => anyhow::bail!("Provide a DOI, a link, or --json FILE"),
            };
            println!("{}", citation);
            Ok(())
        }
    }
}
