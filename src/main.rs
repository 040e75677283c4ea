//! listfold binary entry point

mod cli;

use anyhow::Context;
use clap::Parser;
use listfold::config::{default_config_path, load_config};
use listfold::source::HttpListSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Merge two item lists into a new list
#[derive(Debug, Parser)]
#[command(name = "listfold", version)]
struct Cli {
    /// Endpoint to fetch lists from (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let config = match args.config.or_else(default_config_path) {
        Some(path) => load_config(&path).context("loading config")?,
        None => listfold::config::Config::default(),
    };
    let endpoint = args.endpoint.unwrap_or(config.endpoint);

    let source = HttpListSource::new(&endpoint).context("creating list source")?;
    cli::run(&source).await.context("running listfold")?;

    Ok(())
}
