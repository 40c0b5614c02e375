//! `ingest` binary: load the logic model and write it as JSON

use anyhow::Context;
use clap::Parser;
use shared::{ProcessId, logging, process_info};
use std::path::PathBuf;

use ingest::{DatasetLoader, SourceArgs};

#[derive(Parser, Debug)]
#[command(name = "ingest")]
#[command(about = "Build the logic model dataset JSON from a spreadsheet")]
struct Args {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file for the dataset JSON (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    ProcessId::init_ingest();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), "logic model ingestion");

    let config = args.source.into_config()?;
    let loader = DatasetLoader::from_config(&config)?;
    let loaded = loader.load().await?;
    process_info!(
        ProcessId::current(),
        "📦 Dataset from {}: {} strategies, {} outputs",
        loaded.origin,
        loaded.dataset.strategy_count(),
        loaded.dataset.outputs.len()
    );

    let json = loaded.dataset.to_json_pretty()?;
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            logging::log_success(ProcessId::current(), &format!("Wrote {}", path.display()));
        }
        None => println!("{json}"),
    }
    Ok(())
}
