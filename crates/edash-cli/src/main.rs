mod snapshot;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use edash_feeds::{FeedAggregator, PipelineConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "edash-cli")]
#[command(about = "Energy dashboard feed tooling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the last seven days of government publications as JSON
    Publications,
    /// Print upcoming energy-related parliamentary activities as JSON
    Activities,
    /// Fetch both sources and write them as JSON files
    Snapshot {
        /// Directory receiving `publicaties.json` and `debatten.json`; the
        /// dashboard reads them from `data/` under its static root
        #[arg(long, default_value = "public/data")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = edash_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let aggregator = FeedAggregator::new(PipelineConfig::from_app_config(&config))?;

    match cli.command {
        Some(Commands::Publications) => {
            let envelope = aggregator.fetch_publications().await?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Some(Commands::Activities) => {
            let envelope = aggregator.fetch_activities().await?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Some(Commands::Snapshot { out_dir }) => {
            snapshot::run_snapshot(&aggregator, &out_dir).await?;
        }
        None => println!("edash-cli: use --help to list commands"),
    }

    Ok(())
}
