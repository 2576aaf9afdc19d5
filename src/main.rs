use std::sync::Arc;

use clap::Parser;
use corpus_harvester::{run_harvest, HarvestConfig, WikipediaSource};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = HarvestConfig::parse();
    info!(
        "Starting corpus harvester for {}.wikipedia.org",
        config.language
    );

    let source = Arc::new(WikipediaSource::new(
        &config.language,
        &config.user_agent,
        config.request_timeout(),
    )?);

    let summary = run_harvest(&config, source).await?;

    info!("==================================================");
    info!("Completed! Total articles written: {}", summary.total_written);
    info!(
        "Corpus output: {} ({:.2} MB)",
        config.corpus_path.display(),
        summary.corpus_bytes as f64 / (1024.0 * 1024.0)
    );
    info!("Seen titles: {}", config.seen_titles_path.display());
    info!("Final status: {}", summary.stop_reason);
    info!("==================================================");
    Ok(())
}
