// One-shot league statistics scraper.
//
// Fetches one stats page per configured attack category and writes one CSV
// each under the output directory. Sequential with fixed pacing; the first
// failure aborts the run.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spike_scout::config;
use spike_scout::scrape;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spike_scout=info,warn")),
        )
        .init();

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        categories = config.scrape.categories.len(),
        output_dir = %config.scrape.output_dir,
        "starting scrape run"
    );

    scrape::run_all(&config.scrape).await?;

    info!("scrape run complete");
    Ok(())
}
