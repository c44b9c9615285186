// League statistics scraper.
//
// One-shot sequential automation: for each configured attack category,
// fetch the stats page, extract the first stats table, and write one CSV
// under the output directory. Fixed sleep pacing between fetches; the
// first failure aborts the whole run (no retry, no partial-output
// recovery).

pub mod table;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use crate::config::ScrapeConfig;
use table::{parse_stats_table, StatsTable};

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Output file for one category. UTF-8 without BOM, unlike the dashboard
/// export; the dashboard's own loader never reads these directly.
fn output_file(dir: &Path, category: &str) -> PathBuf {
    dir.join(format!("kovo_men_{category}.csv"))
}

/// Write a scraped table verbatim. Rows keep whatever shape the page
/// markup had, so the writer runs in flexible mode.
fn write_csv(path: &Path, stats: &StatsTable) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer
        .write_record(&stats.headers)
        .context("failed to write header row")?;
    for row in &stats.rows {
        writer.write_record(row).context("failed to write data row")?;
    }
    writer.flush().context("failed to flush CSV")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Scrape every configured category in sequence.
pub async fn run_all(config: &ScrapeConfig) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("spike-scout/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    let out_dir = Path::new(&config.output_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let url = format!(
        "{}{}",
        config.base_url.trim_end_matches('/'),
        config.stats_path
    );

    for (i, category) in config.categories.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(Duration::from_millis(config.delay_ms)).await;
        }

        info!(category = %category, url = %url, "fetching stats page");
        let html = client
            .get(&url)
            .query(&[("category", category.as_str())])
            .send()
            .await
            .with_context(|| format!("request failed for category {category}"))?
            .error_for_status()
            .with_context(|| format!("server rejected request for category {category}"))?
            .text()
            .await
            .with_context(|| format!("failed to read page body for category {category}"))?;

        let stats = parse_stats_table(&html)
            .with_context(|| format!("no usable stats table for category {category}"))?;

        let path = output_file(out_dir, category);
        write_csv(&path, &stats)
            .with_context(|| format!("failed to write output for category {category}"))?;

        info!(
            category = %category,
            rows = stats.rows.len(),
            path = %path.display(),
            "category written"
        );
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
