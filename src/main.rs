// Scouting dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load and prepare both league datasets
// 4. Run the TUI event loop until the user quits

use std::path::Path;

use anyhow::Context;
use tracing::info;

use spike_scout::app::AppData;
use spike_scout::config;
use spike_scout::metrics::{self, League};
use spike_scout::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not the terminal owned by the TUI)
    init_tracing()?;
    info!("Scouting dashboard starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: normalize={}, top_n={}",
        config.dashboard.normalize, config.dashboard.top_n
    );

    // 3. Load and prepare both league datasets
    let men = metrics::prepare_league(
        League::Men,
        Path::new(&config.data.men),
        config.dashboard.normalize,
    )
    .context("failed to load men's league data")?;
    let women = metrics::prepare_league(
        League::Women,
        Path::new(&config.data.women),
        config.dashboard.normalize,
    )
    .context("failed to load women's league data")?;
    info!(
        "Loaded {} men's and {} women's player records",
        men.players.len(),
        women.players.len()
    );

    // 4. Run the TUI event loop (blocking until the user quits)
    let state = tui::ViewState::new(AppData { men, women }, &config);
    tui::run(state).await?;

    info!("Scouting dashboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by
/// the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("spikescout.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spike_scout=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
