// Configuration loading and parsing (config/scout.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// scout.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire scout.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ScoutFile {
    data: DataPaths,
    dashboard: DashboardConfig,
    scrape: ScrapeConfig,
}

/// Input CSV locations, one per league.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub men: String,
    pub women: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Rescale all metric columns (OCI included) to [0, 1] before display.
    /// When enabled the OCI column must already exist in the input files.
    #[serde(default)]
    pub normalize: bool,
    /// Default Top/Bottom N for the ranking panel.
    pub top_n: usize,
    /// Directory the filtered-view CSV export is written to.
    pub export_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    /// Federation site root, e.g. "https://kovo.co.kr".
    pub base_url: String,
    /// Path of the player-stats page, joined onto `base_url` with the
    /// category appended as a query parameter.
    pub stats_path: String,
    /// Directory scraped CSVs are written to, one file per category.
    pub output_dir: String,
    /// Attack-category labels to scrape, in site vocabulary.
    pub categories: Vec<String>,
    /// Pause between category fetches, in milliseconds.
    pub delay_ms: u64,
}

/// The assembled, validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub data: DataPaths,
    pub dashboard: DashboardConfig,
    pub scrape: ScrapeConfig,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/scout.toml` relative to the
/// given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy
/// defaults. Prefer `load_config()` which handles default initialization
/// automatically.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("scout.toml");
    let text = read_file(&path)?;
    let file: ScoutFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        data: file.data,
        dashboard: file.dashboard,
        scrape: file.scrape,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure `config/scout.toml` exists by copying it from `defaults/` when
/// missing. Returns the list of files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // File already exists in config/, skip it
            }
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working
/// directory. Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.men.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.men".into(),
            message: "must not be empty".into(),
        });
    }
    if config.data.women.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.women".into(),
            message: "must not be empty".into(),
        });
    }

    if config.dashboard.top_n == 0 {
        return Err(ConfigError::ValidationError {
            field: "dashboard.top_n".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.scrape.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "scrape.base_url".into(),
            message: "must not be empty".into(),
        });
    }
    if config.scrape.categories.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "scrape.categories".into(),
            message: "must list at least one category".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
