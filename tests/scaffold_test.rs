// Integration tests for the project scaffold.

/// Verify that defaults/scout.toml is valid TOML.
#[test]
fn default_scout_toml_is_valid() {
    let content = std::fs::read_to_string("defaults/scout.toml")
        .expect("defaults/scout.toml should exist");
    let parsed: Result<toml::Value, _> = toml::from_str(&content);
    assert!(
        parsed.is_ok(),
        "defaults/scout.toml is not valid TOML: {:?}",
        parsed.err()
    );
}

/// Verify that config/scout.toml is valid TOML.
#[test]
fn config_scout_toml_is_valid() {
    let content =
        std::fs::read_to_string("config/scout.toml").expect("config/scout.toml should exist");
    let parsed: Result<toml::Value, _> = toml::from_str(&content);
    assert!(
        parsed.is_ok(),
        "config/scout.toml is not valid TOML: {:?}",
        parsed.err()
    );
}

/// The shipped default config must pass the crate's own validation.
#[test]
fn default_config_loads_and_validates() {
    let cwd = std::env::current_dir().unwrap();
    spike_scout::config::ensure_config_files(&cwd).expect("defaults should copy");
    let config = spike_scout::config::load_config().expect("default config should validate");
    assert!(config.dashboard.top_n > 0);
    assert!(!config.scrape.categories.is_empty());
}
