//! Configuration tests

use super::logs::LogRotation;
use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).expect("test TOML should parse")
}

// ─────────────────────────────────────────────────────────────────────────────
// Template
// ─────────────────────────────────────────────────────────────────────────────

/// The generated template must parse back into the same values
#[test]
fn test_default_template_reloads_as_default() {
    let defaults = Config::default();
    let reloaded = Config::resolve(parse(&defaults.to_toml()), no_env);

    assert_eq!(reloaded.ws_url, defaults.ws_url);
    assert_eq!(reloaded.api_url, defaults.api_url);
    assert_eq!(reloaded.brand, defaults.brand);
    assert_eq!(reloaded.initial_route, defaults.initial_route);
    assert_eq!(reloaded.mode, defaults.mode);
    assert_eq!(reloaded.theme, defaults.theme);
    assert_eq!(reloaded.reconnect_interval_secs, defaults.reconnect_interval_secs);
    assert_eq!(reloaded.logging.file_rotation, defaults.logging.file_rotation);
}

#[test]
fn test_template_mentions_every_top_level_key() {
    let toml_str = Config::default().to_toml();
    for key in [
        "ws_url",
        "api_url",
        "brand",
        "initial_route",
        "mode",
        "theme",
        "reconnect_interval_secs",
        "[logging]",
        "file_rotation",
    ] {
        assert!(toml_str.contains(key), "template is missing {}", key);
    }
}

#[test]
fn test_template_pins_only_a_non_default_mode() {
    let defaults = Config::default();
    assert!(defaults.to_toml().contains("# mode = "));

    let other = match defaults.mode {
        RunMode::Development => RunMode::Production,
        RunMode::Production => RunMode::Development,
    };
    let pinned = Config {
        mode: other,
        ..Config::default()
    };
    let reloaded = Config::resolve(parse(&pinned.to_toml()), no_env);
    assert_eq!(reloaded.mode, other);
}

#[test]
fn test_template_escapes_string_values() {
    let mut config = Config {
        brand: r#"Node "7""#.to_string(),
        ws_url: r"ws://host/a\b".to_string(),
        ..Config::default()
    };
    config.logging.file_dir = std::path::PathBuf::from(r"C:\logs\dash");

    let reloaded = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(reloaded.brand, r#"Node "7""#);
    assert_eq!(reloaded.ws_url, r"ws://host/a\b");
    assert_eq!(reloaded.logging.file_dir, std::path::PathBuf::from(r"C:\logs\dash"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(config.ws_url, "ws://127.0.0.1:8081/ws");
    assert_eq!(config.initial_route, "/dashboard");
    assert_eq!(config.reconnect_interval_secs, 5);
    assert!(config.enable_tui);
}

#[test]
fn test_file_values_override_defaults() {
    let file = parse(
        r#"
ws_url = "ws://node:9000/ws"
initial_route = "/tips"
mode = "production"
reconnect_interval_secs = 0

[logging]
level = "debug"
file_rotation = "hourly"
"#,
    );
    let config = Config::resolve(file, no_env);

    assert_eq!(config.ws_url, "ws://node:9000/ws");
    assert_eq!(config.initial_route, "/tips");
    assert_eq!(config.mode, RunMode::Production);
    assert!(config.reconnect_interval().is_zero());
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
ws_url = "ws://from-file/ws"
mode = "production"
"#,
    );
    let env: HashMap<&str, &str> = HashMap::from([
        ("TANGLE_DASH_WS_URL", "ws://from-env/ws"),
        ("TANGLE_DASH_MODE", "dev"),
        ("TANGLE_DASH_NO_TUI", "1"),
    ]);
    let config = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.ws_url, "ws://from-env/ws");
    assert_eq!(config.mode, RunMode::Development);
    assert!(!config.enable_tui);
}

#[test]
fn test_env_sets_brand_and_reconnect_interval() {
    let file = parse(
        r#"
brand = "From File"
reconnect_interval_secs = 30
"#,
    );
    let env: HashMap<&str, &str> = HashMap::from([
        ("TANGLE_DASH_BRAND", "Devnet"),
        ("TANGLE_DASH_RECONNECT_SECS", "2"),
    ]);
    let config = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));
    assert_eq!(config.brand, "Devnet");
    assert_eq!(config.reconnect_interval_secs, 2);

    let garbled = Config::resolve(parse("reconnect_interval_secs = 30"), |key| {
        (key == "TANGLE_DASH_RECONNECT_SECS").then(|| "soon".to_string())
    });
    assert_eq!(garbled.reconnect_interval_secs, 30);
}

#[test]
fn test_stored_config_ignores_the_environment() {
    std::env::set_var("TANGLE_DASH_THEME", "dark");
    std::env::set_var("TANGLE_DASH_BRAND", "Leaked");
    let config = Config::stored(parse(r#"ws_url = "ws://kept/ws""#));
    std::env::remove_var("TANGLE_DASH_THEME");
    std::env::remove_var("TANGLE_DASH_BRAND");

    assert_eq!(config.ws_url, "ws://kept/ws");
    assert_eq!(config.theme, Config::default().theme);
    assert_eq!(config.brand, Config::default().brand);
    assert!(!config.to_toml().contains("Leaked"));
}

#[test]
fn test_unknown_mode_falls_back_to_build_default() {
    let config = Config::resolve(parse(r#"mode = "staging""#), no_env);
    assert_eq!(config.mode, RunMode::default());
}

#[test]
fn test_unknown_rotation_is_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}

#[test]
fn test_mode_parsing() {
    assert_eq!(RunMode::parse(" Prod "), Some(RunMode::Production));
    assert_eq!(RunMode::parse("development"), Some(RunMode::Development));
    assert_eq!(RunMode::parse(""), None);
    assert!(RunMode::Development.diagnostics_enabled());
    assert!(!RunMode::Production.diagnostics_enabled());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let file = parse(
        r#"
brand = "Node 7"
unknown_key = 3
"#,
    );
    assert_eq!(Config::resolve(file, no_env).brand, "Node 7");
}
