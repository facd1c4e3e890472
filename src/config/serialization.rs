//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{Config, RunMode};

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        // Left commented at the build default so each build picks its own
        let mode = if self.mode == RunMode::default() {
            format!("# mode = \"{}\"", self.mode.as_str())
        } else {
            format!("mode = \"{}\"", self.mode.as_str())
        };

        format!(
            r#"# tangle-dash configuration

# Websocket feed of the node; drives the "WS not connected!" badge
ws_url = {ws_url}

# Node dashboard API, used by the search box
api_url = {api_url}

# Label at the left of the navigation bar
brand = {brand}

# Location opened at startup (unknown paths fall back to /dashboard)
initial_route = {route}

# development attaches the diagnostics overlay, production never does.
# Unset: debug builds run as development, release builds as production.
{mode}

# Theme: light, dark
theme = {theme}

# Seconds between websocket reconnect attempts (0 = never reconnect)
reconnect_interval_secs = {reconnect}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to the overlay buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            ws_url = quoted(&self.ws_url),
            api_url = quoted(&self.api_url),
            brand = quoted(&self.brand),
            route = quoted(&self.initial_route),
            theme = quoted(&self.theme),
            reconnect = self.reconnect_interval_secs,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file_rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}

/// A string as a TOML value, quotes and backslashes escaped
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
