//! Configuration for the dashboard shell
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by `cli`)
//! 2. Environment variables
//! 3. Config file (~/.config/tangle-dash/config.toml)
//! 4. Built-in defaults (lowest priority)

use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logs;
mod mode;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use mode::RunMode;
pub use logs::{FileLogging, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8081/ws";
const DEFAULT_API_URL: &str = "http://127.0.0.1:8081";
const DEFAULT_BRAND: &str = "GoShimmer";
const DEFAULT_ROUTE: &str = "/dashboard";
const DEFAULT_THEME: &str = "light";
const DEFAULT_RECONNECT_SECS: u64 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Websocket feed of the node (drives the connection badge)
    pub ws_url: String,

    /// Base URL of the node's dashboard API (used by search)
    pub api_url: String,

    /// Brand label shown at the left of the navigation bar
    pub brand: String,

    /// Location mounted at startup
    pub initial_route: String,

    /// Development mode attaches the diagnostics overlay
    pub mode: RunMode,

    /// Color theme: "light" or "dark"
    pub theme: String,

    /// Seconds between reconnect attempts (0 = never reconnect)
    pub reconnect_interval_secs: u64,

    /// Whether to run the TUI (false = headless, log-only)
    pub enable_tui: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ws_url: DEFAULT_WS_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            brand: DEFAULT_BRAND.to_string(),
            initial_route: DEFAULT_ROUTE.to_string(),
            mode: RunMode::default(),
            theme: DEFAULT_THEME.to_string(),
            reconnect_interval_secs: DEFAULT_RECONNECT_SECS,
            enable_tui: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub ws_url: Option<String>,
    pub api_url: Option<String>,
    pub brand: Option<String>,
    pub initial_route: Option<String>,
    pub mode: Option<String>,
    pub theme: Option<String>,
    pub reconnect_interval_secs: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/tangle-dash/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("tangle-dash").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but does not parse is fatal: the user gets
    /// a framed error and the process exits instead of silently running on
    /// defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `tangle-dash config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// File values over defaults, with no env layer; `config --update`
    /// rewrites the file from this so env overrides never leak into it
    pub fn from_file() -> Self {
        Self::stored(Self::load_file_config())
    }

    pub(crate) fn stored(file: FileConfig) -> Self {
        Self::resolve(file, |_| None)
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let ws_url = env("TANGLE_DASH_WS_URL")
            .or(file.ws_url)
            .unwrap_or_else(|| DEFAULT_WS_URL.to_string());

        let api_url = env("TANGLE_DASH_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let brand = env("TANGLE_DASH_BRAND")
            .or(file.brand)
            .unwrap_or_else(|| DEFAULT_BRAND.to_string());

        let initial_route = env("TANGLE_DASH_ROUTE")
            .or(file.initial_route)
            .unwrap_or_else(|| DEFAULT_ROUTE.to_string());

        // Unknown mode strings fall back to the build default
        let mode = env("TANGLE_DASH_MODE")
            .or(file.mode)
            .and_then(|m| RunMode::parse(&m))
            .unwrap_or_default();

        let theme = env("TANGLE_DASH_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Unparseable env seconds fall through to the file
        let reconnect_interval_secs = env("TANGLE_DASH_RECONNECT_SECS")
            .and_then(|secs| secs.trim().parse().ok())
            .or(file.reconnect_interval_secs)
            .unwrap_or(DEFAULT_RECONNECT_SECS);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("TANGLE_DASH_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let logging = LoggingConfig::resolve(file.logging, &env);

        Self {
            ws_url,
            api_url,
            brand,
            initial_route,
            mode,
            theme,
            reconnect_interval_secs,
            enable_tui,
            logging,
        }
    }

    pub fn reconnect_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.reconnect_interval_secs)
    }
}
