// CLI module - command-line argument parsing and handlers
//
// Top-level flags override the loaded configuration for one run.
// The config subcommand manages the config file:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Merge new defaults into existing config
// - config --path: Print the config file location

use crate::config::{Config, RunMode, VERSION};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Terminal dashboard shell for a Tangle ledger node
#[derive(Parser, Debug)]
#[command(name = "tangle-dash")]
#[command(version = VERSION)]
#[command(about = "Terminal dashboard for a Tangle ledger node", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Location to open at startup (e.g. /explorer/block/<id>)
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    /// Websocket feed URL of the node
    #[arg(long, value_name = "URL")]
    pub ws_url: Option<String>,

    /// Base URL of the node's dashboard API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Run in development mode (diagnostics overlay)
    #[arg(long, conflicts_with = "production")]
    pub dev: bool,

    /// Run in production mode
    #[arg(long)]
    pub production: bool,

    /// No TUI: log route and connection changes to stdout
    #[arg(long)]
    pub headless: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Handle a subcommand. Returns true if one was handled (exit after).
    pub fn handle_command(&self) -> bool {
        match self.command {
            Some(Commands::Config {
                show,
                reset,
                edit,
                update,
                path,
            }) => {
                if path {
                    handle_config_path();
                } else if show {
                    handle_config_show();
                } else if reset {
                    handle_config_reset();
                } else if edit {
                    handle_config_edit();
                } else if update {
                    handle_config_update();
                } else {
                    println!("Usage: tangle-dash config [--show|--reset|--edit|--update|--path]");
                    println!();
                    println!("Options:");
                    println!("  --show    Display effective configuration");
                    println!("  --reset   Reset config file to defaults");
                    println!("  --edit    Open config file in $EDITOR");
                    println!("  --update  Update config with new defaults (preserves user values)");
                    println!("  --path    Show config file path");
                }
                true
            }
            None => false,
        }
    }

    /// Layer the flags over a loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(route) = &self.route {
            config.initial_route = route.clone();
        }
        if let Some(url) = &self.ws_url {
            config.ws_url = url.clone();
        }
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if self.dev {
            config.mode = RunMode::Development;
        } else if self.production {
            config.mode = RunMode::Production;
        }
        if self.headless {
            config.enable_tui = false;
        }
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("ws_url = {:?}", config.ws_url);
    println!("api_url = {:?}", config.api_url);
    println!("brand = {:?}", config.brand);
    println!("initial_route = {:?}", config.initial_route);
    println!("mode = {:?}", config.mode.as_str());
    println!("theme = {:?}", config.theme);
    println!("reconnect_interval_secs = {}", config.reconnect_interval_secs);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = editor(|key| std::env::var(key).ok());
    println!("Opening {} with {}", path.display(), editor);

    if let Err(e) = open_in_editor(&editor, &path) {
        eprintln!("Error: {:#}", e);
        eprintln!("Set $EDITOR to the editor you want to use");
        std::process::exit(1);
    }
}

/// `$EDITOR`, then `$VISUAL`, then the platform's stock editor
fn editor(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(lookup)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| if cfg!(windows) { "notepad" } else { "nano" }.to_string())
}

fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    let status = Command::new(editor)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;
    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Re-render the template with the file's values; env overrides stay out
    let updated = Config::from_file().to_toml();

    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    if let Err(e) = std::fs::write(&path, updated) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tangle-dash").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&[
            "--route",
            "/explorer/block/abc",
            "--ws-url",
            "ws://node:9000/ws",
            "--production",
            "--headless",
        ]);
        let mut config = Config {
            mode: RunMode::Development,
            ..Config::default()
        };
        cli.apply(&mut config);

        assert_eq!(config.initial_route, "/explorer/block/abc");
        assert_eq!(config.ws_url, "ws://node:9000/ws");
        assert_eq!(config.api_url, Config::default().api_url);
        assert_eq!(config.mode, RunMode::Production);
        assert!(!config.enable_tui);
        assert!(!cli.handle_command());
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let mut config = Config::default();
        let before = config.mode;
        parse(&[]).apply(&mut config);
        assert_eq!(config.mode, before);
        assert!(config.enable_tui);
        assert_eq!(config.initial_route, "/dashboard");
    }

    #[test]
    fn dev_and_production_conflict() {
        let result = Cli::try_parse_from(["tangle-dash", "--dev", "--production"]);
        assert!(result.is_err());
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn editor_prefers_editor_then_visual() {
        assert_eq!(editor(env(&[("EDITOR", "vim"), ("VISUAL", "code")])), "vim");
        assert_eq!(editor(env(&[("EDITOR", " "), ("VISUAL", "code")])), "code");
        let fallback = if cfg!(windows) { "notepad" } else { "nano" };
        assert_eq!(editor(env(&[])), fallback);
    }

    #[test]
    fn failing_editor_is_an_error() {
        let path = std::env::temp_dir().join("tangle-dash-missing.toml");
        assert!(open_in_editor("tangle-dash-no-such-editor", &path).is_err());
    }

    #[test]
    fn config_subcommand_parses() {
        let cli = parse(&["config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, .. })
        ));
    }
}
