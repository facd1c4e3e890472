// Startup module - displays banner and component status
//
// Printed to stdout before the TUI takes over the screen (or in headless
// mode), and echoed into the log buffer so the diagnostics overlay shows it.

use crate::config::{Config, RunMode, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Component status for display
pub struct ComponentStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner
pub fn print_startup(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}{} Dashboard{RESET} {DIM}v{VERSION}{RESET}", config.brand);
    println!("  {DIM}Terminal shell for a Tangle ledger node{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    for component in &component_status(config) {
        print_component_status(component);
    }
    println!();

    println!("  {MAGENTA}▸{RESET} Node feed {BOLD}{}{RESET}", config.ws_url);
    println!("  {MAGENTA}▸{RESET} Node API  {BOLD}{}{RESET}", config.api_url);
    if config.mode == RunMode::Development {
        println!("  {YELLOW}▸{RESET} {YELLOW}Development mode{RESET} {DIM}(diagnostics overlay, F12){RESET}");
    }
    println!();
}

fn component_status(config: &Config) -> Vec<ComponentStatus> {
    vec![
        ComponentStatus {
            name: "router",
            enabled: true,
            description: "First-match route table",
        },
        ComponentStatus {
            name: "feed",
            enabled: true,
            description: "Node websocket",
        },
        ComponentStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        ComponentStatus {
            name: "diagnostics",
            enabled: config.mode.diagnostics_enabled() && config.enable_tui,
            description: "Development overlay",
        },
        ComponentStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: "JSON log files",
        },
    ]
}

fn print_component_status(component: &ComponentStatus) {
    use colors::*;

    let (icon, style) = if component.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        component.name, component.description
    );
}

/// Echo the startup status into the log buffer
pub fn log_startup(config: &Config) {
    tracing::info!("{} Dashboard v{}", config.brand, VERSION);

    for component in &component_status(config) {
        let icon = if component.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, component.name, component.description);
    }

    tracing::info!(
        ws_url = %config.ws_url,
        mode = config.mode.as_str(),
        "Ready. Opening {}",
        config.initial_route
    );
}
