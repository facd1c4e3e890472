// Tangle Dash - terminal dashboard shell for a Tangle ledger node
//
// The shell owns the frame around every dashboard screen: a navigation bar
// with a live connection badge, a content slot holding exactly one mounted
// view, and a development-only diagnostics overlay.
//
// Architecture:
// - Router: first-match route table and in-memory history
// - Connection: websocket node feed exposed as a watched boolean
// - Shell: mounts views, starts the connection once, redirects unknown paths
// - Search: resolves identifiers against the node API to explorer routes
// - TUI (ratatui): renders the chrome and handles input

mod cli;
mod config;
mod connection;
mod logging;
mod router;
mod search;
mod shell;
mod startup;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use connection::{ConnectionProvider, NodeStore, NodeStoreConfig};
use logging::{CaptureLayer, LogRing};
use router::RouteTable;
use search::NodeSearch;
use shell::RootShell;
use std::sync::Arc;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Config subcommands exit before anything else starts
    if cli.handle_command() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    let log_ring = LogRing::new();
    // The guard must live until exit so file logs flush
    let _file_guard = init_tracing(&config, &log_ring);

    startup::print_startup(&config);
    startup::log_startup(&config);

    let store = Arc::new(NodeStore::new(NodeStoreConfig {
        ws_url: config.ws_url.clone(),
        reconnect_interval: config.reconnect_interval(),
    }));
    let provider: Arc<dyn ConnectionProvider> = store.clone();

    let table = RouteTable::dashboard().context("Invalid route table")?;
    tracing::debug!(
        routes = table.entries().len(),
        fallback = table.default_path(),
        "Route table ready"
    );
    let shell = RootShell::new(table, provider, config.initial_route.clone());

    let result = if config.enable_tui {
        let search = NodeSearch::new(config.api_url.clone())?;
        let app = tui::app::App::new(shell, &config, log_ring);
        tui::run_tui(app, search).await
    } else {
        run_headless(shell).await
    };

    store.shutdown();
    tracing::info!("Shutting down");
    result
}

/// No TUI: mount, then log connection changes until Ctrl+C
async fn run_headless(mut shell: RootShell) -> Result<()> {
    shell.mount();
    if !shell.provider().is_connected() {
        tracing::warn!("WS not connected!");
    }
    if let Some(found) = shell.mounted() {
        tracing::info!(
            location = shell.location(),
            route = %found.pattern,
            "Mounted {}",
            found.view.name()
        );
    }

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            connected = shell.connection_changed() => {
                if connected {
                    tracing::info!("Node feed connected");
                } else {
                    tracing::warn!("WS not connected!");
                }
            }
            signal = &mut ctrl_c => {
                signal.context("Failed to listen for Ctrl+C")?;
                break;
            }
        }
    }

    Ok(())
}

/// Initialize tracing
///
/// In TUI mode logs go to the in-memory ring (read by the diagnostics
/// overlay) so they never garble the display. Headless mode logs to stdout.
/// JSON log files are written in addition when enabled.
///
/// Precedence: RUST_LOG > TANGLE_DASH_LOG_LEVEL > config file > "info"
fn init_tracing(config: &Config, log_ring: &LogRing) -> Option<WorkerGuard> {
    let default_filter = format!("tangle_dash={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let capture = config
        .enable_tui
        .then(|| CaptureLayer::new(log_ring.clone()));
    let stdout = (!config.enable_tui).then(tracing_subscriber::fmt::layer);

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(capture)
        .with(stdout)
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking JSON log writer, if file logging is enabled and usable
fn file_writer(config: &Config) -> Option<(NonBlocking, WorkerGuard)> {
    match config.logging.appender() {
        Ok(appender) => appender.map(tracing_appender::non_blocking),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {:#}", e);
            None
        }
    }
}
