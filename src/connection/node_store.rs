// Node store - websocket connection to the node's live feed
//
// connect() spawns a single background task that:
// 1. Opens the websocket at the configured URL
// 2. Flips the connected flag on handshake success
// 3. Counts incoming frames until the socket closes or errors
// 4. Clears the flag and, if configured, retries after a delay
//
// Reconnecting is this provider's job. The shell only sees the flag.

use super::ConnectionProvider;
use futures::StreamExt;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message};

/// Settings for the websocket feed
#[derive(Debug, Clone)]
pub struct NodeStoreConfig {
    /// Websocket endpoint, e.g. ws://127.0.0.1:8081/ws
    pub ws_url: String,
    /// Delay between reconnect attempts (zero disables reconnecting)
    pub reconnect_interval: Duration,
}

/// Envelope of every message the node pushes over the feed
#[derive(Debug, Deserialize)]
struct FeedFrame {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    data: serde_json::Value,
}

/// Websocket-backed connection provider
pub struct NodeStore {
    config: NodeStoreConfig,
    connected: Arc<watch::Sender<bool>>,
    frames: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl NodeStore {
    pub fn new(config: NodeStoreConfig) -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            config,
            connected: Arc::new(tx),
            frames: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    /// Stop the feed task and mark the connection down
    pub fn shutdown(&self) {
        if let Ok(mut task) = self.task.lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
        set_flag(&self.connected, false);
    }
}

impl ConnectionProvider for NodeStore {
    fn connect(&self) {
        let Ok(mut task) = self.task.lock() else {
            tracing::error!("Node store task lock poisoned; not connecting");
            return;
        };

        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            tracing::debug!("Feed task already running, ignoring connect()");
            return;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!("Cannot start feed task outside a runtime: {}", e);
                return;
            }
        };

        tracing::info!("Connecting to node feed at {}", self.config.ws_url);
        *task = Some(runtime.spawn(run_feed(
            self.config.clone(),
            self.connected.clone(),
            self.frames.clone(),
        )));
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.connected.subscribe()
    }

    fn frames_received(&self) -> Option<u64> {
        Some(self.frames.load(Ordering::Relaxed))
    }
}

impl Drop for NodeStore {
    fn drop(&mut self) {
        if let Ok(mut task) = self.task.lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }
}

/// Only notify watchers on an actual change
fn set_flag(flag: &watch::Sender<bool>, value: bool) {
    flag.send_if_modified(|current| {
        if *current == value {
            return false;
        }
        *current = value;
        true
    });
}

async fn run_feed(config: NodeStoreConfig, connected: Arc<watch::Sender<bool>>, frames: Arc<AtomicU64>) {
    loop {
        match connect_async(config.ws_url.as_str()).await {
            Ok((mut stream, _response)) => {
                tracing::info!("Node feed connected");
                set_flag(&connected, true);

                while let Some(message) = stream.next().await {
                    match message {
                        Ok(Message::Text(text)) => {
                            frames.fetch_add(1, Ordering::Relaxed);
                            match serde_json::from_str::<FeedFrame>(&text) {
                                Ok(frame) => {
                                    tracing::trace!(kind = frame.kind, data = %frame.data, "feed frame")
                                }
                                Err(e) => tracing::trace!("Undecodable feed frame: {}", e),
                            }
                        }
                        Ok(Message::Binary(_)) => {
                            frames.fetch_add(1, Ordering::Relaxed);
                        }
                        Ok(Message::Close(reason)) => {
                            tracing::info!("Node feed closed by peer: {:?}", reason);
                            break;
                        }
                        Ok(_) => {}
                        Err(e) => {
                            tracing::warn!("Node feed error: {}", e);
                            break;
                        }
                    }
                }

                set_flag(&connected, false);
            }
            Err(e) => {
                tracing::warn!("Could not connect to node feed {}: {}", config.ws_url, e);
                set_flag(&connected, false);
            }
        }

        if config.reconnect_interval.is_zero() {
            tracing::debug!("Reconnect disabled, feed task exiting");
            break;
        }

        tracing::debug!("Reconnecting in {:?}", config.reconnect_interval);
        tokio::time::sleep(config.reconnect_interval).await;
    }
}
