// Root shell - navigation and connection lifecycle
//
// The shell owns the location history and decides which single view is
// mounted. It also owns exactly one side effect: asking the connection
// provider to connect the first time it mounts. Everything else about the
// connection is read-only from here.

use crate::connection::ConnectionProvider;
use crate::router::{normalize, History, Resolution, RouteMatch, RouteTable};
use std::sync::Arc;
use tokio::sync::watch;

/// A labelled link in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkEntry {
    pub label: &'static str,
    pub target_path: &'static str,
}

impl NavLinkEntry {
    /// A link is active on its own path and on anything beneath it
    pub fn is_active(&self, path: &str) -> bool {
        let path = normalize(path);
        match path.strip_prefix(self.target_path) {
            Some("") => true,
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }
}

/// Navigation bar links in display order
pub const NAV_LINKS: [NavLinkEntry; 8] = [
    NavLinkEntry { label: "Dashboard", target_path: "/dashboard" },
    NavLinkEntry { label: "Neighbors", target_path: "/neighbors" },
    NavLinkEntry { label: "Explorer", target_path: "/explorer" },
    NavLinkEntry { label: "Visualizer", target_path: "/visualizer" },
    NavLinkEntry { label: "Mana", target_path: "/mana" },
    NavLinkEntry { label: "Conflicts", target_path: "/conflicts" },
    NavLinkEntry { label: "Tips", target_path: "/tips" },
    NavLinkEntry { label: "Chat", target_path: "/chat" },
];

pub struct RootShell {
    table: RouteTable,
    provider: Arc<dyn ConnectionProvider>,
    connection: watch::Receiver<bool>,
    history: History,
    mounted: Option<RouteMatch>,
    mount_log: Vec<RouteMatch>,
    connect_issued: bool,
}

impl RootShell {
    pub fn new(
        table: RouteTable,
        provider: Arc<dyn ConnectionProvider>,
        initial_path: impl Into<String>,
    ) -> Self {
        let connection = provider.subscribe();
        Self {
            table,
            provider,
            connection,
            history: History::new(initial_path),
            mounted: None,
            mount_log: Vec::new(),
            connect_issued: false,
        }
    }

    /// First mount: start the connection, then mount the initial location.
    /// Later calls do nothing.
    pub fn mount(&mut self) {
        if self.connect_issued {
            return;
        }
        self.connect_issued = true;
        self.provider.connect();
        self.settle();
    }

    /// Navigate to a location and mount whatever it resolves to
    pub fn navigate(&mut self, path: &str) {
        if !self.connect_issued {
            self.mount();
        }
        if !self.history.push(path) {
            tracing::trace!("Already at {}", path);
            return;
        }
        self.settle();
    }

    /// Step back in history. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.history.back().is_none() {
            return false;
        }
        self.settle();
        true
    }

    /// Step forward in history. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.history.forward().is_none() {
            return false;
        }
        self.settle();
        true
    }

    pub fn location(&self) -> &str {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mounted(&self) -> Option<&RouteMatch> {
        self.mounted.as_ref()
    }

    /// Views mounted so far, oldest first
    pub fn mount_log(&self) -> &[RouteMatch] {
        &self.mount_log
    }

    pub fn connect_issued(&self) -> bool {
        self.connect_issued
    }

    pub fn connected(&self) -> bool {
        *self.connection.borrow()
    }

    pub fn provider(&self) -> &Arc<dyn ConnectionProvider> {
        &self.provider
    }

    /// Wait for the connection flag to change and return the new value.
    /// Never resolves once the provider has gone away.
    pub async fn connection_changed(&mut self) -> bool {
        if self.connection.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        *self.connection.borrow_and_update()
    }

    /// Resolve the current location, following a redirect if needed
    fn settle(&mut self) {
        let found = match self.table.resolve(self.history.current()) {
            Resolution::Mount(found) => Some(found),
            Resolution::Redirect(target) => {
                tracing::info!(
                    "No route for {}, redirecting to {}",
                    self.history.current(),
                    target
                );
                self.history.replace(target);
                match self.table.resolve(self.history.current()) {
                    Resolution::Mount(found) => Some(found),
                    Resolution::Redirect(again) => {
                        tracing::error!("Default route {} does not resolve", again);
                        None
                    }
                }
            }
        };

        let Some(found) = found else {
            self.mounted = None;
            return;
        };

        if self.mounted.as_ref() == Some(&found) {
            return;
        }

        tracing::debug!(
            view = found.view.name(),
            pattern = %found.pattern,
            "Mounting view for {}",
            self.history.current()
        );
        self.mount_log.push(found.clone());
        self.mounted = Some(found);
    }
}
