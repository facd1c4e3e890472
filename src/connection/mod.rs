//! Live connection to the node
//!
//! The shell consumes a connection through the [`ConnectionProvider`]
//! contract only: it asks the provider to connect once and then watches
//! a boolean "connected" signal. Reconnect policy and transport details
//! belong to the provider.

mod node_store;

pub use node_store::{NodeStore, NodeStoreConfig};

use tokio::sync::watch;

/// Source of the live-connection flag
pub trait ConnectionProvider: Send + Sync {
    /// Begin establishing the connection. Callers invoke this once.
    fn connect(&self);

    /// Observe the connection flag; every change wakes the receiver
    fn subscribe(&self) -> watch::Receiver<bool>;

    /// Current value of the connection flag
    fn is_connected(&self) -> bool {
        *self.subscribe().borrow()
    }

    /// Frames received over the connection so far, if the provider counts them
    fn frames_received(&self) -> Option<u64> {
        None
    }
}
