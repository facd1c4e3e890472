//! Client-side routing for the dashboard shell
//!
//! The router turns a location path into exactly one view to mount, or
//! into a redirect to the default location. Resolution walks an ordered
//! table top-down and the first matching entry wins, so declaration order
//! is what keeps `/explorer` from shadowing `/explorer/block/:id`.

mod history;
mod pattern;
mod table;

pub use history::History;
pub use pattern::normalize;
pub use table::{Resolution, RouteMatch, RouteTable};

/// Every view the shell can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Dashboard,
    Neighbors,
    ExplorerBlock,
    ExplorerAddress,
    ExplorerTransaction,
    ExplorerOutput,
    ExplorerConflict,
    Explorer404,
    Chat,
    Conflicts,
    Tips,
    Explorer,
    Visualizer,
    Mana,
}

impl ViewId {
    /// Display name used in titles and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Neighbors => "Neighbors",
            ViewId::ExplorerBlock => "Block",
            ViewId::ExplorerAddress => "Address",
            ViewId::ExplorerTransaction => "Transaction",
            ViewId::ExplorerOutput => "Output",
            ViewId::ExplorerConflict => "Conflict",
            ViewId::Explorer404 => "Not Found",
            ViewId::Chat => "Chat",
            ViewId::Conflicts => "Conflicts",
            ViewId::Tips => "Tips",
            ViewId::Explorer => "Explorer",
            ViewId::Visualizer => "Visualizer",
            ViewId::Mana => "Mana",
        }
    }

    /// Whether the view renders a single explorer record
    pub fn is_record(&self) -> bool {
        matches!(
            self,
            ViewId::ExplorerBlock
                | ViewId::ExplorerAddress
                | ViewId::ExplorerTransaction
                | ViewId::ExplorerOutput
                | ViewId::ExplorerConflict
        )
    }
}
