//! Ordered route table with first-match-wins resolution

use super::pattern::{PathPattern, RouteParams};
use super::ViewId;
use anyhow::{bail, Context, Result};

/// Where unmatched locations are sent
pub const DEFAULT_PATH: &str = "/dashboard";

/// One (pattern, exactness, view) binding
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    pub exact: bool,
    pub view: ViewId,
}

impl RouteEntry {
    pub fn exact(pattern: &str, view: ViewId) -> Result<Self> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            exact: true,
            view,
        })
    }

    #[cfg(test)]
    pub fn prefix(pattern: &str, view: ViewId) -> Result<Self> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            exact: false,
            view,
        })
    }
}

/// A successful resolution: which entry matched and what it bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewId,
    pub params: RouteParams,
    /// The declared pattern that matched, e.g. `/explorer/block/:id`
    pub pattern: String,
    /// Position of the matching entry in the table
    pub index: usize,
}

/// Outcome of resolving a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Mount(RouteMatch),
    /// Nothing matched; navigate to this path instead
    Redirect(String),
}

/// Ordered list of route entries plus the catch-all default
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    default_path: String,
}

impl RouteTable {
    /// Build a table. The default path must itself resolve to a view,
    /// otherwise an unmatched location would redirect forever.
    pub fn new(entries: Vec<RouteEntry>, default_path: impl Into<String>) -> Result<Self> {
        let table = Self {
            entries,
            default_path: default_path.into(),
        };

        if table.first_match(&table.default_path).is_none() {
            bail!(
                "default route {:?} does not match any declared route",
                table.default_path
            );
        }

        Ok(table)
    }

    /// The dashboard's route declarations, in priority order
    pub fn dashboard() -> Result<Self> {
        let declared = [
            ("/dashboard", ViewId::Dashboard),
            ("/neighbors", ViewId::Neighbors),
            ("/explorer/block/:id", ViewId::ExplorerBlock),
            ("/explorer/address/:id", ViewId::ExplorerAddress),
            ("/explorer/transaction/:id", ViewId::ExplorerTransaction),
            ("/explorer/output/:id", ViewId::ExplorerOutput),
            ("/explorer/conflict/:id", ViewId::ExplorerConflict),
            ("/explorer/404/:search", ViewId::Explorer404),
            ("/chat", ViewId::Chat),
            ("/conflicts", ViewId::Conflicts),
            ("/tips", ViewId::Tips),
            ("/explorer", ViewId::Explorer),
            ("/visualizer", ViewId::Visualizer),
            ("/visualizer/history", ViewId::Visualizer),
            ("/mana", ViewId::Mana),
        ];

        let entries = declared
            .iter()
            .map(|(pattern, view)| RouteEntry::exact(pattern, *view))
            .collect::<Result<Vec<_>>>()
            .context("Invalid dashboard route declaration")?;

        Self::new(entries, DEFAULT_PATH)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// Resolve a location to a view, or to a redirect when nothing matches
    pub fn resolve(&self, path: &str) -> Resolution {
        match self.first_match(path) {
            Some(found) => Resolution::Mount(found),
            None => Resolution::Redirect(self.default_path.clone()),
        }
    }

    fn first_match(&self, path: &str) -> Option<RouteMatch> {
        self.entries.iter().enumerate().find_map(|(index, entry)| {
            entry
                .pattern
                .matches(path, entry.exact)
                .map(|params| RouteMatch {
                    view: entry.view,
                    params,
                    pattern: entry.pattern.as_str().to_string(),
                    index,
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(table: &RouteTable, path: &str) -> RouteMatch {
        match table.resolve(path) {
            Resolution::Mount(found) => found,
            other => panic!("expected {} to mount, got {:?}", path, other),
        }
    }

    #[test]
    fn every_declared_path_mounts_its_view() {
        let table = RouteTable::dashboard().unwrap();
        let cases = [
            ("/dashboard", ViewId::Dashboard),
            ("/neighbors", ViewId::Neighbors),
            ("/explorer", ViewId::Explorer),
            ("/explorer/block/b1", ViewId::ExplorerBlock),
            ("/explorer/address/a1", ViewId::ExplorerAddress),
            ("/explorer/transaction/t1", ViewId::ExplorerTransaction),
            ("/explorer/output/o1", ViewId::ExplorerOutput),
            ("/explorer/conflict/c1", ViewId::ExplorerConflict),
            ("/explorer/404/q1", ViewId::Explorer404),
            ("/visualizer", ViewId::Visualizer),
            ("/visualizer/history", ViewId::Visualizer),
            ("/mana", ViewId::Mana),
            ("/conflicts", ViewId::Conflicts),
            ("/tips", ViewId::Tips),
            ("/chat", ViewId::Chat),
        ];

        for (path, view) in cases {
            assert_eq!(mounted(&table, path).view, view, "path {}", path);
        }
    }

    #[test]
    fn unknown_paths_redirect_to_dashboard() {
        let table = RouteTable::dashboard().unwrap();
        for path in [
            "/unknown",
            "/",
            "",
            "dashboard",
            "explorer/block/x",
            "/explorer/block",
            "/explorer/nope/x",
            "/mana/extra",
        ] {
            assert_eq!(
                table.resolve(path),
                Resolution::Redirect("/dashboard".to_string()),
                "path {:?}",
                path
            );
        }
    }

    #[test]
    fn specific_explorer_routes_win_over_general_explorer() {
        let table = RouteTable::dashboard().unwrap();
        let found = mounted(&table, "/explorer/block/abc123");
        assert_eq!(found.view, ViewId::ExplorerBlock);
        assert_eq!(found.params.get("id"), Some("abc123"));
        assert_eq!(found.pattern, "/explorer/block/:id");

        let general = mounted(&table, "/explorer");
        assert_eq!(general.view, ViewId::Explorer);
        assert!(general.params.is_empty());
    }

    #[test]
    fn first_match_wins_over_later_entries() {
        // A prefix entry declared first shadows a more specific one below it
        let table = RouteTable::new(
            vec![
                RouteEntry::prefix("/explorer", ViewId::Explorer).unwrap(),
                RouteEntry::exact("/explorer/block/:id", ViewId::ExplorerBlock).unwrap(),
                RouteEntry::exact("/dashboard", ViewId::Dashboard).unwrap(),
            ],
            "/dashboard",
        )
        .unwrap();

        let found = mounted(&table, "/explorer/block/abc");
        assert_eq!(found.view, ViewId::Explorer);
        assert_eq!(found.index, 0);
    }

    #[test]
    fn visualizer_history_reports_its_own_entry() {
        let table = RouteTable::dashboard().unwrap();
        let found = mounted(&table, "/visualizer/history");
        assert_eq!(found.view, ViewId::Visualizer);
        assert_eq!(found.pattern, "/visualizer/history");
        assert_eq!(found.index, 13);
    }

    #[test]
    fn default_path_must_be_routable() {
        let result = RouteTable::new(
            vec![RouteEntry::exact("/tips", ViewId::Tips).unwrap()],
            "/dashboard",
        );
        assert!(result.is_err());
    }
}
