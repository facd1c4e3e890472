// TUI application state
//
// Wraps the root shell with everything the terminal front end needs:
// input mode and buffer, theme, the mounted view object, toasts and the
// diagnostics toggle.

use super::components::Toast;
use super::theme::Theme;
use super::views::{self, MountedView};
use crate::config::{Config, RunMode};
use crate::logging::LogRing;
use crate::router::RouteMatch;
use crate::search;
use crate::shell::{RootShell, NAV_LINKS};
use std::time::Instant;

/// What keystrokes currently feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the nav bar's search box
    Search,
    /// Typing a location into the go-to prompt
    GoTo,
}

/// Result of submitting the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Nothing,
    Navigated,
    /// A search the caller should run in the background
    Search(String),
}

pub struct App {
    pub shell: RootShell,
    pub brand: String,
    pub mode: RunMode,
    pub theme: Theme,
    pub input_mode: InputMode,
    pub input: String,
    pub show_diagnostics: bool,
    pub toast: Option<Toast>,
    pub log_ring: LogRing,
    pub should_quit: bool,
    pub start_time: Instant,
    /// Frames drawn so far
    pub renders: u64,
    /// Searches in flight
    pub searches_pending: usize,
    view: Option<(RouteMatch, Box<dyn MountedView>)>,
}

impl App {
    pub fn new(shell: RootShell, config: &Config, log_ring: LogRing) -> Self {
        let mut app = Self {
            shell,
            brand: config.brand.clone(),
            mode: config.mode,
            theme: Theme::named(&config.theme),
            input_mode: InputMode::Normal,
            input: String::new(),
            show_diagnostics: config.mode.diagnostics_enabled(),
            toast: None,
            log_ring,
            should_quit: false,
            start_time: Instant::now(),
            renders: 0,
            searches_pending: 0,
            view: None,
        };
        app.shell.mount();
        app.sync_view();
        app
    }

    /// The view currently mounted in the content area
    pub fn view(&self) -> Option<&dyn MountedView> {
        self.view.as_ref().map(|(_, view)| view.as_ref())
    }

    /// Rebuild the view object when the shell mounted something new
    fn sync_view(&mut self) {
        let Some(found) = self.shell.mounted() else {
            self.view = None;
            return;
        };
        if self.view.as_ref().is_some_and(|(current, _)| current == found) {
            return;
        }
        let view = views::mount(found);
        self.view = Some((found.clone(), view));
    }

    pub fn navigate(&mut self, path: &str) {
        self.shell.navigate(path);
        self.sync_view();
    }

    pub fn back(&mut self) {
        if self.shell.back() {
            self.sync_view();
        }
    }

    pub fn forward(&mut self) {
        if self.shell.forward() {
            self.sync_view();
        }
    }

    /// Follow the nav link at `index` (zero-based)
    pub fn activate_link(&mut self, index: usize) {
        if let Some(link) = NAV_LINKS.get(index) {
            self.navigate(link.target_path);
        }
    }

    /// Index of the nav link matching the current location
    pub fn active_link(&self) -> Option<usize> {
        let location = self.shell.location();
        NAV_LINKS.iter().position(|link| link.is_active(location))
    }

    pub fn next_link(&mut self) {
        let next = match self.active_link() {
            Some(i) => (i + 1) % NAV_LINKS.len(),
            None => 0,
        };
        self.activate_link(next);
    }

    pub fn prev_link(&mut self) {
        let prev = match self.active_link() {
            Some(i) => (i + NAV_LINKS.len() - 1) % NAV_LINKS.len(),
            None => NAV_LINKS.len() - 1,
        };
        self.activate_link(prev);
    }

    pub fn begin_input(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.input.clear();
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the input line in the current mode
    pub fn submit_input(&mut self) -> Submitted {
        let mode = self.input_mode;
        let text = std::mem::take(&mut self.input);
        self.input_mode = InputMode::Normal;

        match mode {
            InputMode::Normal => Submitted::Nothing,
            InputMode::GoTo => {
                let text = text.trim();
                if text.is_empty() {
                    return Submitted::Nothing;
                }
                let path = if text.starts_with('/') {
                    text.to_string()
                } else {
                    format!("/{}", text)
                };
                self.navigate(&path);
                Submitted::Navigated
            }
            InputMode::Search => {
                if !search::is_submittable(&text) {
                    return Submitted::Nothing;
                }
                self.searches_pending += 1;
                Submitted::Search(text.trim().to_string())
            }
        }
    }

    /// A background search finished
    pub fn search_finished(&mut self, result: anyhow::Result<String>) {
        self.searches_pending = self.searches_pending.saturating_sub(1);
        match result {
            Ok(path) => self.navigate(&path),
            Err(e) => {
                tracing::warn!("Search failed: {:#}", e);
                self.toast = Some(Toast::error("Search failed - node API unreachable"));
            }
        }
    }

    /// Diagnostics can only be toggled where they are allowed at all
    pub fn toggle_diagnostics(&mut self) {
        if self.mode.diagnostics_enabled() {
            self.show_diagnostics = !self.show_diagnostics;
        }
    }

    pub fn diagnostics_visible(&self) -> bool {
        self.mode.diagnostics_enabled() && self.show_diagnostics
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::connection::testing::ManualProvider;
    use crate::router::{RouteTable, ViewId};
    use std::sync::Arc;

    pub(crate) fn app_with(mode: RunMode, connected: bool) -> (App, Arc<ManualProvider>) {
        let provider = Arc::new(ManualProvider::new(connected));
        let shell = RootShell::new(RouteTable::dashboard().unwrap(), provider.clone(), "/dashboard");
        let config = Config {
            mode,
            ..Config::default()
        };
        (App::new(shell, &config, LogRing::new()), provider)
    }

    fn current_view(app: &App) -> ViewId {
        app.shell.mounted().unwrap().view
    }

    #[test]
    fn new_app_mounts_and_connects() {
        let (app, provider) = app_with(RunMode::Production, false);
        assert_eq!(provider.connect_calls(), 1);
        assert!(app.view().is_some());
        assert_eq!(current_view(&app), ViewId::Dashboard);
    }

    #[test]
    fn links_cycle_in_display_order() {
        let (mut app, _) = app_with(RunMode::Production, true);
        app.next_link();
        assert_eq!(app.shell.location(), "/neighbors");
        app.prev_link();
        app.prev_link();
        assert_eq!(app.shell.location(), "/chat");
        app.activate_link(2);
        assert_eq!(current_view(&app), ViewId::Explorer);
        app.activate_link(99);
        assert_eq!(app.shell.location(), "/explorer");
    }

    #[test]
    fn goto_prompt_accepts_bare_paths() {
        let (mut app, _) = app_with(RunMode::Production, true);
        app.begin_input(InputMode::GoTo);
        for c in "explorer/output/o-1".chars() {
            app.input_char(c);
        }
        assert_eq!(app.submit_input(), Submitted::Navigated);
        assert_eq!(current_view(&app), ViewId::ExplorerOutput);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn goto_unknown_path_lands_on_dashboard() {
        let (mut app, _) = app_with(RunMode::Production, true);
        app.navigate("/tips");
        app.begin_input(InputMode::GoTo);
        app.input = "/nope".to_string();
        app.submit_input();
        assert_eq!(app.shell.location(), "/dashboard");
        assert_eq!(current_view(&app), ViewId::Dashboard);
    }

    #[test]
    fn search_submission_and_result() {
        let (mut app, _) = app_with(RunMode::Production, true);
        app.begin_input(InputMode::Search);
        app.input = "  ".to_string();
        assert_eq!(app.submit_input(), Submitted::Nothing);

        app.begin_input(InputMode::Search);
        app.input = " abc ".to_string();
        assert_eq!(app.submit_input(), Submitted::Search("abc".to_string()));
        assert_eq!(app.searches_pending, 1);

        app.search_finished(Ok("/explorer/404/abc".to_string()));
        assert_eq!(app.searches_pending, 0);
        assert_eq!(current_view(&app), ViewId::Explorer404);
    }

    #[test]
    fn failed_search_shows_toast_and_stays() {
        let (mut app, _) = app_with(RunMode::Production, true);
        app.search_finished(Err(anyhow::anyhow!("connection refused")));
        assert!(app.toast.is_some());
        assert_eq!(app.shell.location(), "/dashboard");
    }

    #[test]
    fn diagnostics_only_in_development() {
        let (mut prod, _) = app_with(RunMode::Production, true);
        assert!(!prod.diagnostics_visible());
        prod.toggle_diagnostics();
        assert!(!prod.diagnostics_visible());

        let (mut dev, _) = app_with(RunMode::Development, true);
        assert!(dev.diagnostics_visible());
        dev.toggle_diagnostics();
        assert!(!dev.diagnostics_visible());
    }

    #[test]
    fn back_and_forward_follow_history() {
        let (mut app, _) = app_with(RunMode::Production, true);
        app.navigate("/mana");
        app.back();
        assert_eq!(current_view(&app), ViewId::Dashboard);
        app.forward();
        assert_eq!(current_view(&app), ViewId::Mana);
    }
}
