// Components module - shell chrome
//
// Rendered around whichever view is mounted:
// - Nav bar: brand, links, search box, connection badge
// - Status bar: location, history, uptime, key hints
// - Diagnostics: development-only state overlay
// - Toast: transient notifications

pub mod diagnostics;
pub mod nav_bar;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the navigation bar (convenience wrapper)
pub fn render_nav_bar(f: &mut Frame, area: Rect, app: &App) {
    nav_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the diagnostics overlay (convenience wrapper)
pub fn render_diagnostics(f: &mut Frame, area: Rect, app: &App) {
    diagnostics::render(f, area, app);
}
