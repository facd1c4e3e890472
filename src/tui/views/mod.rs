// Views module - screen-level rendering
//
// Layout, top to bottom:
// - Nav bar (always)
// - Content slot: exactly one mounted view
// - Status bar (always)
// Overlays (diagnostics, toast) are drawn last, on top.

mod feature;

pub use feature::{mount, MountedView, ViewContext};

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    app.renders += 1;

    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_nav_bar(f, chunks[0], app);

    if let Some(view) = app.view() {
        let ctx = ViewContext {
            theme: &app.theme,
            connected: app.shell.connected(),
        };
        view.render(f, chunks[1], &ctx);
    }

    components::render_status(f, chunks[2], app);

    if app.diagnostics_visible() {
        components::render_diagnostics(f, chunks[1], app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunMode;
    use crate::tui::app::tests::app_with;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn overlay_is_drawn_only_in_development() {
        let (mut prod, _) = app_with(RunMode::Production, true);
        assert!(!screen(&mut prod).contains("diagnostics"));

        let (mut dev, _) = app_with(RunMode::Development, true);
        assert!(screen(&mut dev).contains("diagnostics"));
    }

    #[test]
    fn one_view_mounted_under_the_chrome() {
        let (mut app, _) = app_with(RunMode::Production, false);
        app.navigate("/explorer/transaction/XYZ");
        let text = screen(&mut app);
        assert!(text.contains("Transaction XYZ"));
        assert!(text.contains("inputs, outputs"));
        assert!(!text.contains("blocks per second"));
        assert!(text.contains("WS not connected!"));
        assert_eq!(app.renders, 1);
    }
}
