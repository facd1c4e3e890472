// Navigation bar component
//
// Rendered above every view:
// - Brand label
// - Nav links (active link highlighted, number keys follow them)
// - Search box
// - "WS not connected!" badge, only while the feed is down

use crate::shell::NAV_LINKS;
use crate::tui::app::{App, InputMode};
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const BADGE_TEXT: &str = " WS not connected! ";

/// The connection badge, or nothing while connected
pub fn connection_badge(connected: bool, theme: &Theme) -> Option<Span<'static>> {
    if connected {
        None
    } else {
        Some(Span::styled(BADGE_TEXT, theme.badge_style()))
    }
}

fn search_box(app: &App) -> Span<'static> {
    if app.input_mode == InputMode::Search {
        Span::styled(
            format!("[ {}▏]", app.input),
            Style::default().fg(app.theme.highlight),
        )
    } else if app.searches_pending > 0 {
        Span::styled("[ searching… ]", Style::default().fg(app.theme.muted))
    } else {
        Span::styled("[ / search ]", Style::default().fg(app.theme.muted))
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);
    let location = app.shell.location();

    // Left: brand + links
    let mut left = vec![Span::styled(format!(" {} ", app.brand), theme.brand_style())];
    for (i, link) in NAV_LINKS.iter().enumerate() {
        left.push(Span::raw(" "));
        left.push(Span::styled(
            format!(" {} ", bp.link_label(i, link.label)),
            theme.link_style(link.is_active(location)),
        ));
    }

    // Right: search box + badge
    let mut right = vec![search_box(app)];
    if let Some(badge) = connection_badge(app.shell.connected(), theme) {
        right.push(Span::raw(" "));
        right.push(badge);
    }
    let right_width: u16 = right.iter().map(|s| s.width() as u16).sum::<u16>() + 1;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(inner);

    f.render_widget(Paragraph::new(Line::from(left)), chunks[0]);
    f.render_widget(Paragraph::new(Line::from(right).right_aligned()), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunMode;
    use crate::tui::app::tests::app_with;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal.draw(|f| render(f, f.area(), app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn badge_tracks_connection_on_every_route() {
        let (mut app, provider) = app_with(RunMode::Production, false);
        let badge = BADGE_TEXT.trim();

        for path in ["/dashboard", "/explorer/block/abc", "/nowhere", "/chat"] {
            app.navigate(path);

            provider.set_connected(false);
            assert!(rendered(&app, 160).contains(badge), "badge missing at {}", path);

            provider.set_connected(true);
            assert!(!rendered(&app, 160).contains(badge), "badge shown at {}", path);
        }
    }

    #[test]
    fn shows_brand_and_links() {
        let (app, _) = app_with(RunMode::Production, true);
        let text = rendered(&app, 160);
        assert!(text.contains("GoShimmer"));
        assert!(text.contains("1 Dashboard"));
        assert!(text.contains("8 Chat"));
        assert!(text.contains("/ search"));
    }

    #[test]
    fn badge_helper() {
        let theme = Theme::light();
        assert!(connection_badge(true, &theme).is_none());
        assert_eq!(
            connection_badge(false, &theme).map(|s| s.content.to_string()),
            Some(BADGE_TEXT.to_string())
        );
    }
}
