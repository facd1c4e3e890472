// Status bar component
//
// Bottom line of the shell. Shows the current location (or the go-to
// prompt while typing one), history availability, uptime and key hints.

use crate::tui::app::{App, InputMode};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let history = app.shell.history();

    let line = if app.input_mode == InputMode::GoTo {
        Line::from(vec![
            Span::styled(" go to: ", Style::default().fg(theme.highlight)),
            Span::styled(format!("{}▏", app.input), Style::default().fg(theme.foreground)),
            Span::styled("   Enter open · Esc cancel", Style::default().fg(theme.muted)),
        ])
    } else {
        let back = if history.can_go_back() { "[" } else { " " };
        let forward = if history.can_go_forward() { "]" } else { " " };

        let mut spans = vec![
            Span::styled(format!(" {}{} ", back, forward), Style::default().fg(theme.muted)),
            Span::styled(
                app.shell.location().to_string(),
                Style::default().fg(theme.foreground),
            ),
            Span::styled(
                format!(" │ {} │ {}", app.uptime(), app.mode.as_str()),
                Style::default().fg(theme.muted),
            ),
        ];

        if Breakpoint::from_width(area.width) != Breakpoint::Compact {
            spans.push(Span::styled(
                " │ 1-8/Tab nav · / search · : go to · [ ] history · q quit",
                Style::default().fg(theme.muted),
            ));
        }
        Line::from(spans)
    };

    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style()),
    );
    f.render_widget(status, area);
}
