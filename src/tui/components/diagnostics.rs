// Diagnostics overlay
//
// Development-only panel drawn over the bottom-right of the content area.
// Read-only: it reports routing and connection state and never changes it.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const WIDTH: u16 = 56;
const LOG_LINES: usize = 5;

/// Key/value lines describing the shell's current state
pub fn lines(app: &App) -> Vec<(String, String)> {
    let shell = &app.shell;
    let mut rows = vec![("location".to_string(), shell.location().to_string())];

    match shell.mounted() {
        Some(found) => {
            rows.push((
                "route".to_string(),
                format!("#{} {}", found.index, found.pattern),
            ));
            rows.push(("view".to_string(), found.view.name().to_string()));
            if found.params.is_empty() {
                rows.push(("params".to_string(), "none".to_string()));
            }
            for (name, value) in found.params.iter() {
                rows.push((format!(":{}", name), value.to_string()));
            }
        }
        None => rows.push(("route".to_string(), "none".to_string())),
    }

    rows.push(("mounts".to_string(), shell.mount_log().len().to_string()));
    rows.push(("history".to_string(), shell.history().len().to_string()));
    rows.push((
        "connect()".to_string(),
        if shell.connect_issued() { "issued" } else { "pending" }.to_string(),
    ));
    rows.push(("connected".to_string(), shell.connected().to_string()));
    if let Some(frames) = shell.provider().frames_received() {
        rows.push(("frames".to_string(), frames.to_string()));
    }
    rows.push(("renders".to_string(), app.renders.to_string()));
    rows.push(("theme".to_string(), app.theme.name.to_string()));
    rows.push(("logs".to_string(), app.log_ring.len().to_string()));
    rows
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.foreground);

    let mut text: Vec<Line> = lines(app)
        .into_iter()
        .map(|(k, v)| {
            Line::from(vec![
                Span::styled(format!("{:<10} ", k), label),
                Span::styled(v, value),
            ])
        })
        .collect();

    let recent = app.log_ring.recent(LOG_LINES);
    if !recent.is_empty() {
        text.push(Line::from(Span::styled(
            "recent logs",
            label.add_modifier(Modifier::UNDERLINED),
        )));
        text.extend(
            recent
                .iter()
                .map(|entry| Line::from(Span::styled(entry.line(), label))),
        );
    }

    let width = WIDTH.min(area.width);
    let height = (text.len() as u16 + 2).min(area.height);
    let overlay = Rect::new(
        area.right().saturating_sub(width),
        area.bottom().saturating_sub(height),
        width,
        height,
    );

    let block = Block::default()
        .title(" diagnostics (F12) ")
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight));

    f.render_widget(Clear, overlay);
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        overlay,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunMode;
    use crate::tui::app::tests::app_with;

    fn value<'a>(rows: &'a [(String, String)], key: &str) -> Option<&'a str> {
        rows.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn reports_route_and_params() {
        let (mut app, _) = app_with(RunMode::Development, false);
        app.navigate("/explorer/conflict/c-9");

        let rows = lines(&app);
        assert_eq!(value(&rows, "location"), Some("/explorer/conflict/c-9"));
        assert_eq!(value(&rows, "route"), Some("#6 /explorer/conflict/:id"));
        assert_eq!(value(&rows, ":id"), Some("c-9"));
        assert_eq!(value(&rows, "connect()"), Some("issued"));
        assert_eq!(value(&rows, "connected"), Some("false"));
        assert_eq!(value(&rows, "params"), None);
        // The in-memory provider does not count frames
        assert_eq!(value(&rows, "frames"), None);
    }

    #[test]
    fn reports_plain_routes_and_captured_logs() {
        let (mut app, _) = app_with(RunMode::Development, true);
        app.navigate("/tips");
        app.log_ring.push(crate::logging::LogEntry {
            timestamp: chrono::Local::now(),
            level: tracing::Level::INFO,
            message: "Mounted Tips".to_string(),
        });

        let rows = lines(&app);
        assert_eq!(value(&rows, "view"), Some("Tips"));
        assert_eq!(value(&rows, "params"), Some("none"));
        assert_eq!(value(&rows, "logs"), Some("1"));
    }
}
