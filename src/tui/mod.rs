// TUI module - Terminal User Interface
//
// This module manages the terminal front end of the shell using ratatui:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, connection changes, search results)
// - Rendering the chrome and the mounted view

pub mod app;
pub mod components;
pub mod layout;
pub mod theme;
pub mod views;

use crate::search::NodeSearch;
use anyhow::{Context, Result};
use app::{App, InputMode, Submitted};
use components::Toast;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal even when the loop fails.
pub async fn run_tui(mut app: App, search: NodeSearch) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, search).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on four sources at once:
/// 1. Keyboard input
/// 2. Timer ticks (uptime, toast expiry)
/// 3. Connection status changes (badge)
/// 4. Finished background searches
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    search: NodeSearch,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));
    let mut connection = app.shell.provider().subscribe();
    let mut connection_open = true;
    let (search_tx, mut search_rx) = mpsc::channel::<Result<String>>(8);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            input = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            } => {
                if let Some(Event::Key(key_event)) = input {
                    if let Some(query) = handle_key_event(app, key_event) {
                        spawn_search(&search, query, search_tx.clone());
                        app.toast = Some(Toast::info("Searching..."));
                    }
                }
            }

            _ = tick_interval.tick() => {}

            changed = connection.changed(), if connection_open => {
                match changed {
                    Ok(()) => {
                        let connected = *connection.borrow_and_update();
                        tracing::debug!(connected, "Connection status changed");
                    }
                    Err(_) => connection_open = false,
                }
            }

            Some(result) = search_rx.recv() => {
                app.search_finished(result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn spawn_search(search: &NodeSearch, query: String, tx: mpsc::Sender<Result<String>>) {
    let search = search.clone();
    tokio::spawn(async move {
        let result = search.search(&query).await;
        let _ = tx.send(result).await;
    });
}

/// Handle keyboard input
///
/// Returns a query when the user submitted a search that should run in the
/// background.
fn handle_key_event(app: &mut App, key_event: KeyEvent) -> Option<String> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return None;
    }

    // F12 works in every input mode
    if key_event.code == KeyCode::F(12) {
        app.toggle_diagnostics();
        return None;
    }

    if app.input_mode != InputMode::Normal {
        return handle_input_key(app, key_event.code);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char(c @ '1'..='8') => app.activate_link((c as usize) - ('1' as usize)),
        KeyCode::Tab => app.next_link(),
        KeyCode::BackTab => app.prev_link(),
        KeyCode::Char('/') => app.begin_input(InputMode::Search),
        KeyCode::Char(':') => app.begin_input(InputMode::GoTo),
        KeyCode::Char('[') | KeyCode::Left if key_event.modifiers.is_empty() => app.back(),
        KeyCode::Char(']') | KeyCode::Right if key_event.modifiers.is_empty() => app.forward(),
        _ => {}
    }
    None
}

/// Keys while typing into the search box or go-to prompt
fn handle_input_key(app: &mut App, key: KeyCode) -> Option<String> {
    match key {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        KeyCode::Enter => {
            if let Submitted::Search(query) = app.submit_input() {
                return Some(query);
            }
        }
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunMode;
    use crate::router::ViewId;
    use crate::tui::app::tests::app_with;

    fn press(app: &mut App, code: KeyCode) -> Option<String> {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn number_keys_follow_nav_links() {
        let (mut app, _) = app_with(RunMode::Production, true);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.shell.location(), "/mana");
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.shell.location(), "/dashboard");
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.shell.mounted().unwrap().view, ViewId::Mana);
    }

    #[test]
    fn typing_q_in_search_does_not_quit() {
        let (mut app, _) = app_with(RunMode::Production, true);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "qq");
        assert!(!app.should_quit);
        assert_eq!(press(&mut app, KeyCode::Enter), Some("qq".to_string()));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn goto_prompt_navigates_on_enter() {
        let (mut app, _) = app_with(RunMode::Production, true);
        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "/explorer/address/addr1");
        assert_eq!(press(&mut app, KeyCode::Enter), None);
        assert_eq!(app.shell.mounted().unwrap().view, ViewId::ExplorerAddress);
    }

    #[test]
    fn escape_abandons_input() {
        let (mut app, _) = app_with(RunMode::Production, true);
        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "tips");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.shell.location(), "/dashboard");
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let (mut app, _) = app_with(RunMode::Production, true);
        press(&mut app, KeyCode::Char('/'));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn f12_toggles_diagnostics_in_development() {
        let (mut app, _) = app_with(RunMode::Development, true);
        assert!(app.diagnostics_visible());
        press(&mut app, KeyCode::F(12));
        assert!(!app.diagnostics_visible());
    }
}
