// numstat/src/tui/mod.rs
pub mod app;
pub mod task;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::stream::StreamExt;
use log::{debug, error, info};
use numstat_core::StatsConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::tui::app::App;
use crate::tui::task::{spawn_calculation, CalcOutcome};
use crate::ui::theme::ThemeMap;

/// How often the loop wakes up to expire alerts.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Calculate,
    Clear,
    Newline,
    Backspace,
    Insert(char),
    Ignore,
}

/// Maps a key press to an action.
///
/// Most terminals send Ctrl+Enter as Ctrl+J, so both trigger a calculation,
/// as does F5.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Enter if ctrl => KeyAction::Calculate,
        KeyCode::Char('j') if ctrl => KeyAction::Calculate,
        KeyCode::F(5) => KeyAction::Calculate,
        KeyCode::Char('l') if ctrl => KeyAction::Clear,
        KeyCode::Enter => KeyAction::Newline,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Tab => KeyAction::Insert('\t'),
        KeyCode::Char(c) if !ctrl => KeyAction::Insert(c),
        _ => KeyAction::Ignore,
    }
}

/// Runs the interactive editor until the user quits.
pub async fn run_tui(config: StatsConfig, theme_map: ThemeMap) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, &theme_map).await;

    // Restore the terminal whatever the loop returned.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: StatsConfig,
    theme_map: &ThemeMap,
) -> Result<()> {
    let (tx_outcome, mut rx_outcome) = mpsc::channel::<CalcOutcome>(1);
    let mut app = App::new(config.alert_timeout());
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    info!("Interactive session started.");

    loop {
        if app.should_quit {
            break;
        }
        terminal.draw(|f| ui::draw(f, &app, theme_map))?;

        tokio::select! {
            Some(evt) = event_stream.next() => {
                match evt.context("Failed to read terminal event")? {
                    Event::Key(key) => handle_key(&mut app, key, config, &tx_outcome),
                    Event::Paste(text) => {
                        if !app.loading {
                            app.insert_str(&text);
                        }
                    }
                    _ => {}
                }
            }

            Some(outcome) = rx_outcome.recv() => {
                if let Err(err) = &outcome {
                    if !err.is_input_error() {
                        error!("Calculation failed: {}", err);
                    }
                }
                app.finish_calculation(outcome, Instant::now());
            }

            _ = tick.tick() => {
                app.expire_alert(Instant::now());
            }
        }
    }

    info!("Interactive session ended.");
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, config: StatsConfig, tx: &mpsc::Sender<CalcOutcome>) {
    let action = map_key(key);

    // The editor is read-only while a calculation runs.
    if app.loading && !matches!(action, KeyAction::Quit) {
        return;
    }

    match action {
        KeyAction::Quit => app.quit(),
        KeyAction::Calculate => {
            if let Some(text) = app.begin_calculation(Instant::now()) {
                debug!("Calculation triggered.");
                spawn_calculation(text, config, tx.clone());
            }
        }
        KeyAction::Clear => app.clear_input(),
        KeyAction::Newline => app.insert_newline(),
        KeyAction::Backspace => app.backspace(),
        KeyAction::Insert(c) => app.insert_char(c),
        KeyAction::Ignore => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn calculate_chords() {
        assert_eq!(map_key(press(KeyCode::Enter, KeyModifiers::CONTROL)), KeyAction::Calculate);
        assert_eq!(map_key(press(KeyCode::Char('j'), KeyModifiers::CONTROL)), KeyAction::Calculate);
        assert_eq!(map_key(press(KeyCode::F(5), KeyModifiers::NONE)), KeyAction::Calculate);
    }

    #[test]
    fn plain_keys_edit() {
        assert_eq!(map_key(press(KeyCode::Enter, KeyModifiers::NONE)), KeyAction::Newline);
        assert_eq!(map_key(press(KeyCode::Char('7'), KeyModifiers::NONE)), KeyAction::Insert('7'));
        assert_eq!(map_key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)), KeyAction::Insert('A'));
        assert_eq!(map_key(press(KeyCode::Backspace, KeyModifiers::NONE)), KeyAction::Backspace);
    }

    #[test]
    fn quit_and_clear() {
        assert_eq!(map_key(press(KeyCode::Esc, KeyModifiers::NONE)), KeyAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), KeyAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('l'), KeyModifiers::CONTROL)), KeyAction::Clear);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut key = press(KeyCode::F(5), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), KeyAction::Ignore);
    }

    #[tokio::test]
    async fn second_trigger_while_loading_spawns_nothing() {
        let (tx, mut rx) = mpsc::channel::<CalcOutcome>(4);
        let mut config = StatsConfig::default();
        config.interactive.delay_ms = Some(0);
        let mut app = App::new(config.alert_timeout());
        app.insert_str("1 2 3");

        let f5 = press(KeyCode::F(5), KeyModifiers::NONE);
        handle_key(&mut app, f5, config, &tx);
        handle_key(&mut app, f5, config, &tx);
        drop(tx);

        let first = rx.recv().await.unwrap();
        assert!(first.is_ok());
        assert!(rx.recv().await.is_none());
    }
}
