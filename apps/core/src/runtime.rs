use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use thiserror::Error;

use crate::action_executor::default_launcher;
use crate::config::{self, Config};
use crate::core_service::{CoreService, ServiceError};
use crate::overlay_state::{InputEvent, OverlayState, Outcome};
use crate::overlay_view;
use crate::terminal::TerminalGuard;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("service error: {0}")]
    Service(#[from] ServiceError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub fn run() -> Result<(), RuntimeError> {
    let config = load_config();
    tracing::info!(
        config_path = %config.config_path.display(),
        history_path = %config.history_path.display(),
        "startup"
    );

    let max_visible = config.max_visible_candidates;
    let service = CoreService::new(config)?;
    let mut overlay = OverlayState::new(service);

    let outcome = {
        let mut guard = TerminalGuard::new()?;
        event_loop(&mut guard.terminal, &mut overlay, max_visible)?
    };

    // The terminal is restored before launching so the child does not
    // inherit raw mode.
    if let Outcome::Launch(target) = outcome {
        let mut launcher = default_launcher();
        let _ = overlay.service().dispatch(launcher.as_mut(), &target);
    }
    Ok(())
}

/// Config from disk, written out with defaults on first run. A broken config
/// falls back to defaults so the launcher always comes up.
fn load_config() -> Config {
    match config::load(None) {
        Ok(config) => {
            if !config.config_path.exists() {
                match config::save(&config) {
                    Ok(()) => tracing::info!(
                        "wrote default config to {}",
                        config.config_path.display()
                    ),
                    Err(error) => tracing::warn!("default config not written: {error}"),
                }
            }
            config
        }
        Err(error) => {
            tracing::warn!("using default config: {error}");
            Config::default()
        }
    }
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    overlay: &mut OverlayState,
    max_visible: u16,
) -> std::io::Result<Outcome> {
    loop {
        terminal.draw(|frame| overlay_view::draw(frame, overlay, max_visible))?;

        let Some(input) = translate(&event::read()?) else {
            continue;
        };
        match overlay.handle(input) {
            Outcome::Continue => {}
            outcome => return Ok(outcome),
        }
    }
}

/// Maps a terminal event onto an overlay event. Key releases, mouse input and
/// resizes map to nothing and only cause a redraw.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Paste(text) => Some(InputEvent::InsertText(text.clone())),
        Event::FocusLost => Some(InputEvent::FocusLost),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(InputEvent::Close),
            KeyCode::Char('u') => Some(InputEvent::SetText(String::new())),
            KeyCode::Char('a') => Some(InputEvent::Home),
            KeyCode::Char('e') => Some(InputEvent::End),
            KeyCode::Char('n') => Some(InputEvent::Down),
            KeyCode::Char('p') => Some(InputEvent::Up),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) => Some(InputEvent::Insert(ch)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Delete => Some(InputEvent::Delete),
        KeyCode::Left => Some(InputEvent::CursorLeft),
        KeyCode::Right => Some(InputEvent::CursorRight),
        KeyCode::Home => Some(InputEvent::Home),
        KeyCode::End => Some(InputEvent::End),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        KeyCode::Tab => Some(InputEvent::AcceptCompletion),
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Esc => Some(InputEvent::Escape),
        _ => None,
    }
}
