use std::io::{stdout, Stdout, Write};

use crossterm::{
    cursor::{SetCursorStyle, Show},
    event::{DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Raw mode and the alternate screen for as long as the guard lives.
pub struct TerminalGuard {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        match enter() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore(&mut stdout());
                Err(error)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
    }
}

fn enter() -> std::io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut out = stdout();
    execute!(
        out,
        EnterAlternateScreen,
        EnableFocusChange,
        EnableBracketedPaste,
        SetCursorStyle::SteadyBar
    )?;
    Terminal::new(CrosstermBackend::new(out))
}

/// Undoes everything `enter` may have switched on; safe to call after a
/// partial setup.
fn restore<W: Write>(out: &mut W) {
    let _ = execute!(
        out,
        DisableBracketedPaste,
        DisableFocusChange,
        LeaveAlternateScreen,
        SetCursorStyle::DefaultUserShape,
        Show
    );
    let _ = disable_raw_mode();
}
