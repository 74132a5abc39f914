//! Raw-mode and alternate-screen setup.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use tracing::warn;

/// Restores the terminal when dropped.
///
/// Created as soon as raw mode is on, so any later setup failure or panic
/// still leaves the user's shell usable.
pub struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    pub fn new(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Switch to raw mode and the alternate screen.
pub fn enter() -> io::Result<TerminalGuard> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore);
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(guard)
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "failed to leave alternate screen");
    }
}
