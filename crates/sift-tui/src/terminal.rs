//! Raw-mode session for the record browser.
//!
//! Filter buttons and click-away need mouse reports, so mouse capture is part
//! of the session and is torn down with it, on drop or on panic.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type BrowserTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switches stdout to the browser: raw mode, alternate screen, mouse capture.
///
/// A partially entered session is left again before the error is returned.
pub fn enter() -> Result<BrowserTerminal> {
    install_panic_hook();
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
        });
    if entered.is_err() {
        let _ = leave();
    }
    entered
}

/// Hands the terminal back to the shell. Idempotent.
pub fn leave() -> Result<()> {
    // Mouse capture goes off while still in raw mode.
    let _ = execute!(io::stdout(), DisableMouseCapture);
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")
}

/// Chains `leave` in front of the existing panic hook, once per process.
fn install_panic_hook() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = leave();
            previous(info);
        }));
    });
}
