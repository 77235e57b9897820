//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and produces
//! effects; this module executes them.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use sift_core::config;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, BrowserTerminal};
use crate::{render, update};

/// Poll duration while waiting for input.
pub const POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and panic.
pub struct TuiRuntime {
    terminal: BrowserTerminal,
    pub state: AppState,
    /// Where committed filters are persisted; `None` disables persistence.
    filters_path: Option<PathBuf>,
}

impl TuiRuntime {
    pub fn new(state: AppState, filters_path: Option<PathBuf>) -> Result<Self> {
        let terminal = terminal::enter().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state,
            filters_path,
        })
    }

    /// Runs the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        while !self.state.should_quit {
            let size = self.terminal.size()?;
            update::update(
                &mut self.state,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            self.terminal.draw(|frame| render::render(&self.state, frame))?;

            if !event::poll(POLL_DURATION).context("Failed to poll terminal events")? {
                continue;
            }
            let term_event = event::read().context("Failed to read terminal event")?;
            let effects = update::update(&mut self.state, UiEvent::Terminal(term_event));
            for effect in effects {
                self.execute_effect(effect);
            }
        }
        Ok(())
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                tracing::debug!("quit requested");
                self.state.should_quit = true;
            }
            UiEffect::PersistFilters { filters } => {
                let Some(path) = &self.filters_path else {
                    return;
                };
                if let Err(e) = config::save_filters_to(path, &filters) {
                    tracing::warn!(error = %format!("{e:#}"), "failed to persist filters");
                    self.state.notice = Some(format!("Could not save filters: {e}"));
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::leave();
    }
}
