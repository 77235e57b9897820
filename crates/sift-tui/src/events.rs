//! Events fed to the reducer.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Current terminal size, sent before each batch of events.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(Event),
}
