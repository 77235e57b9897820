//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `filter_popover.rs`: Filter popover anchored to a filter button
//! - `help.rs`: Key binding reference
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod filter_popover;
pub mod help;
pub mod render_utils;

use crossterm::event::{KeyEvent, MouseEvent};
pub use filter_popover::FilterPopoverState;
pub use help::HelpState;
use ratatui::Frame;
use ratatui::layout::Rect;
use sift_core::filter::FilterBar;

/// Transition returned by overlay handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

#[derive(Debug)]
pub enum Overlay {
    Filter(FilterPopoverState),
    Help(HelpState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, bar: &FilterBar) {
        match self {
            Overlay::Filter(p) => p.render(frame, area, bar),
            Overlay::Help(h) => h.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, bar: &mut FilterBar, key: KeyEvent) -> OverlayTransition {
        match self {
            Overlay::Filter(p) => p.handle_key(bar, key),
            Overlay::Help(h) => h.handle_key(key),
        }
    }

    pub fn handle_mouse(
        &mut self,
        bar: &mut FilterBar,
        area: Rect,
        mouse: MouseEvent,
    ) -> OverlayTransition {
        match self {
            Overlay::Filter(p) => p.handle_mouse(bar, area, mouse),
            Overlay::Help(_) => OverlayTransition::Stay,
        }
    }
}

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, bar: &FilterBar);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, bar: &FilterBar) {
        if let Some(overlay) = self {
            overlay.render(frame, area, bar);
        }
    }
}
