//! Application state for the browse TUI.

use ratatui::layout::Rect;
use sift_core::filter::FilterBar;
use sift_core::records::{Record, filter_records};

use crate::overlays::Overlay;

#[derive(Debug)]
pub struct AppState {
    pub bar: FilterBar,
    pub records: Vec<Record>,
    /// Index of the focused filter button.
    pub focused: usize,
    /// First visible row of the filtered record list.
    pub scroll: usize,
    pub overlay: Option<Overlay>,
    /// Last known terminal area (updated by `UiEvent::Frame`).
    pub area: Rect,
    /// One-line message shown in the status line.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(bar: FilterBar, records: Vec<Record>) -> Self {
        Self {
            bar,
            records,
            focused: 0,
            scroll: 0,
            overlay: None,
            area: Rect::default(),
            notice: None,
            should_quit: false,
        }
    }

    /// Records passing the committed filters.
    pub fn visible_records(&self) -> Vec<&Record> {
        filter_records(&self.bar, &self.records)
    }

    pub fn focus_next(&mut self) {
        if !self.bar.is_empty() {
            self.focused = (self.focused + 1) % self.bar.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.bar.is_empty() {
            self.focused = (self.focused + self.bar.len() - 1) % self.bar.len();
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.visible_records().len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Keeps the scroll offset inside the current filtered list.
    pub fn clamp_scroll(&mut self) {
        self.scroll_by(0);
    }
}
