//! Owner of a filter's committed value and display state.

use std::fmt::Debug;

use super::Anchor;
use super::popover::{FilterProps, FilterSink};

/// Committed value plus `open`/`anchor` for one filter.
///
/// Only the context mutates these; popovers read them through [`FilterProps`]
/// and report back through the [`FilterSink`] impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterContext<V> {
    anchor: Option<Anchor>,
    open: bool,
    value: Option<V>,
    close_on_apply: bool,
}

impl<V> Default for FilterContext<V> {
    fn default() -> Self {
        Self {
            anchor: None,
            open: false,
            value: None,
            close_on_apply: true,
        }
    }
}

impl<V: Clone + PartialEq + Debug> FilterContext<V> {
    pub fn new(close_on_apply: bool) -> Self {
        Self {
            close_on_apply,
            ..Self::default()
        }
    }

    pub fn props(&self) -> FilterProps<'_, V> {
        FilterProps {
            anchor: self.anchor,
            open: self.open,
            value: self.value.as_ref(),
        }
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn open_at(&mut self, anchor: Option<Anchor>) {
        tracing::debug!(?anchor, "filter opened");
        self.anchor = anchor;
        self.open = true;
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("filter closed");
        }
        self.open = false;
        self.anchor = None;
    }

    pub fn set_value(&mut self, value: Option<V>) {
        self.value = value;
    }

    /// Clears the committed value back to unset.
    pub fn reset(&mut self) {
        tracing::debug!(previous = ?self.value, "filter reset");
        self.value = None;
    }
}

impl<V: Clone + PartialEq + Debug> FilterSink<V> for FilterContext<V> {
    fn on_apply(&mut self, value: Option<V>) {
        tracing::info!(?value, "filter applied");
        self.value = value;
        if self.close_on_apply {
            self.close();
        }
    }

    fn on_close(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterOption, FilterPopover};

    fn status_options() -> Vec<FilterOption<String>> {
        vec![
            FilterOption::new("Open", "open".to_string()),
            FilterOption::new("Closed", "closed".to_string()),
        ]
    }

    fn context_with(close_on_apply: bool, value: &str) -> FilterContext<String> {
        let mut ctx = FilterContext::new(close_on_apply);
        ctx.set_value(Some(value.to_string()));
        ctx
    }

    fn popover_for(ctx: &FilterContext<String>) -> FilterPopover<String> {
        FilterPopover::from_source("Filter by status", &status_options(), ctx.props().value)
    }

    #[test]
    fn test_apply_commits_and_closes_by_default() {
        let mut ctx = context_with(true, "open");
        ctx.open_at(Some(Anchor::new(2, 0, 10, 1)));
        let mut popover = popover_for(&ctx);

        popover.select_index(1);
        assert_eq!(ctx.value().map(String::as_str), Some("open"));
        popover.apply(&mut ctx);

        assert_eq!(ctx.value().map(String::as_str), Some("closed"));
        assert!(!ctx.is_open());
        assert_eq!(ctx.anchor(), None);
    }

    #[test]
    fn test_apply_without_linkage_stays_open() {
        let mut ctx = FilterContext::new(false);
        ctx.open_at(None);
        let mut popover = popover_for(&ctx);

        popover.select_index(0);
        popover.apply(&mut ctx);

        assert_eq!(ctx.value().map(String::as_str), Some("open"));
        assert!(ctx.is_open());
    }

    #[test]
    fn test_dismiss_leaves_committed_value() {
        let mut ctx = context_with(true, "open");
        ctx.open_at(None);
        let mut popover = popover_for(&ctx);

        popover.select_index(1);
        popover.clear();
        popover.dismiss(&mut ctx);

        assert_eq!(ctx.value().map(String::as_str), Some("open"));
        assert!(!ctx.is_open());
    }

    #[test]
    fn test_reopen_after_external_change_uses_new_value() {
        let mut ctx = context_with(true, "open");
        ctx.open_at(None);
        let mut popover = popover_for(&ctx);
        popover.select_index(1);
        popover.dismiss(&mut ctx);

        ctx.set_value(Some("closed".to_string()));
        ctx.open_at(None);
        popover.sync(&ctx.props());
        assert_eq!(popover.draft().map(String::as_str), Some("closed"));

        ctx.reset();
        popover.sync(&ctx.props());
        assert_eq!(popover.draft(), None);
    }
}
