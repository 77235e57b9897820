//! Draft controller for a single filter popover.
//!
//! The controller never reads an ambient context: the owner passes its
//! current state in as [`FilterProps`] and receives results through a
//! [`FilterSink`].

use super::Anchor;
use super::option::{FilterOption, OptionsSource};

/// Read-only view of the owner's state handed to the popover.
#[derive(Debug)]
pub struct FilterProps<'a, V> {
    pub anchor: Option<Anchor>,
    pub open: bool,
    /// Committed value; `None` is unset.
    pub value: Option<&'a V>,
}

/// Receives the two outputs of a popover.
pub trait FilterSink<V> {
    /// Called with the value the user confirmed.
    fn on_apply(&mut self, value: Option<V>);
    /// Called when the overlay should go away without committing.
    fn on_close(&mut self);
}

/// Resets the draft when the committed value moved since the last observation.
///
/// Returns the new `(draft, observed)` pair. When `committed` equals
/// `observed` the draft is returned untouched.
pub fn reconcile<V: Clone + PartialEq>(
    draft: Option<V>,
    observed: Option<V>,
    committed: Option<&V>,
) -> (Option<V>, Option<V>) {
    if observed.as_ref() == committed {
        (draft, observed)
    } else {
        (committed.cloned(), committed.cloned())
    }
}

#[derive(Debug, Clone)]
pub struct FilterPopover<V> {
    title: String,
    options: Vec<FilterOption<V>>,
    draft: Option<V>,
    observed: Option<V>,
}

impl<V: Clone + PartialEq> FilterPopover<V> {
    pub fn new(title: impl Into<String>, options: Vec<FilterOption<V>>, committed: Option<&V>) -> Self {
        Self {
            title: title.into(),
            options,
            draft: committed.cloned(),
            observed: committed.cloned(),
        }
    }

    pub fn from_source<S>(title: impl Into<String>, source: &S, committed: Option<&V>) -> Self
    where
        S: OptionsSource<V> + ?Sized,
    {
        Self::new(title, source.options(), committed)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[FilterOption<V>] {
        &self.options
    }

    pub fn draft(&self) -> Option<&V> {
        self.draft.as_ref()
    }

    /// Position of the draft among the options.
    pub fn selected_index(&self) -> Option<usize> {
        let draft = self.draft.as_ref()?;
        self.options.iter().position(|o| o.value == *draft)
    }

    /// Re-reads the owner's committed value.
    pub fn sync(&mut self, props: &FilterProps<'_, V>) {
        let (draft, observed) = reconcile(self.draft.take(), self.observed.take(), props.value);
        self.draft = draft;
        self.observed = observed;
    }

    pub fn select_value(&mut self, value: Option<V>) {
        self.draft = value;
    }

    /// Selects the option at `index`; out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) {
        if let Some(option) = self.options.get(index) {
            self.draft = Some(option.value.clone());
        }
    }

    /// Selects the unset sentinel.
    pub fn clear(&mut self) {
        self.draft = None;
    }

    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(i) => (i + 1).min(self.options.len() - 1),
            None => 0,
        };
        self.select_index(next);
    }

    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let prev = match self.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select_index(prev);
    }

    /// Hands the draft to the owner. Closing is left to the owner.
    pub fn apply<S: FilterSink<V> + ?Sized>(&self, sink: &mut S) {
        sink.on_apply(self.draft.clone());
    }

    /// Asks the owner to close and drops the draft back to the committed value.
    pub fn dismiss<S: FilterSink<V> + ?Sized>(&mut self, sink: &mut S) {
        self.draft = self.observed.clone();
        sink.on_close();
    }
}
