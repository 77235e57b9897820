//! Filter popover model.
//!
//! A filter popover holds an uncommitted draft for one field and hands it to
//! the owner of the committed value only when the user applies it.
//!
//! ## Module Structure
//!
//! - `option.rs`: `(label, value)` entries and the `OptionsSource` seam
//! - `popover.rs`: draft controller and the `reconcile` rule
//! - `context.rs`: owner of the committed value and open/anchor state
//! - `bar.rs`: ordered set of named fields evaluated against records

pub mod bar;
pub mod context;
pub mod option;
pub mod popover;

pub use bar::{FilterBar, FilterField};
pub use context::FilterContext;
pub use option::{FilterOption, OptionsSource, label_for};
pub use popover::{FilterPopover, FilterProps, FilterSink, reconcile};

/// Screen rectangle of the trigger a popover is anchored to.
///
/// Coordinates are terminal cells; the renderer decides where the overlay
/// lands relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Anchor {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Row directly below the trigger.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Column directly right of the trigger.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        (self.x..self.right()).contains(&column) && (self.y..self.bottom()).contains(&row)
    }
}
