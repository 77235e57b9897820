//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They cover I/O only; state changes happen in the reducer itself.

use std::collections::BTreeMap;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Persist the committed filters (unset fields omitted).
    PersistFilters { filters: BTreeMap<String, String> },
}
