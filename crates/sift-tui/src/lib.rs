//! Full-screen TUI for browsing records through filter popovers.

pub mod common;
pub mod effects;
pub mod events;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::path::PathBuf;

use anyhow::Result;
pub use runtime::TuiRuntime;
use sift_core::filter::FilterBar;
use sift_core::records::Record;

use crate::state::AppState;

/// Runs the interactive browser until the user quits.
///
/// Returns the filters committed when the session ended.
pub fn run_browser(
    bar: FilterBar,
    records: Vec<Record>,
    filters_path: Option<PathBuf>,
) -> Result<FilterBar> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "Browse mode requires a terminal.\n\
             Use `sift filter <FILE> --set KEY=VALUE` for non-interactive filtering."
        );
    }

    tracing::info!(records = records.len(), fields = bar.len(), "starting browser");
    let mut runtime = TuiRuntime::new(AppState::new(bar, records), filters_path)?;
    runtime.run()?;
    Ok(runtime.state.bar.clone())
}
