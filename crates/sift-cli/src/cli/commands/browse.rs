//! Interactive browse command.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use sift_core::config::{self, Config};
use sift_core::filter::FilterBar;
use sift_core::records::load_records;

pub fn run(config: &Config, file: &Path, fresh: bool) -> Result<()> {
    let filters_path = config::paths::filters_path();
    let saved = if config.remember_filters && !fresh {
        config::load_saved_filters(&filters_path).context("load remembered filters")?
    } else {
        BTreeMap::new()
    };

    let records = load_records(file)?;
    let bar = FilterBar::from_config(config, &saved);
    let persist_to = config.remember_filters.then_some(filters_path);

    let bar = sift_tui::run_browser(bar, records, persist_to)?;

    let committed = bar.committed();
    if !committed.is_empty() {
        let summary: Vec<String> = committed.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("Filters: {}", summary.join(" "));
    }
    Ok(())
}
