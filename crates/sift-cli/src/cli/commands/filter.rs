//! Non-interactive filtering.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use sift_core::config::Config;
use sift_core::filter::FilterBar;
use sift_core::records::{filter_records, load_records};

pub fn run(config: &Config, file: &Path, assignments: &[String], count: bool) -> Result<()> {
    let mut bar = FilterBar::from_config(config, &BTreeMap::new());
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        bar.apply_assignment(key, value)
            .with_context(|| format!("--set {assignment}"))?;
    }

    let records = load_records(file)?;
    let matching = filter_records(&bar, &records);
    tracing::debug!(
        total = records.len(),
        matching = matching.len(),
        "filtered records"
    );

    if count {
        println!("{}", matching.len());
    } else {
        let json = serde_json::to_string_pretty(&matching).context("serialize records")?;
        println!("{json}");
    }
    Ok(())
}

fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    let (key, value) = assignment
        .split_once('=')
        .with_context(|| format!("Invalid filter '{assignment}' (expected KEY=VALUE)"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Invalid filter '{assignment}' (empty key)");
    }
    Ok((key, value.trim()))
}
