//! Records the filter bar runs against.
//!
//! Input is a JSON array of flat objects.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::filter::FilterBar;

pub type Record = serde_json::Map<String, Value>;

/// Loads records from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    let records = parse_records(&contents)
        .with_context(|| format!("Failed to parse records from {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

pub fn parse_records(contents: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(contents).context("Invalid JSON")?;
    let Value::Array(items) = value else {
        bail!("Expected a JSON array of objects");
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            other => bail!("Item {i} is not an object: {other}"),
        })
        .collect()
}

/// Text form of a scalar attribute; `None` for null, arrays and objects.
pub fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Records passing every committed filter, in input order.
pub fn filter_records<'a>(bar: &FilterBar, records: &'a [Record]) -> Vec<&'a Record> {
    records.iter().filter(|r| bar.matches(r)).collect()
}

/// One-line summary of a record for list views.
pub fn summarize(record: &Record) -> String {
    record
        .iter()
        .map(|(k, v)| match attribute_text(v) {
            Some(text) => format!("{k}={text}"),
            None => format!("{k}={v}"),
        })
        .collect::<Vec<_>>()
        .join("  ")
}
