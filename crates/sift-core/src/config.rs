//! Configuration management for sift.
//!
//! Loads configuration from ${SIFT_HOME}/config.toml with sensible defaults.
//! Applied filters are remembered separately in ${SIFT_HOME}/filters.toml.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::filter::FilterOption;

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for sift configuration and data directories.
    //!
    //! SIFT_HOME resolution order:
    //! 1. SIFT_HOME environment variable (if set)
    //! 2. ~/.config/sift (default)
    //! 3. ./.sift when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the sift home directory.
    pub fn sift_home() -> PathBuf {
        if let Ok(home) = std::env::var("SIFT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".sift"),
            |h| h.join(".config").join("sift"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        sift_home().join("config.toml")
    }

    /// Returns the path to the remembered filters file.
    pub fn filters_path() -> PathBuf {
        sift_home().join("filters.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        sift_home().join("logs")
    }
}

/// One filterable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Record attribute the filter compares against.
    pub key: String,
    /// Popover title; defaults to "Filter by <key>".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub options: Vec<FilterOption<String>>,
}

impl FieldConfig {
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Filter by {}", self.key))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Close the popover when a selection is applied
    pub close_on_apply: bool,

    /// Persist applied filters between browse sessions
    pub remember_filters: bool,

    /// Filter fields, in button order
    pub fields: Vec<FieldConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            close_on_apply: true,
            remember_filters: true,
            fields: vec![FieldConfig {
                key: "status".to_string(),
                title: Some("Filter by status".to_string()),
                options: vec![
                    FilterOption::new("Open", "open".to_string()),
                    FilterOption::new("Closed", "closed".to_string()),
                ],
            }],
        }
    }
}

impl Config {
    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        write_atomic(path, default_config_template())
    }
}

/// Reads remembered filters (`key = "value"` pairs).
/// Returns an empty map if the file doesn't exist.
pub fn load_saved_filters(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read filters from {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse filters from {}", path.display()))
}

/// Writes the committed filters, keeping comments already in the file.
///
/// Keys missing from `filters` are removed (they are unset).
pub fn save_filters_to(path: &Path, filters: &BTreeMap<String, String>) -> Result<()> {
    use toml_edit::{DocumentMut, value};

    let contents = if path.exists() {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read filters from {}", path.display()))?
    } else {
        "# Filters remembered from the last `sift browse` session.\n".to_string()
    };

    let mut doc: DocumentMut = contents
        .parse()
        .with_context(|| format!("Failed to parse filters from {}", path.display()))?;

    let stale: Vec<String> = doc
        .iter()
        .map(|(k, _)| k.to_string())
        .filter(|k| !filters.contains_key(k))
        .collect();
    for key in stale {
        doc.remove(&key);
    }
    for (key, v) in filters {
        doc[key.as_str()] = value(v.as_str());
    }

    tracing::debug!(path = %path.display(), count = filters.len(), "saving filters");
    write_atomic(path, &doc.to_string())
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nonexistent.toml")).unwrap();

        assert!(config.close_on_apply);
        assert!(config.remember_filters);
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.fields[0].key, "status");
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "close_on_apply = false\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert!(!config.close_on_apply);
        assert!(config.remember_filters);
        assert_eq!(config.fields[0].options.len(), 2);
    }

    #[test]
    fn test_load_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[[fields]]
key = "priority"

[[fields.options]]
label = "High"
value = "high"
"#,
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.fields[0].title(), "Filter by priority");
        assert_eq!(config.fields[0].options[0].label, "High");
    }

    #[test]
    fn test_load_invalid_toml_errors() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "close_on_apply = [").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_template_parses_to_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();
        let config = Config::load_from(&config_path).unwrap();
        let defaults = Config::default();

        assert_eq!(config.fields, defaults.fields);
        assert_eq!(config.close_on_apply, defaults.close_on_apply);
        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_save_filters_preserves_comments_and_drops_unset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("filters.toml");
        fs::write(&path, "# keep me\nstatus = \"open\"\npriority = \"high\"\n").unwrap();

        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), "closed".to_string());
        save_filters_to(&path, &filters).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# keep me"));
        assert!(!contents.contains("priority"));

        let loaded = load_saved_filters(&path).unwrap();
        assert_eq!(loaded, filters);
    }

    #[test]
    fn test_load_saved_filters_missing_is_empty() {
        let dir = tempdir().unwrap();
        assert!(
            load_saved_filters(&dir.path().join("filters.toml"))
                .unwrap()
                .is_empty()
        );
    }
}
