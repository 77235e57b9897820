//! Lists configured filter fields.

use std::fmt::Write;

use sift_core::config::Config;
use unicode_width::UnicodeWidthStr;

pub fn run(config: &Config) {
    print!("{}", listing(config));
}

/// One block per field: a heading, then option values in a column aligned
/// by display width.
fn listing(config: &Config) -> String {
    if config.fields.is_empty() {
        return "No filter fields configured.\n".to_string();
    }

    let mut out = String::new();
    for field in &config.fields {
        let _ = writeln!(out, "{}  ({})", field.key, field.title());
        if field.options.is_empty() {
            out.push_str("    (no options)\n");
            continue;
        }
        let width = field
            .options
            .iter()
            .map(|o| o.value.width())
            .max()
            .unwrap_or(0);
        for option in &field.options {
            let pad = width - option.value.width();
            let _ = writeln!(out, "    {}{:pad$}  {}", option.value, "", option.label);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use sift_core::config::FieldConfig;
    use sift_core::filter::FilterOption;

    use super::*;

    fn config_with(options: Vec<FilterOption<String>>) -> Config {
        Config {
            fields: vec![FieldConfig {
                key: "region".to_string(),
                title: None,
                options,
            }],
            ..Config::default()
        }
    }

    #[test]
    fn test_wide_values_align_labels() {
        let config = config_with(vec![
            FilterOption::new("Tokyo", "東京".to_string()),
            FilterOption::new("Oslo", "oslo".to_string()),
            FilterOption::new("Rome", "it".to_string()),
        ]);
        let out = listing(&config);
        let rows: Vec<&str> = out.lines().skip(1).collect();

        assert_eq!(rows, vec!["    東京  Tokyo", "    oslo  Oslo", "    it    Rome"]);
        let label_columns: Vec<usize> = rows
            .iter()
            .map(|r| r.width() - r.split("  ").last().unwrap().width())
            .collect();
        assert!(label_columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_empty_options_and_no_fields() {
        let out = listing(&config_with(Vec::new()));
        assert_eq!(out, "region  (Filter by region)\n    (no options)\n");

        let empty = Config {
            fields: Vec::new(),
            ..Config::default()
        };
        assert_eq!(listing(&empty), "No filter fields configured.\n");
    }
}
