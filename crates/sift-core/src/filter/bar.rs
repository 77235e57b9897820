//! Ordered set of filter fields.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

use super::context::FilterContext;
use super::option::{FilterOption, label_for};
use super::popover::FilterPopover;
use crate::config::{Config, FieldConfig};
use crate::records::{Record, attribute_text};

/// A named filter: its options and the context holding its committed value.
#[derive(Debug, Clone)]
pub struct FilterField {
    pub key: String,
    pub title: String,
    pub options: Vec<FilterOption<String>>,
    pub context: FilterContext<String>,
}

impl FilterField {
    pub fn from_config(field: &FieldConfig, close_on_apply: bool) -> Self {
        Self {
            key: field.key.clone(),
            title: field.title(),
            options: field.options.clone(),
            context: FilterContext::new(close_on_apply),
        }
    }

    /// Builds a popover over this field's options, seeded from the committed value.
    pub fn popover(&self) -> FilterPopover<String> {
        FilterPopover::from_source(self.title.as_str(), &self.options[..], self.context.value())
    }

    /// Label of the committed value, falling back to the raw value.
    pub fn value_label(&self) -> Option<&str> {
        let value = self.context.value()?;
        Some(label_for(&self.options, value).unwrap_or(value.as_str()))
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterBar {
    fields: Vec<FilterField>,
}

impl FilterBar {
    /// Builds the bar from config and seeds committed values from `saved`.
    ///
    /// Saved values for unknown keys or outside a field's options are ignored.
    pub fn from_config(config: &Config, saved: &BTreeMap<String, String>) -> Self {
        let fields = config
            .fields
            .iter()
            .map(|fc| {
                let mut field = FilterField::from_config(fc, config.close_on_apply);
                match saved.get(&field.key) {
                    Some(value) if field.has_option(value) => {
                        field.context.set_value(Some(value.clone()));
                    }
                    Some(value) => {
                        tracing::warn!(key = %field.key, %value, "ignoring saved filter value");
                    }
                    None => {}
                }
                field
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FilterField> {
        self.fields.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FilterField> {
        self.fields.get_mut(index)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut FilterField> {
        self.fields.iter_mut().find(|f| f.key == key)
    }

    /// Committed values keyed by field; unset fields are omitted.
    pub fn committed(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|f| f.context.value().map(|v| (f.key.clone(), v.clone())))
            .collect()
    }

    /// Commits `value` for `key` through the same popover path the UI uses.
    ///
    /// An empty `value` selects the unset sentinel.
    pub fn apply_assignment(&mut self, key: &str, value: &str) -> Result<()> {
        let Some(field) = self.field_mut(key) else {
            bail!("Unknown filter field '{key}'");
        };

        let draft = if value.is_empty() {
            None
        } else if field.has_option(value) {
            Some(value.to_string())
        } else {
            let known: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
            bail!(
                "'{value}' is not an option of '{key}' (expected one of: {})",
                known.join(", ")
            );
        };

        field.context.open_at(None);
        let mut popover = field.popover();
        popover.select_value(draft);
        popover.apply(&mut field.context);
        field.context.close();
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for field in &mut self.fields {
            field.context.reset();
        }
    }

    /// True when the record passes every committed filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.fields.iter().all(|field| {
            let Some(expected) = field.context.value() else {
                return true;
            };
            record
                .get(&field.key)
                .and_then(attribute_text)
                .is_some_and(|actual| actual == *expected)
        })
    }
}
