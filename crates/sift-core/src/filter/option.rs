use serde::{Deserialize, Serialize};

/// One selectable entry of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption<V> {
    pub label: String,
    pub value: V,
}

impl<V> FilterOption<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Supplies the ordered set of entries for one filterable field.
///
/// Duplicate values are not rejected; lookups resolve to the first match.
pub trait OptionsSource<V> {
    fn options(&self) -> Vec<FilterOption<V>>;
}

impl<V: Clone> OptionsSource<V> for [FilterOption<V>] {
    fn options(&self) -> Vec<FilterOption<V>> {
        self.to_vec()
    }
}

impl<V: Clone> OptionsSource<V> for Vec<FilterOption<V>> {
    fn options(&self) -> Vec<FilterOption<V>> {
        self.clone()
    }
}

/// Returns the label of the first entry carrying `value`.
pub fn label_for<'a, V: PartialEq>(options: &'a [FilterOption<V>], value: &V) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.value == *value)
        .map(|o| o.label.as_str())
}
