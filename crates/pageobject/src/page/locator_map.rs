// LocatorMap - declarative field-to-selector mapping
//
// The single source of truth for which elements exist on a page. Field names
// are the test-author-facing identifiers; selectors are CSS-dialect strings.
// Insertion order is preserved because the element-presence sweep checks
// fields in declaration order.

use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Ordered mapping from field name to selector string.
///
/// Populated when the page is defined and mutable at runtime through
/// [`LocatorMap::add`] and [`LocatorMap::remove`]. Mutation is
/// deliberately not synchronized: the page instance owns its map and the
/// whole core is single-threaded by contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorMap {
    entries: IndexMap<String, String>,
}

impl LocatorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a field's selector string.
    ///
    /// Fails with `UnknownField` when the field is absent.
    pub fn get(&self, field: &str) -> Result<&str> {
        self.entries
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownField(field.to_string()))
    }

    /// Inserts a mapping, overwriting any existing selector for the field.
    ///
    /// Fails with `InvalidArgument` when either the field or the selector
    /// is empty.
    pub fn add(&mut self, field: impl Into<String>, selector: impl Into<String>) -> Result<()> {
        let field = field.into();
        let selector = selector.into();
        if field.is_empty() {
            return Err(Error::InvalidArgument(
                "locator field name must not be empty".to_string(),
            ));
        }
        if selector.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "selector for field '{field}' must not be empty"
            )));
        }
        self.entries.insert(field, selector);
        Ok(())
    }

    /// Removes a mapping.
    ///
    /// Fails with `UnknownField` when the field is absent. Removal keeps
    /// the insertion order of the remaining fields.
    pub fn remove(&mut self, field: &str) -> Result<()> {
        self.entries
            .shift_remove(field)
            .map(|_| ())
            .ok_or_else(|| Error::UnknownField(field.to_string()))
    }

    /// Whether the map contains the field.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(field, selector)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of mapped fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocatorMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocatorMap {
    /// Duplicate fields keep the last selector, same as repeated `add`.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries }
    }
}
