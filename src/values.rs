//! Ordered multi-valued string map.
//!
//! [`Values`] keys are kept in byte-wise ascending order, so iteration order
//! is already the canonical serialization order. Values for a single key keep
//! the order in which they were added.

use std::collections::BTreeMap;

/// A string-to-string-list mapping with query-string semantics.
///
/// # Example
///
/// ```
/// use signed_values::Values;
///
/// let mut values = Values::new();
/// values.add("a", "1");
/// values.add("a", "2");
/// values.set("b", "x");
///
/// assert_eq!(values.get("a"), "1");
/// assert_eq!(values.get_all("a"), ["1", "2"]);
/// assert_eq!(values.get("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: BTreeMap<String, Vec<String>>,
}

impl Values {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Replaces all values for `key` with the single `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    /// Appends `value` to the values for `key`, creating the key if absent.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// Removes `key` and all of its values. No-op if absent.
    pub fn del(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Returns the first value for `key`, or `""` if there is none.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .and_then(|vs| vs.first())
            .map_or("", String::as_str)
    }

    /// Returns every value for `key` in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates keys in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates `(key, values)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, vs)| (k.as_str(), vs.as_slice()))
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}
