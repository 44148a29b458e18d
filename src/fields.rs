//! Ordered field name → extracted value mapping.
//!
//! Insertion order is contractual: it decides which field wins when several
//! could match the same span, and the order substitutions are applied in.
//! A plain association list keeps that explicit instead of depending on a
//! hash map's iteration order.

/// Reserved value meaning "no data extracted for this field".
pub const ABSENT: &str = "N/A";

/// True when a field value can actually be written into the document.
/// Empty strings and the [`ABSENT`] sentinel must never overwrite template
/// text.
pub fn has_value(value: &str) -> bool {
    !value.is_empty() && value != ABSENT
}

#[derive(Clone, Default)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a field. Keys are case-sensitive; updating an
    /// existing key keeps its original position (and thus its precedence).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for FieldMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
