//! Answer values and the assembled selection map

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fmt;

/// The answer stored for one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MenuValue {
    /// One label picked on a single-select level
    Single(String),
    /// Labels picked on a multi-select level, in the order they were typed
    Multiple(Vec<String>),
}

impl MenuValue {
    /// The label of a single selection
    pub fn as_single(&self) -> Option<&str> {
        match self {
            MenuValue::Single(label) => Some(label),
            MenuValue::Multiple(_) => None,
        }
    }

    /// The labels of a multiple selection
    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            MenuValue::Single(_) => None,
            MenuValue::Multiple(labels) => Some(labels),
        }
    }

    /// Every selected label, whatever the variant
    pub fn labels(&self) -> Vec<&str> {
        match self {
            MenuValue::Single(label) => vec![label.as_str()],
            MenuValue::Multiple(labels) => labels.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for MenuValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuValue::Single(label) => write!(f, "{}", label),
            MenuValue::Multiple(labels) => write!(f, "[{}]", labels.join(", ")),
        }
    }
}

impl From<&str> for MenuValue {
    fn from(label: &str) -> Self {
        MenuValue::Single(label.to_string())
    }
}

impl From<Vec<String>> for MenuValue {
    fn from(labels: Vec<String>) -> Self {
        MenuValue::Multiple(labels)
    }
}

/// Keyed answers collected across all levels
///
/// Entries keep level order. Inserting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    entries: Vec<(String, MenuValue)>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: MenuValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MenuValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MenuValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Selections {
    type Item = (String, MenuValue);
    type IntoIter = std::vec::IntoIter<(String, MenuValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Selections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
