//! Property lookup consumed by the resolvers.

use std::collections::{BTreeMap, HashMap};

/// Read access to the host's configuration properties.
pub trait PropertyResolver {
    /// Returns the raw string value of the named property, if present.
    fn get_property(&self, name: &str) -> Option<String>;

    /// Whether the named property is present.
    fn contains_property(&self, name: &str) -> bool {
        self.get_property(name).is_some()
    }
}

impl PropertyResolver for HashMap<String, String> {
    fn get_property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl PropertyResolver for BTreeMap<String, String> {
    fn get_property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// In-memory property source, mostly useful for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MapPropertyResolver {
    properties: HashMap<String, String>,
}

impl MapPropertyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }
}

impl PropertyResolver for MapPropertyResolver {
    fn get_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapPropertyResolver
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
