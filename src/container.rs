//! Entry collections handed to output converters.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::entry::normalize_name;
use crate::{Entry, Result};

/// Container is a read-only view over the entries of one conversion run.
pub trait Container {
    /// Iterate over all entries. Order is unspecified.
    fn entries(&self) -> Box<dyn Iterator<Item = &Entry> + '_>;

    /// Look up an entry by its exact (upper-cased) name.
    fn get_entry(&self, name: &str) -> Option<&Entry>;

    /// Get the number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory entry collection keyed by upper-cased name.
#[derive(Debug, Clone, Default)]
pub struct EntryMap {
    entries: AHashMap<String, Entry>,
}

impl EntryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Prefixes of an existing entry with the same name are
    /// kept and the new ones are appended after them.
    pub fn add(&mut self, entry: Entry) {
        match self.entries.get_mut(entry.name()) {
            Some(existing) => existing.merge(entry),
            None => {
                self.entries.insert(entry.name().to_string(), entry);
            }
        }
    }

    /// Remove an entry by name (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries.remove(&normalize_name(name))
    }

    /// Build a collection from a JSON object mapping names to CIDR lists.
    ///
    /// Keys that differ only in case are merged in ascending key order, so
    /// the same document always yields the same prefix order.
    ///
    /// ```
    /// use geotext::{Container, EntryMap};
    ///
    /// let map = EntryMap::from_json(r#"{"cn": ["2.2.2.0/24", "fd00::/8"]}"#).unwrap();
    /// assert_eq!(map.get_entry("CN").unwrap().len(), 2);
    /// ```
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(content)?;
        let mut map = Self::new();
        for (name, cidrs) in raw {
            let mut entry = Entry::new(&name);
            for cidr in &cidrs {
                entry.add_cidr(cidr)?;
            }
            map.add(entry);
        }
        Ok(map)
    }

    /// Load a collection from a JSON file (see [`EntryMap::from_json`]).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl Container for EntryMap {
    fn entries(&self) -> Box<dyn Iterator<Item = &Entry> + '_> {
        Box::new(self.entries.values())
    }

    fn get_entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<Entry> for EntryMap {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut map = Self::new();
        for entry in iter {
            map.add(entry);
        }
        map
    }
}
