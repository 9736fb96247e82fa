// src/path/alias.rs
use indexmap::IndexMap;

use super::normalize_device_name;

/// Short device-like tokens (`S:`, `T:`) that expand to a device plus subpath.
///
/// Names are matched case-insensitively; targets are kept as written
/// (`SYS:S`) and resolved against the device table on use.
#[derive(Debug, Clone, Default)]
pub struct LogicalAliases {
    entries: IndexMap<String, String>,
}

impl LogicalAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic assignments of a Workbench installation.
    pub fn with_defaults() -> Self {
        let mut aliases = Self::new();
        aliases.insert("S:", "SYS:S");
        aliases.insert("L:", "SYS:L");
        aliases.insert("DEVS:", "SYS:DEVS");
        aliases.insert("FONTS:", "SYS:Fonts");
        aliases.insert("T:", "RAM:T");
        aliases
    }

    /// Add or replace an alias, returning its normalized name.
    pub fn insert(&mut self, name: &str, target: &str) -> String {
        let name = normalize_device_name(name);
        self.entries.insert(name.clone(), target.trim().to_string());
        name
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&normalize_device_name(name))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

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
