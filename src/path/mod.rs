//! Path Model
//!
//! Canonical `DEVICE:segment/segment` paths, logical aliases and the resolver
//! that turns raw user tokens into canonical paths without touching storage.

pub mod alias;
pub mod resolver;

pub use alias::LogicalAliases;
pub use resolver::{PathResolver, Resolved};

use std::fmt;

/// Upper-case a device token and make sure it ends in `:`.
pub fn normalize_device_name(name: &str) -> String {
    let mut name = name.trim().to_uppercase();
    if !name.ends_with(':') {
        name.push(':');
    }
    name
}

/// True for a normalized name like `DH1:`: one `:` at the end and no
/// separators or blanks before it.
pub fn is_valid_device_name(name: &str) -> bool {
    match name.strip_suffix(':') {
        Some(body) => {
            !body.is_empty() && !body.contains([':', '/']) && !body.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// A fully resolved path: one device plus zero or more segments.
///
/// The string form has no trailing slash except the bare device root
/// (`SYS:`), and the first segment follows the colon directly (`SYS:Prefs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPath {
    device: String,
    segments: Vec<String>,
}

impl CanonicalPath {
    /// Root of `device`. The name is normalized.
    pub fn root(device: &str) -> Self {
        Self {
            device: normalize_device_name(device),
            segments: Vec::new(),
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Last segment, or the device name for a root.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or(&self.device)
    }

    pub fn push(&mut self, segment: &str) {
        self.segments.push(segment.to_string());
    }

    /// Drop the last segment. Returns false at a device root.
    pub fn pop(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    pub fn parent(&self) -> Option<CanonicalPath> {
        let mut parent = self.clone();
        parent.pop().then_some(parent)
    }

    pub fn join(&self, segment: &str) -> CanonicalPath {
        let mut joined = self.clone();
        joined.push(segment);
        joined
    }

    /// True when `self` is `other` or lies beneath it.
    pub fn starts_with(&self, other: &CanonicalPath) -> bool {
        self.device == other.device && self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.device, self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_device_name() {
        assert_eq!(normalize_device_name("dh0"), "DH0:");
        assert_eq!(normalize_device_name(" sys: "), "SYS:");
    }

    #[test]
    fn test_display_has_no_slash_after_colon() {
        let path = CanonicalPath::root("sys").join("Prefs").join("Env");
        assert_eq!(path.to_string(), "SYS:Prefs/Env");
        assert_eq!(CanonicalPath::root("RAM:").to_string(), "RAM:");
    }

    #[test]
    fn test_parent_and_name() {
        let path = CanonicalPath::root("SYS:").join("Prefs");
        assert_eq!(path.name(), "Prefs");
        assert_eq!(path.parent(), Some(CanonicalPath::root("SYS:")));
        assert_eq!(CanonicalPath::root("SYS:").parent(), None);
        assert_eq!(CanonicalPath::root("SYS:").name(), "SYS:");
    }

    #[test]
    fn test_starts_with() {
        let prefs = CanonicalPath::root("SYS:").join("Prefs");
        assert!(prefs.join("Env").starts_with(&prefs));
        assert!(!CanonicalPath::root("RAM:").starts_with(&prefs));
    }
}
