//! Virtual Store
//!
//! In-memory directories and files for virtual devices, held in one flat map
//! keyed by the canonical path string. Direct children of a directory are the
//! keys that extend its prefix by exactly one segment.

use std::collections::BTreeMap;
use std::time::SystemTime;

use super::types::{sort_entries, ListingEntry};
use crate::error::ShellError;
use crate::path::CanonicalPath;

/// A node of the virtual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VirtualNode {
    Directory,
    File { content: Vec<u8> },
}

/// Flat path → node map for every virtual device of a session.
#[derive(Debug, Clone)]
pub struct VirtualStore {
    nodes: BTreeMap<String, VirtualNode>,
    created: SystemTime,
}

impl Default for VirtualStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualStore {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            created: SystemTime::now(),
        }
    }

    /// Virtual nodes have no timestamps of their own; they all report this.
    pub fn created(&self) -> SystemTime {
        self.created
    }

    pub fn create_device_root(&mut self, device: &str) {
        let root = CanonicalPath::root(device);
        self.nodes.entry(root.to_string()).or_insert(VirtualNode::Directory);
    }

    /// Drop every node belonging to `device`.
    pub fn remove_device(&mut self, device: &str) {
        let prefix = CanonicalPath::root(device).to_string();
        self.nodes.retain(|key, _| !key.starts_with(&prefix));
    }

    pub fn get(&self, path: &CanonicalPath) -> Option<&VirtualNode> {
        self.nodes.get(&path.to_string())
    }

    pub fn exists(&self, path: &CanonicalPath) -> bool {
        self.get(path).is_some()
    }

    pub fn is_directory(&self, path: &CanonicalPath) -> bool {
        matches!(self.get(path), Some(VirtualNode::Directory))
    }

    pub fn is_file(&self, path: &CanonicalPath) -> bool {
        matches!(self.get(path), Some(VirtualNode::File { .. }))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of file nodes across all devices.
    pub fn file_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|node| matches!(node, VirtualNode::File { .. }))
            .count()
    }

    /// Direct children of `dir`, sorted for display.
    pub fn list_children(&self, dir: &CanonicalPath) -> Result<Vec<ListingEntry>, ShellError> {
        if !self.is_directory(dir) {
            return Err(ShellError::not_found(dir));
        }
        let prefix = child_prefix(dir);
        let mut entries: Vec<ListingEntry> = self
            .nodes
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .filter_map(|(key, node)| {
                let name = &key[prefix.len()..];
                if name.is_empty() || name.contains('/') {
                    return None;
                }
                Some(match node {
                    VirtualNode::Directory => ListingEntry::directory(name, self.created),
                    VirtualNode::File { content } => {
                        ListingEntry::file(name, content.len() as u64, self.created)
                    }
                })
            })
            .collect();
        sort_entries(&mut entries);
        Ok(entries)
    }

    pub fn read_file(&self, path: &CanonicalPath) -> Result<&[u8], ShellError> {
        match self.get(path) {
            Some(VirtualNode::File { content }) => Ok(content),
            Some(VirtualNode::Directory) => {
                Err(ShellError::invalid(format!("'{}' is a directory", path)))
            }
            None => Err(ShellError::not_found(path)),
        }
    }

    /// Create or overwrite a file. The parent directory must already exist.
    pub fn write_file(&mut self, path: &CanonicalPath, content: Vec<u8>) -> Result<(), ShellError> {
        if path.is_root() || self.is_directory(path) {
            return Err(ShellError::invalid(format!("'{}' is a directory", path)));
        }
        self.require_parent(path)?;
        self.nodes.insert(path.to_string(), VirtualNode::File { content });
        Ok(())
    }

    /// Create one directory. Reports `AlreadyExists` instead of succeeding
    /// silently, and never creates missing parents.
    pub fn make_directory(&mut self, path: &CanonicalPath) -> Result<(), ShellError> {
        if self.exists(path) {
            return Err(ShellError::AlreadyExists { path: path.to_string() });
        }
        self.require_parent(path)?;
        self.nodes.insert(path.to_string(), VirtualNode::Directory);
        Ok(())
    }

    /// Remove a file or an empty directory.
    pub fn delete(&mut self, path: &CanonicalPath) -> Result<(), ShellError> {
        let is_directory = match self.get(path) {
            Some(node) => matches!(node, VirtualNode::Directory),
            None => return Err(ShellError::not_found(path)),
        };
        if path.is_root() {
            return Err(ShellError::invalid(format!("Cannot delete device root {}", path)));
        }
        if is_directory && !self.list_children(path)?.is_empty() {
            return Err(ShellError::invalid(format!("Directory '{}' is not empty", path)));
        }
        self.nodes.remove(&path.to_string());
        Ok(())
    }

    /// Insert a directory and any missing ancestors. Used for seeding only.
    pub fn seed_directory(&mut self, path: &CanonicalPath) {
        let mut current = CanonicalPath::root(path.device());
        self.nodes.entry(current.to_string()).or_insert(VirtualNode::Directory);
        for segment in path.segments() {
            current.push(segment);
            self.nodes.entry(current.to_string()).or_insert(VirtualNode::Directory);
        }
    }

    /// Insert a file, creating its ancestors. Used for seeding only.
    pub fn seed_file(&mut self, path: &CanonicalPath, content: Vec<u8>) {
        if let Some(parent) = path.parent() {
            self.seed_directory(&parent);
        }
        self.nodes.insert(path.to_string(), VirtualNode::File { content });
    }

    fn require_parent(&self, path: &CanonicalPath) -> Result<(), ShellError> {
        match path.parent() {
            Some(parent) if self.is_directory(&parent) => Ok(()),
            Some(parent) => Err(ShellError::not_found(parent)),
            None => Err(ShellError::invalid(format!("'{}' is a device root", path))),
        }
    }
}

/// Key prefix shared by all children of `dir`.
fn child_prefix(dir: &CanonicalPath) -> String {
    if dir.is_root() {
        dir.to_string()
    } else {
        format!("{}/", dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sys() -> CanonicalPath {
        CanonicalPath::root("SYS:")
    }

    fn store() -> VirtualStore {
        let mut store = VirtualStore::new();
        store.create_device_root("SYS:");
        store.seed_directory(&sys().join("Prefs").join("Env"));
        store.seed_file(&sys().join("Prefs").join("Env").join("PATH"), b"C: SYS:C".to_vec());
        store.seed_directory(&sys().join("C"));
        store
    }

    #[test]
    fn test_list_children_direct_only() {
        let store = store();
        let names: Vec<_> = store
            .list_children(&sys())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["C", "Prefs"]);
    }

    #[test]
    fn test_list_children_of_file_fails() {
        let store = store();
        let path = sys().join("Prefs").join("Env").join("PATH");
        assert!(matches!(
            store.list_children(&path).unwrap_err(),
            ShellError::PathNotFound { .. }
        ));
    }

    #[test]
    fn test_prefix_does_not_leak_into_sibling_names() {
        let mut store = store();
        store.seed_directory(&sys().join("Prefs-Old"));
        let names: Vec<_> = store
            .list_children(&sys().join("Prefs"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Env"]);
    }

    #[test]
    fn test_write_read_round_trip() {
        let mut store = store();
        let path = sys().join("C").join("notes");
        store.write_file(&path, b"hello\x00world".to_vec()).unwrap();
        assert_eq!(store.read_file(&path).unwrap(), b"hello\x00world");
    }

    #[test]
    fn test_write_does_not_create_parents() {
        let mut store = store();
        let path = sys().join("Missing").join("file");
        let err = store.write_file(&path, b"x".to_vec()).unwrap_err();
        assert!(matches!(err, ShellError::PathNotFound { ref path } if path == "SYS:Missing"));
        assert!(!store.exists(&sys().join("Missing")));
    }

    #[test]
    fn test_make_directory_reports_existing() {
        let mut store = store();
        let dir = sys().join("Work");
        store.make_directory(&dir).unwrap();
        let err = store.make_directory(&dir).unwrap_err();
        assert!(matches!(err, ShellError::AlreadyExists { .. }));
        let listed = store.list_children(&sys()).unwrap();
        assert_eq!(listed.iter().filter(|e| e.name == "Work").count(), 1);
    }

    #[test]
    fn test_delete_file_and_non_empty_dir() {
        let mut store = store();
        let file = sys().join("Prefs").join("Env").join("PATH");
        store.delete(&file).unwrap();
        assert!(!store.exists(&file));
        assert!(matches!(
            store.delete(&file).unwrap_err(),
            ShellError::PathNotFound { .. }
        ));
        assert!(store.delete(&sys().join("Prefs")).is_err());
        store.delete(&sys().join("Prefs").join("Env")).unwrap();
    }

    #[test]
    fn test_remove_device() {
        let mut store = store();
        store.create_device_root("RAM:");
        store.seed_directory(&CanonicalPath::root("RAM:").join("T"));
        store.remove_device("RAM:");
        assert!(!store.exists(&CanonicalPath::root("RAM:")));
        assert!(store.exists(&sys().join("C")));
    }
}
