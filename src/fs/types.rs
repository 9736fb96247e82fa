//! File System Types
//!
//! Entry vocabulary shared by the virtual store, the real overlay and the
//! lister.

use std::cmp::Ordering;
use std::time::SystemTime;

/// Kind of a namespace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Bytes; always 0 for directories.
    pub size: u64,
    pub modified: SystemTime,
    /// Command pseudo-files carry the executable protection bits.
    pub executable: bool,
}

impl ListingEntry {
    pub fn directory(name: impl Into<String>, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size: 0,
            modified,
            executable: false,
        }
    }

    pub fn file(name: impl Into<String>, size: u64, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size,
            modified,
            executable: false,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Display order: directories first, then files, each case-insensitively.
pub fn sort_entries(entries: &mut [ListingEntry]) {
    entries.sort_by(|a, b| match (a.is_directory(), b.is_directory()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });
}

/// Decode file content for display.
///
/// UTF-8 first, falling back to one character per byte (Latin-1) so legacy
/// text always renders.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_dirs_first_case_insensitive() {
        let now = SystemTime::now();
        let mut entries = vec![
            ListingEntry::file("beta", 1, now),
            ListingEntry::directory("zeta", now),
            ListingEntry::file("Alpha", 1, now),
            ListingEntry::directory("Gamma", now),
            ListingEntry::directory("alpha", now),
        ];
        sort_entries(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Gamma", "zeta", "Alpha", "beta"]);
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("Grüße".as_bytes()), "Grüße");
    }

    #[test]
    fn test_decode_falls_back_to_latin1() {
        assert_eq!(decode_text(&[0x47, 0x72, 0xFC, 0xDF, 0x65]), "Grüße");
    }
}
