// src/listing/mod.rs
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::SystemTime;

use crate::error::ShellError;
use crate::fs::{sort_entries, EntryKind, ListingEntry, Namespace};
use crate::path::CanonicalPath;

/// Size reported for a command pseudo-file with no stored override.
pub const COMMAND_FILE_SIZE: u64 = 1024;

const NAME_WIDTH: usize = 22;

/// A directory listing ready to render.
#[derive(Debug, Clone)]
pub struct FormattedListing {
    pub path: CanonicalPath,
    pub header: String,
    /// Extra line under the header for labelled host volumes.
    pub volume_note: Option<String>,
    pub entries: Vec<ListingEntry>,
    pub files: usize,
    pub dirs: usize,
    pub bytes: u64,
    pub read_only: bool,
}

impl FormattedListing {
    pub fn footer(&self) -> String {
        let mut footer = format!(
            "{} files - {} directories - {} bytes used",
            self.files, self.dirs, self.bytes
        );
        if self.read_only {
            footer.push_str(" (Read-Only)");
        }
        footer
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header);
        if let Some(note) = &self.volume_note {
            let _ = writeln!(out, "{}", note);
        }
        for entry in &self.entries {
            let _ = writeln!(out, "{}", format_row(entry));
        }
        let _ = writeln!(out, "{}", self.footer());
        out
    }
}

/// Produces listings for any directory, virtual or host-backed.
pub struct Lister<'a> {
    namespace: &'a Namespace,
    commands: Vec<String>,
}

impl<'a> Lister<'a> {
    /// `commands` are the verbs shown as pseudo-files at a command device root.
    pub fn new(namespace: &'a Namespace, commands: Vec<String>) -> Self {
        Self { namespace, commands }
    }

    pub async fn format(&self, path: &CanonicalPath) -> Result<FormattedListing, ShellError> {
        let modified = self.namespace.modified(path).await?;
        let mut entries = self.namespace.list(path).await?;
        if self.namespace.is_command_root(path) {
            entries = self.with_command_files(entries);
        }

        let dirs = entries.iter().filter(|e| e.is_directory()).count();
        let files = entries.len() - dirs;
        let bytes = entries
            .iter()
            .filter(|e| e.kind == EntryKind::File)
            .map(|e| e.size)
            .sum();

        let device = self.namespace.device(path.device());
        let volume_note = device
            .filter(|d| !d.is_virtual())
            .and_then(|d| d.label.as_ref())
            .map(|label| format!("(Volume \"{}\")", label));
        let read_only = device.map(|d| d.read_only).unwrap_or(false);

        Ok(FormattedListing {
            path: path.clone(),
            header: format!(
                "Directory \"{}\" on {} {}",
                path,
                format_day(modified),
                format_date(modified)
            ),
            volume_note,
            entries,
            files,
            dirs,
            bytes,
            read_only,
        })
    }

    /// Merge the command table into a command device's root entries.
    ///
    /// A stored file with a command's name overrides the default size.
    fn with_command_files(&self, stored: Vec<ListingEntry>) -> Vec<ListingEntry> {
        let created = self.namespace.store().created();
        let mut by_name: HashMap<String, ListingEntry> = stored
            .into_iter()
            .map(|e| (e.name.to_lowercase(), e))
            .collect();

        let mut entries = Vec::with_capacity(by_name.len() + self.commands.len());
        for command in &self.commands {
            let mut entry = match by_name.remove(&command.to_lowercase()) {
                Some(existing) if existing.kind == EntryKind::File => existing,
                Some(existing) => {
                    entries.push(existing);
                    continue;
                }
                None => ListingEntry::file(display_command_name(command), COMMAND_FILE_SIZE, created),
            };
            entry.executable = true;
            entries.push(entry);
        }
        entries.extend(by_name.into_values());
        sort_entries(&mut entries);
        entries
    }
}

/// `dir` → `Dir`
pub fn display_command_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Protection bits column. Purely cosmetic.
pub fn format_flags(entry: &ListingEntry) -> &'static str {
    if entry.executable {
        "---xrwed"
    } else {
        "----rwed"
    }
}

pub fn format_row(entry: &ListingEntry) -> String {
    let date = format_timestamp(entry.modified);
    match entry.kind {
        EntryKind::Directory => format!(
            " {:<width$} (dir)    {}     {}",
            entry.name,
            format_flags(entry),
            date,
            width = NAME_WIDTH
        ),
        EntryKind::File => format!(
            " {:<width$} {:>7}  {}     {}",
            entry.name,
            entry.size,
            format_flags(entry),
            date,
            width = NAME_WIDTH
        ),
    }
}

/// `19-Oct-26`
pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%d-%b-%y").to_string()
}

/// `19-Oct-26 14:03:11`
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%d-%b-%y %H:%M:%S").to_string()
}

/// `Monday`
pub fn format_day(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%A").to_string()
}
