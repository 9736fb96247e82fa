//! Real Overlay
//!
//! A device backed by a host directory. Canonical segments are joined onto the
//! mount root with host separators and every call goes straight to `tokio::fs`,
//! so out-of-band changes on the host are always visible.

use std::ffi::OsString;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::fs;
use tracing::debug;

use super::device_table::{Device, DeviceKind};
use super::types::{sort_entries, ListingEntry};
use crate::error::ShellError;
use crate::path::CanonicalPath;

/// Host-backed storage for one mounted device.
#[derive(Debug, Clone)]
pub struct RealOverlay {
    root: PathBuf,
    read_only: bool,
}

impl RealOverlay {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            read_only: false,
        }
    }

    pub fn for_device(device: &Device) -> Option<Self> {
        match &device.kind {
            DeviceKind::RealOverlay { root } => Some(Self {
                root: root.clone(),
                read_only: device.read_only,
            }),
            DeviceKind::Virtual => None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Host path for `path`, ignoring its device.
    pub fn host_path(&self, path: &CanonicalPath) -> PathBuf {
        let mut host = self.root.clone();
        for segment in path.segments() {
            host.push(segment);
        }
        host
    }

    /// Find the host object behind `path`: the exact mapping first, then the
    /// same path with a trailing separator.
    async fn locate(&self, path: &CanonicalPath) -> Result<(PathBuf, Metadata), ShellError> {
        let exact = self.host_path(path);
        match fs::metadata(&exact).await {
            Ok(meta) => return Ok((exact, meta)),
            Err(err) if is_missing(&err) => {}
            Err(err) => return Err(ShellError::from_io(err, path)),
        }

        let mut alternate = OsString::from(exact.as_os_str());
        alternate.push(MAIN_SEPARATOR_STR);
        let alternate = PathBuf::from(alternate);
        debug!(path = %path, host = %alternate.display(), "retrying with trailing separator");
        match fs::metadata(&alternate).await {
            Ok(meta) => Ok((alternate, meta)),
            Err(err) => Err(ShellError::from_io(err, path)),
        }
    }

    pub async fn exists(&self, path: &CanonicalPath) -> Result<bool, ShellError> {
        match self.locate(path).await {
            Ok(_) => Ok(true),
            Err(ShellError::PathNotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn is_directory(&self, path: &CanonicalPath) -> Result<bool, ShellError> {
        match self.locate(path).await {
            Ok((_, meta)) => Ok(meta.is_dir()),
            Err(ShellError::PathNotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn modified(&self, path: &CanonicalPath) -> Result<SystemTime, ShellError> {
        let (_, meta) = self.locate(path).await?;
        Ok(meta.modified().unwrap_or(UNIX_EPOCH))
    }

    /// Direct children of a host directory, sorted for display.
    ///
    /// An entry whose metadata cannot be read is still listed, as an empty
    /// file, so one bad entry does not hide the rest.
    pub async fn list_children(&self, dir: &CanonicalPath) -> Result<Vec<ListingEntry>, ShellError> {
        let (host, meta) = self.locate(dir).await?;
        if !meta.is_dir() {
            return Err(ShellError::not_found(dir));
        }

        let mut reader = fs::read_dir(&host)
            .await
            .map_err(|err| ShellError::from_io(err, dir))?;
        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|err| ShellError::from_io(err, dir))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            let listed = match fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_dir() => {
                    ListingEntry::directory(name, meta.modified().unwrap_or(UNIX_EPOCH))
                }
                Ok(meta) => {
                    ListingEntry::file(name, meta.len(), meta.modified().unwrap_or(UNIX_EPOCH))
                }
                Err(err) => {
                    debug!(entry = %entry.path().display(), error = %err, "unreadable entry");
                    ListingEntry::file(name, 0, UNIX_EPOCH)
                }
            };
            entries.push(listed);
        }
        sort_entries(&mut entries);
        Ok(entries)
    }

    pub async fn read_file(&self, path: &CanonicalPath) -> Result<Vec<u8>, ShellError> {
        let (host, meta) = self.locate(path).await?;
        if meta.is_dir() {
            return Err(ShellError::invalid(format!("'{}' is a directory", path)));
        }
        fs::read(&host).await.map_err(|err| ShellError::from_io(err, path))
    }

    /// Create or overwrite a host file. Missing parents are not created.
    pub async fn write_file(&self, path: &CanonicalPath, content: &[u8]) -> Result<(), ShellError> {
        self.check_writable(path)?;
        if path.is_root() || self.is_directory(path).await? {
            return Err(ShellError::invalid(format!("'{}' is a directory", path)));
        }
        self.require_parent(path).await?;
        fs::write(self.host_path(path), content)
            .await
            .map_err(|err| ShellError::from_io(err, path))
    }

    pub async fn make_directory(&self, path: &CanonicalPath) -> Result<(), ShellError> {
        self.check_writable(path)?;
        if self.exists(path).await? {
            return Err(ShellError::AlreadyExists { path: path.to_string() });
        }
        self.require_parent(path).await?;
        fs::create_dir(self.host_path(path))
            .await
            .map_err(|err| ShellError::from_io(err, path))
    }

    /// Remove a host file or empty directory.
    pub async fn delete(&self, path: &CanonicalPath) -> Result<(), ShellError> {
        self.check_writable(path)?;
        if path.is_root() {
            return Err(ShellError::invalid(format!("Cannot delete device root {}", path)));
        }
        let (host, meta) = self.locate(path).await?;
        let result = if meta.is_dir() {
            if !self.list_children(path).await?.is_empty() {
                return Err(ShellError::invalid(format!("Directory '{}' is not empty", path)));
            }
            fs::remove_dir(&host).await
        } else {
            fs::remove_file(&host).await
        };
        result.map_err(|err| ShellError::from_io(err, path))
    }

    fn check_writable(&self, path: &CanonicalPath) -> Result<(), ShellError> {
        if self.read_only {
            Err(ShellError::AccessDenied { path: path.to_string() })
        } else {
            Ok(())
        }
    }

    async fn require_parent(&self, path: &CanonicalPath) -> Result<(), ShellError> {
        match path.parent() {
            Some(parent) if self.is_directory(&parent).await? => Ok(()),
            Some(parent) => Err(ShellError::not_found(parent)),
            None => Err(ShellError::invalid(format!("'{}' is a device root", path))),
        }
    }
}

/// No object at this host path, including a path that runs through a file.
fn is_missing(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}
