// src/path/resolver.rs
use super::{CanonicalPath, LogicalAliases};
use crate::error::ShellError;
use crate::fs::DeviceTable;

/// Outcome of resolving a raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: CanonicalPath,
    /// A `..` tried to climb above a device root and was ignored.
    pub clamped: bool,
}

/// Turns raw path tokens into canonical paths.
///
/// Resolution only consults the device and alias tables; whether the result
/// exists is for the caller to check.
pub struct PathResolver<'a> {
    devices: &'a DeviceTable,
    aliases: &'a LogicalAliases,
}

impl<'a> PathResolver<'a> {
    pub fn new(devices: &'a DeviceTable, aliases: &'a LogicalAliases) -> Self {
        Self { devices, aliases }
    }

    pub fn resolve(&self, raw: &str, cwd: &CanonicalPath) -> Result<Resolved, ShellError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Resolved { path: cwd.clone(), clamped: false });
        }

        let (mut path, remainder) = match raw.find(':') {
            Some(idx) => (self.anchor(&raw[..=idx])?, &raw[idx + 1..]),
            None => (cwd.clone(), raw),
        };

        let clamped = walk(&mut path, remainder);
        Ok(Resolved { path, clamped })
    }

    /// Resolve and drop the clamping flag.
    pub fn canonicalize(&self, raw: &str, cwd: &CanonicalPath) -> Result<CanonicalPath, ShellError> {
        self.resolve(raw, cwd).map(|resolved| resolved.path)
    }

    /// Starting point for an absolute token: an alias target or a device root.
    fn anchor(&self, device: &str) -> Result<CanonicalPath, ShellError> {
        if let Some(target) = self.aliases.lookup(device) {
            let (target_device, subpath) = match target.find(':') {
                Some(idx) => (&target[..=idx], &target[idx + 1..]),
                None => (target, ""),
            };
            let mut path = self.device_root(target_device)?;
            walk(&mut path, subpath);
            return Ok(path);
        }
        self.device_root(device)
    }

    fn device_root(&self, device: &str) -> Result<CanonicalPath, ShellError> {
        self.devices
            .lookup(device)
            .map(|dev| CanonicalPath::root(dev.name()))
            .ok_or_else(|| ShellError::unknown_device(device))
    }
}

/// Apply `/`-separated segments to `path` left to right.
/// Returns true if a `..` was swallowed at the device root.
fn walk(path: &mut CanonicalPath, remainder: &str) -> bool {
    let mut clamped = false;
    for segment in remainder.split('/') {
        match segment.trim() {
            "" | "." => {}
            ".." => {
                if !path.pop() {
                    clamped = true;
                }
            }
            name => path.push(name),
        }
    }
    clamped
}
