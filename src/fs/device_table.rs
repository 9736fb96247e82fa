// src/fs/device_table.rs
use indexmap::IndexMap;
use std::path::PathBuf;

use crate::error::ShellError;
use crate::path::{is_valid_device_name, normalize_device_name};

/// How a device is backed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceKind {
    Virtual,
    RealOverlay { root: PathBuf },
}

/// A top-level namespace root such as `SYS:` or `DH0:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    name: String,
    pub kind: DeviceKind,
    pub label: Option<String>,
    pub read_only: bool,
    /// Root listing shows the registered verbs as pseudo-files.
    pub commands: bool,
}

impl Device {
    pub fn virtual_device(name: &str) -> Self {
        Self {
            name: normalize_device_name(name),
            kind: DeviceKind::Virtual,
            label: None,
            read_only: false,
            commands: false,
        }
    }

    pub fn real_overlay(name: &str, root: impl Into<PathBuf>) -> Self {
        Self {
            kind: DeviceKind::RealOverlay { root: root.into() },
            ..Self::virtual_device(name)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_commands(mut self) -> Self {
        self.commands = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self.kind, DeviceKind::Virtual)
    }

    pub fn host_root(&self) -> Option<&PathBuf> {
        match &self.kind {
            DeviceKind::RealOverlay { root } => Some(root),
            DeviceKind::Virtual => None,
        }
    }
}

/// Registry of mounted devices, in mount order.
#[derive(Debug, Clone, Default)]
pub struct DeviceTable {
    devices: IndexMap<String, Device>,
}

impl DeviceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device. Names are unique ignoring case.
    ///
    /// A real overlay only needs a non-empty root here; a root that does not
    /// exist on the host shows up later as `PathNotFound`.
    pub fn mount(&mut self, device: Device) -> Result<(), ShellError> {
        if !is_valid_device_name(device.name()) {
            return Err(ShellError::invalid(format!(
                "Invalid device name '{}'",
                device.name()
            )));
        }
        if self.devices.contains_key(device.name()) {
            return Err(ShellError::AlreadyExists { path: device.name().to_string() });
        }
        if let Some(root) = device.host_root() {
            if root.as_os_str().is_empty() {
                return Err(ShellError::invalid(format!(
                    "Device {} needs a host root",
                    device.name()
                )));
            }
        }
        self.devices.insert(device.name().to_string(), device);
        Ok(())
    }

    pub fn unmount(&mut self, name: &str) -> Result<Device, ShellError> {
        let name = normalize_device_name(name);
        self.devices
            .shift_remove(&name)
            .ok_or(ShellError::UnknownDevice { device: name })
    }

    pub fn lookup(&self, name: &str) -> Option<&Device> {
        self.devices.get(&normalize_device_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
