//! Shell configuration
//!
//! Devices, logical aliases, seed content and startup scripts for a session.
//! `ShellConfig::default()` reproduces the classic Workbench layout; a TOML
//! file can replace any part of it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::ShellError;
use crate::fs::{Device, DeviceTable, Namespace, VirtualStore};
use crate::path::{normalize_device_name, CanonicalPath, LogicalAliases};

pub const DEFAULT_STARTUP_SEQUENCE: &str = "\
; AmigaOS-style startup sequence
; This script runs when the WSA Terminal starts

; Mount additional volumes
; mount RAM: FROM RAM SIZE=1024

; Set environment variables
; setenv PATH C: SYS:S

; Run system tools
; execute SYS:Tools/Shell-Startup
";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("invalid config: {0}")]
    Shell(#[from] ShellError),
}

/// One device entry. A `root` makes it host-backed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub name: String,
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub read_only: bool,
}

impl DeviceConfig {
    fn virtual_device(name: &str) -> Self {
        Self { name: name.to_string(), root: None, label: None, read_only: false }
    }
}

/// A seed file on a virtual device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Initial current directory; must be a virtual directory.
    pub home: String,
    /// Device whose root lists the verbs as pseudo-files.
    pub command_device: Option<String>,
    pub devices: Vec<DeviceConfig>,
    pub aliases: IndexMap<String, String>,
    /// Seed directories, created with their ancestors.
    pub directories: Vec<String>,
    pub files: Vec<FileConfig>,
    /// Searched in order at startup; the first existing file runs.
    pub startup_scripts: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        let aliases = LogicalAliases::with_defaults()
            .iter()
            .map(|(name, target)| (name.to_string(), target.to_string()))
            .collect();

        let directories = [
            "SYS:Prefs",
            "SYS:Tools",
            "SYS:L",
            "SYS:S",
            "SYS:C",
            "SYS:DEVS",
            "SYS:Fonts",
            "SYS:WBStartup",
            "SYS:Prefs/Env-Archive",
            "SYS:Prefs/Env",
            "RAM:T",
        ]
        .iter()
        .map(|d| d.to_string())
        .collect();

        let files = [
            ("SYS:Prefs/Env-Archive/PATH", "C: SYS:S SYS:C"),
            ("SYS:Prefs/Env-Archive/SHELL", "WSA Terminal"),
            ("SYS:Prefs/Env/PATH", "C: SYS:S SYS:C"),
            ("SYS:Prefs/Env/SHELL", "WSA Terminal"),
            ("SYS:Tools/Shell-Startup", "Shell startup script"),
            ("SYS:S/Startup-Sequence", DEFAULT_STARTUP_SEQUENCE),
            ("RAM:T/Temp-File", "Temporary file"),
        ]
        .iter()
        .map(|(path, content)| FileConfig { path: path.to_string(), content: content.to_string() })
        .collect();

        Self {
            home: "SYS:".to_string(),
            command_device: Some("C:".to_string()),
            devices: vec![
                DeviceConfig::virtual_device("SYS:"),
                DeviceConfig::virtual_device("RAM:"),
                DeviceConfig::virtual_device("C:"),
                DeviceConfig {
                    name: "DH0:".to_string(),
                    root: Some(PathBuf::from(".")),
                    label: Some("Host Drive".to_string()),
                    read_only: false,
                },
            ],
            aliases,
            directories,
            files,
            startup_scripts: vec![
                "SYS:S/Startup-Sequence".to_string(),
                "SYS:S/startup-sequence".to_string(),
                "S:Startup-Sequence".to_string(),
                "S:startup-sequence".to_string(),
            ],
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Point `DH0:` at `root`, adding the device if the config has none.
    pub fn with_host_root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        match self
            .devices
            .iter_mut()
            .find(|d| normalize_device_name(&d.name) == "DH0:")
        {
            Some(device) => device.root = Some(root),
            None => self.devices.push(DeviceConfig {
                name: "DH0:".to_string(),
                root: Some(root),
                label: None,
                read_only: false,
            }),
        }
        self
    }

    /// Mount devices, register aliases and seed the virtual store.
    pub fn build_namespace(&self) -> Result<Namespace, ConfigError> {
        let mut devices = DeviceTable::new();
        let command_device = self.command_device.as_deref().map(normalize_device_name);
        for entry in &self.devices {
            let mut device = match &entry.root {
                Some(root) => Device::real_overlay(&entry.name, root.clone()),
                None => Device::virtual_device(&entry.name),
            }
            .read_only(entry.read_only);
            if let Some(label) = &entry.label {
                device = device.with_label(label.clone());
            }
            if command_device.as_deref() == Some(device.name()) {
                device = device.with_commands();
            }
            devices.mount(device)?;
        }
        if let Some(name) = &command_device {
            if !devices.contains(name) {
                return Err(ConfigError::Invalid(format!("command device {} is not configured", name)));
            }
        }

        let mut aliases = LogicalAliases::new();
        for (name, target) in &self.aliases {
            if devices.contains(name) {
                return Err(ConfigError::Invalid(format!("alias {} shadows a device", name)));
            }
            let target_device = target.split(':').next().unwrap_or_default();
            if !target.contains(':') || !devices.contains(target_device) {
                return Err(ConfigError::Invalid(format!(
                    "alias {} points at unknown device in '{}'",
                    name, target
                )));
            }
            aliases.insert(name, target);
        }

        let mut store = VirtualStore::new();
        for device in devices.iter().filter(|d| d.is_virtual()) {
            store.create_device_root(device.name());
        }
        let mut namespace = Namespace::new(devices, aliases, store);

        let anchor = CanonicalPath::root(&self.home_device());
        for dir in &self.directories {
            let path = namespace.canonicalize(dir, &anchor)?;
            namespace.seed_directory(&path)?;
        }
        for file in &self.files {
            let path = namespace.canonicalize(&file.path, &anchor)?;
            namespace.seed_file(&path, file.content.clone().into_bytes())?;
        }
        Ok(namespace)
    }

    fn home_device(&self) -> String {
        match self.home.find(':') {
            Some(idx) => self.home[..=idx].to_string(),
            None => self.home.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let namespace = ShellConfig::default().build_namespace().unwrap();
        let sys = CanonicalPath::root("SYS:");
        let names: Vec<_> = namespace
            .store()
            .list_children(&sys)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["C", "DEVS", "Fonts", "L", "Prefs", "S", "Tools", "WBStartup"]);
        assert!(namespace.store().is_file(&CanonicalPath::root("RAM:").join("T").join("Temp-File")));
        assert!(namespace.is_command_root(&CanonicalPath::root("C:")));
        assert_eq!(namespace.aliases().lookup("T:"), Some("RAM:T"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ShellConfig::from_toml_str(
            r#"
home = "RAM:"
startup_scripts = []
"#,
        )
        .unwrap();
        assert_eq!(config.home, "RAM:");
        assert!(config.startup_scripts.is_empty());
        assert_eq!(config.devices.len(), 4);
    }

    #[test]
    fn test_toml_devices_and_aliases() {
        let config = ShellConfig::from_toml_str(
            r#"
home = "WORK:"
command_device = "WORK:"
directories = ["WORK:Projects"]
aliases = { "P:" = "WORK:Projects" }

[[devices]]
name = "work"

[[devices]]
name = "share"
root = "/srv/share"
label = "Share"
read_only = true

[[files]]
path = "WORK:Projects/readme"
content = "hi"
"#,
        )
        .unwrap();
        let namespace = config.build_namespace().unwrap();
        let share = namespace.device("SHARE:").unwrap();
        assert!(share.read_only);
        assert_eq!(share.label.as_deref(), Some("Share"));
        let readme = namespace
            .canonicalize("P:readme", &CanonicalPath::root("WORK:"))
            .unwrap();
        assert_eq!(namespace.store().read_file(&readme).unwrap(), b"hi");
    }

    #[test]
    fn test_alias_shadowing_device_is_rejected() {
        let mut config = ShellConfig::default();
        config.aliases.insert("RAM:".to_string(), "SYS:S".to_string());
        assert!(matches!(config.build_namespace(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_seed_on_host_device_is_rejected() {
        let mut config = ShellConfig::default();
        config.directories.push("DH0:Nope".to_string());
        assert!(matches!(config.build_namespace(), Err(ConfigError::Shell(_))));
    }

    #[test]
    fn test_with_host_root() {
        let config = ShellConfig::default().with_host_root("/mnt/amiga");
        let dh0 = config.devices.iter().find(|d| d.name == "DH0:").unwrap();
        assert_eq!(dh0.root, Some(PathBuf::from("/mnt/amiga")));
    }
}
