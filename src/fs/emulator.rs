//! Emulator configuration files
//!
//! Shared folders declared in WinUAE (`.uae`) and FS-UAE (`.fs-uae`)
//! configurations, so they can be mounted as host-backed devices.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::ShellError;
use crate::path::normalize_device_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorKind {
    WinUae,
    FsUae,
}

impl EmulatorKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "WINUAE" => Some(Self::WinUae),
            "FS-UAE" | "FSUAE" => Some(Self::FsUae),
            _ => None,
        }
    }

    /// Guess from a file name; anything that is not `.fs-uae` is WinUAE.
    pub fn from_config_path(path: &Path) -> Self {
        let name = path.to_string_lossy().to_lowercase();
        if name.ends_with(".fs-uae") {
            Self::FsUae
        } else {
            Self::WinUae
        }
    }
}

impl fmt::Display for EmulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WinUae => write!(f, "WinUAE"),
            Self::FsUae => write!(f, "FS-UAE"),
        }
    }
}

/// One host directory an emulator exposes as an Amiga volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFolder {
    pub device: String,
    pub label: String,
    pub path: PathBuf,
    pub read_only: bool,
}

/// `filesystem2=rw,DH0:Label:C:\Path,0`
pub fn parse_winuae(text: &str) -> Vec<SharedFolder> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix("filesystem2="))
        .filter_map(|value| {
            let mut parts = value.split(',');
            let access = parts.next()?.trim();
            let info = parts.next()?;
            parts.next()?;
            let mut fields = info.splitn(3, ':');
            let device = fields.next()?.trim();
            let label = fields.next()?.trim();
            let path = fields.next()?.trim();
            if device.is_empty() || path.is_empty() {
                return None;
            }
            Some(SharedFolder {
                device: normalize_device_name(device),
                label: label.to_string(),
                path: PathBuf::from(path),
                read_only: access.eq_ignore_ascii_case("ro"),
            })
        })
        .collect()
}

/// `hard_drive_N = path`, with optional `hard_drive_N_label` and
/// `hard_drive_N_read_only`. Disk image files are skipped.
pub fn parse_fsuae(text: &str) -> Vec<SharedFolder> {
    let mut drives: BTreeMap<u32, SharedFolder> = BTreeMap::new();
    let mut labels: BTreeMap<u32, String> = BTreeMap::new();
    let mut read_only: BTreeMap<u32, bool> = BTreeMap::new();

    for line in text.lines() {
        let Some((key, value)) = line.trim().split_once('=') else {
            continue;
        };
        let Some(rest) = key.trim().strip_prefix("hard_drive_") else {
            continue;
        };
        let value = value.trim();
        let (number, property) = match rest.split_once('_') {
            Some((number, property)) => (number, Some(property)),
            None => (rest, None),
        };
        let Ok(number) = number.parse::<u32>() else {
            continue;
        };
        match property {
            None if !is_disk_image(value) && !value.is_empty() => {
                drives.insert(
                    number,
                    SharedFolder {
                        device: format!("DH{}:", number),
                        label: format!("Drive{}", number),
                        path: PathBuf::from(value),
                        read_only: false,
                    },
                );
            }
            Some("label") => {
                labels.insert(number, value.to_string());
            }
            Some("read_only") => {
                read_only.insert(number, matches!(value, "1" | "true"));
            }
            _ => {}
        }
    }

    drives
        .into_iter()
        .map(|(number, mut folder)| {
            if let Some(label) = labels.remove(&number) {
                folder.label = label;
            }
            folder.read_only = read_only.get(&number).copied().unwrap_or(false);
            folder
        })
        .collect()
}

fn is_disk_image(value: &str) -> bool {
    let lower = value.to_lowercase();
    [".hdf", ".hdz", ".zip", ".adf"].iter().any(|ext| lower.ends_with(ext))
}

/// Read a configuration file and return its shared folders.
pub async fn load_shared_folders(
    kind: EmulatorKind,
    config: &Path,
) -> Result<Vec<SharedFolder>, ShellError> {
    let bytes = fs::read(config)
        .await
        .map_err(|err| ShellError::from_io(err, config.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let folders = match kind {
        EmulatorKind::WinUae => parse_winuae(&text),
        EmulatorKind::FsUae => parse_fsuae(&text),
    };
    debug!(config = %config.display(), %kind, count = folders.len(), "parsed emulator config");
    Ok(folders)
}
