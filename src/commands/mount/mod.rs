// src/commands/mount/mod.rs
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::commands::args::{missing, unquote};
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;
use crate::fs::emulator::load_shared_folders;
use crate::fs::{Device, DeviceKind, EmulatorKind};
use crate::path::normalize_device_name;
use crate::session::Session;

pub struct MountCommand;

pub struct UnmountCommand;

const USAGE: &str = "\
Usage:
  MOUNT                                  - Show mounted volumes
  MOUNT <device> FROM <host directory>   - Mount a host directory
  MOUNT <device> FROM WINUAE <config>    - Mount a WinUAE shared folder
  MOUNT <device> FROM FS-UAE <config>    - Mount an FS-UAE shared folder
  MOUNT LIST [WINUAE|FS-UAE] <config>... - List shared folders in configs
  MOUNT UNMOUNT <device>                 - Unmount a device
";

#[async_trait]
impl Command for MountCommand {
    fn name(&self) -> &'static str {
        "mount"
    }

    fn summary(&self) -> &'static str {
        "Show mounted volumes or mount host folders"
    }

    fn usage(&self) -> &'static str {
        "MOUNT [<device> FROM [WINUAE|FS-UAE] <source> | LIST <config>... | UNMOUNT <device>]"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let args = &ctx.args;
        let Some(first) = args.first() else {
            return Ok(CommandOutput::text(describe_volumes(ctx.session)));
        };

        match first.to_uppercase().as_str() {
            "LIST" => list_configs(&args[1..]).await.map(CommandOutput::text),
            "UNMOUNT" => match args.get(1) {
                Some(device) => unmount_device(ctx.session, device),
                None => Err(missing("device", "MOUNT UNMOUNT <device>")),
            },
            _ if args.len() >= 3 && args[1].eq_ignore_ascii_case("FROM") => {
                let device = first.clone();
                let source = &ctx.raw_args;
                match EmulatorKind::parse(&args[2]) {
                    Some(kind) if args.len() >= 4 => {
                        let config = rest_after_tokens(source, 3);
                        mount_shared_folder(ctx.session, &device, kind, Path::new(unquote(config))).await
                    }
                    Some(_) => Err(missing("config", "MOUNT <device> FROM WINUAE|FS-UAE <config>")),
                    None => {
                        let root = unquote(rest_after_tokens(source, 2));
                        mount_host_directory(ctx.session, &device, PathBuf::from(root))
                    }
                }
            }
            _ => Ok(CommandOutput::text(USAGE)),
        }
    }
}

#[async_trait]
impl Command for UnmountCommand {
    fn name(&self) -> &'static str {
        "unmount"
    }

    fn summary(&self) -> &'static str {
        "Unmount a device"
    }

    fn usage(&self) -> &'static str {
        "UNMOUNT <device>"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        match ctx.args.first() {
            Some(device) => unmount_device(ctx.session, device),
            None => Err(missing("device", self.usage())),
        }
    }
}

fn describe_volumes(session: &Session) -> String {
    let namespace = session.namespace();
    let mut out = String::from("Mounted volumes:\n");
    for device in namespace.devices().iter() {
        out.push_str(&format!("  {}", device.name()));
        match (&device.kind, &device.label) {
            (DeviceKind::RealOverlay { root }, Some(label)) => {
                out.push_str(&format!(" ({}: {})", label, root.display()))
            }
            (DeviceKind::RealOverlay { root }, None) => out.push_str(&format!(" ({})", root.display())),
            (DeviceKind::Virtual, _) if device.commands => out.push_str(" (Commands)"),
            (DeviceKind::Virtual, _) => {}
        }
        if device.read_only {
            out.push_str(" (Read-Only)");
        }
        out.push('\n');
    }
    if !namespace.aliases().is_empty() {
        out.push_str("Assigned:\n");
        for (name, target) in namespace.aliases().iter() {
            out.push_str(&format!("  {:<6} {}\n", name, target));
        }
    }
    out
}

/// The raw argument text after skipping `count` tokens, so quoted names
/// with spaces survive.
fn rest_after_tokens(raw: &str, count: usize) -> &str {
    let mut rest = raw.trim_start();
    for _ in 0..count {
        rest = match rest.find(char::is_whitespace) {
            Some(idx) => rest[idx..].trim_start(),
            None => "",
        };
    }
    rest.trim_end()
}

fn mount_host_directory(session: &mut Session, device: &str, root: PathBuf) -> Result<CommandOutput, ShellError> {
    if root.as_os_str().is_empty() {
        return Err(missing("host directory", "MOUNT <device> FROM <host directory>"));
    }
    let message = format!("{} mounted from {}\n", normalize_device_name(device), root.display());
    session.namespace_mut().mount(Device::real_overlay(device, root))?;
    Ok(CommandOutput::text(message))
}

async fn mount_shared_folder(
    session: &mut Session,
    device: &str,
    kind: EmulatorKind,
    config: &Path,
) -> Result<CommandOutput, ShellError> {
    let name = normalize_device_name(device);
    let folders = load_shared_folders(kind, config).await?;
    let folder = folders
        .into_iter()
        .find(|f| f.device == name)
        .ok_or_else(|| {
            ShellError::invalid(format!(
                "Device {} not found in {} config '{}'",
                name,
                kind,
                config.display()
            ))
        })?;

    let message = format!(
        "{} mounted from {} config '{}' ({})\n",
        name,
        kind,
        config.display(),
        folder.label
    );
    let device = Device::real_overlay(&name, folder.path)
        .with_label(folder.label)
        .read_only(folder.read_only);
    session.namespace_mut().mount(device)?;
    Ok(CommandOutput::text(message))
}

async fn list_configs(args: &[String]) -> Result<String, ShellError> {
    let (forced, configs) = match args.first().and_then(|a| EmulatorKind::parse(a)) {
        Some(kind) => (Some(kind), &args[1..]),
        None => (None, args),
    };
    if configs.is_empty() {
        return Err(missing("config", "MOUNT LIST [WINUAE|FS-UAE] <config>..."));
    }

    let mut out = String::new();
    for config in configs {
        let path = Path::new(unquote(config));
        let kind = forced.unwrap_or_else(|| EmulatorKind::from_config_path(path));
        let folders = load_shared_folders(kind, path).await?;
        out.push_str(&format!("{} config '{}':\n", kind, path.display()));
        if folders.is_empty() {
            out.push_str("  No shared folders\n");
        }
        for folder in folders {
            let access = if folder.read_only { "ro" } else { "rw" };
            out.push_str(&format!(
                "  {} \"{}\" -> {} ({})\n",
                folder.device,
                folder.label,
                folder.path.display(),
                access
            ));
        }
    }
    Ok(out)
}

/// Unmount a device. The home device stays; leaving the current device
/// sends the session home.
pub fn unmount_device(session: &mut Session, device: &str) -> Result<CommandOutput, ShellError> {
    let name = normalize_device_name(device);
    if session.home().device() == name {
        return Err(ShellError::invalid(format!("Cannot unmount the home device {}", name)));
    }
    session.namespace_mut().unmount(&name)?;
    let text = format!("{} unmounted\n", name);
    if session.current_dir().device() == name {
        let home = session.home().clone();
        return Ok(CommandOutput { text, ..CommandOutput::navigate(home) });
    }
    Ok(CommandOutput::text(text))
}
