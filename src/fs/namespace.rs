//! Namespace
//!
//! One addressing scheme over every device: each operation looks up the
//! path's device and goes either to the virtual store or to a real overlay.

use std::time::SystemTime;

use tracing::{debug, info};

use super::device_table::{Device, DeviceTable};
use super::real_overlay::RealOverlay;
use super::types::ListingEntry;
use super::virtual_store::VirtualStore;
use crate::error::ShellError;
use crate::path::{CanonicalPath, LogicalAliases, PathResolver, Resolved};

#[derive(Debug, Clone)]
pub struct Namespace {
    devices: DeviceTable,
    aliases: LogicalAliases,
    store: VirtualStore,
}

impl Namespace {
    pub fn new(devices: DeviceTable, aliases: LogicalAliases, store: VirtualStore) -> Self {
        Self { devices, aliases, store }
    }

    pub fn devices(&self) -> &DeviceTable {
        &self.devices
    }

    pub fn aliases(&self) -> &LogicalAliases {
        &self.aliases
    }

    pub fn store(&self) -> &VirtualStore {
        &self.store
    }

    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.lookup(name)
    }

    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.devices, &self.aliases)
    }

    pub fn resolve(&self, raw: &str, cwd: &CanonicalPath) -> Result<Resolved, ShellError> {
        self.resolver().resolve(raw, cwd)
    }

    pub fn canonicalize(&self, raw: &str, cwd: &CanonicalPath) -> Result<CanonicalPath, ShellError> {
        self.resolver().canonicalize(raw, cwd)
    }

    /// A whole-line token that names a device or alias, such as `dh0:` or `S:`.
    pub fn is_navigable(&self, token: &str) -> bool {
        token.ends_with(':') && (self.devices.contains(token) || self.aliases.contains(token))
    }

    /// Root of a device whose listing shows the command table.
    pub fn is_command_root(&self, path: &CanonicalPath) -> bool {
        path.is_root()
            && self
                .devices
                .lookup(path.device())
                .map(|device| device.commands)
                .unwrap_or(false)
    }

    /// `None` for virtual devices.
    fn overlay(&self, path: &CanonicalPath) -> Result<Option<RealOverlay>, ShellError> {
        let device = self
            .devices
            .lookup(path.device())
            .ok_or_else(|| ShellError::unknown_device(path.device()))?;
        Ok(RealOverlay::for_device(device))
    }

    pub async fn exists(&self, path: &CanonicalPath) -> Result<bool, ShellError> {
        match self.overlay(path)? {
            Some(overlay) => overlay.exists(path).await,
            None => Ok(self.store.exists(path)),
        }
    }

    pub async fn is_directory(&self, path: &CanonicalPath) -> Result<bool, ShellError> {
        match self.overlay(path)? {
            Some(overlay) => overlay.is_directory(path).await,
            None => Ok(self.store.is_directory(path)),
        }
    }

    pub async fn is_file(&self, path: &CanonicalPath) -> Result<bool, ShellError> {
        Ok(self.exists(path).await? && !self.is_directory(path).await?)
    }

    /// Host mtime for real devices, store creation time for virtual ones.
    pub async fn modified(&self, path: &CanonicalPath) -> Result<SystemTime, ShellError> {
        match self.overlay(path)? {
            Some(overlay) => overlay.modified(path).await,
            None if self.store.exists(path) => Ok(self.store.created()),
            None => Err(ShellError::not_found(path)),
        }
    }

    pub async fn list(&self, dir: &CanonicalPath) -> Result<Vec<ListingEntry>, ShellError> {
        debug!(path = %dir, "listing");
        match self.overlay(dir)? {
            Some(overlay) => overlay.list_children(dir).await,
            None => self.store.list_children(dir),
        }
    }

    pub async fn read_file(&self, path: &CanonicalPath) -> Result<Vec<u8>, ShellError> {
        match self.overlay(path)? {
            Some(overlay) => overlay.read_file(path).await,
            None => self.store.read_file(path).map(<[u8]>::to_vec),
        }
    }

    pub async fn write_file(&mut self, path: &CanonicalPath, content: Vec<u8>) -> Result<(), ShellError> {
        match self.overlay(path)? {
            Some(overlay) => overlay.write_file(path, &content).await,
            None => self.store.write_file(path, content),
        }
    }

    pub async fn make_directory(&mut self, path: &CanonicalPath) -> Result<(), ShellError> {
        match self.overlay(path)? {
            Some(overlay) => overlay.make_directory(path).await,
            None => self.store.make_directory(path),
        }
    }

    pub async fn delete(&mut self, path: &CanonicalPath) -> Result<(), ShellError> {
        match self.overlay(path)? {
            Some(overlay) => overlay.delete(path).await,
            None => self.store.delete(path),
        }
    }

    /// Add a device. Names may not shadow a logical alias.
    pub fn mount(&mut self, device: Device) -> Result<(), ShellError> {
        if self.aliases.contains(device.name()) {
            return Err(ShellError::AlreadyExists { path: device.name().to_string() });
        }
        let name = device.name().to_string();
        let is_virtual = device.is_virtual();
        match device.host_root() {
            Some(root) => info!(device = %name, root = %root.display(), "mounting real overlay"),
            None => info!(device = %name, "mounting virtual device"),
        }
        self.devices.mount(device)?;
        if is_virtual {
            self.store.create_device_root(&name);
        }
        Ok(())
    }

    /// Remove a device. A virtual device's nodes go with it.
    pub fn unmount(&mut self, name: &str) -> Result<Device, ShellError> {
        let device = self.devices.unmount(name)?;
        if device.is_virtual() {
            self.store.remove_device(device.name());
        }
        info!(device = %device.name(), "unmounted");
        Ok(device)
    }

    /// Insert a seed directory (and ancestors) on a virtual device.
    pub fn seed_directory(&mut self, path: &CanonicalPath) -> Result<(), ShellError> {
        self.require_virtual(path)?;
        self.store.seed_directory(path);
        Ok(())
    }

    /// Insert a seed file (and ancestors) on a virtual device.
    pub fn seed_file(&mut self, path: &CanonicalPath, content: Vec<u8>) -> Result<(), ShellError> {
        self.require_virtual(path)?;
        self.store.seed_file(path, content);
        Ok(())
    }

    fn require_virtual(&self, path: &CanonicalPath) -> Result<(), ShellError> {
        match self.overlay(path)? {
            Some(_) => Err(ShellError::invalid(format!(
                "{} is backed by the host and cannot be seeded",
                path.device()
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace(host_root: &std::path::Path) -> Namespace {
        let mut ns = Namespace::new(
            DeviceTable::new(),
            LogicalAliases::with_defaults(),
            VirtualStore::new(),
        );
        ns.mount(Device::virtual_device("SYS:")).unwrap();
        ns.mount(Device::virtual_device("RAM:")).unwrap();
        ns.mount(Device::virtual_device("C:").with_commands()).unwrap();
        ns.mount(Device::real_overlay("DH0:", host_root)).unwrap();
        ns
    }

    #[tokio::test]
    async fn test_routes_virtual_and_real() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ns = namespace(tmp.path());
        let ram = CanonicalPath::root("RAM:").join("note");
        let dh0 = CanonicalPath::root("DH0:").join("note");

        ns.write_file(&ram, b"virtual".to_vec()).await.unwrap();
        ns.write_file(&dh0, b"real".to_vec()).await.unwrap();

        assert_eq!(ns.read_file(&ram).await.unwrap(), b"virtual");
        assert_eq!(ns.read_file(&dh0).await.unwrap(), b"real");
        assert!(ns.is_file(&dh0).await.unwrap());
        assert_eq!(std::fs::read(tmp.path().join("note")).unwrap(), b"real");
    }

    #[tokio::test]
    async fn test_mkdir_then_list_parent_once() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ns = namespace(tmp.path());
        for root in ["RAM:", "DH0:"] {
            let parent = CanonicalPath::root(root);
            ns.make_directory(&parent.join("Beta")).await.unwrap();
            ns.make_directory(&parent.join("alpha")).await.unwrap();
            let names: Vec<_> = ns
                .list(&parent)
                .await
                .unwrap()
                .into_iter()
                .map(|e| e.name)
                .collect();
            assert_eq!(names, vec!["alpha", "Beta"]);
        }
    }

    #[test]
    fn test_mount_rejects_alias_names() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ns = namespace(tmp.path());
        let err = ns.mount(Device::virtual_device("S:")).unwrap_err();
        assert!(matches!(err, ShellError::AlreadyExists { .. }));
    }

    #[test]
    fn test_unmount_purges_virtual_nodes() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ns = namespace(tmp.path());
        ns.seed_directory(&CanonicalPath::root("RAM:").join("T")).unwrap();
        ns.unmount("ram:").unwrap();
        assert!(!ns.store().exists(&CanonicalPath::root("RAM:").join("T")));
        assert!(!ns.is_navigable("RAM:"));
    }

    #[test]
    fn test_navigable_tokens() {
        let tmp = tempfile::tempdir().unwrap();
        let ns = namespace(tmp.path());
        assert!(ns.is_navigable("dh0:"));
        assert!(ns.is_navigable("S:"));
        assert!(!ns.is_navigable("SYS"));
        assert!(!ns.is_navigable("XYZ:"));
        assert!(ns.is_command_root(&CanonicalPath::root("C:")));
        assert!(!ns.is_command_root(&CanonicalPath::root("SYS:")));
    }

    #[test]
    fn test_seeding_real_device_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ns = namespace(tmp.path());
        assert!(ns.seed_directory(&CanonicalPath::root("DH0:").join("x")).is_err());
    }
}
