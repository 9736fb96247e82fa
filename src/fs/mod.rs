//! File System Module
//!
//! Storage behind the namespace:
//! - DeviceTable: which devices exist and how each is backed
//! - VirtualStore: flat in-memory map keyed by canonical path
//! - RealOverlay: a device mapped onto a host directory tree
//! - Namespace: routes canonical paths to the right backend

pub mod types;
pub mod device_table;
pub mod virtual_store;
pub mod real_overlay;
pub mod namespace;
pub mod emulator;

pub use types::*;
pub use device_table::{Device, DeviceKind, DeviceTable};
pub use virtual_store::{VirtualNode, VirtualStore};
pub use real_overlay::RealOverlay;
pub use namespace::Namespace;
pub use emulator::{EmulatorKind, SharedFolder};
