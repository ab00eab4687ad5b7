// ============================================================================
// File: packages/ramvault/src/platform/ramdisk.rs
// ----------------------------------------------------------------------------
// Block-device service trait for RAM disk provisioning.
//
// Defines the contract between the lifecycle manager and the platform
// tooling that creates, formats, mounts and releases memory-backed devices.
// ============================================================================

use std::path::{Path, PathBuf};

use crate::error::StorageResult;

/// Platform block-device service
///
/// The lifecycle manager drives a RAM disk exclusively through this trait.
/// Implementations are stateless with respect to the disk: every handle and
/// path they need is passed back in by the caller.
pub trait BlockDeviceService: Send + Sync {
    /// Allocate a memory-backed block device
    ///
    /// # Arguments
    /// * `size_in_blocks` - Capacity in 512-byte sectors
    ///
    /// # Returns
    /// Opaque device handle, e.g. `/dev/disk4`
    fn create_memory_device(&self, size_in_blocks: u64) -> StorageResult<String>;

    /// Format a device and mount it under a volume named `volume_label`
    ///
    /// # Returns
    /// Absolute path of the mounted volume
    fn format_and_mount(
        &self,
        device: &str,
        filesystem: &str,
        volume_label: &str,
    ) -> StorageResult<PathBuf>;

    /// Unmount a mounted volume
    fn unmount(&self, mount_path: &Path) -> StorageResult<()>;

    /// Release a device returned by `create_memory_device`
    fn release_device(&self, device: &str) -> StorageResult<()>;

    /// Shell commands an operator runs to clean up by hand
    ///
    /// Written into the README marker so a crashed process can be cleaned up
    /// without knowing which tool created the disk.
    fn cleanup_commands(&self, mount_path: &Path, device: &str) -> Vec<String>;
}
