//! macOS RAM disk service using hdiutil and diskutil
//!
//! macOS does not mount a tmpfs by default, so a RAM disk is created by:
//! - `hdiutil attach -nomount ram://<sectors>` to allocate the device
//! - `diskutil erasevolume` to format it and mount it under `/Volumes`
//! - `umount` and `hdiutil detach` to tear it down

use std::path::{Path, PathBuf};

use log::info;

use crate::command::{run_captured, run_with_io};
use crate::error::{StorageError, StorageResult};
use crate::platform::BlockDeviceService;

/// Directory under which `diskutil` mounts named volumes
pub const DEFAULT_VOLUMES_ROOT: &str = "/Volumes";

/// macOS block-device service
#[derive(Debug, Clone)]
pub struct DarwinRamdisk {
    /// Parent directory of mounted volumes
    volumes_root: PathBuf,
}

impl DarwinRamdisk {
    /// Create a service mounting under `/Volumes`
    pub fn new() -> Self {
        Self {
            volumes_root: PathBuf::from(DEFAULT_VOLUMES_ROOT),
        }
    }

    /// Create a service whose volumes appear under `root`
    pub fn with_volumes_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            volumes_root: root.into(),
        }
    }

    /// Parent directory of mounted volumes
    pub fn volumes_root(&self) -> &Path {
        &self.volumes_root
    }
}

impl Default for DarwinRamdisk {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDeviceService for DarwinRamdisk {
    fn create_memory_device(&self, size_in_blocks: u64) -> StorageResult<String> {
        let image = ram_image_url(size_in_blocks);
        let device = run_captured("hdiutil", &["attach", "-nomount", &image])?;

        if device.is_empty() {
            return Err(StorageError::command_failed(
                "hdiutil",
                &["attach", "-nomount", &image],
                "no device node in output",
            ));
        }

        info!("Allocated RAM device {} ({} sectors)", device, size_in_blocks);
        Ok(device)
    }

    fn format_and_mount(
        &self,
        device: &str,
        filesystem: &str,
        volume_label: &str,
    ) -> StorageResult<PathBuf> {
        run_captured("diskutil", &["erasevolume", filesystem, volume_label, device])?;

        let mount_path = self.volumes_root.join(volume_label);
        info!("Mounted {} at {}", device, mount_path.display());
        Ok(mount_path)
    }

    fn unmount(&self, mount_path: &Path) -> StorageResult<()> {
        let path = mount_path.to_string_lossy();
        run_with_io("umount", &[&*path])
    }

    fn release_device(&self, device: &str) -> StorageResult<()> {
        run_with_io("hdiutil", &["detach", device])
    }

    fn cleanup_commands(&self, mount_path: &Path, device: &str) -> Vec<String> {
        vec![
            "cd ~".to_string(),
            format!("umount {}", double_quote(&mount_path.to_string_lossy())),
            format!("hdiutil detach {}", device),
        ]
    }
}

/// `ram://` pseudo-URL understood by `hdiutil attach`
fn ram_image_url(size_in_blocks: u64) -> String {
    format!("ram://{}", size_in_blocks)
}

/// Quote a value for a POSIX shell inside double quotes
fn double_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
