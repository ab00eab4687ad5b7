// ============================================================================
// File: packages/ramvault/src/ramdisk_manager/lifecycle.rs
// ----------------------------------------------------------------------------
// Setup and teardown of the RAM volume
// ============================================================================

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use log::{error, info, warn};

use crate::config::RAMDISK_BLOCKS;
use crate::error::{StorageError, StorageResult};

use super::label::generate_volume_label;
use super::marker::write_marker;
use super::RamDisk;

impl RamDisk {
    /// One-time setup; only ever called from inside the `OnceLock` initializer
    ///
    /// Each acquired resource is recorded as soon as it exists so that
    /// `shutdown` can release it even if a later step fails. Nothing is rolled
    /// back here.
    pub(crate) fn run_setup(&self) -> StorageResult<PathBuf> {
        self.started.store(true, Ordering::Release);

        let label = generate_volume_label(&self.config.volume_prefix);
        info!("Creating RAM disk \"{}\" ({} sectors)", label, RAMDISK_BLOCKS);
        self.resources().volume_label = Some(label.clone());

        let device = self
            .service
            .create_memory_device(RAMDISK_BLOCKS)
            .map_err(|e| {
                error!("Failed to create RAM device: {}", e);
                StorageError::Allocation { source: Box::new(e) }
            })?;
        if device.trim().is_empty() {
            error!("RAM device service returned an empty handle");
            return Err(StorageError::Allocation {
                source: Box::new(StorageError::EmptyDeviceHandle),
            });
        }
        self.resources().device = Some(device.clone());

        let mount_path = self
            .service
            .format_and_mount(&device, &self.config.filesystem, &label)
            .map_err(|e| {
                // The device stays recorded; only shutdown releases it.
                error!("Failed to format and mount {}: {}", device, e);
                StorageError::Mount {
                    device: device.clone(),
                    volume: label.clone(),
                    source: Box::new(e),
                }
            })?;
        self.resources().mount_path = Some(mount_path.clone());

        let commands = self.service.cleanup_commands(&mount_path, &device);
        if let Err(e) = write_marker(&mount_path, &self.config.application, &label, &commands) {
            if self.config.require_marker {
                error!("{}", e);
                return Err(e);
            }
            warn!("{}; continuing without marker", e);
        }

        info!("RAM disk ready at {}", mount_path.display());
        Ok(mount_path)
    }

    /// Release the volume and its device
    ///
    /// Safe to call at any time and any number of times: unmount and device
    /// release each happen at most once, and only for resources setup actually
    /// recorded. Failures are logged and swallowed.
    pub fn shutdown(&self) {
        let mut resources = self.resources();

        if let Some(mount_path) = resources.mount_path.take() {
            info!("Unmounting RAM disk at {}", mount_path.display());
            if let Err(e) = self.service.unmount(&mount_path) {
                warn!("Failed to unmount {}: {}", mount_path.display(), e);
            }
        }

        if let Some(device) = resources.device.take().filter(|d| !d.trim().is_empty()) {
            info!("Releasing RAM device {}", device);
            if let Err(e) = self.service.release_device(&device) {
                warn!("Failed to release {}: {}", device, e);
            }
        }

        if self.started.load(Ordering::Acquire) {
            self.torn_down.store(true, Ordering::Release);
        }
    }
}
