// ============================================================================
// File: packages/ramvault/src/ramdisk_manager/global.rs
// ----------------------------------------------------------------------------
// Global RAM disk singleton
// ============================================================================

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::config::RamdiskConfig;
use crate::error::{StorageError, StorageResult};
use crate::platform::DarwinRamdisk;

use super::RamDisk;

/// Global RAM disk singleton
static GLOBAL_RAMDISK: OnceLock<RamDisk> = OnceLock::new();

/// Get the global RAM disk, backed by the macOS disk utilities
///
/// Creating the manager is free; the volume itself only appears on the first
/// `request_path` call.
pub fn global_ramdisk() -> &'static RamDisk {
    GLOBAL_RAMDISK.get_or_init(|| RamDisk::new(DarwinRamdisk::new()))
}

/// Initialize the global RAM disk with a custom configuration
///
/// # Arguments
/// * `config` - Naming and formatting options
///
/// # Returns
/// `StorageError::Config` if the configuration is invalid or the global
/// manager already exists
pub fn init_global_ramdisk(config: RamdiskConfig) -> StorageResult<()> {
    let ramdisk = RamDisk::with_config(DarwinRamdisk::new(), config)?;

    GLOBAL_RAMDISK
        .set(ramdisk)
        .map_err(|_| StorageError::Config("global RAM disk already initialized".into()))
}

/// Path of the process-wide safe temp directory
pub fn safe_temp_dir() -> StorageResult<PathBuf> {
    global_ramdisk().request_path()
}

/// Tear down the global RAM disk if one was ever created
///
/// Intended for the application's exit hook. Does not instantiate the global
/// manager as a side effect.
pub fn shutdown() {
    if let Some(ramdisk) = GLOBAL_RAMDISK.get() {
        ramdisk.shutdown();
    }
}
