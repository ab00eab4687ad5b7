// ============================================================================
// File: packages/ramvault/src/lib.rs
// ----------------------------------------------------------------------------
// RAM-backed safe temp directory for desktop applications.
//
// macOS has no tmpfs mounted by default. This crate creates a RAM disk on
// first use, hands its path to every caller, and removes it at shutdown so
// temporary files never reach durable storage.
// ============================================================================

//! # ramvault
//!
//! ```no_run
//! let dir = ramvault::safe_temp_dir()?;
//! std::fs::write(dir.join("scratch"), b"never hits the SSD")?;
//! ramvault::shutdown();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod platform;
pub mod ramdisk_manager;

pub use config::{RamdiskConfig, RAMDISK_BLOCKS};
pub use error::{StorageError, StorageResult};
pub use platform::{BlockDeviceService, DarwinRamdisk};
pub use ramdisk_manager::{
    global_ramdisk, init_global_ramdisk, safe_temp_dir, shutdown, RamDisk, RamdiskState,
    MARKER_FILE_NAME,
};
