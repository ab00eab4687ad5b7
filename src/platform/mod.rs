// ============================================================================
// File: packages/ramvault/src/platform/mod.rs
// ----------------------------------------------------------------------------
// Platform services backing the RAM disk manager.
//
// Provides:
// - The block-device service contract
// - The macOS implementation built on hdiutil and diskutil
// ============================================================================

mod darwin;
mod ramdisk;

pub use darwin::{DarwinRamdisk, DEFAULT_VOLUMES_ROOT};
pub use ramdisk::BlockDeviceService;
