// ============================================================================
// File: packages/ramvault/src/config.rs
// ----------------------------------------------------------------------------
// Configuration for the RAM disk manager
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};

/// Capacity of the RAM disk in 512-byte sectors (1 MiB)
pub const RAMDISK_BLOCKS: u64 = 2048;

/// Default name of the application owning the volume
pub const DEFAULT_APPLICATION: &str = "Pond";

/// Default human-readable prefix of the generated volume label
pub const DEFAULT_VOLUME_PREFIX: &str = "Pond RAM disk";

/// Default filesystem the device is formatted with
pub const DEFAULT_FILESYSTEM: &str = "HFS+";

/// Ramdisk configuration
///
/// Controls how the volume is named and formatted and whether the README
/// marker is mandatory. The capacity is fixed at [`RAMDISK_BLOCKS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RamdiskConfig {
    /// Application named in the README marker as the volume's owner
    pub application: String,

    /// Prefix of the volume label, followed by a random hex token
    pub volume_prefix: String,

    /// Filesystem personality passed to the formatter
    pub filesystem: String,

    /// Whether a failure to write the README marker aborts setup
    pub require_marker: bool,
}

impl RamdiskConfig {
    /// Create a configuration with the default label prefix and filesystem
    pub fn new() -> Self {
        Self {
            application: DEFAULT_APPLICATION.to_string(),
            volume_prefix: DEFAULT_VOLUME_PREFIX.to_string(),
            filesystem: DEFAULT_FILESYSTEM.to_string(),
            require_marker: true,
        }
    }

    /// Set the owning application name
    pub fn with_application<A: Into<String>>(mut self, application: A) -> Self {
        self.application = application.into();
        self
    }

    /// Set the volume label prefix
    pub fn with_volume_prefix<P: Into<String>>(mut self, prefix: P) -> Self {
        self.volume_prefix = prefix.into();
        self
    }

    /// Set the filesystem type
    pub fn with_filesystem<F: Into<String>>(mut self, filesystem: F) -> Self {
        self.filesystem = filesystem.into();
        self
    }

    /// Set whether the README marker is mandatory
    pub fn with_require_marker(mut self, require: bool) -> Self {
        self.require_marker = require;
        self
    }

    /// Validate the configuration
    ///
    /// Label prefixes end up as a directory name under the volumes root, so
    /// path separators are rejected along with empty values.
    pub fn validate(&self) -> StorageResult<()> {
        if self.application.trim().is_empty() {
            return Err(StorageError::Config("application name cannot be empty".into()));
        }
        if self.volume_prefix.trim().is_empty() {
            return Err(StorageError::Config("volume prefix cannot be empty".into()));
        }
        if self.volume_prefix.contains('/') || self.volume_prefix.contains('\0') {
            return Err(StorageError::Config(format!(
                "volume prefix contains a path separator or NUL: {:?}",
                self.volume_prefix
            )));
        }
        if self.filesystem.trim().is_empty() {
            return Err(StorageError::Config("filesystem cannot be empty".into()));
        }
        Ok(())
    }
}

impl Default for RamdiskConfig {
    fn default() -> Self {
        Self::new()
    }
}
