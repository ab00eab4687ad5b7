// ============================================================================
// File: packages/ramvault/src/error.rs
// ----------------------------------------------------------------------------
// Error types for RAM disk setup and teardown
// ============================================================================

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Errors raised while provisioning the RAM-backed volume
///
/// The type is `Clone` because a failed setup is cached and handed to every
/// later caller of `request_path`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// The memory-backed block device could not be created
    #[error("Failed to allocate RAM block device: {source}")]
    Allocation {
        #[source]
        source: Box<StorageError>,
    },

    /// The device exists but could not be formatted or mounted
    #[error("Failed to format and mount {device} as \"{volume}\": {source}")]
    Mount {
        device: String,
        volume: String,
        #[source]
        source: Box<StorageError>,
    },

    /// The README marker could not be written into the new volume
    #[error("Failed to write marker file {}: {source}", path.display())]
    MarkerWrite {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// An external command failed to start or exited unsuccessfully
    #[error("Command `{command}` failed: {details}")]
    CommandFailed { command: String, details: String },

    /// Configuration is invalid
    #[error("Invalid ramdisk configuration: {0}")]
    Config(String),

    /// The service handed back an empty device handle
    #[error("Block-device service returned an empty device handle")]
    EmptyDeviceHandle,

    /// The setup routine panicked; cached like any other setup failure
    #[error("RAM disk setup panicked: {details}")]
    SetupPanicked { details: String },

    /// The volume was already torn down
    #[error("RAM disk has been shut down")]
    TornDown,
}

impl StorageError {
    /// Build a `CommandFailed` error from a program name, its arguments and a detail message
    pub fn command_failed<D: Into<String>>(program: &str, args: &[&str], details: D) -> Self {
        let command = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        StorageError::CommandFailed {
            command,
            details: details.into(),
        }
    }

    /// Wrap an I/O failure on the marker file
    pub fn marker_write(path: PathBuf, err: io::Error) -> Self {
        StorageError::MarkerWrite {
            path,
            source: Arc::new(err),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
