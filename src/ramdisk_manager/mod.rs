// ============================================================================
// File: packages/ramvault/src/ramdisk_manager/mod.rs
// ----------------------------------------------------------------------------
// Lifecycle manager for the process-wide RAM disk.
//
// Provides:
// - Lazy, exactly-once creation of a memory-backed volume
// - Idempotent path retrieval with a cached outcome
// - Best-effort, repeatable teardown at shutdown
// ============================================================================

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::error;

use crate::config::RamdiskConfig;
use crate::error::{StorageError, StorageResult};
use crate::platform::BlockDeviceService;

// Submodules
mod global;
mod label;
mod lifecycle;
mod marker;


// Re-exports
pub use global::{global_ramdisk, init_global_ramdisk, safe_temp_dir, shutdown};
pub use marker::MARKER_FILE_NAME;

/// Observable lifecycle state of a [`RamDisk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamdiskState {
    /// No path has been requested yet
    Uninitialized,
    /// The one-time setup is running
    SettingUp,
    /// The volume is mounted and its path is being handed out
    Ready,
    /// Setup failed; the error is cached for every caller
    Failed,
    /// `shutdown` released whatever setup had acquired
    TornDown,
}

/// OS resources acquired by setup, released by teardown
#[derive(Debug, Default)]
pub(crate) struct DiskResources {
    /// Device handle, recorded before the mount attempt
    pub(crate) device: Option<String>,

    /// Mount path, present iff the volume is mounted
    pub(crate) mount_path: Option<PathBuf>,

    /// Label generated for this run
    pub(crate) volume_label: Option<String>,
}

/// Owner of the RAM-backed temp volume
///
/// Setup runs at most once, on the first `request_path` call; every caller,
/// concurrent or later, observes the same outcome. `shutdown` releases the
/// device and mount independently and never repeats a release.
pub struct RamDisk {
    /// Platform tooling that creates and removes the volume
    pub(crate) service: Box<dyn BlockDeviceService>,

    /// Naming and formatting options
    pub(crate) config: RamdiskConfig,

    /// Outcome of the one-time setup
    pub(crate) setup: OnceLock<StorageResult<PathBuf>>,

    /// Resources to release at teardown
    pub(crate) resources: Mutex<DiskResources>,

    /// Set when setup begins
    pub(crate) started: AtomicBool,

    /// Set once teardown has run after a setup attempt
    pub(crate) torn_down: AtomicBool,
}

impl RamDisk {
    /// Create a manager with the default configuration
    ///
    /// Nothing touches the OS until the first `request_path` call.
    pub fn new<S: BlockDeviceService + 'static>(service: S) -> Self {
        Self::build(Box::new(service), RamdiskConfig::default())
    }

    /// Create a manager with a custom configuration
    ///
    /// # Returns
    /// Configured manager, or `StorageError::Config` if validation fails
    pub fn with_config<S: BlockDeviceService + 'static>(
        service: S,
        config: RamdiskConfig,
    ) -> StorageResult<Self> {
        config.validate()?;
        Ok(Self::build(Box::new(service), config))
    }

    fn build(service: Box<dyn BlockDeviceService>, config: RamdiskConfig) -> Self {
        Self {
            service,
            config,
            setup: OnceLock::new(),
            resources: Mutex::new(DiskResources::default()),
            started: AtomicBool::new(false),
            torn_down: AtomicBool::new(false),
        }
    }

    /// Path of the mounted RAM volume
    ///
    /// The first call creates, formats and mounts the volume and blocks until
    /// that finishes; concurrent callers wait for the same result. A failure
    /// is permanent: later calls return a clone of the cached error without
    /// touching the OS again.
    ///
    /// # Returns
    /// The same absolute path on every successful call, or the setup error.
    /// After `shutdown` has torn the volume down, `StorageError::TornDown`.
    pub fn request_path(&self) -> StorageResult<PathBuf> {
        if self.torn_down.load(Ordering::Acquire) {
            return Err(StorageError::TornDown);
        }
        self.setup
            .get_or_init(|| {
                // A panicking service still counts as the one setup attempt.
                panic::catch_unwind(AssertUnwindSafe(|| self.run_setup())).unwrap_or_else(
                    |payload| {
                        let details = panic_message(payload.as_ref());
                        error!("RAM disk setup panicked: {}", details);
                        Err(StorageError::SetupPanicked { details })
                    },
                )
            })
            .clone()
    }

    /// Snapshot of the lifecycle state; never blocks on setup
    pub fn state(&self) -> RamdiskState {
        if self.torn_down.load(Ordering::Acquire) {
            return RamdiskState::TornDown;
        }
        match self.setup.get() {
            Some(Ok(_)) => RamdiskState::Ready,
            Some(Err(_)) => RamdiskState::Failed,
            None if self.started.load(Ordering::Acquire) => RamdiskState::SettingUp,
            None => RamdiskState::Uninitialized,
        }
    }

    /// Label chosen for the volume, once setup has started
    pub fn volume_label(&self) -> Option<String> {
        self.resources().volume_label.clone()
    }

    /// Active configuration
    pub fn config(&self) -> &RamdiskConfig {
        &self.config
    }

    pub(crate) fn resources(&self) -> MutexGuard<'_, DiskResources> {
        self.resources.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl fmt::Debug for RamDisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RamDisk")
            .field("config", &self.config)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
