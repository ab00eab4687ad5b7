// ============================================================================
// File: packages/ramvault/src/ramdisk_manager/marker.rs
// ----------------------------------------------------------------------------
// README marker written into the root of the RAM volume
// ============================================================================

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;

use crate::error::{StorageError, StorageResult};

/// Name of the marker file at the volume root
pub const MARKER_FILE_NAME: &str = "README";

/// Render the marker text
pub(crate) fn render_marker(
    application: &str,
    volume_label: &str,
    cleanup_commands: &[String],
    created_at: DateTime<Local>,
    pid: u32,
) -> String {
    let mut text = format!(
        "{application} Safe Temp Directory: {volume_label}\n\
         \n\
         This directory contains a RAM filesystem created by {application}\n\
         (process {pid}) at {created} so that temporary files never reach\n\
         durable storage. Unless {application} is still running, it failed to\n\
         clean up after itself. Run the following commands to remove it:\n\
         \n",
        created = created_at.format("%Y-%m-%d %H:%M:%S %z"),
    );
    for command in cleanup_commands {
        text.push_str("$ ");
        text.push_str(command);
        text.push('\n');
    }
    text
}

/// Write the marker into `mount_path`
///
/// # Returns
/// Path of the written file
pub(crate) fn write_marker(
    mount_path: &Path,
    application: &str,
    volume_label: &str,
    cleanup_commands: &[String],
) -> StorageResult<PathBuf> {
    let path = mount_path.join(MARKER_FILE_NAME);
    let text = render_marker(
        application,
        volume_label,
        cleanup_commands,
        Local::now(),
        std::process::id(),
    );

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options
        .open(&path)
        .map_err(|e| StorageError::marker_write(path.clone(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| StorageError::marker_write(path.clone(), e))?;

    info!("Wrote marker {}", path.display());
    Ok(path)
}
