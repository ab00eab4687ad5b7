// ============================================================================
// File: packages/ramvault/src/command.rs
// ----------------------------------------------------------------------------
// External command helpers for the disk utilities
// ============================================================================

use std::process::Command;

use log::{info, warn};

use crate::error::{StorageError, StorageResult};

/// Run a command and return its trimmed stdout
///
/// Used where the command's output carries a value, such as the device node
/// printed by `hdiutil attach`. A non-zero exit becomes `CommandFailed` with
/// the command's stderr as detail.
pub fn run_captured(program: &str, args: &[&str]) -> StorageResult<String> {
    info!("Running {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| StorageError::command_failed(program, args, format!("failed to execute: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let details = match stderr.trim() {
            "" => format!("exited with {}", output.status),
            msg => msg.to_string(),
        };
        return Err(StorageError::command_failed(program, args, details));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a command with the parent's stdout and stderr
///
/// The operator sees the tool's own diagnostics; the exit status is still
/// turned into an error for the caller to log.
pub fn run_with_io(program: &str, args: &[&str]) -> StorageResult<()> {
    info!("Running {} {}", program, args.join(" "));

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| StorageError::command_failed(program, args, format!("failed to execute: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        warn!("{} exited with {}", program, status);
        Err(StorageError::command_failed(
            program,
            args,
            format!("exited with {}", status),
        ))
    }
}
