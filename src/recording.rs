//! Recording destination naming
//!
//! Resolves the effective recording package path. Nothing here touches the
//! filesystem: the destination is created and validated by the recorder.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use crate::constants::{RECORDING_PACKAGE_EXTENSION, RECORDING_TIMESTAMP_FORMAT};

/// Directory recordings land in when no destination is configured
///
/// The user's documents directory, falling back to the home directory and
/// finally to the current directory.
pub fn default_recording_directory() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Package file name for a recording started at `timestamp`
pub fn package_file_name(timestamp: &DateTime<Local>) -> String {
    format!(
        "{}.{}",
        timestamp.format(RECORDING_TIMESTAMP_FORMAT),
        RECORDING_PACKAGE_EXTENSION
    )
}

/// Generated package path inside `dir`, for recorders expanding a directory destination
pub fn package_path_in(dir: &Path, timestamp: &DateTime<Local>) -> PathBuf {
    dir.join(package_file_name(timestamp))
}

/// Default recording path: a timestamped package in the default directory
pub fn default_recording_file_url() -> PathBuf {
    package_path_in(&default_recording_directory(), &Local::now())
}

/// Effective destination for a stored, possibly unset, recording path
pub fn resolve_recording_file_url(stored: Option<&Path>) -> PathBuf {
    match stored {
        Some(path) => path.to_path_buf(),
        None => default_recording_file_url(),
    }
}
