//! Run staging
//!
//! Every invocation gets its own directory under the configured run root:
//!
//! ```text
//! <run root>/<YYYYMMDD_HHMMSS_micros>/
//!     timelog.log
//!     success/   input files whose rows all succeeded
//!     error/     input files with at least one failure
//! ```
//!
//! Archiving problems are logged and otherwise ignored; they never change
//! the outcome of a batch.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

const SUCCESS_DIR: &str = "success";
const ERROR_DIR: &str = "error";
const LOG_FILE: &str = "timelog.log";

/// The directory of one invocation
#[derive(Debug, Clone)]
pub struct RunDirectory {
    root: PathBuf,
}

impl RunDirectory {
    /// Creates a fresh run directory below `base`
    ///
    /// Fails if a directory for the same timestamp already exists.
    pub fn create(base: &Path, started: DateTime<Local>) -> Result<Self> {
        fs::create_dir_all(base)
            .with_context(|| format!("Failed to create run root {}", base.display()))?;

        let root = base.join(started.format("%Y%m%d_%H%M%S_%6f").to_string());
        fs::create_dir(&root)
            .with_context(|| format!("Failed to create run directory {}", root.display()))?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }

    /// Directory a processed file is moved into
    pub fn archive_dir(&self, succeeded: bool) -> PathBuf {
        self.root.join(if succeeded { SUCCESS_DIR } else { ERROR_DIR })
    }

    /// Moves a processed input file into `success/` or `error/`
    ///
    /// Returns the new location, or `None` if the move failed.
    pub fn archive(&self, file: &Path, succeeded: bool) -> Option<PathBuf> {
        let Some(name) = file.file_name() else {
            error!("Cannot archive {}: no file name", file.display());
            return None;
        };
        let target = self.archive_dir(succeeded).join(name);

        debug!("Moving {} to {}", file.display(), target.display());
        match move_file(file, &target) {
            Ok(()) => Some(target),
            Err(e) => {
                error!(
                    "Failed to move {} to {}: {}",
                    file.display(),
                    target.display(),
                    e
                );
                None
            }
        }
    }
}

/// Moves `from` to `to`, creating the target directory
///
/// Falls back to copy-and-delete when a rename is not possible, e.g. across
/// file systems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }

    if fs::rename(from, to).is_ok() {
        return Ok(());
    }

    fs::copy(from, to)?;
    fs::remove_file(from)
}
