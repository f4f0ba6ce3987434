//! Ephemeral iconset staging directory with scoped cleanup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Owns the iconset staging directory for the duration of a bundle build.
///
/// Dropping the guard removes the whole tree, so every exit path out of the
/// bundle builder cleans up exactly once, packaging success or not.
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Create the staging directory. Idempotent if it already exists.
    pub fn create(path: PathBuf) -> io::Result<StagingDir> {
        fs::create_dir_all(&path)?;
        Ok(StagingDir { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        // Best-effort: a failed removal must not mask the original error
        let _ = fs::remove_dir_all(&self.path);
    }
}
