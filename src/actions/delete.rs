//! Best-effort batch removal of the deletion set.
//!
//! # Overview
//!
//! Removal is permanent: files go through `fs::remove_file`, not the system
//! trash. A failure for one file (permission, in use, already gone) is
//! recorded and the batch moves on; there is no rollback, so a partially
//! failed batch leaves some targeted files in place.
//!
//! # Example
//!
//! ```no_run
//! use osu_cleaner::actions::delete::remove_file;
//! use std::path::Path;
//!
//! match remove_file(Path::new("/games/osu!/Songs/1 A - B/video.mp4")) {
//!     Ok(result) => println!("Removed {} ({} bytes)", result.path.display(), result.size),
//!     Err(e) => eprintln!("Failed: {}", e),
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bytesize::ByteSize;
use thiserror::Error;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved since the scan).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Path is a directory; only files are removed.
    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    /// General I/O error (file in use, read-only filesystem, ...).
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::NotAFile(p) => p,
            Self::Io { path, .. } => path,
        }
    }
}

/// Result of a successful (or simulated) removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    /// Path that was removed.
    pub path: PathBuf,
    /// Size of the file in bytes.
    pub size: u64,
    /// Whether the removal was only simulated.
    pub dry_run: bool,
}

/// Results of a batch deletion.
#[derive(Debug, Clone, Default)]
pub struct BatchDeleteResult {
    /// Successfully removed files.
    pub successes: Vec<DeleteResult>,
    /// Failed removals with their error messages.
    pub failures: Vec<(PathBuf, String)>,
    /// Total bytes freed.
    pub bytes_freed: u64,
}

impl BatchDeleteResult {
    /// Number of successful removals.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    /// Number of failed removals.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Total number of attempted removals.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Check if all removals succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable summary of the operation.
    #[must_use]
    pub fn summary(&self) -> String {
        let verb = if self.successes.iter().any(|r| r.dry_run) {
            "Would remove"
        } else {
            "Removed"
        };
        let freed = ByteSize::b(self.bytes_freed);

        if self.all_succeeded() {
            format!("{verb} {} file(s), {freed}", self.success_count())
        } else {
            format!(
                "{verb} {} file(s), {} failed, {freed}",
                self.success_count(),
                self.failure_count()
            )
        }
    }
}

/// Configuration for deletion operations.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfig {
    /// Report what would be removed without touching the filesystem.
    pub dry_run: bool,
}

impl DeleteConfig {
    /// Config that only simulates removal.
    #[must_use]
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

/// Callback trait for deletion progress reporting.
pub trait DeleteProgressCallback: Send + Sync {
    /// Called before each file removal.
    fn on_before_delete(&self, path: &Path, index: usize, total: usize);

    /// Called after a successful removal.
    fn on_delete_success(&self, path: &Path, size: u64);

    /// Called after a failed removal.
    fn on_delete_failure(&self, path: &Path, error: &str);

    /// Called when the batch completes.
    fn on_complete(&self, result: &BatchDeleteResult);
}

/// Size of a file that is about to be removed.
fn file_size(path: &Path) -> Result<u64, DeleteError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DeleteError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(DeleteError::NotAFile(path.to_path_buf()));
    }
    Ok(metadata.len())
}

/// Permanently remove a single file.
///
/// **WARNING**: This cannot be undone.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if removal is not allowed
/// - `NotAFile` if the path is a directory
/// - `Io` for any other failure
pub fn remove_file(path: &Path) -> Result<DeleteResult, DeleteError> {
    let size = file_size(path)?;

    fs::remove_file(path).map_err(|e| {
        log::debug!("remove_file failed for {}: {}", path.display(), e);
        DeleteError::from_io(path, e)
    })?;

    log::debug!("Removed: {} ({} bytes)", path.display(), size);

    Ok(DeleteResult {
        path: path.to_path_buf(),
        size,
        dry_run: false,
    })
}

/// Check that a file could be removed, without removing it.
///
/// # Errors
///
/// Same as [`remove_file`], minus failures only the removal itself can hit.
pub fn simulate_remove(path: &Path) -> Result<DeleteResult, DeleteError> {
    let size = file_size(path)?;
    Ok(DeleteResult {
        path: path.to_path_buf(),
        size,
        dry_run: true,
    })
}

/// Remove multiple files, continuing past failures.
///
/// # Example
///
/// ```no_run
/// use osu_cleaner::actions::delete::{delete_batch, DeleteConfig, DeleteProgressCallback, BatchDeleteResult};
/// use std::path::{Path, PathBuf};
///
/// struct NoCallback;
/// impl DeleteProgressCallback for NoCallback {
///     fn on_before_delete(&self, _: &Path, _: usize, _: usize) {}
///     fn on_delete_success(&self, _: &Path, _: u64) {}
///     fn on_delete_failure(&self, _: &Path, _: &str) {}
///     fn on_complete(&self, _: &BatchDeleteResult) {}
/// }
///
/// let paths = vec![PathBuf::from("/songs/a/video.mp4"), PathBuf::from("/songs/b/hit.wav")];
/// let result = delete_batch::<NoCallback>(&paths, &DeleteConfig::default(), None);
/// println!("{}", result.summary());
/// ```
pub fn delete_batch<C: DeleteProgressCallback>(
    paths: &[PathBuf],
    config: &DeleteConfig,
    callback: Option<&C>,
) -> BatchDeleteResult {
    let mut result = BatchDeleteResult::default();
    let total = paths.len();

    for (index, path) in paths.iter().enumerate() {
        if let Some(cb) = callback {
            cb.on_before_delete(path, index, total);
        }

        let outcome = if config.dry_run {
            simulate_remove(path)
        } else {
            remove_file(path)
        };

        match outcome {
            Ok(removed) => {
                result.bytes_freed += removed.size;
                if let Some(cb) = callback {
                    cb.on_delete_success(path, removed.size);
                }
                result.successes.push(removed);
            }
            Err(e) => {
                let error_msg = e.to_string();
                log::warn!("Failed to remove {}: {}", path.display(), error_msg);
                if let Some(cb) = callback {
                    cb.on_delete_failure(path, &error_msg);
                }
                result.failures.push((path.clone(), error_msg));
            }
        }
    }

    if let Some(cb) = callback {
        cb.on_complete(&result);
    }

    log::info!("{}", result.summary());

    result
}
