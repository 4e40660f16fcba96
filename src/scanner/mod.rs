//! Scanner module for walking a Songs directory and building the deletion set.
//!
//! This module provides functionality for:
//! - Walking each beatmap set recursively ([`walker`])
//! - Extracting quoted asset references from `.osu`/`.osb` files ([`references`])
//! - Resolving those references safely inside the beatmap set ([`path_utils`])
//! - Combining classification and references into a [`DeletionSet`] ([`songs`])
//!
//! # Example
//!
//! ```no_run
//! use osu_cleaner::classifier::{DeletionOptions, Selection};
//! use osu_cleaner::scanner::SongsScanner;
//! use std::path::Path;
//!
//! let options = DeletionOptions::new(Selection { videos: true, ..Default::default() });
//! let report = SongsScanner::new(Path::new("/games/osu!/Songs"), options).scan()?;
//! for path in report.deletion_set.iter() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), osu_cleaner::scanner::ScanError>(())
//! ```

pub mod deletion_set;
pub mod path_utils;
pub mod references;
pub mod songs;
pub mod walker;

use std::path::PathBuf;

pub use deletion_set::DeletionSet;
pub use references::{extract_references, read_references, ReferenceError};
pub use songs::SongsScanner;
pub use walker::{Walker, WalkerConfig};

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Build a `ScanError` from an I/O error, picking the most specific variant.
    #[must_use]
    pub fn from_io(path: PathBuf, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io {
                path,
                source: error,
            },
        }
    }

    /// Whether this error means the Songs directory itself is unusable.
    #[must_use]
    pub fn is_misconfigured_root(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NotADirectory(_))
    }
}

/// Statistics and non-fatal problems collected during a scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Beatmap set directories walked
    pub directories_scanned: usize,
    /// Regular files classified
    pub files_examined: usize,
    /// Files directly at the Songs root (always deleted)
    pub stray_files: usize,
    /// `.osu`/`.osb` files opened for references
    pub map_files_parsed: usize,
    /// Referenced files added to the deletion set
    pub references_resolved: usize,
    /// Map files that could not be read; their references were skipped
    pub unreadable_files: Vec<PathBuf>,
    /// Entries that could not be visited during the walk
    pub scan_errors: Vec<ScanError>,
}

impl ScanSummary {
    /// Whether anything went wrong without stopping the scan.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.unreadable_files.is_empty() || !self.scan_errors.is_empty()
    }
}

/// Result of scanning a Songs directory.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Files to remove
    pub deletion_set: DeletionSet,
    /// What the scan saw along the way
    pub summary: ScanSummary,
}
