//! Scan of a whole Songs directory.
//!
//! Every immediate child of the Songs directory is either a beatmap set
//! (a directory, walked recursively) or a stray file. Stray files at the
//! root are junk left behind by half-finished imports and are always
//! deleted, whatever categories were selected.
//!
//! Inside a beatmap set each file is classified. Files classified for
//! reference parsing are opened, and every quoted token that names an
//! existing asset of the right kind, relative to the map file's own
//! directory, joins the deletion set.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::path_utils::{reference_to_relative, resolve_on_disk};
use super::references::read_references;
use super::{DeletionSet, ScanError, ScanReport, ScanSummary, Walker, WalkerConfig};
use crate::classifier::{classify, Classification, DeletionOptions, FileKind, FileRecord, ReferenceKind};
use crate::progress::ScanProgress;

/// Builds the deletion set for a Songs directory.
pub struct SongsScanner {
    root: PathBuf,
    options: DeletionOptions,
    walker_config: WalkerConfig,
    progress: Option<Arc<dyn ScanProgress>>,
}

impl SongsScanner {
    /// Create a scanner for the given Songs directory.
    #[must_use]
    pub fn new(root: &Path, options: DeletionOptions) -> Self {
        Self {
            root: root.to_path_buf(),
            options,
            walker_config: WalkerConfig::default(),
            progress: None,
        }
    }

    /// Set the configuration used to walk each beatmap set.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Report per-directory progress to the given callback.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ScanProgress>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// The options this scanner classifies with.
    #[must_use]
    pub fn options(&self) -> &DeletionOptions {
        &self.options
    }

    /// Scan the Songs directory.
    ///
    /// Nothing is deleted; the returned report holds the deletion set.
    ///
    /// # Errors
    ///
    /// Fails only if the Songs directory itself is missing, not a directory,
    /// or cannot be listed. Problems with individual entries are recorded in
    /// the report's summary and the scan continues.
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let root = self.resolve_root()?;
        let children = list_children(&root)?;

        let mut report = ScanReport::default();
        if let Some(progress) = &self.progress {
            progress.on_scan_start(children.len());
        }

        for (index, child) in children.iter().enumerate() {
            if child.is_dir() {
                let name = child
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                log::debug!("Scanning {}", name);
                if let Some(progress) = &self.progress {
                    progress.on_directory(index + 1, &name);
                }
                self.scan_set(child, &mut report.deletion_set, &mut report.summary);
                report.summary.directories_scanned += 1;
            } else {
                log::debug!("Stray file at Songs root: {}", child.display());
                report.deletion_set.insert(child.clone());
                report.summary.stray_files += 1;
            }
        }

        if let Some(progress) = &self.progress {
            progress.on_scan_end(&report.summary);
        }

        log::info!(
            "Scanned {} beatmap set(s), {} file(s); {} selected for deletion",
            report.summary.directories_scanned,
            report.summary.files_examined,
            report.deletion_set.len()
        );

        Ok(report)
    }

    fn resolve_root(&self) -> Result<PathBuf, ScanError> {
        resolve_root(&self.root)
    }

    fn scan_set(&self, dir: &Path, deletion_set: &mut DeletionSet, summary: &mut ScanSummary) {
        let walker = Walker::new(dir, self.walker_config.clone());

        for entry in walker.walk() {
            let record = match entry {
                Ok(record) => record,
                Err(e) => {
                    summary.scan_errors.push(e);
                    continue;
                }
            };
            summary.files_examined += 1;

            let classification = classify(&record, &self.options);
            log::trace!("{:?}: {}", classification, record.path.display());

            match classification {
                Classification::Keep => {}
                Classification::DirectDelete => {
                    deletion_set.insert(record.path);
                }
                Classification::ParseForBackgrounds => {
                    collect_references(
                        &record,
                        ReferenceKind::Background,
                        dir,
                        deletion_set,
                        summary,
                    );
                }
                Classification::ParseForStoryboardRefs => {
                    collect_references(
                        &record,
                        ReferenceKind::Storyboard,
                        dir,
                        deletion_set,
                        summary,
                    );
                    deletion_set.insert(record.path);
                }
            }
        }
    }
}

/// Absolute path of a Songs directory, verified to be a directory.
///
/// # Errors
///
/// [`ScanError::NotFound`] or [`ScanError::NotADirectory`] for a path that
/// cannot be scanned at all.
pub fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let metadata = fs::metadata(root).map_err(|e| ScanError::from_io(root.to_path_buf(), e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    std::path::absolute(root).map_err(|e| ScanError::from_io(root.to_path_buf(), e))
}

/// Immediate children of the Songs directory, sorted by name.
fn list_children(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(root).map_err(|e| ScanError::from_io(root.to_path_buf(), e))?;

    let mut children = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => children.push(entry.path()),
            Err(e) => log::warn!("Failed to read entry in {}: {}", root.display(), e),
        }
    }
    children.sort();
    Ok(children)
}

/// Add the assets referenced by a map file to the deletion set.
fn collect_references(
    record: &FileRecord,
    kind: ReferenceKind,
    set_dir: &Path,
    deletion_set: &mut DeletionSet,
    summary: &mut ScanSummary,
) {
    let tokens = match read_references(&record.path) {
        Ok(tokens) => tokens,
        Err(e) => {
            log::warn!("Skipping references: {}", e);
            summary.unreadable_files.push(record.path.clone());
            return;
        }
    };
    summary.map_files_parsed += 1;

    let base_dir = record.path.parent().unwrap_or(set_dir);
    for token in tokens {
        // Lowercase for the extension test only; the path keeps its casing
        if !kind.accepts(FileKind::from_name(&token)) {
            continue;
        }
        let Some(relative) = reference_to_relative(&token) else {
            log::debug!(
                "Ignoring reference {:?} in {}: not a path inside the beatmap set",
                token,
                record.path.display()
            );
            continue;
        };

        let Some(candidate) = resolve_on_disk(base_dir, &relative) else {
            log::trace!(
                "Referenced file does not exist: {}",
                base_dir.join(&relative).display()
            );
            continue;
        };
        if deletion_set.insert(candidate) {
            summary.references_resolved += 1;
        }
    }
}
