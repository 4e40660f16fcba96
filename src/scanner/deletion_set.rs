//! The set of files a scan selects for removal.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Paths selected for deletion, deduplicated across the whole scan.
///
/// Paths are compared exactly as the filesystem spells them, so two files
/// whose names only look alike (Unicode normalization forms, different
/// invalid UTF-8 bytes) stay two entries. A file reached both by the walk
/// and through a reference is the same path and is only removed once.
/// Iteration is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionSet {
    paths: BTreeSet<PathBuf>,
}

impl DeletionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path. Returns `false` if it was already present.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }

    /// Whether the path is in the set.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Number of paths in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Consume the set into a list of paths in sorted order.
    #[must_use]
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths.into_iter().collect()
    }
}

impl Extend<PathBuf> for DeletionSet {
    fn extend<I: IntoIterator<Item = PathBuf>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path);
        }
    }
}

impl FromIterator<PathBuf> for DeletionSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
