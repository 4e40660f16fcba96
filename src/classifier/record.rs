//! A file found inside a beatmap set, with its inferred kind.

use std::path::{Path, PathBuf};

use super::FileKind;

/// A file discovered while walking a beatmap set.
///
/// Carries the path as found on disk (used for deletion) and a lowercased
/// copy used for every matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path to the file, as produced by the walk
    pub path: PathBuf,
    /// Lowercased path used for extension and name matching
    pub lowercase_path: String,
    /// Kind inferred from the extension
    pub kind: FileKind,
}

impl FileRecord {
    /// Create a record for the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let lowercase_path = path.to_string_lossy().to_lowercase();
        let kind = FileKind::from_lowercase(&lowercase_path);
        Self {
            path,
            lowercase_path,
            kind,
        }
    }

    /// Lowercased basename of the file.
    #[must_use]
    pub fn lowercase_file_name(&self) -> &str {
        Path::new(&self.lowercase_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}
