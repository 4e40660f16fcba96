//! Quoted reference extraction from `.osu` and `.osb` files.
//!
//! Map files reference their assets by quoted relative path, e.g. the
//! background line `0,0,"bg.jpg",0,0` in the `[Events]` section, or
//! `Sprite,Foreground,Centre,"sb\star.png",320,240` in a storyboard. Rather
//! than parsing either grammar, every `"..."` span is taken as a candidate
//! path. Callers decide which candidates are actually assets.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Errors that can occur while reading a map file for references.
#[derive(Error, Debug)]
pub enum ReferenceError {
    /// The file could not be opened or read.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path of the map file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ReferenceError {
    /// Path of the file that failed to read.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}

fn quoted_token_regex() -> &'static Regex {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    // `.` does not match newlines, so a stray quote cannot swallow the rest of the file
    QUOTED.get_or_init(|| Regex::new(r#""(.*?)""#).expect("quoted token pattern is valid"))
}

/// Extract every quoted token from `text`, in order of appearance.
///
/// Matching is non-greedy: `"a","b"` yields `a` and `b`, not `a","b`.
///
/// # Example
///
/// ```
/// use osu_cleaner::scanner::references::extract_references;
///
/// assert_eq!(extract_references(r#"0,0,"bg.png",0,0"#), vec!["bg.png"]);
/// assert!(extract_references("no quotes here").is_empty());
/// ```
#[must_use]
pub fn extract_references(text: &str) -> Vec<String> {
    quoted_token_regex()
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|token| token.as_str().to_string())
        .collect()
}

/// Read a map file and extract its quoted tokens.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so only
/// failing to read the file is an error.
///
/// # Errors
///
/// Returns [`ReferenceError::Io`] if the file cannot be read.
pub fn read_references(path: &Path) -> Result<Vec<String>, ReferenceError> {
    let bytes = fs::read(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let references = extract_references(&text);
    log::trace!(
        "Found {} quoted token(s) in {}",
        references.len(),
        path.display()
    );
    Ok(references)
}
