//! Path helpers for references found inside map files.
//!
//! Two concerns live here:
//!
//! - **Reference sanitizing.** Tokens are turned into relative paths with
//!   native separators, and anything that could leave the beatmap set
//!   (absolute paths, `..`) is rejected.
//! - **On-disk spelling.** Map files are NFC text, while directory listings
//!   can hold NFD names (macOS, archives extracted there). A reference is
//!   resolved against the listing so it comes out spelled exactly like the
//!   path the walk yields for the same file.
//!
//! # Example
//!
//! ```
//! use osu_cleaner::scanner::path_utils::{normalize_path_str, reference_to_relative};
//! use std::path::PathBuf;
//!
//! assert_eq!(normalize_path_str("cafe\u{0301}.png"), "café.png");
//! assert_eq!(reference_to_relative("SB\\star.png"), Some(PathBuf::from("SB").join("star.png")));
//! assert_eq!(reference_to_relative("../other/bg.png"), None);
//! ```

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Normalize a string to NFC (composed) form.
#[must_use]
pub fn normalize_path_str(s: &str) -> String {
    s.nfc().collect()
}

/// Turn a quoted reference token into a relative path inside a beatmap set.
///
/// Returns `None` for tokens that are empty, absolute, or walk upwards with
/// `..`. Both `/` and `\` are accepted as separators; `.` components are
/// dropped.
#[must_use]
pub fn reference_to_relative(token: &str) -> Option<PathBuf> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let mut relative = PathBuf::new();
    for part in token.split(['/', '\\']) {
        if part.is_empty() {
            // Leading separator means an absolute path, doubled ones are noise
            if relative.as_os_str().is_empty() && token.starts_with(['/', '\\']) {
                return None;
            }
            continue;
        }

        let mut components = Path::new(part).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => relative.push(name),
            (Some(Component::CurDir), None) => {}
            _ => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}


/// Resolve a relative reference below `base` to an existing regular file,
/// spelled the way the directory listings spell it.
///
/// Each component is matched against its directory's entries: a byte-exact
/// name first, then a name equal after NFC normalization. If the filesystem
/// itself accepts the name but no entry matches either way (case-insensitive
/// filesystems), the entry equal ignoring case is used.
///
/// Returns `None` if any component is missing or the result is not a file.
#[must_use]
pub fn resolve_on_disk(base: &Path, relative: &Path) -> Option<PathBuf> {
    let mut resolved = base.to_path_buf();
    for component in relative.components() {
        let Component::Normal(name) = component else {
            return None;
        };
        resolved = find_entry(&resolved, name)?;
    }
    resolved.is_file().then_some(resolved)
}

fn find_entry(dir: &Path, name: &OsStr) -> Option<PathBuf> {
    let entries: Vec<OsString> = fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .collect();

    if entries.iter().any(|entry| entry == name) {
        return Some(dir.join(name));
    }

    let wanted = normalize_path_str(name.to_str()?);
    let matching = |fold_case: bool| {
        entries.iter().find(|entry| {
            entry.to_str().is_some_and(|entry| {
                let entry = normalize_path_str(entry);
                if fold_case {
                    entry.to_lowercase() == wanted.to_lowercase()
                } else {
                    entry == wanted
                }
            })
        })
    };

    if let Some(entry) = matching(false) {
        return Some(dir.join(entry));
    }
    if dir.join(name).exists() {
        return Some(matching(true).map_or_else(|| dir.join(name), |entry| dir.join(entry)));
    }
    None
}
