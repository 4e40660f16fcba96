//! Layered application configuration.
//!
//! Settings are merged, lowest priority first, from:
//!
//! 1. Built-in defaults
//! 2. A TOML file: `--config <FILE>`, or `config.toml` in the platform
//!    config directory (`~/.config/osu-cleaner` on Linux, `%APPDATA%` on
//!    Windows)
//! 3. `OSU_CLEANER_*` environment variables, `__` separating nested keys
//!    (`OSU_CLEANER_DELETE__VIDEOS=true`)
//! 4. Command-line flags, applied by the caller
//!
//! ```toml
//! songs_dir = "C:/Games/osu!/Songs"
//! skip_marker_check = false
//!
//! [delete]
//! videos = true
//! hitsounds = true
//! ```
//!
//! A broken config file never stops the tool: it is reported and the
//! defaults are used instead.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::classifier::Selection;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "OSU_CLEANER_";

/// File expected one level above the Songs directory.
pub const DEFAULT_MARKER_FILE: &str = "osu!.exe";

const TOP_LEVEL_KEYS: &[&str] = &[
    "songs_dir",
    "marker_file",
    "skip_marker_check",
    "include_hidden",
    "dry_run",
    "delete",
];

const DELETE_KEYS: &[&str] = &[
    "videos",
    "hitsounds",
    "backgrounds",
    "skin_elements",
    "storyboard_elements",
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Songs directory used when none is given on the command line.
    pub songs_dir: Option<PathBuf>,
    /// Name of the file whose presence in the parent directory marks a real
    /// osu! installation.
    pub marker_file: String,
    /// Do not look for the marker file at all.
    pub skip_marker_check: bool,
    /// Also classify files and directories whose names start with `.`.
    pub include_hidden: bool,
    /// List what would be removed without removing anything.
    pub dry_run: bool,
    /// Categories deleted without asking.
    pub delete: Selection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            songs_dir: None,
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            skip_marker_check: false,
            include_hidden: false,
            dry_run: false,
            delete: Selection::default(),
        }
    }
}

impl Config {
    /// Load the configuration, from `path` if given, otherwise from the
    /// default platform-specific location.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => {
                if !path.exists() {
                    log::warn!("Config file not found: {}", path.display());
                }
                Self::load_from_path(Some(path))
            }
            None => Self::load_from_path(Self::default_path().as_deref()),
        }
    }

    /// Load defaults, the given file (if it exists) and the environment.
    ///
    /// Falls back to the defaults if the merged configuration is invalid.
    #[must_use]
    pub fn load_from_path(path: Option<&Path>) -> Self {
        if let Some(path) = path.filter(|p| p.is_file()) {
            warn_unknown_keys(path);
        }

        match Self::figment(path).extract() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// The figment with every layer except the command line.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path.filter(|p| p.is_file()) {
            log::debug!("Loading config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Default platform-specific configuration path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "osu-cleaner").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// An unrecognised key in a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey {
    /// Dotted key as written in the file (`delete.video`)
    pub key: String,
    /// Closest known key, if one is similar enough
    pub suggestion: Option<String>,
}

/// Find keys in a parsed config file that no setting corresponds to.
#[must_use]
pub fn unknown_keys(table: &toml::Table) -> Vec<UnknownKey> {
    let mut unknown = Vec::new();

    for (key, value) in table {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            unknown.push(UnknownKey {
                key: key.clone(),
                suggestion: suggest(key, TOP_LEVEL_KEYS).map(str::to_string),
            });
            continue;
        }

        if key == "delete" {
            if let Some(delete) = value.as_table() {
                for nested in delete.keys() {
                    if !DELETE_KEYS.contains(&nested.as_str()) {
                        unknown.push(UnknownKey {
                            key: format!("delete.{nested}"),
                            suggestion: suggest(nested, DELETE_KEYS)
                                .map(|s| format!("delete.{s}")),
                        });
                    }
                }
            }
        }
    }

    unknown
}

fn suggest(key: &str, candidates: &[&'static str]) -> Option<&'static str> {
    candidates
        .iter()
        .map(|candidate| (*candidate, strsim::jaro_winkler(key, candidate)))
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}

fn warn_unknown_keys(path: &Path) {
    let table = match fs::read_to_string(path).map(|content| content.parse::<toml::Table>()) {
        Ok(Ok(table)) => table,
        // Read and syntax errors are reported by figment
        _ => return,
    };

    for unknown in unknown_keys(&table) {
        match unknown.suggestion {
            Some(suggestion) => log::warn!(
                "Unknown config key '{}' in {} (did you mean '{}'?)",
                unknown.key,
                path.display(),
                suggestion
            ),
            None => log::warn!(
                "Unknown config key '{}' in {}",
                unknown.key,
                path.display()
            ),
        }
    }
}
