//! Progress reporting utilities using indicatif.
//!
//! [`Progress`] implements [`ScanProgress`] with a spinner showing the
//! beatmap set currently being scanned, and [`DeleteProgressCallback`] with
//! one console line per removed file.
//!
//! In quiet mode nothing is drawn. indicatif hides bars on its own when
//! stderr is not a terminal.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::actions::delete::{BatchDeleteResult, DeleteProgressCallback};
use crate::scanner::ScanSummary;

/// Progress callback for the scan phase.
pub trait ScanProgress: Send + Sync {
    /// Called once with the number of entries at the Songs root.
    fn on_scan_start(&self, total: usize);

    /// Called when a beatmap set directory is entered.
    ///
    /// # Arguments
    ///
    /// * `current` - Position of the entry among the root's children (1-based)
    /// * `name` - Directory name of the beatmap set
    fn on_directory(&self, current: usize, name: &str);

    /// Called when the scan is complete.
    fn on_scan_end(&self, summary: &ScanSummary);
}

/// Terminal progress reporter.
pub struct Progress {
    scanning: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl Progress {
    /// Create a new progress reporter.
    ///
    /// # Examples
    ///
    /// ```
    /// use osu_cleaner::progress::Progress;
    ///
    /// let progress = Progress::new(false);
    /// ```
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            scanning: Mutex::new(None),
            quiet,
        }
    }

    fn scanning_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.scanning.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }
}

impl ScanProgress for Progress {
    fn on_scan_start(&self, total: usize) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::scanning_style());
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut scanning) = self.scanning.lock() {
            *scanning = Some(pb);
        }
    }

    fn on_directory(&self, current: usize, name: &str) {
        if self.quiet {
            return;
        }
        self.with_bar(|pb| {
            pb.set_position(current as u64);
            pb.set_message(truncate_name(name, 50));
        });
    }

    fn on_scan_end(&self, summary: &ScanSummary) {
        if self.quiet {
            return;
        }
        if let Ok(mut scanning) = self.scanning.lock() {
            if let Some(pb) = scanning.take() {
                pb.finish_with_message(format!(
                    "Scanned {} beatmap set(s)",
                    summary.directories_scanned
                ));
            }
        }
    }
}

impl DeleteProgressCallback for Progress {
    fn on_before_delete(&self, path: &Path, _index: usize, _total: usize) {
        if !self.quiet {
            println!("Removing {}...", path.display());
        }
    }

    fn on_delete_success(&self, _path: &Path, _size: u64) {}

    fn on_delete_failure(&self, path: &Path, error: &str) {
        // Failures are reported even in quiet mode
        eprintln!("Failed to remove {}: {}", path.display(), error);
    }

    fn on_complete(&self, _result: &BatchDeleteResult) {}
}

/// Shorten a beatmap set name for the progress line, keeping its start.
fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let kept: String = name.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
