//! osu-cleaner - remove unneeded files from an osu! Songs directory
//!
//! Videos, hitsounds, backgrounds, skin elements and storyboard elements
//! are classified by extension and file name. Backgrounds and storyboard
//! assets are found through the quoted paths in `.osu` and `.osb` files.

pub mod actions;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod progress;
pub mod prompt;
pub mod scanner;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use yansi::Paint;

use crate::actions::delete::{delete_batch, DeleteConfig};
use crate::classifier::{DeletionOptions, Selection};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::ExitCode;
use crate::progress::Progress;
use crate::prompt::Prompter;
use crate::scanner::songs::resolve_root;
use crate::scanner::{ScanError, ScanSummary, SongsScanner, WalkerConfig};

/// Run the cleaner with parsed command-line arguments.
///
/// # Errors
///
/// Returns an error if the Songs directory cannot be determined or scanned,
/// or if the terminal cannot be used for a required prompt. Individual
/// unreadable or undeletable files are not errors; they are reported and
/// turn the exit code into [`ExitCode::PartialSuccess`].
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        yansi::disable();
    }

    let config = Config::load(cli.config.as_deref());
    log::debug!("Effective config: {:?}", config);

    let prompter = Prompter::new(!cli.no_color);

    let songs_dir = match songs_dir_from(&cli, &config) {
        Some(dir) => dir,
        None => prompter
            .ask_songs_dir()
            .context("Failed to read the Songs directory path")?,
    };
    log::info!("Songs directory: {}", songs_dir.display());

    let check = check_songs_dir(&songs_dir, &config)
        .with_context(|| format!("Failed to open {}", songs_dir.display()))?;
    if check == SongsDirCheck::Unrecognized {
        log::warn!(
            "{} not found next to {}",
            config.marker_file,
            songs_dir.display()
        );
        let proceed = cli.yes
            || prompter
                .confirm_unrecognized_dir()
                .context("Failed to read confirmation")?;
        if !proceed {
            println!("Aborted.");
            return Ok(ExitCode::Aborted);
        }
    }

    let mut selection = requested_selection(&cli, &config);
    if !selection.any() {
        selection = prompter
            .ask_selection()
            .context("Failed to read the categories to delete")?;
    }
    let options = DeletionOptions::new(selection);
    log::debug!("Deletion options: {:?}", options);
    if !options.deletes_anything() {
        log::warn!("No categories selected; only stray files at the Songs root will be removed");
    } else if options.needs_reference_parsing() {
        log::info!("Beatmap and storyboard files will be read for referenced assets");
    }

    let include_hidden = cli.include_hidden || config.include_hidden;
    let progress = Arc::new(Progress::new(cli.quiet));
    let scanner = SongsScanner::new(&songs_dir, options)
        .with_walker_config(WalkerConfig {
            skip_hidden: !include_hidden,
        })
        .with_progress(progress.clone());

    let report = scanner
        .scan()
        .with_context(|| format!("Failed to scan {}", songs_dir.display()))?;
    report_scan_problems(&report.summary);

    if report.deletion_set.is_empty() {
        if !cli.quiet {
            println!("Nothing to delete.");
        }
        return Ok(ExitCode::NothingToDelete);
    }

    let dry_run = cli.dry_run || config.dry_run;
    let paths = report.deletion_set.into_paths();
    let delete_config = DeleteConfig { dry_run };
    let result = delete_batch(&paths, &delete_config, Some(progress.as_ref()));

    if !cli.quiet {
        if dry_run {
            println!("{} {}", "Dry run:".bold(), result.summary());
        } else {
            println!("{}", result.summary().bold());
        }
    }

    if result.all_succeeded() && !report.summary.has_errors() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::PartialSuccess)
    }
}

/// Songs directory from the command line, falling back to the config file.
fn songs_dir_from(cli: &Cli, config: &Config) -> Option<PathBuf> {
    cli.songs_dir.clone().or_else(|| config.songs_dir.clone())
}

/// Categories requested without prompting: config file and command line.
#[must_use]
pub fn requested_selection(cli: &Cli, config: &Config) -> Selection {
    config.delete.union(cli.selection())
}

/// Whether a Songs directory looks like the one inside an osu! installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongsDirCheck {
    /// The marker file was found, or the check is disabled.
    Recognized,
    /// The marker file is missing; ask before deleting anything.
    Unrecognized,
}

/// Check the Songs directory before anything is asked about it.
///
/// # Errors
///
/// Fails for a path that is missing or not a directory, without looking
/// for the marker file.
pub fn check_songs_dir(songs_dir: &Path, config: &Config) -> Result<SongsDirCheck, ScanError> {
    resolve_root(songs_dir)?;
    if config.skip_marker_check || marker_present(songs_dir, &config.marker_file) {
        Ok(SongsDirCheck::Recognized)
    } else {
        Ok(SongsDirCheck::Unrecognized)
    }
}

/// Whether `marker` exists in the parent directory of `songs_dir`.
///
/// A real Songs directory sits next to `osu!.exe`. A directory without a
/// parent never has the marker.
#[must_use]
pub fn marker_present(songs_dir: &Path, marker: &str) -> bool {
    let Ok(absolute) = std::path::absolute(songs_dir) else {
        return false;
    };
    absolute
        .parent()
        .is_some_and(|parent| parent.join(marker).exists())
}

fn report_scan_problems(summary: &ScanSummary) {
    for path in &summary.unreadable_files {
        eprintln!(
            "{} could not read {}; its references were skipped",
            "Warning:".yellow().bold(),
            path.display()
        );
    }
    for error in &summary.scan_errors {
        eprintln!("{} {}", "Warning:".yellow().bold(), error);
    }
}
