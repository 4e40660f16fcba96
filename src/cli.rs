//! Command-line interface definitions for osu-cleaner.
//!
//! All arguments are optional. Without a path the Songs directory is asked
//! for, and without any `--delete-*` flag every category is asked as a
//! yes/no question.
//!
//! # Example
//!
//! ```bash
//! # Fully interactive
//! osu-cleaner
//!
//! # Delete videos and storyboards without asking
//! osu-cleaner ~/.local/share/osu-wine/osu!/Songs --delete-videos --delete-storyboard-elements
//!
//! # See what everything would remove
//! osu-cleaner "C:\Games\osu!\Songs" --delete-all --dry-run
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::classifier::Selection;

/// Remove unneeded files from an osu! Songs directory.
///
/// If no arguments or only the Songs directory is given, the categories to
/// delete are asked interactively.
#[derive(Debug, Parser)]
#[command(name = "osu-cleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to your osu! Songs directory
    #[arg(value_name = "SONGS_DIR")]
    pub songs_dir: Option<PathBuf>,

    /// Delete video clips (.avi, .flv, .mp4, .wmv)
    #[arg(long)]
    pub delete_videos: bool,

    /// Delete hitsound samples (.wav)
    #[arg(long)]
    pub delete_hitsounds: bool,

    /// Delete background images referenced by beatmaps
    #[arg(long)]
    pub delete_backgrounds: bool,

    /// Delete skin images and skin.ini files shipped with beatmaps
    #[arg(long)]
    pub delete_skin_elements: bool,

    /// Delete storyboards and the images and videos they use
    #[arg(long)]
    pub delete_storyboard_elements: bool,

    /// Delete all of the above
    #[arg(long)]
    pub delete_all: bool,

    /// List the files that would be removed without removing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not ask for confirmation when osu!.exe is not found next to the Songs directory
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Also consider hidden files and directories (names starting with .)
    #[arg(long)]
    pub include_hidden: bool,

    /// Path to a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (any non-false `NO_COLOR` value also disables it)
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Print errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

impl Cli {
    /// Categories selected by flags; `--delete-all` selects everything.
    #[must_use]
    pub fn selection(&self) -> Selection {
        if self.delete_all {
            return Selection::all();
        }
        Selection {
            videos: self.delete_videos,
            hitsounds: self.delete_hitsounds,
            backgrounds: self.delete_backgrounds,
            skin_elements: self.delete_skin_elements,
            storyboard_elements: self.delete_storyboard_elements,
        }
    }
}
