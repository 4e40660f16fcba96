//! Deletion categories requested by the user and the options derived from them.

use serde::{Deserialize, Serialize};

/// The five categories a user can ask to delete.
///
/// This is the raw request as it comes from CLI flags, the config file or
/// the interactive prompts. It is turned into [`DeletionOptions`] exactly
/// once, before scanning starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    /// Video clips (`.avi`, `.flv`, `.mp4`, `.wmv`)
    pub videos: bool,
    /// Hitsound samples (`.wav`)
    pub hitsounds: bool,
    /// Background images referenced from `.osu` files
    pub backgrounds: bool,
    /// Skin graphics and `skin.ini` files shipped with beatmap sets
    pub skin_elements: bool,
    /// Storyboard scripts and the images/videos they reference
    pub storyboard_elements: bool,
}

impl Selection {
    /// Every category selected (`--delete-all`).
    #[must_use]
    pub fn all() -> Self {
        Self {
            videos: true,
            hitsounds: true,
            backgrounds: true,
            skin_elements: true,
            storyboard_elements: true,
        }
    }

    /// Whether at least one category is selected.
    #[must_use]
    pub fn any(&self) -> bool {
        self.videos
            || self.hitsounds
            || self.backgrounds
            || self.skin_elements
            || self.storyboard_elements
    }

    /// Union of two selections.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            videos: self.videos || other.videos,
            hitsounds: self.hitsounds || other.hitsounds,
            backgrounds: self.backgrounds || other.backgrounds,
            skin_elements: self.skin_elements || other.skin_elements,
            storyboard_elements: self.storyboard_elements || other.storyboard_elements,
        }
    }
}

/// Immutable options consumed by the classifier.
///
/// Built from a [`Selection`]:
/// - `skin_init_files` follows `skin_elements`
/// - `storyboard_scripts` follows `storyboard_elements`
/// - when backgrounds, skin elements and storyboard elements are all
///   selected, every image is a deletion candidate, so `images` is set and
///   the three indirect categories are switched off. This skips opening
///   any `.osu`/`.osb` file for references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionOptions {
    videos: bool,
    hitsounds: bool,
    backgrounds: bool,
    skin_elements: bool,
    storyboard_elements: bool,
    skin_init_files: bool,
    storyboard_scripts: bool,
    images: bool,
}

impl DeletionOptions {
    /// Derive the classifier options from a user selection.
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        let images =
            selection.backgrounds && selection.skin_elements && selection.storyboard_elements;

        Self {
            videos: selection.videos,
            hitsounds: selection.hitsounds,
            backgrounds: selection.backgrounds && !images,
            skin_elements: selection.skin_elements && !images,
            storyboard_elements: selection.storyboard_elements && !images,
            skin_init_files: selection.skin_elements,
            storyboard_scripts: selection.storyboard_elements,
            images,
        }
    }

    /// Delete video clips.
    #[must_use]
    pub fn videos(&self) -> bool {
        self.videos
    }

    /// Delete hitsound samples.
    #[must_use]
    pub fn hitsounds(&self) -> bool {
        self.hitsounds
    }

    /// Parse `.osu` files for background references.
    #[must_use]
    pub fn backgrounds(&self) -> bool {
        self.backgrounds
    }

    /// Delete images named like skin elements.
    #[must_use]
    pub fn skin_elements(&self) -> bool {
        self.skin_elements
    }

    /// Parse `.osb` files for storyboard asset references.
    #[must_use]
    pub fn storyboard_elements(&self) -> bool {
        self.storyboard_elements
    }

    /// Delete `skin.ini` and other `.ini` files.
    #[must_use]
    pub fn skin_init_files(&self) -> bool {
        self.skin_init_files
    }

    /// Delete `.osb` storyboard scripts themselves.
    #[must_use]
    pub fn storyboard_scripts(&self) -> bool {
        self.storyboard_scripts
    }

    /// Delete every image directly, without reference parsing.
    #[must_use]
    pub fn images(&self) -> bool {
        self.images
    }

    /// Whether any `.osu`/`.osb` file has to be opened during the scan.
    #[must_use]
    pub fn needs_reference_parsing(&self) -> bool {
        self.backgrounds || self.storyboard_elements
    }

    /// Whether these options can select anything besides stray root files.
    #[must_use]
    pub fn deletes_anything(&self) -> bool {
        self.videos
            || self.hitsounds
            || self.backgrounds
            || self.skin_elements
            || self.storyboard_elements
            || self.skin_init_files
            || self.storyboard_scripts
            || self.images
    }
}

impl From<Selection> for DeletionOptions {
    fn from(selection: Selection) -> Self {
        Self::new(selection)
    }
}
