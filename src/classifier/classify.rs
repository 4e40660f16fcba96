//! The deletion decision for a single file.
//!
//! Classification is an ordered rule table. Each rule names the file kind
//! it applies to, the option that enables it, an optional extra guard and
//! the outcome. The first rule that matches wins; a file no rule matches
//! is kept.

use super::{is_skin_element_name, DeletionOptions, FileKind, FileRecord};

/// What the scanner should do with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Add the file itself to the deletion set.
    DirectDelete,
    /// Open the beatmap and delete the background images it references.
    ParseForBackgrounds,
    /// Open the storyboard, delete the assets it references and the script.
    ParseForStoryboardRefs,
    /// Leave the file alone.
    Keep,
}

/// Which kind of indirect reference a token was extracted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// Token from a `.osu` file; only images qualify.
    Background,
    /// Token from a `.osb` file; images and videos qualify.
    Storyboard,
}

impl ReferenceKind {
    /// Whether a token of the given kind is a deletion candidate.
    ///
    /// This is the extension half of the test. The scanner additionally
    /// requires the resolved path to exist as a regular file, for both
    /// reference kinds. Storyboard images get the same existence check as
    /// storyboard videos, so a dangling `.png` token is never reported.
    #[must_use]
    pub fn accepts(self, kind: FileKind) -> bool {
        match self {
            Self::Background => kind == FileKind::Image,
            Self::Storyboard => matches!(kind, FileKind::Image | FileKind::Video),
        }
    }
}

struct Rule {
    kind: FileKind,
    enabled: fn(&DeletionOptions) -> bool,
    guard: Option<fn(&FileRecord) -> bool>,
    outcome: Classification,
}

const RULES: &[Rule] = &[
    Rule {
        kind: FileKind::Image,
        enabled: DeletionOptions::images,
        guard: None,
        outcome: Classification::DirectDelete,
    },
    Rule {
        kind: FileKind::Video,
        enabled: DeletionOptions::videos,
        guard: None,
        outcome: Classification::DirectDelete,
    },
    Rule {
        kind: FileKind::Hitsound,
        enabled: DeletionOptions::hitsounds,
        guard: None,
        outcome: Classification::DirectDelete,
    },
    Rule {
        kind: FileKind::SkinInit,
        enabled: DeletionOptions::skin_init_files,
        guard: None,
        outcome: Classification::DirectDelete,
    },
    Rule {
        kind: FileKind::Image,
        enabled: DeletionOptions::skin_elements,
        guard: Some(is_skin_element),
        outcome: Classification::DirectDelete,
    },
    Rule {
        kind: FileKind::Beatmap,
        enabled: DeletionOptions::backgrounds,
        guard: None,
        outcome: Classification::ParseForBackgrounds,
    },
    Rule {
        kind: FileKind::Storyboard,
        enabled: DeletionOptions::storyboard_elements,
        guard: None,
        outcome: Classification::ParseForStoryboardRefs,
    },
    // Only reachable when storyboard parsing was folded into `images`
    Rule {
        kind: FileKind::Storyboard,
        enabled: DeletionOptions::storyboard_scripts,
        guard: None,
        outcome: Classification::DirectDelete,
    },
];

fn is_skin_element(record: &FileRecord) -> bool {
    is_skin_element_name(record.lowercase_file_name())
}

/// Decide what to do with a discovered file.
///
/// # Example
///
/// ```
/// use osu_cleaner::classifier::{classify, Classification, DeletionOptions, FileRecord, Selection};
/// use std::path::PathBuf;
///
/// let options = DeletionOptions::new(Selection { videos: true, ..Default::default() });
/// let record = FileRecord::new(PathBuf::from("Songs/1 A - B/Intro.MP4"));
/// assert_eq!(classify(&record, &options), Classification::DirectDelete);
/// ```
#[must_use]
pub fn classify(record: &FileRecord, options: &DeletionOptions) -> Classification {
    RULES
        .iter()
        .find(|rule| {
            rule.kind == record.kind
                && (rule.enabled)(options)
                && rule.guard.is_none_or(|guard| guard(record))
        })
        .map_or(Classification::Keep, |rule| rule.outcome)
}
