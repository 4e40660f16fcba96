//! Skin element naming convention.
//!
//! Beatmap sets may ship their own skin graphics. These are recognised
//! purely by file name: the lowercased basename starts with one of the
//! markers below. "lighting" appears twice; a duplicate is harmless for a
//! membership test.

/// Lowercase basename prefixes identifying skin graphics.
pub const SKIN_FILENAME_PREFIXES: &[&str] = &[
    "cursor",
    "hit",
    "lighting",
    "particle",
    "sliderpoint",
    "approachcircle",
    "followpoint",
    "hitcircle",
    "reversearrow",
    "slider",
    "default-",
    "spinner-",
    "sliderscorepoint",
    "taiko",
    "pippidon",
    "fruit-",
    "lighting",
    "scorebar-",
    "score-",
    "selection-mod-",
    "comboburst",
    "menu-button-background",
    "multi-skipped",
    "play-",
    "star2",
    "inputoverlay-",
    "scoreentry-",
    "ready",
    "count",
    "go.png",
    "section-fail",
    "section-pass",
    "ranking-",
    "pause-",
    "fail-background",
];

/// Whether a lowercased file name follows the skin element convention.
///
/// ```
/// use osu_cleaner::classifier::is_skin_element_name;
///
/// assert!(is_skin_element_name("hitcircleoverlay@2x.png"));
/// assert!(!is_skin_element_name("bg.jpg"));
/// ```
#[must_use]
pub fn is_skin_element_name(lowercase_file_name: &str) -> bool {
    SKIN_FILENAME_PREFIXES
        .iter()
        .any(|prefix| lowercase_file_name.starts_with(prefix))
}
