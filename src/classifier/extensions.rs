//! Extension table and file kind inference.
//!
//! Every file in a beatmap set is sorted into one [`FileKind`] by its
//! extension. The table is fixed for the lifetime of the process and
//! matching is always done against the lowercased path.

use std::fmt;

/// Video clip extensions.
pub const VIDEO_EXTENSIONS: &[&str] = &["avi", "flv", "mp4", "wmv"];

/// Image extensions (backgrounds, storyboard sprites, skin elements).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Hitsound sample extensions.
pub const HITSOUND_EXTENSIONS: &[&str] = &["wav"];

/// Beatmap difficulty description extension.
pub const BEATMAP_EXTENSIONS: &[&str] = &["osu"];

/// Storyboard script extension.
pub const STORYBOARD_EXTENSIONS: &[&str] = &["osb"];

/// Skin initialization file extension (`skin.ini`).
pub const SKIN_INIT_EXTENSIONS: &[&str] = &["ini"];

/// Kind of a file, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `.avi`, `.flv`, `.mp4`, `.wmv`
    Video,
    /// `.png`, `.jpg`, `.jpeg`
    Image,
    /// `.wav`
    Hitsound,
    /// `.osu`
    Beatmap,
    /// `.osb`
    Storyboard,
    /// `.ini`
    SkinInit,
    /// Anything else (audio tracks, `.txt`, extensionless files).
    Other,
}

impl FileKind {
    /// All kinds that have an entry in the extension table.
    pub const KNOWN: [FileKind; 6] = [
        FileKind::Video,
        FileKind::Image,
        FileKind::Hitsound,
        FileKind::Beatmap,
        FileKind::Storyboard,
        FileKind::SkinInit,
    ];

    /// Extensions (without the dot, lowercase) belonging to this kind.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Video => VIDEO_EXTENSIONS,
            Self::Image => IMAGE_EXTENSIONS,
            Self::Hitsound => HITSOUND_EXTENSIONS,
            Self::Beatmap => BEATMAP_EXTENSIONS,
            Self::Storyboard => STORYBOARD_EXTENSIONS,
            Self::SkinInit => SKIN_INIT_EXTENSIONS,
            Self::Other => &[],
        }
    }

    /// Infer the kind of an already lowercased path or file name.
    ///
    /// ```
    /// use osu_cleaner::classifier::FileKind;
    ///
    /// assert_eq!(FileKind::from_lowercase("songs/1 a - b/bg.jpeg"), FileKind::Image);
    /// assert_eq!(FileKind::from_lowercase("audio.mp3"), FileKind::Other);
    /// ```
    #[must_use]
    pub fn from_lowercase(lowercase_path: &str) -> Self {
        let Some(extension) = extension_of(lowercase_path) else {
            return Self::Other;
        };

        Self::KNOWN
            .into_iter()
            .find(|kind| kind.extensions().contains(&extension))
            .unwrap_or(Self::Other)
    }

    /// Infer the kind of a path in any casing.
    #[must_use]
    pub fn from_name(path: &str) -> Self {
        Self::from_lowercase(&path.to_lowercase())
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Hitsound => "hitsound",
            Self::Beatmap => "beatmap",
            Self::Storyboard => "storyboard",
            Self::SkinInit => "skin initialization file",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Extension of the last path component, if it has one.
///
/// Both separators are accepted since references inside map files may use
/// either.
fn extension_of(path: &str) -> Option<&str> {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let (stem, extension) = file_name.rsplit_once('.')?;
    if extension.is_empty() || stem.is_empty() {
        // ".png" on its own is a hidden file named "png", not an image
        return None;
    }
    Some(extension)
}
