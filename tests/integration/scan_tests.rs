use osu_cleaner::classifier::{DeletionOptions, Selection};
use osu_cleaner::scanner::{ScanReport, SongsScanner, WalkerConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Songs root with one beatmap set:
///
/// ```text
/// Songs/
///   123 Artist - Title/
///     video.mp4
///     hit.wav
///     skin/hitcircle.png
///     map.osu   (references "bg.jpg")
///     bg.jpg
/// ```
fn songs_with_one_set() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let set = dir.path().join("123 Artist - Title");
    fs::create_dir_all(set.join("skin")).unwrap();
    fs::write(set.join("video.mp4"), b"video").unwrap();
    fs::write(set.join("hit.wav"), b"wav").unwrap();
    fs::write(set.join("skin").join("hitcircle.png"), b"png").unwrap();
    fs::write(set.join("map.osu"), b"[Events]\n0,0,\"bg.jpg\",0,0\n").unwrap();
    fs::write(set.join("bg.jpg"), b"jpg").unwrap();
    (dir, set)
}

fn scan(root: &Path, selection: Selection) -> ScanReport {
    SongsScanner::new(root, DeletionOptions::new(selection))
        .scan()
        .unwrap()
}

fn sorted_paths(report: &ScanReport) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = report.deletion_set.iter().map(Path::to_path_buf).collect();
    paths.sort();
    paths
}

#[test]
fn test_scan_videos_and_backgrounds() {
    let (dir, set) = songs_with_one_set();
    let report = scan(
        dir.path(),
        Selection {
            videos: true,
            backgrounds: true,
            ..Default::default()
        },
    );

    let mut expected = vec![set.join("video.mp4"), set.join("bg.jpg")];
    expected.sort();
    assert_eq!(sorted_paths(&report), expected);
    assert_eq!(report.summary.map_files_parsed, 1);
    assert_eq!(report.summary.references_resolved, 1);
}

#[test]
fn test_scan_images_mode_deletes_every_image_without_parsing() {
    let (dir, set) = songs_with_one_set();
    let report = scan(
        dir.path(),
        Selection {
            backgrounds: true,
            skin_elements: true,
            storyboard_elements: true,
            ..Default::default()
        },
    );

    let paths = sorted_paths(&report);
    assert!(paths.contains(&set.join("skin").join("hitcircle.png")));
    assert!(paths.contains(&set.join("bg.jpg")));
    assert!(!paths.contains(&set.join("map.osu")));
    assert!(!paths.contains(&set.join("video.mp4")));
    assert!(!paths.contains(&set.join("hit.wav")));
    assert_eq!(report.summary.map_files_parsed, 0);
}

#[test]
fn test_images_mode_matches_individual_flags_for_images() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    fs::create_dir_all(set.join("sb")).unwrap();
    fs::write(set.join("map.osu"), b"0,0,\"bg.png\",0,0\n").unwrap();
    fs::write(set.join("bg.png"), b"").unwrap();
    fs::write(set.join("cursor.png"), b"").unwrap();
    fs::write(set.join("sb").join("star.png"), b"").unwrap();
    fs::write(set.join("storyboard.osb"), b"Sprite,Foreground,Centre,\"sb/star.png\",320,240\n").unwrap();

    let collapsed = scan(dir.path(), Selection::all());
    let expanded = {
        let options = DeletionOptions::new(Selection::all());
        assert!(options.images());
        // Individual flags without the collapse: one category at a time.
        let mut paths = Vec::new();
        for selection in [
            Selection { backgrounds: true, ..Default::default() },
            Selection { skin_elements: true, ..Default::default() },
            Selection { storyboard_elements: true, ..Default::default() },
        ] {
            paths.extend(sorted_paths(&scan(dir.path(), selection)));
        }
        paths
    };

    let is_image = |p: &PathBuf| p.extension().is_some_and(|e| e == "png");
    let mut collapsed_images: Vec<_> = sorted_paths(&collapsed).into_iter().filter(is_image).collect();
    let mut expanded_images: Vec<_> = expanded.into_iter().filter(is_image).collect();
    collapsed_images.sort();
    collapsed_images.dedup();
    expanded_images.sort();
    expanded_images.dedup();

    assert_eq!(collapsed_images, expanded_images);
}

#[test]
fn test_empty_selection_only_deletes_stray_files() {
    let (dir, _set) = songs_with_one_set();
    fs::write(dir.path().join("stray.txt"), b"stray").unwrap();

    let report = scan(dir.path(), Selection::default());

    assert_eq!(sorted_paths(&report), vec![dir.path().join("stray.txt")]);
    assert_eq!(report.summary.stray_files, 1);
    assert_eq!(report.summary.directories_scanned, 1);
}

#[test]
fn test_stray_files_deleted_under_every_selection() {
    let (dir, _set) = songs_with_one_set();
    let stray = dir.path().join("notes.osu");
    fs::write(&stray, b"").unwrap();

    for selection in [
        Selection::default(),
        Selection { videos: true, ..Default::default() },
        Selection::all(),
    ] {
        let report = scan(dir.path(), selection);
        assert!(report.deletion_set.contains(&stray));
    }
}

#[test]
fn test_scan_is_idempotent() {
    let (dir, _set) = songs_with_one_set();
    let selection = Selection {
        videos: true,
        hitsounds: true,
        backgrounds: true,
        ..Default::default()
    };

    let first = scan(dir.path(), selection);
    let second = scan(dir.path(), selection);
    assert_eq!(sorted_paths(&first), sorted_paths(&second));
}

#[test]
fn test_scan_empty_songs_directory() {
    let dir = tempdir().unwrap();
    let report = scan(dir.path(), Selection::all());
    assert!(report.deletion_set.is_empty());
    assert_eq!(report.summary.directories_scanned, 0);
}

#[test]
fn test_skin_elements_and_ini_files() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    fs::create_dir(&set).unwrap();
    fs::write(set.join("skin.ini"), b"[General]").unwrap();
    fs::write(set.join("Hitcircle@2x.PNG"), b"").unwrap();
    fs::write(set.join("bg.png"), b"").unwrap();

    let report = scan(
        dir.path(),
        Selection {
            skin_elements: true,
            ..Default::default()
        },
    );

    assert!(report.deletion_set.contains(&set.join("skin.ini")));
    assert!(report.deletion_set.contains(&set.join("Hitcircle@2x.PNG")));
    assert!(!report.deletion_set.contains(&set.join("bg.png")));
}

#[test]
fn test_hidden_entries_skipped_unless_included() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    fs::create_dir_all(set.join(".backup")).unwrap();
    fs::write(set.join(".backup").join("old.mp4"), b"").unwrap();
    fs::write(set.join(".hidden.mp4"), b"").unwrap();

    let options = DeletionOptions::new(Selection { videos: true, ..Default::default() });
    let report = SongsScanner::new(dir.path(), options).scan().unwrap();
    assert!(report.deletion_set.is_empty());

    let report = SongsScanner::new(dir.path(), options)
        .with_walker_config(WalkerConfig { skip_hidden: false })
        .scan()
        .unwrap();
    assert_eq!(report.deletion_set.len(), 2);
}

#[test]
fn test_multiple_sets_scanned() {
    let dir = tempdir().unwrap();
    for name in ["1 A - B", "2 C - D", "3 E - F"] {
        let set = dir.path().join(name);
        fs::create_dir(&set).unwrap();
        fs::write(set.join("video.avi"), b"").unwrap();
    }

    let report = scan(dir.path(), Selection { videos: true, ..Default::default() });
    assert_eq!(report.summary.directories_scanned, 3);
    assert_eq!(report.deletion_set.len(), 3);
}
