use osu_cleaner::classifier::{DeletionOptions, Selection};
use osu_cleaner::scanner::{extract_references, read_references, SongsScanner};
use std::fs;
use tempfile::tempdir;

const BEATMAP: &str = r#"osu file format v14

[General]
AudioFilename: audio.mp3

[Events]
//Background and Video events
0,0,"BG.jpg",0,0
Video,0,"intro.avi"
//Storyboard Layer 0 (Background)
"#;

#[test]
fn test_extract_from_beatmap_in_file_order() {
    assert_eq!(extract_references(BEATMAP), vec!["BG.jpg", "intro.avi"]);
}

#[test]
fn test_read_references_lossy_decoding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.osu");
    let mut bytes = b"0,0,\"bg.png\",0,0\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    fs::write(&path, bytes).unwrap();

    assert_eq!(read_references(&path).unwrap(), vec!["bg.png"]);
}

#[test]
fn test_read_references_missing_file() {
    let dir = tempdir().unwrap();
    let err = read_references(&dir.path().join("missing.osu")).unwrap_err();
    assert_eq!(err.path(), dir.path().join("missing.osu"));
}

#[test]
fn test_background_keeps_original_casing() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    fs::create_dir(&set).unwrap();
    fs::write(set.join("map.osu"), BEATMAP).unwrap();
    fs::write(set.join("BG.jpg"), b"").unwrap();
    fs::write(set.join("intro.avi"), b"").unwrap();

    let options = DeletionOptions::new(Selection {
        backgrounds: true,
        ..Default::default()
    });
    let report = SongsScanner::new(dir.path(), options).scan().unwrap();

    // Videos referenced by a beatmap are not backgrounds
    assert_eq!(report.deletion_set.len(), 1);
    assert!(report.deletion_set.contains(&set.join("BG.jpg")));
}

#[test]
fn test_windows_separators_in_storyboard() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    fs::create_dir_all(set.join("SB").join("layers")).unwrap();
    fs::write(
        set.join("Artist - Title.osb"),
        "[Events]\nSprite,Background,Centre,\"SB\\layers\\sky.png\",320,240\n",
    )
    .unwrap();
    fs::write(set.join("SB").join("layers").join("sky.png"), b"").unwrap();

    let options = DeletionOptions::new(Selection {
        storyboard_elements: true,
        ..Default::default()
    });
    let report = SongsScanner::new(dir.path(), options).scan().unwrap();

    assert!(report
        .deletion_set
        .contains(&set.join("SB").join("layers").join("sky.png")));
    assert!(report.deletion_set.contains(&set.join("Artist - Title.osb")));
}

#[test]
fn test_reference_shared_by_several_difficulties_counted_once() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    fs::create_dir(&set).unwrap();
    for diff in ["Easy", "Normal", "Hard"] {
        fs::write(set.join(format!("map [{diff}].osu")), "0,0,\"bg.jpg\",0,0\n").unwrap();
    }
    fs::write(set.join("bg.jpg"), b"").unwrap();

    let options = DeletionOptions::new(Selection {
        backgrounds: true,
        ..Default::default()
    });
    let report = SongsScanner::new(dir.path(), options).scan().unwrap();

    assert_eq!(report.deletion_set.len(), 1);
    assert_eq!(report.summary.map_files_parsed, 3);
    assert_eq!(report.summary.references_resolved, 1);
}

#[test]
fn test_reference_in_subdirectory_map_resolves_relative_to_map() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    fs::create_dir_all(set.join("extra")).unwrap();
    fs::write(set.join("extra").join("map.osu"), "0,0,\"bg.jpg\",0,0\n").unwrap();
    fs::write(set.join("extra").join("bg.jpg"), b"").unwrap();
    fs::write(set.join("bg.jpg"), b"").unwrap();

    let options = DeletionOptions::new(Selection {
        backgrounds: true,
        ..Default::default()
    });
    let report = SongsScanner::new(dir.path(), options).scan().unwrap();

    assert!(report.deletion_set.contains(&set.join("extra").join("bg.jpg")));
    assert!(!report.deletion_set.contains(&set.join("bg.jpg")));
}

#[test]
fn test_reference_outside_set_is_ignored() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    let other = dir.path().join("2 Other");
    fs::create_dir(&set).unwrap();
    fs::create_dir(&other).unwrap();
    fs::write(set.join("map.osu"), "0,0,\"../2 Other/bg.jpg\",0,0\n").unwrap();
    fs::write(other.join("bg.jpg"), b"").unwrap();

    let options = DeletionOptions::new(Selection {
        backgrounds: true,
        ..Default::default()
    });
    let report = SongsScanner::new(dir.path(), options).scan().unwrap();

    assert!(report.deletion_set.is_empty());
}
