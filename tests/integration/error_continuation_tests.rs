use osu_cleaner::actions::delete::{
    delete_batch, BatchDeleteResult, DeleteConfig, DeleteError, DeleteProgressCallback,
};
use osu_cleaner::classifier::{DeletionOptions, Selection};
use osu_cleaner::scanner::{ScanError, SongsScanner};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::tempdir;

#[derive(Default)]
struct FailureRecorder {
    failures: Mutex<Vec<PathBuf>>,
}

impl DeleteProgressCallback for FailureRecorder {
    fn on_before_delete(&self, _: &Path, _: usize, _: usize) {}
    fn on_delete_success(&self, _: &Path, _: u64) {}
    fn on_delete_failure(&self, path: &Path, _: &str) {
        self.failures.lock().unwrap().push(path.to_path_buf());
    }
    fn on_complete(&self, _: &BatchDeleteResult) {}
}

#[test]
fn test_delete_batch_continues_past_missing_files() {
    let dir = tempdir().unwrap();
    let present = dir.path().join("present.mp4");
    fs::write(&present, b"video").unwrap();
    let missing = dir.path().join("missing.mp4");

    let recorder = FailureRecorder::default();
    let paths = vec![missing.clone(), present.clone()];
    let result = delete_batch(&paths, &DeleteConfig::default(), Some(&recorder));

    assert_eq!(result.success_count(), 1);
    assert_eq!(result.failure_count(), 1);
    assert!(!result.all_succeeded());
    assert!(!present.exists());
    assert_eq!(*recorder.failures.lock().unwrap(), vec![missing]);
    assert!(result.summary().contains("1 failed"));
}

#[test]
fn test_delete_directory_is_rejected() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("folder.png");
    fs::create_dir(&sub).unwrap();

    let err = osu_cleaner::actions::delete::remove_file(&sub).unwrap_err();
    assert!(matches!(err, DeleteError::NotAFile(_)));
    assert!(sub.exists());
}

#[test]
fn test_missing_songs_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let options = DeletionOptions::new(Selection::all());
    let err = SongsScanner::new(&dir.path().join("Songs"), options)
        .scan()
        .unwrap_err();

    assert!(matches!(err, ScanError::NotFound(_)));
    assert!(err.is_misconfigured_root());
}

#[test]
fn test_songs_path_that_is_a_file_is_fatal() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Songs");
    fs::write(&file, b"").unwrap();

    let options = DeletionOptions::new(Selection::all());
    let err = SongsScanner::new(&file, options).scan().unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_is_not_followed() {
    let dir = tempdir().unwrap();
    let set = dir.path().join("1 Set");
    fs::create_dir(&set).unwrap();
    std::os::unix::fs::symlink(set.join("nowhere.osu"), set.join("map.osu")).unwrap();
    fs::write(set.join("video.mp4"), b"").unwrap();

    let options = DeletionOptions::new(Selection::all());
    let report = SongsScanner::new(dir.path(), options).scan().unwrap();

    assert!(report.deletion_set.contains(&set.join("video.mp4")));
    assert!(!report.deletion_set.contains(&set.join("map.osu")));
    assert!(report.summary.unreadable_files.is_empty());
}
