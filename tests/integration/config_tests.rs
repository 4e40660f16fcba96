use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use osu_cleaner::classifier::Selection;
use osu_cleaner::config::{unknown_keys, Config, DEFAULT_MARKER_FILE, ENV_PREFIX};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::tempdir;

// Tests that read the environment layer must not overlap
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_config_defaults() {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .extract()
        .unwrap();
    assert_eq!(config.songs_dir, None);
    assert_eq!(config.marker_file, DEFAULT_MARKER_FILE);
    assert!(!config.skip_marker_check);
    assert!(!config.dry_run);
    assert_eq!(config.delete, Selection::default());
}

#[test]
fn test_config_from_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
songs_dir = "/games/osu!/Songs"
marker_file = "osu!.cfg"
dry_run = true

[delete]
videos = true
storyboard_elements = true
"#,
    )
    .unwrap();

    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(&config_path))
        .extract()
        .unwrap();

    assert_eq!(config.songs_dir, Some(PathBuf::from("/games/osu!/Songs")));
    assert_eq!(config.marker_file, "osu!.cfg");
    assert!(config.dry_run);
    assert!(config.delete.videos);
    assert!(config.delete.storyboard_elements);
    assert!(!config.delete.hitsounds);
}

#[test]
fn test_config_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("OSU_CLEANER_SKIP_MARKER_CHECK", "true");
    std::env::set_var("OSU_CLEANER_DELETE__HITSOUNDS", "true");

    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .unwrap();

    std::env::remove_var("OSU_CLEANER_SKIP_MARKER_CHECK");
    std::env::remove_var("OSU_CLEANER_DELETE__HITSOUNDS");

    assert!(config.skip_marker_check);
    assert!(config.delete.hitsounds);
    assert!(!config.delete.videos);
}

#[test]
fn test_env_overrides_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "marker_file = \"from-file\"\n").unwrap();

    std::env::set_var("OSU_CLEANER_MARKER_FILE", "from-env");
    let config = Config::load_from_path(Some(&config_path));
    std::env::remove_var("OSU_CLEANER_MARKER_FILE");

    assert_eq!(config.marker_file, "from-env");
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "dry_run = \"definitely\"\n[delete\n").unwrap();

    let config = Config::load_from_path(Some(&config_path));
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_file_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = tempdir().unwrap();
    let config = Config::load(Some(&temp_dir.path().join("missing.toml")));
    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_keys_with_suggestions() {
    let table: toml::Table = r#"
songs_directory = "/songs"
dry_run = true

[delete]
video = true
hitsounds = true
"#
    .parse()
    .unwrap();

    let unknown = unknown_keys(&table);
    assert_eq!(unknown.len(), 2);

    let songs = unknown.iter().find(|u| u.key == "songs_directory").unwrap();
    assert_eq!(songs.suggestion.as_deref(), Some("songs_dir"));

    let video = unknown.iter().find(|u| u.key == "delete.video").unwrap();
    assert_eq!(video.suggestion.as_deref(), Some("delete.videos"));
}
