use super::validation::validate_config;
use super::*;
use crate::timings::Prayer;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const FULL_TIMINGS: &str = r#"
[timings]
Fajr = "05:15 AM"
Zuhr = "01:30 PM"
Asr = "05:00 PM"
Maghrib = "06:20 PM"
Isha = "08:10 PM"
Jummah = "02:00 PM"
"#;

fn write_config(dir: &std::path::Path, content: &str) -> PathBuf {
    let path = dir.join("jamat.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_config_load_default_creation() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("jamat").join("jamat.toml");

    // Save and restore XDG_CONFIG_HOME
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let result = Config::load();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    if let Err(e) = &result {
        eprintln!("Config::load() failed: {:?}", e);
    }
    let config = result.unwrap();
    assert!(config_path.exists());
    assert_eq!(config.initial_snapshot(), TimingsSnapshot::default());
}

#[test]
fn test_empty_file_uses_defaults() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "");
    let config = load_from_path(&path).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.location(), "Karachi, Pakistan");
    assert!(!config.strict_validation());
    assert!(config.notify_changes());
    assert_eq!(config.edit_mode(), EditMode::Live);
}

#[test]
fn test_load_full_timings_table() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(
        temp_dir.path(),
        &format!("location = \"Lahore\"\nedit_mode = \"draft\"\n{FULL_TIMINGS}"),
    );
    let config = load_from_path(&path).unwrap();

    assert_eq!(config.location(), "Lahore");
    assert_eq!(config.edit_mode(), EditMode::Draft);
    let snapshot = config.initial_snapshot();
    assert_eq!(snapshot.get(Prayer::Fajr), "05:15 AM");
    assert_eq!(snapshot.get(Prayer::Jummah), "02:00 PM");
}

#[test]
fn test_partial_timings_table_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(
        temp_dir.path(),
        "[timings]\nFajr = \"05:15 AM\"\nAsr = \"05:00 PM\"\n",
    );
    let err = load_from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing field"));
}

#[test]
fn test_unknown_prayer_in_timings_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(
        temp_dir.path(),
        &format!("{FULL_TIMINGS}Tahajjud = \"03:00 AM\"\n"),
    );
    assert!(load_from_path(&path).is_err());
}

#[test]
fn test_invalid_edit_mode_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "edit_mode = \"batch\"\n");
    assert!(load_from_path(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn test_validation_rejects_empty_location() {
    let config = Config {
        location: Some("  ".to_string()),
        ..Config::default()
    };
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("location must not be empty"));
}

#[test]
fn test_lenient_config_accepts_malformed_timings() {
    let config = Config {
        timings: Some(TimingsSnapshot::default().with(Prayer::Isha, "late")),
        ..Config::default()
    };
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_strict_config_rejects_malformed_timings() {
    let config = Config {
        strict_validation: Some(true),
        timings: Some(TimingsSnapshot::default().with(Prayer::Isha, "late")),
        ..Config::default()
    };
    let err = validate_config(&config).unwrap_err().to_string();
    assert!(err.contains("strict_validation is enabled"));
    assert!(err.contains("Isha time 'late'"));
}
