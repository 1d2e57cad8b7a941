use chess_tui::core::config::{ConfigError, load_config_from, resolve_with_env};
use log::LevelFilter;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[general]
log_file = "board.log"
log_level = "debug"

[display]
colors = false
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    let resolved = resolve_with_env(&config, |_| None);
    assert_eq!(resolved.log_file, PathBuf::from("board.log"));
    assert_eq!(resolved.log_level, LevelFilter::Debug);
    assert!(!resolved.colors);
    assert!(resolved.show_status);
}

#[test]
fn test_malformed_config_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display]\ncolors = \"maybe\"\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("config parse error"));
}

#[test]
fn test_missing_config_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
