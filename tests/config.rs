use pickbox::config::ConfigManager;
use pickbox::config::error::ConfigError;
use pickbox::config::loader::{read_config, write_config};
use pickbox::config::models::{AppConfig, ConfigIssue, LogLevel};
use pickbox::select::{ClosePolicy, MatchBy, OptionValue, SelectOption};
use std::fs;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = read_config(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.options.len(), 7);
    assert_eq!(config.options[3], SelectOption::new("fourth", 2));
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "  \n").unwrap();
    assert_eq!(read_config(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
close_policy = "toggle"
match_by = "record"
log_level = "debug"

[[options]]
label = "red"
value = "r"
"#,
    )
    .unwrap();

    let config = read_config(&path).unwrap();
    assert_eq!(config.close_policy, ClosePolicy::Toggle);
    assert_eq!(config.match_by, MatchBy::Record);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.panel_height, AppConfig::default().panel_height);
    assert_eq!(config.options, vec![SelectOption::new("red", "r")]);
    assert_eq!(config.options[0].value, OptionValue::Text("r".into()));
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "close_policy = \"sometimes\"").unwrap();

    let err = read_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_write_then_read_and_refuse_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let manager = ConfigManager::new(Some(path.as_path())).unwrap();
    manager.write_default(false).unwrap();
    assert_eq!(read_config(&path).unwrap(), AppConfig::default());

    let err = manager.write_default(false).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists { .. }));

    let custom = AppConfig {
        panel_height: 2,
        ..Default::default()
    };
    write_config(&path, &custom, true).unwrap();
    assert_eq!(read_config(&path).unwrap().panel_height, 2);
}

#[test]
fn test_validate_flags_zero_height_and_empty_catalog() {
    let config = AppConfig {
        panel_height: 0,
        options: Vec::new(),
        ..Default::default()
    };
    assert_eq!(
        config.validate(),
        vec![ConfigIssue::EmptyCatalog, ConfigIssue::ZeroPanelHeight]
    );
}
