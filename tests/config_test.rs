use assert_matches::assert_matches;
use jakarta_timeutils::config::{ConfigLoader, FormatConfig, TimeUtilsConfig};
use jakarta_timeutils::{format_with, FormatParam, TimeUtilsError};
use serial_test::serial;
use std::env;
use std::fs;

fn clear_env() {
    for key in [
        "TIMEUTILS__FORMAT__LOCATION",
        "TIMEUTILS__FORMAT__PATTERN",
        "CONFIG_DIR",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_from_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("timeutils.toml"),
        "[format]\nlocation = \"UTC\"\npattern = \"%Y-%m-%d\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from(dir.path()).unwrap();
    assert_eq!(config.format.location, "UTC");
    assert_eq!(config.format.pattern, "%Y-%m-%d");
    // 未設定的欄位保持預設值
    assert_eq!(config.format.mysql_pattern, FormatConfig::default().mysql_pattern);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("timeutils.toml"),
        "[format]\nlocation = \"UTC\"\n",
    )
    .unwrap();
    env::set_var("TIMEUTILS__FORMAT__LOCATION", "Asia/Makassar");

    let config = ConfigLoader::load_from(dir.path()).unwrap();
    assert_eq!(config.format.location, "Asia/Makassar");

    let t = chrono::DateTime::parse_from_rfc3339("2023-03-28T00:00:00+07:00").unwrap();
    let param = FormatParam::new(&t).format("%H:%M %Z");
    assert_eq!(format_with(&config.format, &param).unwrap(), "01:00 WITA");

    clear_env();
}

#[test]
#[serial]
fn test_load_current_uses_config_dir() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    env::set_var("CONFIG_DIR", dir.path());

    assert_eq!(ConfigLoader::load_current().unwrap(), TimeUtilsConfig::default());

    clear_env();
}

#[test]
#[serial]
fn test_invalid_location_is_rejected() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    env::set_var("TIMEUTILS__FORMAT__LOCATION", "Nowhere/Land");

    assert_matches!(
        ConfigLoader::load_from(dir.path()),
        Err(TimeUtilsError::Validation(_))
    );

    clear_env();
}
