//! tidbits.json round trips through explicit paths so tests never touch the
//! user's real config directory.

use serde_json::json;
use tempfile::TempDir;

use tidbits::defaults::{self, TidbitsConfig};

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("tidbits.json");

    let config = defaults::set_value(
        &TidbitsConfig::default(),
        "/defaults/ranges/separator",
        json!(" | "),
    )
    .unwrap();
    defaults::save_config_to(&path, &config).unwrap();

    let loaded = defaults::load_config_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.defaults.ranges.separator, " | ");
}

#[test]
fn saved_file_is_pretty_json_with_every_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tidbits.json");
    defaults::save_config_to(&path, &TidbitsConfig::default()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        json!({
            "defaults": {
                "paths": { "root_marker": "efs" },
                "ranges": { "separator": ", ", "joiner": "-" },
                "text": { "truncate_length": 100, "truncate_ending": "...", "pad_char": " " }
            }
        })
    );
}

#[test]
fn partial_file_keeps_builtin_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tidbits.json");
    std::fs::write(&path, r#"{ "defaults": { "paths": { "root_marker": "data" } } }"#).unwrap();

    let loaded = defaults::load_config_from(&path).unwrap();
    assert_eq!(loaded.defaults.paths.root_marker, "data");
    assert_eq!(loaded.defaults.ranges, defaults::builtin_defaults().ranges);
    assert_eq!(loaded.defaults.paths.marker().unwrap().ensure_root("a"), "/data/a");
}

#[test]
fn malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tidbits.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = defaults::load_config_from(&path).unwrap_err();
    assert_eq!(err.code.as_str(), "config.invalid_json");
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = defaults::load_config_from(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code.as_str(), "internal.io_error");
}
