use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::{remove_json_pointer, set_json_pointer};
use crate::error::{Error, Result};
use crate::paths;
use crate::ranges::RangeStyle;
use crate::rooted_path::{RootMarker, DEFAULT_ROOT_MARKER};
use crate::text::{DEFAULT_TRUNCATE_ENDING, DEFAULT_TRUNCATE_LENGTH};
use crate::utils::io;

/// Root configuration structure for tidbits.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TidbitsConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via tidbits.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Defaults {
    #[serde(default)]
    pub paths: PathDefaults,

    #[serde(default)]
    pub ranges: RangeStyle,

    #[serde(default)]
    pub text: TextDefaults,
}

/// Defaults for rooted path normalization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathDefaults {
    #[serde(default = "default_root_marker")]
    pub root_marker: String,
}

/// Defaults for text shaping commands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextDefaults {
    #[serde(default = "default_truncate_length")]
    pub truncate_length: usize,

    #[serde(default = "default_truncate_ending")]
    pub truncate_ending: String,

    #[serde(default = "default_pad_char")]
    pub pad_char: char,
}

impl Default for PathDefaults {
    fn default() -> Self {
        Self {
            root_marker: default_root_marker(),
        }
    }
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            truncate_length: default_truncate_length(),
            truncate_ending: default_truncate_ending(),
            pad_char: default_pad_char(),
        }
    }
}

impl PathDefaults {
    /// The configured marker, validated.
    pub fn marker(&self) -> Result<RootMarker> {
        RootMarker::new(&self.root_marker).map_err(|_| {
            Error::config_invalid_value(
                "defaults.paths.root_marker",
                Some(self.root_marker.clone()),
                "Root marker must be a single non-empty path segment",
            )
            .with_hint("Run `tidbits config reset` to restore the built-in marker")
        })
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_root_marker() -> String {
    DEFAULT_ROOT_MARKER.to_string()
}

fn default_truncate_length() -> usize {
    DEFAULT_TRUNCATE_LENGTH
}

fn default_truncate_ending() -> String {
    DEFAULT_TRUNCATE_ENDING.to_string()
}

fn default_pad_char() -> char {
    ' '
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full tidbits.json config, falling back to defaults on any error.
/// A missing file is silent; an unreadable or invalid one is reported.
pub fn load_config() -> TidbitsConfig {
    let path = match paths::tidbits_json() {
        Ok(path) => path,
        Err(_) => return TidbitsConfig::default(),
    };

    if !path.exists() {
        return TidbitsConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log_status!(
                "config",
                "Ignoring {} ({}), using built-in defaults",
                path.display(),
                err.message
            );
            TidbitsConfig::default()
        }
    }
}

/// Read and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<TidbitsConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Save config to tidbits.json file (creates if missing).
pub fn save_config(config: &TidbitsConfig) -> Result<()> {
    save_config_to(&paths::tidbits_json()?, config)
}

/// Save config to an explicit path, creating parent directories.
pub fn save_config_to(path: &Path, config: &TidbitsConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = crate::config::to_string_pretty(config)?;
    io::write_file(path, &content, &format!("write {}", path.display()))
}

/// Check if tidbits.json file exists
pub fn config_exists() -> bool {
    paths::tidbits_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete tidbits.json file (reset to defaults)
pub fn reset_config() -> Result<bool> {
    let path = paths::tidbits_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to tidbits.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::tidbits_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

// =============================================================================
// JSON pointer edits
// =============================================================================

/// Set the value at `pointer` and return the re-validated config.
pub fn set_value(config: &TidbitsConfig, pointer: &str, value: Value) -> Result<TidbitsConfig> {
    edit(config, |json| set_json_pointer(json, pointer, value))
}

/// Remove the value at `pointer`; removed fields fall back to built-in defaults.
pub fn remove_value(config: &TidbitsConfig, pointer: &str) -> Result<TidbitsConfig> {
    edit(config, |json| remove_json_pointer(json, pointer).map(|_| ()))
}

fn edit<F>(config: &TidbitsConfig, apply: F) -> Result<TidbitsConfig>
where
    F: FnOnce(&mut Value) -> Result<()>,
{
    let mut json = serde_json::to_value(config)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize config".to_string())))?;

    apply(&mut json)?;

    let edited: TidbitsConfig = serde_json::from_value(json).map_err(|e| {
        Error::validation_invalid_json(e, Some("deserialize config".to_string()), None)
    })?;

    edited.defaults.paths.marker()?;
    Ok(edited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_defaults_match_documented_values() {
        let defaults = builtin_defaults();
        assert_eq!(defaults.paths.root_marker, "efs");
        assert_eq!(defaults.ranges.separator, ", ");
        assert_eq!(defaults.ranges.joiner, "-");
        assert_eq!(defaults.text.truncate_length, 100);
        assert_eq!(defaults.text.truncate_ending, "...");
        assert_eq!(defaults.text.pad_char, ' ');
    }

    #[test]
    fn partial_config_fills_missing_fields() {
        let config: TidbitsConfig =
            serde_json::from_str(r#"{"defaults":{"ranges":{"joiner":".."},"text":{"pad_char":"0"}}}"#)
                .unwrap();
        assert_eq!(config.defaults.ranges.joiner, "..");
        assert_eq!(config.defaults.ranges.separator, ", ");
        assert_eq!(config.defaults.text.pad_char, '0');
        assert_eq!(config.defaults.text.truncate_length, 100);
        assert_eq!(config.defaults.paths.root_marker, "efs");
    }

    #[test]
    fn empty_object_is_builtin() {
        let config: TidbitsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TidbitsConfig::default());
    }

    #[test]
    fn set_value_updates_nested_field() {
        let config = TidbitsConfig::default();
        let edited = set_value(&config, "/defaults/ranges/joiner", Value::from("..")).unwrap();
        assert_eq!(edited.defaults.ranges.joiner, "..");
        assert_eq!(edited.defaults.paths, config.defaults.paths);
    }

    #[test]
    fn set_value_rejects_wrong_type() {
        let config = TidbitsConfig::default();
        let err = set_value(&config, "/defaults/text/truncate_length", Value::from("ten"))
            .unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
    }

    #[test]
    fn set_value_rejects_bad_marker() {
        let config = TidbitsConfig::default();
        let err = set_value(&config, "/defaults/paths/root_marker", Value::from("")).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }

    #[test]
    fn remove_value_restores_builtin() {
        let config = set_value(
            &TidbitsConfig::default(),
            "/defaults/paths/root_marker",
            Value::from("data"),
        )
        .unwrap();
        assert_eq!(config.defaults.paths.root_marker, "data");

        let reset = remove_value(&config, "/defaults/paths/root_marker").unwrap();
        assert_eq!(reset.defaults.paths.root_marker, "efs");
    }

    #[test]
    fn invalid_marker_is_config_error() {
        let paths = PathDefaults {
            root_marker: "a/b".to_string(),
        };
        let err = paths.marker().unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
        assert_eq!(err.hints.len(), 1);
    }
}
