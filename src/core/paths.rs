use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "TIDBITS_CONFIG_DIR";

/// Base tidbits config directory (~/.config/tidbits/ unless overridden)
pub fn tidbits() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(shellexpand::tilde(&dir).into_owned()));
        }
    }

    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("tidbits"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("tidbits"))
    }
}

/// Global tidbits.json config file path
pub fn tidbits_json() -> Result<PathBuf> {
    Ok(tidbits()?.join("tidbits.json"))
}
