use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use tidbits::defaults::{self, Defaults, TidbitsConfig};
use tidbits::log_status;

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore tidbits.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set a configuration value at a JSON pointer path
    Set {
        /// JSON pointer path (e.g., /defaults/paths/root_marker)
        pointer: String,
        /// Value to set (JSON)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Remove a configuration value at a JSON pointer path (reverts it to the built-in default)
    Remove {
        /// JSON pointer path (e.g., /defaults/ranges/joiner)
        pointer: String,
    },
    /// Reset configuration to built-in defaults (deletes tidbits.json)
    Reset,
    /// Show the path to tidbits.json
    Path,
}

#[derive(Debug, Default, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<TidbitsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pointer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
}

pub fn run(args: ConfigArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Set { pointer, value } => set(&pointer, &value),
        ConfigCommand::Remove { pointer } => remove(&pointer),
        ConfigCommand::Reset => reset(),
        ConfigCommand::Path => path(),
    }
}

fn show(builtin: bool) -> CmdResult<ConfigOutput> {
    let output = if builtin {
        ConfigOutput {
            command: "config.show".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            ..Default::default()
        }
    } else {
        ConfigOutput {
            command: "config.show".to_string(),
            config: Some(defaults::load_config()),
            ..Default::default()
        }
    };

    Ok((output, 0))
}

fn set(pointer: &str, value_str: &str) -> CmdResult<ConfigOutput> {
    let value: Value = serde_json::from_str(value_str).map_err(|e| {
        tidbits::Error::validation_invalid_json(
            e,
            Some("parse value".to_string()),
            Some(value_str.chars().take(200).collect::<String>()),
        )
        .with_hint("Strings must be quoted, e.g. '\"data\"'")
    })?;

    let config = defaults::set_value(&defaults::load_config(), pointer, value.clone())?;
    defaults::save_config(&config)?;
    log_status!("config", "Set {}", pointer);

    Ok((
        ConfigOutput {
            command: "config.set".to_string(),
            config: Some(config),
            pointer: Some(pointer.to_string()),
            value: Some(value),
            ..Default::default()
        },
        0,
    ))
}

fn remove(pointer: &str) -> CmdResult<ConfigOutput> {
    let config = defaults::remove_value(&defaults::load_config(), pointer)?;
    defaults::save_config(&config)?;
    log_status!("config", "Removed {}", pointer);

    Ok((
        ConfigOutput {
            command: "config.remove".to_string(),
            config: Some(config),
            pointer: Some(pointer.to_string()),
            ..Default::default()
        },
        0,
    ))
}

fn reset() -> CmdResult<ConfigOutput> {
    let deleted = defaults::reset_config()?;

    Ok((
        ConfigOutput {
            command: "config.reset".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            path: Some(defaults::config_path()?),
            deleted: Some(deleted),
            ..Default::default()
        },
        0,
    ))
}

fn path() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.path".to_string(),
            path: Some(defaults::config_path()?),
            exists: Some(defaults::config_exists()),
            ..Default::default()
        },
        0,
    ))
}
