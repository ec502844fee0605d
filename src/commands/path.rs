use clap::{Args, Subcommand};
use serde::Serialize;

use tidbits::log_status;
use tidbits::pathname::{self, ExtensionOptions};
use tidbits::{RootMarker, RootPrefix};

use super::{read_value, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct PathArgs {
    #[command(subcommand)]
    command: PathCommand,
}

#[derive(Subcommand)]
enum PathCommand {
    /// Normalize a path so it starts with exactly one /<marker>
    Ensure {
        /// Path to normalize (- reads stdin)
        path: String,
        /// Root marker (defaults to defaults.paths.root_marker)
        #[arg(long)]
        marker: Option<String>,
    },
    /// Strip the root prefix from a path
    Remove {
        /// Path to strip (- reads stdin)
        path: String,
        /// Prefix the result with a single /
        #[arg(long)]
        slash: bool,
        /// Root marker (defaults to defaults.paths.root_marker)
        #[arg(long)]
        marker: Option<String>,
    },
    /// Swap a leading /<marker>/, ./<marker>/ or <marker>/ for another prefix
    Replace {
        /// Path to rewrite (- reads stdin)
        path: String,
        /// Replacement prefix (defaults to /, ./ or nothing, matching the input)
        #[arg(long, allow_hyphen_values = true)]
        prefix: Option<String>,
        /// Root marker (defaults to defaults.paths.root_marker)
        #[arg(long)]
        marker: Option<String>,
    },
    /// Join path segments and normalize the result
    Join {
        /// Base path
        base: String,
        /// Segments appended to the base
        parts: Vec<String>,
    },
    /// Show the extension of a file name
    Ext {
        /// File name or path
        file: String,
        /// Include the leading dot
        #[arg(long)]
        dot: bool,
        /// Return every extension (d.ts) instead of the last one
        #[arg(long)]
        all: bool,
    },
    /// Ensure a file name ends with exactly one .<ext>
    EnsureExt {
        /// File name or path
        file: String,
        /// Extension, with or without the leading dot
        ext: String,
    },
}

#[derive(Debug, Serialize)]
pub struct PathOutput {
    command: String,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<String>,
    result: Option<String>,
}

impl PathOutput {
    fn new(command: &str, input: String, result: Option<String>) -> Self {
        Self {
            command: command.to_string(),
            input,
            marker: None,
            result,
        }
    }

    fn with_marker(mut self, marker: &RootMarker) -> Self {
        self.marker = Some(marker.as_str().to_string());
        self
    }
}

pub fn run(args: PathArgs, global: &GlobalArgs) -> CmdResult<PathOutput> {
    match args.command {
        PathCommand::Ensure { path, marker } => {
            let marker = resolve_marker(marker, global)?;
            let path = read_value(&path, "path")?;
            let result = marker.ensure_root(&path);
            log_status!("path", "{} -> {}", path, result);
            Ok((PathOutput::new("path.ensure", path, Some(result)).with_marker(&marker), 0))
        }
        PathCommand::Remove {
            path,
            slash,
            marker,
        } => {
            let marker = resolve_marker(marker, global)?;
            let path = read_value(&path, "path")?;
            let prefix = if slash {
                RootPrefix::Slash
            } else {
                RootPrefix::None
            };
            let result = marker.remove_root(&path, prefix);
            Ok((PathOutput::new("path.remove", path, Some(result)).with_marker(&marker), 0))
        }
        PathCommand::Replace {
            path,
            prefix,
            marker,
        } => {
            let marker = resolve_marker(marker, global)?;
            let path = read_value(&path, "path")?;
            let result = marker.replace_root_prefix(&path, prefix.as_deref());
            Ok((PathOutput::new("path.replace", path, Some(result)).with_marker(&marker), 0))
        }
        PathCommand::Join { base, parts } => {
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            let result = pathname::path_join(&base, &parts);
            Ok((PathOutput::new("path.join", base, Some(result)), 0))
        }
        PathCommand::Ext { file, dot, all } => {
            let opts = ExtensionOptions {
                include_dot: dot,
                all,
            };
            let result = pathname::extension(&file, &opts);
            Ok((PathOutput::new("path.ext", file, result), 0))
        }
        PathCommand::EnsureExt { file, ext } => {
            let result = pathname::ensure_extension(&file, &ext);
            Ok((PathOutput::new("path.ensure_ext", file, Some(result)), 0))
        }
    }
}

/// An explicit `--marker` wins over the configured default.
fn resolve_marker(flag: Option<String>, global: &GlobalArgs) -> tidbits::Result<RootMarker> {
    match flag {
        Some(marker) => RootMarker::new(&marker),
        None => global.defaults.paths.marker(),
    }
}
