use tidbits::defaults::{self, Defaults};
use tidbits::io;

pub type CmdResult<T> = tidbits::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Defaults from tidbits.json, or built-in when the file is missing.
    pub defaults: Defaults,
}

impl GlobalArgs {
    pub fn load() -> Self {
        Self {
            defaults: defaults::load_defaults(),
        }
    }
}

// ============================================================================
// Input Resolution (CLI layer)
// ============================================================================

/// Resolve a positional text argument. `-` reads stdin, dropping the single
/// line break a shell pipe appends.
pub(crate) fn read_value(value: &str, field: &str) -> tidbits::Result<String> {
    if value != "-" {
        return Ok(value.to_string());
    }

    let raw = io::read_input(value, field)?;
    let trimmed = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(&raw);
    Ok(trimmed.to_string())
}

pub mod config;
pub mod math;
pub mod path;
pub mod range;
pub mod seq;
pub mod text;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (tidbits::Result<serde_json::Value>, i32) {
    crate::tty::status("tidbits is working...");

    match command {
        // Commands without global context
        crate::Commands::Math(args) => dispatch!(args, math),
        crate::Commands::Config(args) => dispatch!(args, config),

        // Commands with global context
        crate::Commands::Path(args) => dispatch!(args, global, path),
        crate::Commands::Range(args) => dispatch!(args, global, range),
        crate::Commands::Text(args) => dispatch!(args, global, text),
        crate::Commands::Seq(args) => dispatch!(args, global, seq),
    }
}
