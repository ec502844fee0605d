use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{config, math, path, range, seq, text};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "tidbits")]
#[command(version = VERSION)]
#[command(about = "Small path, range, text, number and sequence transforms with JSON output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Root-marker path normalization and path name helpers
    Path(path::PathArgs),
    /// Compress integer selections into range strings and back
    Range(range::RangeArgs),
    /// String case conversion, shaping and line cleanup
    Text(text::TextArgs),
    /// Rounding, clamping and 3D vector math
    Math(math::MathArgs),
    /// Pair, reorder, filter and sort item lists
    Seq(seq::SeqArgs),
    /// Manage global tidbits configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs::load();

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
