use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{json, Value};

use tidbits::geometry;
use tidbits::numeric;
use tidbits::parser;
use tidbits::validation;

use super::CmdResult;

#[derive(Args)]
pub struct MathArgs {
    #[command(subcommand)]
    command: MathCommand,
}

#[derive(Subcommand)]
enum MathCommand {
    /// Round a number to a number of decimal places
    Round {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        /// Decimal places (0-14)
        #[arg(long, default_value_t = 0)]
        decimals: u32,
        #[arg(long, value_enum, default_value_t = RoundMode::Nearest)]
        mode: RoundMode,
    },
    /// Limit a number to a span (bounds may be given in either order)
    Clamp {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(allow_hyphen_values = true)]
        min: f64,
        #[arg(allow_hyphen_values = true)]
        max: f64,
    },
    /// Absolute distance between two numbers
    Distance {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
    },
    /// Render RGB channels as a hex color
    Hex {
        /// Channel values, 0-255 (out-of-range values clamp)
        #[arg(required = true, allow_hyphen_values = true)]
        channels: Vec<f64>,
    },
    /// Convert degrees to radians
    Radians {
        #[arg(allow_hyphen_values = true)]
        degrees: f64,
    },
    /// Convert radians to degrees
    Degrees {
        #[arg(allow_hyphen_values = true)]
        radians: f64,
    },
    /// Cross product of two 3D vectors ("x,y,z")
    Cross {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Dot product of two 3D vectors ("x,y,z")
    Dot {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Euclidean length of a vector of any dimension
    Norm {
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Dihedral angle in degrees between planes a-b-c and b-c-d
    Dihedral {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
        #[arg(allow_hyphen_values = true)]
        d: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoundMode {
    Nearest,
    Floor,
    Ceil,
}

#[derive(Debug, Serialize)]
pub struct MathOutput {
    command: String,
    result: Value,
}

fn output(command: &str, result: Value) -> CmdResult<MathOutput> {
    Ok((
        MathOutput {
            command: format!("math.{}", command),
            result,
        },
        0,
    ))
}

pub fn run(args: MathArgs) -> CmdResult<MathOutput> {
    match args.command {
        MathCommand::Round {
            value,
            decimals,
            mode,
        } => {
            let result = match mode {
                RoundMode::Nearest => numeric::round_to(value, decimals),
                RoundMode::Floor => numeric::floor_to(value, decimals),
                RoundMode::Ceil => numeric::ceil_to(value, decimals),
            };
            output("round", json!(result))
        }
        MathCommand::Clamp { value, min, max } => {
            output("clamp", json!(numeric::clamp_num(value, min, max)))
        }
        MathCommand::Distance { a, b } => output("distance", json!(numeric::distance(a, b))),
        MathCommand::Hex { channels } => {
            let hex: String = channels.iter().map(|c| numeric::rgb_to_hex(*c)).collect();
            output("hex", json!(format!("#{}", hex)))
        }
        MathCommand::Radians { degrees } => {
            output("radians", json!(geometry::degrees_to_radians(degrees)))
        }
        MathCommand::Degrees { radians } => {
            output("degrees", json!(geometry::radians_to_degrees(radians)))
        }
        MathCommand::Cross { a, b } => {
            let a = parser::parse_vec3(&a, "a")?;
            let b = parser::parse_vec3(&b, "b")?;
            output("cross", json!(geometry::cross_product(a, b)))
        }
        MathCommand::Dot { a, b } => {
            let a = parser::parse_vec3(&a, "a")?;
            let b = parser::parse_vec3(&b, "b")?;
            output("dot", json!(geometry::dot_product(a, b)))
        }
        MathCommand::Norm { values } => {
            let values = parser::parse_numbers(&values, "values")?;
            output("norm", json!(geometry::norm_vector(&values)))
        }
        MathCommand::Dihedral { a, b, c, d } => {
            let a = parser::parse_vec3(&a, "a")?;
            let b_point = parser::parse_vec3(&b, "b")?;
            let c_point = parser::parse_vec3(&c, "c")?;
            let d = parser::parse_vec3(&d, "d")?;

            let angle = validation::require(
                geometry::dihedral_angle(a, b_point, c_point, d),
                "c",
                "Points b and c coincide; the central bond has no direction",
            )?;
            output("dihedral", json!(angle))
        }
    }
}
