use clap::{Args, Subcommand};
use serde::Serialize;

use tidbits::log_status;
use tidbits::parser;
use tidbits::ranges::build_range_string_with;
use tidbits::sequence::remove_duplicates;
use tidbits::{expand_range_string, RangeStyle};

use super::{read_value, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct RangeArgs {
    #[command(subcommand)]
    command: RangeCommand,
}

#[derive(Subcommand)]
enum RangeCommand {
    /// Compress integers into a range string (e.g. "1-7, 10, 22-47")
    Build {
        /// Integers separated by commas or spaces; ranges like 3-9 are expanded (- reads stdin)
        #[arg(allow_hyphen_values = true)]
        values: String,
        /// Second selection to union with the first
        #[arg(long, allow_hyphen_values = true)]
        with: Option<String>,
        /// Separator between entries (defaults to defaults.ranges.separator)
        #[arg(long)]
        separator: Option<String>,
        /// Joiner between the ends of a range (defaults to defaults.ranges.joiner)
        #[arg(long)]
        joiner: Option<String>,
    },
    /// Expand a range string back into sorted integers
    Expand {
        /// Range string such as "1-3, 7" (- reads stdin)
        #[arg(allow_hyphen_values = true)]
        range: String,
    },
}

#[derive(Debug, Serialize)]
pub struct RangeOutput {
    command: String,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<i64>>,
}

pub fn run(args: RangeArgs, global: &GlobalArgs) -> CmdResult<RangeOutput> {
    match args.command {
        RangeCommand::Build {
            values,
            with,
            separator,
            joiner,
        } => {
            let mut selection = parser::parse_integers(&read_value(&values, "values")?, "values")?;
            if let Some(with) = with {
                selection.extend(parser::parse_integers(&with, "with")?);
            }

            let defaults = &global.defaults.ranges;
            let style = RangeStyle {
                separator: separator.unwrap_or_else(|| defaults.separator.clone()),
                joiner: joiner.unwrap_or_else(|| defaults.joiner.clone()),
            };

            let count = remove_duplicates(selection.clone()).len();
            let range = build_range_string_with(selection, &style);
            log_status!("range", "Compressed {} values into {}", count, range);

            Ok((
                RangeOutput {
                    command: "range.build".to_string(),
                    count,
                    range: Some(range),
                    values: None,
                },
                0,
            ))
        }
        RangeCommand::Expand { range } => {
            let range = read_value(&range, "range")?;
            let values = expand_range_string(&range)?;

            Ok((
                RangeOutput {
                    command: "range.expand".to_string(),
                    count: values.len(),
                    range: Some(range),
                    values: Some(values),
                },
                0,
            ))
        }
    }
}
