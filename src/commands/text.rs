use clap::{Args, Subcommand, ValueEnum};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use tidbits::text::{self, EmptyLineOptions, Preserve};
use tidbits::validation;
use tidbits::Error;

use super::{read_value, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct TextArgs {
    #[command(subcommand)]
    command: TextCommand,
}

#[derive(Subcommand)]
enum TextCommand {
    /// Convert between camelCase, PascalCase, snake_case and dash-case
    Case {
        /// Input text (- reads stdin)
        input: String,
        /// Target case
        #[arg(long, value_enum)]
        to: CaseStyle,
    },
    /// Uppercase the first character
    Capitalize {
        /// Input text (- reads stdin)
        input: String,
        /// Also lowercase everything after the first character
        #[arg(long)]
        lower_rest: bool,
    },
    /// Reverse the characters
    Reverse {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Cut text to a length, marking the cut
    Truncate {
        /// Input text (- reads stdin)
        input: String,
        /// Characters to keep (defaults to defaults.text.truncate_length)
        #[arg(long)]
        length: Option<usize>,
        /// Marker for the cut (defaults to defaults.text.truncate_ending)
        #[arg(long, allow_hyphen_values = true)]
        ending: Option<String>,
        /// Keep the end of the text instead of the start
        #[arg(long)]
        from_start: bool,
    },
    /// Pad text to a width
    Pad {
        /// Input text (- reads stdin)
        input: String,
        /// Target width in characters
        width: usize,
        /// Fill character (defaults to defaults.text.pad_char)
        #[arg(long)]
        fill: Option<char>,
        /// Pad on the left instead of the right
        #[arg(long)]
        left: bool,
    },
    /// Remove trailing line breaks, or every trailing copy of a suffix
    Chomp {
        /// Input text (- reads stdin)
        input: String,
        #[arg(long, allow_hyphen_values = true)]
        suffix: Option<String>,
    },
    /// Ensure exactly one leading #
    ElId {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Strip trailing punctuation
    RmEndPunc {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Remove every occurrence of a literal or regex
    Remove {
        /// Input text (- reads stdin)
        input: String,
        /// Text (or regex with --regex) to remove
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        /// Treat the pattern as a regular expression
        #[arg(long)]
        regex: bool,
    },
    /// Remove matching surrounding quotes
    Unquote {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Remove all whitespace
    StripWhitespace {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Parse a lenient boolean (yes/no, t/f, true/false)
    Bool {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Put multiline text on one line
    OneLine {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Remove the common leading indent
    Dedent {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Collapse runs of empty lines into one
    Squeeze {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Remove empty lines at the start and end
    TrimLines {
        /// Input text (- reads stdin)
        input: String,
        /// Remove only one empty line at each end
        #[arg(long)]
        one: bool,
    },
    /// Remove spaces before line breaks
    EolSpace {
        /// Input text (- reads stdin)
        input: String,
    },
    /// Remove empty lines
    EmptyLines {
        /// Input text (- reads stdin)
        input: String,
        /// Keep the bookend empty lines on this side
        #[arg(long, value_enum)]
        preserve: Option<PreserveSide>,
        /// Treat lines holding only spaces as content
        #[arg(long)]
        keep_whitespace_lines: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseStyle {
    Camel,
    Pascal,
    Snake,
    Dash,
}

#[derive(Clone, Copy, ValueEnum)]
enum PreserveSide {
    First,
    Last,
    Bookends,
}

impl From<PreserveSide> for Preserve {
    fn from(side: PreserveSide) -> Self {
        match side {
            PreserveSide::First => Preserve::First,
            PreserveSide::Last => Preserve::Last,
            PreserveSide::Bookends => Preserve::Bookends,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TextOutput {
    command: String,
    result: Value,
}

fn output(command: &str, result: impl Into<Value>) -> CmdResult<TextOutput> {
    Ok((
        TextOutput {
            command: format!("text.{}", command),
            result: result.into(),
        },
        0,
    ))
}

pub fn run(args: TextArgs, global: &GlobalArgs) -> CmdResult<TextOutput> {
    let defaults = &global.defaults.text;

    match args.command {
        TextCommand::Case { input, to } => {
            let input = read_value(&input, "input")?;
            let result = match to {
                CaseStyle::Camel => text::camel_case(&input),
                CaseStyle::Pascal => text::pascal_case(&input),
                CaseStyle::Snake => text::snake_case(&input),
                CaseStyle::Dash => text::dash_case(&input),
            };
            output("case", result)
        }
        TextCommand::Capitalize { input, lower_rest } => {
            let input = read_value(&input, "input")?;
            let result = if lower_rest {
                text::cap1_lower_rest(&input)
            } else {
                text::capitalize(&input)
            };
            output("capitalize", result)
        }
        TextCommand::Reverse { input } => {
            output("reverse", text::reverse(&read_value(&input, "input")?))
        }
        TextCommand::Truncate {
            input,
            length,
            ending,
            from_start,
        } => {
            let input = read_value(&input, "input")?;
            let length = length.unwrap_or(defaults.truncate_length);
            let ending = ending.unwrap_or_else(|| defaults.truncate_ending.clone());
            let result = if from_start {
                text::truncate_start(&input, length, &ending)
            } else {
                text::truncate(&input, length, &ending)
            };
            output("truncate", result)
        }
        TextCommand::Pad {
            input,
            width,
            fill,
            left,
        } => {
            let input = read_value(&input, "input")?;
            let fill = fill.unwrap_or(defaults.pad_char);
            let result = if left {
                text::pad_left(&input, width, fill)
            } else {
                text::pad_right(&input, width, fill)
            };
            output("pad", result)
        }
        TextCommand::Chomp { input, suffix } => {
            let input = read_value(&input, "input")?;
            output("chomp", text::chomp(&input, suffix.as_deref()))
        }
        TextCommand::ElId { input } => output("el_id", text::el_id(&read_value(&input, "input")?)),
        TextCommand::RmEndPunc { input } => {
            output("rm_end_punc", text::rm_end_punc(&read_value(&input, "input")?))
        }
        TextCommand::Remove {
            input,
            pattern,
            regex,
        } => {
            let input = read_value(&input, "input")?;
            let result = if regex {
                let re = Regex::new(&pattern).map_err(|e| {
                    Error::validation_invalid_argument(
                        "pattern",
                        format!("Invalid regex: {}", e),
                        Some(pattern.clone()),
                        None,
                    )
                })?;
                text::remove_matches(&input, &re)
            } else {
                text::remove_text(&input, &pattern)
            };
            output("remove", result)
        }
        TextCommand::Unquote { input } => output(
            "unquote",
            text::remove_surrounding_quotes(&read_value(&input, "input")?),
        ),
        TextCommand::StripWhitespace { input } => output(
            "strip_whitespace",
            text::remove_whitespace(&read_value(&input, "input")?),
        ),
        TextCommand::Bool { input } => {
            let input = read_value(&input, "input")?;
            let parsed = validation::require_with_hints(
                text::to_bool(&input),
                "input",
                "Not a recognized boolean",
                vec![
                    "true".to_string(),
                    "false".to_string(),
                    "yes".to_string(),
                    "no".to_string(),
                ],
            )?;
            output("bool", parsed)
        }
        TextCommand::OneLine { input } => {
            output("one_line", text::one_line(&read_value(&input, "input")?))
        }
        TextCommand::Dedent { input } => {
            output("dedent", text::remove_indent(&read_value(&input, "input")?))
        }
        TextCommand::Squeeze { input } => output(
            "squeeze",
            text::remove_multi_empty_lines(&read_value(&input, "input")?),
        ),
        TextCommand::TrimLines { input, one } => output(
            "trim_lines",
            text::remove_bookend_empty_lines(&read_value(&input, "input")?, one),
        ),
        TextCommand::EolSpace { input } => output(
            "eol_space",
            text::remove_eol_space(&read_value(&input, "input")?),
        ),
        TextCommand::EmptyLines {
            input,
            preserve,
            keep_whitespace_lines,
        } => {
            let opts = EmptyLineOptions {
                preserve: preserve.map(Preserve::from),
                keep_whitespace_lines,
            };
            output(
                "empty_lines",
                text::remove_empty_lines(&read_value(&input, "input")?, &opts),
            )
        }
    }
}
