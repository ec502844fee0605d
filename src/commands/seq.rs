use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

use tidbits::parser;
use tidbits::sequence::{self, SortOrder};

use super::{read_value, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct SeqArgs {
    #[command(subcommand)]
    command: SeqCommand,
}

#[derive(Subcommand)]
enum SeqCommand {
    /// Group items into pairs; an odd item ends up alone
    Pairs {
        /// Items separated by commas or spaces (- reads stdin)
        #[arg(allow_hyphen_values = true)]
        items: String,
    },
    /// Drop repeated items, keeping the first occurrence
    Dedupe {
        /// Items separated by commas or spaces (- reads stdin)
        #[arg(allow_hyphen_values = true)]
        items: String,
    },
    /// Sort integers numerically, or any items naturally (file2 < file10)
    Sort {
        /// Items separated by commas or spaces (- reads stdin)
        #[arg(allow_hyphen_values = true)]
        items: String,
        /// Natural sort instead of integer sort
        #[arg(long)]
        natural: bool,
        /// Descending order
        #[arg(long)]
        desc: bool,
    },
    /// Move an item to a new position
    Move {
        /// Items separated by commas or spaces (- reads stdin)
        #[arg(allow_hyphen_values = true)]
        items: String,
        /// Index of the item to move
        #[arg(long)]
        from: usize,
        /// Destination index (clamped to the end)
        #[arg(long)]
        to: usize,
    },
    /// Insert an item at a position
    Insert {
        /// Items separated by commas or spaces (- reads stdin)
        #[arg(allow_hyphen_values = true)]
        items: String,
        /// Item to insert
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Insert position (clamped to the end)
        #[arg(long)]
        at: usize,
    },
    /// Remove every item equal to one of the given values
    Remove {
        /// Items separated by commas or spaces (- reads stdin)
        #[arg(allow_hyphen_values = true)]
        items: String,
        /// Value to remove (repeatable)
        #[arg(long = "match", required = true, allow_hyphen_values = true)]
        matching: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct SeqOutput {
    command: String,
    items: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    removed: Option<Vec<String>>,
}

fn output(command: &str, items: Value) -> CmdResult<SeqOutput> {
    Ok((
        SeqOutput {
            command: format!("seq.{}", command),
            items,
            removed: None,
        },
        0,
    ))
}

fn read_items(raw: &str) -> tidbits::Result<Vec<String>> {
    let raw = read_value(raw, "items")?;
    Ok(parser::tokens(&raw).map(str::to_string).collect())
}

pub fn run(args: SeqArgs, _global: &GlobalArgs) -> CmdResult<SeqOutput> {
    match args.command {
        SeqCommand::Pairs { items } => {
            output("pairs", json!(sequence::chunk_pairs(&read_items(&items)?)))
        }
        SeqCommand::Dedupe { items } => output(
            "dedupe",
            json!(sequence::remove_duplicates(read_items(&items)?)),
        ),
        SeqCommand::Sort {
            items,
            natural,
            desc,
        } => {
            let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
            if natural {
                let mut items = read_items(&items)?;
                sequence::sort_natural(&mut items, order);
                return output("sort", json!(items));
            }

            let mut numbers = parser::parse_integers(&read_value(&items, "items")?, "items")?;
            sequence::sort_by_number(&mut numbers);
            if order == SortOrder::Desc {
                numbers.reverse();
            }
            output("sort", json!(numbers))
        }
        SeqCommand::Move { items, from, to } => {
            let mut items = read_items(&items)?;
            sequence::move_item(&mut items, from, to);
            output("move", json!(items))
        }
        SeqCommand::Insert { items, value, at } => {
            let mut items = read_items(&items)?;
            sequence::insert_at(&mut items, at, value);
            output("insert", json!(items))
        }
        SeqCommand::Remove { items, matching } => {
            let mut items = read_items(&items)?;
            let removed = sequence::remove_matching(&mut items, |item| matching.contains(item));
            Ok((
                SeqOutput {
                    command: "seq.remove".to_string(),
                    items: json!(items),
                    removed: Some(removed),
                },
                0,
            ))
        }
    }
}
