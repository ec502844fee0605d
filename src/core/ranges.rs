//! Compressed range strings for integer selections.
//!
//! `{1, 2, 3, 4, 5, 6, 7, 10, 11, 15}` renders as `"1-7, 10, 11, 15"`: runs of
//! three or more consecutive values collapse into `first-last`, shorter runs
//! are listed number by number.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum run length rendered as `first-last`.
const MIN_RANGE_LEN: usize = 3;

/// Upper bound on the values a single range entry may expand to.
pub const MAX_EXPANDED_RANGE: i128 = 1_000_000;

/// Punctuation used when rendering a range string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeStyle {
    /// Between entries.
    pub separator: String,
    /// Between the two ends of a range.
    pub joiner: String,
}

impl Default for RangeStyle {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            joiner: "-".to_string(),
        }
    }
}

/// Render `values` (duplicates ignored, any order) as a range string.
pub fn build_range_string<I>(values: I) -> String
where
    I: IntoIterator<Item = i64>,
{
    build_range_string_with(values, &RangeStyle::default())
}

/// Union two selections and render them as one range string.
pub fn build_range_string_union<I, J>(first: I, second: J) -> String
where
    I: IntoIterator<Item = i64>,
    J: IntoIterator<Item = i64>,
{
    build_range_string(first.into_iter().chain(second))
}

pub fn build_range_string_with<I>(values: I, style: &RangeStyle) -> String
where
    I: IntoIterator<Item = i64>,
{
    // BTreeSet dedupes and yields ascending numeric order.
    let sorted: BTreeSet<i64> = values.into_iter().collect();

    let mut entries: Vec<String> = Vec::new();
    let mut run: Vec<i64> = Vec::new();

    for value in sorted {
        let extends_run = run
            .last()
            .and_then(|last| last.checked_add(1))
            .is_some_and(|next| next == value);

        if !extends_run {
            flush_run(&mut run, &mut entries, style);
        }
        run.push(value);
    }
    flush_run(&mut run, &mut entries, style);

    entries.join(&style.separator)
}

/// Move the current run into `entries`, leaving the buffer empty.
fn flush_run(run: &mut Vec<i64>, entries: &mut Vec<String>, style: &RangeStyle) {
    match (run.first(), run.last()) {
        (Some(first), Some(last)) if run.len() >= MIN_RANGE_LEN => {
            entries.push(format!("{}{}{}", first, style.joiner, last));
        }
        _ => entries.extend(run.iter().map(|v| v.to_string())),
    }
    run.clear();
}

/// Parse a range string in the default style back into sorted values.
///
/// Accepts exactly what [`build_range_string`] produces, plus arbitrary
/// whitespace around entries. Negative bounds work: `"-5--3"` is `-5..=-3`.
pub fn expand_range_string(input: &str) -> Result<Vec<i64>> {
    let mut values = BTreeSet::new();

    for token in input.split(',').map(str::trim) {
        if token.is_empty() {
            if input.trim().is_empty() {
                continue;
            }
            return Err(invalid_token(token, "Empty entry in range string"));
        }

        let (start, end) = split_range_token(token)?;
        if start > end {
            return Err(invalid_token(token, "Range start is greater than its end"));
        }
        if i128::from(end) - i128::from(start) >= MAX_EXPANDED_RANGE {
            return Err(invalid_token(token, "Range is too large to expand"));
        }
        values.extend(start..=end);
    }

    Ok(values.into_iter().collect())
}

fn split_range_token(token: &str) -> Result<(i64, i64)> {
    // Skip the first char so a leading minus sign is never taken as the joiner.
    let joiner_at = token
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '-')
        .map(|(idx, _)| idx);

    match joiner_at {
        Some(idx) => Ok((
            parse_bound(&token[..idx], token)?,
            parse_bound(&token[idx + 1..], token)?,
        )),
        None => {
            let value = parse_bound(token, token)?;
            Ok((value, value))
        }
    }
}

fn parse_bound(raw: &str, token: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| invalid_token(token, "Not an integer or integer range"))
}

fn invalid_token(token: &str, problem: &str) -> Error {
    Error::validation_invalid_argument("range", problem, Some(token.to_string()), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_range_is_rejected() {
        assert!(expand_range_string("0-999999").is_ok());
        assert!(expand_range_string("0-1000000").is_err());
        assert!(expand_range_string("-9223372036854775808-9223372036854775807").is_err());
    }

    #[test]
    fn empty_input_renders_empty_string() {
        assert_eq!(build_range_string(Vec::<i64>::new()), "");
    }

    #[test]
    fn single_value_renders_number() {
        assert_eq!(build_range_string([5]), "5");
    }

    #[test]
    fn pair_renders_as_two_entries() {
        assert_eq!(build_range_string([1, 2]), "1, 2");
    }

    #[test]
    fn three_consecutive_render_as_range() {
        assert_eq!(build_range_string([1, 2, 3]), "1-3");
    }

    #[test]
    fn mixed_runs() {
        assert_eq!(
            build_range_string([1, 2, 3, 5, 6, 8, 9, 10]),
            "1-3, 5, 6, 8-10"
        );
    }

    #[test]
    fn sorts_numerically_not_lexicographically() {
        assert_eq!(build_range_string([10, 9, 2, 1, 100]), "1, 2, 9, 10, 100");
    }

    #[test]
    fn duplicates_are_ignored() {
        assert_eq!(build_range_string([3, 1, 2, 2, 3, 1]), "1-3");
    }

    #[test]
    fn union_merges_both_sources() {
        let selected = vec![1, 2, 3, 4, 5, 6, 7, 15];
        let highlighted = BTreeSet::from([10, 11, 17, 22, 23, 24, 7]);
        assert_eq!(
            build_range_string_union(selected, highlighted),
            "1-7, 10, 11, 15, 17, 22-24"
        );
    }

    #[test]
    fn negative_values_and_zero() {
        assert_eq!(build_range_string([-3, -2, -1, 0, 4]), "-3-0, 4");
    }

    #[test]
    fn max_value_does_not_overflow() {
        assert_eq!(
            build_range_string([i64::MAX - 2, i64::MAX - 1, i64::MAX, i64::MIN]),
            format!("{}, {}-{}", i64::MIN, i64::MAX - 2, i64::MAX)
        );
    }

    #[test]
    fn custom_style() {
        let style = RangeStyle {
            separator: ";".to_string(),
            joiner: "..".to_string(),
        };
        assert_eq!(build_range_string_with([1, 2, 3, 7], &style), "1..3;7");
    }

    #[test]
    fn expand_reverses_build() {
        let input = vec![40, 1, 2, 3, 5, 6, 8, 9, 10, -4, -5, -6, 3];
        let rendered = build_range_string(input.clone());
        let expanded = expand_range_string(&rendered).unwrap();

        let expected: Vec<i64> = input
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        assert_eq!(expanded, expected);
    }

    #[test]
    fn expand_handles_negative_bounds() {
        assert_eq!(expand_range_string("-5--3").unwrap(), vec![-5, -4, -3]);
    }

    #[test]
    fn expand_empty_string() {
        assert!(expand_range_string("").unwrap().is_empty());
        assert!(expand_range_string("   ").unwrap().is_empty());
    }

    #[test]
    fn expand_rejects_garbage() {
        assert!(expand_range_string("1, x").is_err());
        assert!(expand_range_string("5-2").is_err());
        assert!(expand_range_string("1,,2").is_err());
    }
}
