//! Parsing primitives for command-line values.
//!
//! Turns loosely formatted user input (comma or whitespace separated numbers,
//! range strings, coordinate triples) into typed values. Every failure is a
//! `validation.invalid_argument` error naming the offending field.

use crate::error::{Error, Result};
use crate::geometry::Vec3;
use crate::ranges::expand_range_string;
use std::hash::Hash;

/// Split on commas and whitespace, dropping empty pieces.
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Parse a list of integers. Entries may be single values or ranges
/// (`"1-4 7, 9"` gives `[1, 2, 3, 4, 7, 9]`); input order is kept.
pub fn parse_integers(input: &str, field: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for token in tokens(input) {
        if let Ok(value) = token.parse::<i64>() {
            values.push(value);
            continue;
        }
        let expanded = expand_range_string(token).map_err(|_| invalid(field, token))?;
        values.extend(expanded);
    }
    Ok(values)
}

/// Parse a list of floating point numbers.
pub fn parse_numbers(input: &str, field: &str) -> Result<Vec<f64>> {
    tokens(input)
        .map(|token| parse_number(token, field))
        .collect()
}

pub fn parse_number(token: &str, field: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(field, token))
}

/// Parse an `x,y,z` coordinate triple.
pub fn parse_vec3(input: &str, field: &str) -> Result<Vec3> {
    let values = parse_numbers(input, field)?;
    match values.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(Error::validation_invalid_argument(
            field,
            format!("Expected 3 coordinates, got {}", values.len()),
            Some(input.to_string()),
            None,
        )),
    }
}

/// Deduplicate preserving first occurrence order.
pub fn dedupe<T>(items: Vec<T>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn invalid(field: &str, token: &str) -> Error {
    Error::validation_invalid_argument(
        field,
        format!("Cannot parse '{}'", token),
        Some(token.to_string()),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_split_on_commas_and_whitespace() {
        let parts: Vec<&str> = tokens(" 1, 2,,3\n4 ").collect();
        assert_eq!(parts, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn parse_integers_expands_ranges() {
        assert_eq!(
            parse_integers("9 1-4, 7 -2", "values").unwrap(),
            vec![9, 1, 2, 3, 4, 7, -2]
        );
        assert_eq!(parse_integers("-5--3", "values").unwrap(), vec![-5, -4, -3]);
    }

    #[test]
    fn parse_integers_rejects_garbage() {
        let err = parse_integers("1 two 3", "values").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.details["id"], "two");
    }

    #[test]
    fn parse_vec3_requires_three_values() {
        assert_eq!(parse_vec3("1, 2.5 -3", "a").unwrap(), [1.0, 2.5, -3.0]);
        assert!(parse_vec3("1,2", "a").is_err());
        assert!(parse_vec3("1,2,x", "a").is_err());
    }

    #[test]
    fn dedupe_preserves_order() {
        let items = vec!["a", "b", "a", "c", "b"];
        let result = dedupe(items);
        assert_eq!(result, vec!["a", "b", "c"]);
    }
}
