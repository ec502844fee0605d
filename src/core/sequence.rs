//! Slice and Vec helpers: pairing, repositioning, filtering and sorting.
//!
//! Functions taking `&mut Vec<T>` mutate in place; the rest return new
//! collections.

use std::cmp::Ordering;
use std::hash::Hash;

use crate::utils::parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// `[1, 2, 3]` -> `[[1, 2], [3]]`
pub fn chunk_pairs<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    items.chunks(2).map(|pair| pair.to_vec()).collect()
}

/// Insert `value` at `index`, appending when the index is past the end.
pub fn insert_at<T>(items: &mut Vec<T>, index: usize, value: T) {
    let index = index.min(items.len());
    items.insert(index, value);
}

/// Move the item at `from` to `to`, shifting the items in between.
///
/// Out-of-range `from` leaves the vec untouched; `to` is clamped to the end.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Remove every item matching `predicate` and return the removed items in
/// their original order.
pub fn remove_matching<T, F>(items: &mut Vec<T>, mut predicate: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        if predicate(&item) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}

/// Drop repeated items, keeping the first occurrence of each.
pub fn remove_duplicates<T>(items: Vec<T>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    parser::dedupe(items)
}

/// Numeric ascending sort (never lexicographic).
pub fn sort_by_number<T: Ord>(items: &mut [T]) {
    items.sort();
}

pub fn sort_natural<S: AsRef<str>>(items: &mut [S], order: SortOrder) {
    items.sort_by(|a, b| {
        let ord = natural_cmp(a.as_ref(), b.as_ref());
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// Natural ordering: digit runs compare by numeric value, everything else
/// compares case-insensitively, with case as the final tie-break.
///
/// `"file2" < "file10"`, `"a" < "B"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => cmp_digits(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => cmp_text(x, y),
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn cmp_digits(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

fn cmp_text(x: &str, y: &str) -> Ordering {
    x.chars()
        .flat_map(char::to_lowercase)
        .cmp(y.chars().flat_map(char::to_lowercase))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Splits a string into alternating digit / non-digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(idx, _)| idx);

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}
