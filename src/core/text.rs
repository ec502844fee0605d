//! String transforms: case conversion, shaping and line cleanup.
//!
//! Case conversion is delegated to `heck`; everything else is plain string
//! handling. All functions are total and return a new `String`.

use std::sync::LazyLock;

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use regex::Regex;

pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;
pub const DEFAULT_TRUNCATE_ENDING: &str = "...";

static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static MULTI_EMPTY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *\n *\n").unwrap());
static EOL_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +\n").unwrap());

static LEADING_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^( *\n)+").unwrap());
static LEADING_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\n+").unwrap());
static TRAILING_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\n *)+$").unwrap());
static TRAILING_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+$").unwrap());
static INNER_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n( *\n)+").unwrap());
static INNER_NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

// ============================================================================
// Case
// ============================================================================

/// `some string example` -> `someStringExample`
pub fn camel_case(s: &str) -> String {
    s.to_lower_camel_case()
}

/// `some string example` -> `SomeStringExample`
pub fn pascal_case(s: &str) -> String {
    s.to_upper_camel_case()
}

/// `Some String Example` -> `some_string_example`
pub fn snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// `Some String Example` -> `some-string-example`
pub fn dash_case(s: &str) -> String {
    s.to_kebab_case()
}

/// Uppercase the first character, leave the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// `TeST StRing` -> `Test string`
pub fn cap1_lower_rest(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

// ============================================================================
// Shaping
// ============================================================================

/// Keep the first `length` chars and append `ending` if anything was cut.
pub fn truncate(s: &str, length: usize, ending: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }
    let kept: String = s.chars().take(length).collect();
    kept + ending
}

/// Keep the last `length` chars and prepend `start` if anything was cut,
/// e.g. `...fileName.zzz`.
pub fn truncate_start(s: &str, length: usize, start: &str) -> String {
    let count = s.chars().count();
    if count <= length {
        return s.to_string();
    }
    let kept: String = s.chars().skip(count - length).collect();
    format!("{}{}", start, kept)
}

pub fn pad_left(s: &str, width: usize, pad: char) -> String {
    let count = s.chars().count();
    if count >= width {
        return s.to_string();
    }
    std::iter::repeat(pad).take(width - count).collect::<String>() + s
}

pub fn pad_right(s: &str, width: usize, pad: char) -> String {
    let count = s.chars().count();
    if count >= width {
        return s.to_string();
    }
    let mut out = s.to_string();
    out.extend(std::iter::repeat(pad).take(width - count));
    out
}

/// Remove trailing line breaks, or every trailing repetition of `suffix`.
pub fn chomp(s: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) if !suffix.is_empty() => {
            let mut rest = s;
            while let Some(stripped) = rest.strip_suffix(suffix) {
                rest = stripped;
            }
            rest.to_string()
        }
        _ => s.trim_end_matches(['\r', '\n']).to_string(),
    }
}

/// Ensure exactly one leading `#`. An empty string has no id to prefix.
pub fn el_id(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    format!("#{}", s.trim_start_matches('#'))
}

/// Strip trailing sentence punctuation (`! . , ; : -`) and spaces.
pub fn rm_end_punc(s: &str) -> String {
    s.trim_end_matches(['!', '.', ',', ';', ':', '-', ' '])
        .to_string()
}

pub fn remove_matches(s: &str, pattern: &Regex) -> String {
    pattern.replace_all(s, "").into_owned()
}

pub fn remove_text(s: &str, needle: &str) -> String {
    if needle.is_empty() {
        return s.to_string();
    }
    s.replace(needle, "")
}

/// `"asdf"` -> `asdf`. Quotes must match on both ends.
pub fn remove_surrounding_quotes(s: &str) -> String {
    for quote in ['"', '\'', '`'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

pub fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lenient boolean parse. `None` when the text is not a recognized flag.
pub fn to_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "t" | "y" | "yes" => Some(true),
        "false" | "f" | "n" | "no" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Lines
// ============================================================================

/// Which bookend empty lines [`remove_empty_lines`] leaves in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preserve {
    First,
    Last,
    Bookends,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLineOptions {
    pub preserve: Option<Preserve>,
    /// Treat lines holding only spaces as content.
    pub keep_whitespace_lines: bool,
}

/// Put a multiline string on one line, collapsing runs of spaces.
pub fn one_line(s: &str) -> String {
    let flat: String = s
        .chars()
        .map(|c| if matches!(c, '\n' | '\t' | '\r') { ' ' } else { c })
        .collect();
    MULTI_SPACE.replace_all(&flat, " ").into_owned()
}

/// Drop blank bookend lines, then the indentation shared by every
/// non-blank line.
pub fn remove_indent(s: &str) -> String {
    fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }

    let lines: Vec<&str> = s.split('\n').collect();

    let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !is_blank(l))
        .map_or(start, |idx| idx + 1);
    let body = &lines[start..end.max(start)];

    let indent = body
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|line| line.chars().skip(indent).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse consecutive empty lines into one line break.
pub fn remove_multi_empty_lines(s: &str) -> String {
    MULTI_EMPTY_LINE.replace_all(s, "\n").into_owned()
}

/// Remove empty lines at the start and end only. With `remove_one`, at most
/// one from each end.
pub fn remove_bookend_empty_lines(s: &str, remove_one: bool) -> String {
    if !remove_one {
        return s.trim_start_matches('\n').trim_end_matches('\n').to_string();
    }
    let s = s.strip_prefix('\n').unwrap_or(s);
    s.strip_suffix('\n').unwrap_or(s).to_string()
}

/// Remove spaces at the end of every line.
pub fn remove_eol_space(s: &str) -> String {
    EOL_SPACE
        .replace_all(s, "\n")
        .trim_end_matches(' ')
        .to_string()
}

pub fn remove_empty_lines(s: &str, opts: &EmptyLineOptions) -> String {
    let keep_first = matches!(opts.preserve, Some(Preserve::First | Preserve::Bookends));
    let keep_last = matches!(opts.preserve, Some(Preserve::Last | Preserve::Bookends));

    let (leading, trailing, inner) = if opts.keep_whitespace_lines {
        (&*LEADING_NEWLINES, &*TRAILING_NEWLINES, &*INNER_NEWLINE_RUNS)
    } else {
        (&*LEADING_BLANK_LINES, &*TRAILING_BLANK_LINES, &*INNER_BLANK_LINES)
    };

    let mut out = s.to_string();
    if !keep_first {
        out = leading.replace(&out, "").into_owned();
    }
    if !keep_last {
        out = trailing.replace(&out, "").into_owned();
    }
    inner.replace_all(&out, "\n").into_owned()
}
