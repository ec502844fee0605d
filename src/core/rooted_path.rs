//! Root-marker path normalization.
//!
//! Every path the file navigator hands around lives under a single mount
//! marker (`efs` by default). [`ensure_root`] maps any path-like string onto
//! the canonical `/<marker>/a/b` form, [`remove_root`] strips the marker and
//! leading separators so the remainder can be re-joined elsewhere.
//!
//! Only a marker at the very start of the path counts. [`ensure_root`] needs
//! it to be a whole segment, so `efs.txt` and `efsafa/x` are ordinary names.
//! [`remove_root`] is looser and accepts any marker not followed by a word
//! character (`[A-Za-z0-9_-]`), so `efs.txt` becomes `.txt`. `a/efs/b` keeps
//! its `efs` text in both.

use crate::error::{Error, Result};

pub const DEFAULT_ROOT_MARKER: &str = "efs";

/// Validated root marker token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMarker(String);

/// Prefix placed in front of the remainder by [`remove_root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootPrefix {
    #[default]
    None,
    Slash,
}

impl RootPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootPrefix::None => "",
            RootPrefix::Slash => "/",
        }
    }
}

impl Default for RootMarker {
    fn default() -> Self {
        Self(DEFAULT_ROOT_MARKER.to_string())
    }
}

impl std::fmt::Display for RootMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RootMarker {
    pub fn new(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::validation_invalid_argument(
                "root_marker",
                "Root marker cannot be empty",
                None,
                None,
            ));
        }

        if token.contains('/') || token == "." || token == ".." {
            return Err(Error::validation_invalid_argument(
                "root_marker",
                "Root marker must be a single path segment",
                Some(token.to_string()),
                None,
            ));
        }

        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical root path, e.g. `/efs`.
    pub fn root(&self) -> String {
        format!("/{}", self.0)
    }

    /// Canonicalize `path` so it starts with exactly one `/<marker>`.
    ///
    /// Duplicate separators collapse, trailing separators are dropped and any
    /// run of leading markers (`efs/efs/...`) folds into one. Idempotent.
    ///
    /// A lone leading `.` is treated as a segment and dropped, so `.` maps to
    /// the bare root rather than `/efs/.`.
    pub fn ensure_root(&self, path: &str) -> String {
        let rest = collapse_slashes(self.strip_root_prefix(path, ends_segment));
        let rest = rest.trim_end_matches('/');

        if rest.is_empty() {
            self.root()
        } else {
            format!("/{}/{}", self.0, rest)
        }
    }

    /// Strip leading spaces, the leading marker and `.` / `/` noise, then
    /// prepend `prefix`.
    ///
    /// Unlike [`RootMarker::ensure_root`], a trailing separator is kept.
    pub fn remove_root(&self, path: &str, prefix: RootPrefix) -> String {
        let path = path.trim_start_matches(' ');
        let rest = self.strip_root_prefix(path, ends_word);
        let joined = format!("{}{}", prefix.as_str(), rest);
        collapse_slashes(&joined)
    }

    /// Swap a literal `/<marker>/`, `./<marker>/` or `<marker>/` prefix.
    ///
    /// With no explicit `prefix` the replacement keeps the path's flavour:
    /// `/efs/a` -> `/a`, `./efs/a` -> `./a`, `efs/a` -> `a`. Paths without one
    /// of those prefixes are returned unchanged and nothing is normalized.
    pub fn replace_root_prefix(&self, path: &str, prefix: Option<&str>) -> String {
        let candidates = [
            (format!("/{}/", self.0), "/"),
            (format!("./{}/", self.0), "./"),
            (format!("{}/", self.0), ""),
        ];

        for (lead, fallback) in &candidates {
            if let Some(rest) = path.strip_prefix(lead.as_str()) {
                return format!("{}{}", prefix.unwrap_or(fallback), rest);
            }
        }

        path.to_string()
    }

    /// Everything after the leading `.`, separators and marker segments.
    fn strip_root_prefix<'a>(&self, path: &'a str, boundary: fn(&str) -> bool) -> &'a str {
        let mut rest = match path.strip_prefix('.') {
            Some(after_dot)
                if after_dot.is_empty()
                    || after_dot.starts_with('/')
                    || self.strip_marker(after_dot, boundary).is_some() =>
            {
                after_dot
            }
            _ => path,
        };

        loop {
            rest = rest.trim_start_matches('/');
            match self.strip_marker(rest, boundary) {
                Some(after) => rest = after,
                None => return rest,
            }
        }
    }

    fn strip_marker<'a>(
        &self,
        segment_start: &'a str,
        boundary: fn(&str) -> bool,
    ) -> Option<&'a str> {
        let after = segment_start.strip_prefix(self.0.as_str())?;
        boundary(after).then_some(after)
    }
}

/// Marker is a whole segment.
fn ends_segment(after: &str) -> bool {
    after.is_empty() || after.starts_with('/')
}

/// Marker is not the start of a longer word.
fn ends_word(after: &str) -> bool {
    !after
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// [`RootMarker::ensure_root`] with the default `efs` marker.
pub fn ensure_root(path: &str) -> String {
    RootMarker::default().ensure_root(path)
}

/// [`RootMarker::remove_root`] with the default `efs` marker.
pub fn remove_root(path: &str, prefix: RootPrefix) -> String {
    RootMarker::default().remove_root(path, prefix)
}

/// [`RootMarker::replace_root_prefix`] with the default `efs` marker.
pub fn replace_root_prefix(path: &str, prefix: Option<&str>) -> String {
    RootMarker::default().replace_root_prefix(path, prefix)
}

/// Collapse every run of `/` into a single `/`.
pub fn collapse_slashes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_slash = false;
    for ch in raw.chars() {
        if ch == '/' {
            if !prev_slash {
                out.push(ch);
            }
            prev_slash = true;
        } else {
            prev_slash = false;
            out.push(ch);
        }
    }
    out
}
