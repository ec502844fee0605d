//! Lexical path-name helpers: joining and file extensions.
//!
//! Nothing here touches the filesystem.

use crate::rooted_path::collapse_slashes;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionOptions {
    /// Prefix the result with `.`.
    pub include_dot: bool,
    /// Return every extension (`d.ts`) instead of only the last (`ts`).
    pub all: bool,
}

/// Join `parts` onto `base` and normalize the result.
///
/// Empty and `.` segments are dropped, `..` pops the previous segment. A
/// leading `/` on `base` is kept. The result ends with `/` when the last
/// part does (or, with no parts, when `base` does). Nothing left gives `.`.
pub fn path_join(base: &str, parts: &[&str]) -> String {
    let trailing = match parts {
        [] => base.ends_with('/'),
        [only] if only.is_empty() => base.ends_with('/'),
        [.., last] => last.ends_with('/'),
    };

    let mut segments: Vec<&str> = Vec::new();
    let all_segments = std::iter::once(base)
        .chain(parts.iter().copied())
        .flat_map(|part| part.split('/'));

    for segment in all_segments {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut joined = segments.join("/");
    if base.starts_with('/') {
        joined.insert(0, '/');
    }
    if joined.is_empty() {
        joined.push('.');
    }
    if trailing {
        joined.push('/');
    }

    collapse_slashes(&joined)
}

/// File extension(s) of the last path segment, `None` if it has none.
pub fn extension(file: &str, opts: &ExtensionOptions) -> Option<String> {
    let file_name = file.rsplit('/').next().unwrap_or(file);
    let mut pieces = file_name.split('.');
    pieces.next();
    let exts: Vec<&str> = pieces.collect();

    let ext = if opts.all {
        exts.join(".")
    } else {
        exts.last()?.to_string()
    };

    if ext.is_empty() {
        return None;
    }

    Some(if opts.include_dot {
        format!(".{}", ext)
    } else {
        ext
    })
}

/// Ensure `file` ends with exactly one `.ext`.
///
/// `asdf` / `asdf.` / `asdf.xyz.xyz` all become `asdf.xyz`; a different
/// existing extension is kept (`asdf.abc` -> `asdf.abc.xyz`).
pub fn ensure_extension(file: &str, ext: &str) -> String {
    let bare = ext.trim_start_matches('.');
    if bare.is_empty() {
        return file.to_string();
    }
    let dotted = format!(".{}", bare);

    let mut stem = file.trim_end_matches('.');
    while let Some(stripped) = stem.strip_suffix(dotted.as_str()) {
        stem = stripped;
    }

    format!("{}{}", stem, dotted)
}
