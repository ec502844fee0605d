// Public modules
pub mod defaults;
pub mod error;
pub mod geometry;
pub mod numeric;
pub mod pathname;
pub mod ranges;
pub mod rooted_path;
pub mod sequence;
pub mod text;

// Public for CLI access (JSON pointer edits of tidbits.json)
pub mod config;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use ranges::{build_range_string, build_range_string_union, expand_range_string, RangeStyle};
pub use rooted_path::{ensure_root, remove_root, RootMarker, RootPrefix};
