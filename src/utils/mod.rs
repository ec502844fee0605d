//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File and stdin I/O with consistent error handling
//! - `parser` - Number, range and coordinate parsing for CLI input
//! - `validation` - Input validation helpers

pub mod io;
pub mod parser;
pub mod validation;
