//! Input validation primitives.
//!
//! Turn a missing `Option` into a `validation.invalid_argument` error naming
//! the field, replacing verbose `ok_or_else` chains at call sites.

use crate::error::{Error, Result};

/// Require an Option to contain a value.
///
/// ```ignore
/// validation::require(dihedral_angle(a, b, c, d), "c", "Points b and c coincide")?
/// ```
pub fn require<T>(opt: Option<T>, field: &str, message: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_invalid_argument(field, message, None, None))
}

/// Require an Option to contain a value, listing accepted inputs on failure.
pub fn require_with_hints<T>(
    opt: Option<T>,
    field: &str,
    message: &str,
    accepted: Vec<String>,
) -> Result<T> {
    opt.ok_or_else(|| Error::validation_invalid_argument(field, message, None, Some(accepted)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_returns_value_when_some() {
        let result = require(Some("value"), "field", "msg");
        assert_eq!(result.unwrap(), "value");
    }

    #[test]
    fn require_returns_error_when_none() {
        let result: Result<&str> = require(None, "field", "Missing field");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.details["field"], "field");
    }

    #[test]
    fn require_with_hints_lists_accepted_values() {
        let result: Result<bool> =
            require_with_hints(None, "input", "Not a boolean", vec!["yes".to_string()]);
        let err = result.unwrap_err();
        assert_eq!(err.details["tried"][0], "yes");
    }
}
