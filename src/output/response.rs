//! CLI response formatting and output.
//!
//! Every command prints one JSON envelope. Failures carry the error category
//! next to the dotted code so scripts can tell bad input (`config`,
//! `validation`, exit 2) from tidbits faults (`internal`, exit 1).

use tidbits::error::{ErrorCategory, Hint};
use tidbits::{Error, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub category: ErrorCategory,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                category: err.code.category(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for(err.code.category());
            (Err(err), exit_code)
        }
    }
}

fn exit_code_for(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::Config | ErrorCategory::Validation => 2,
        ErrorCategory::Internal => 1,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_exit_with_two() {
        let err = Error::validation_invalid_argument("range", "bad", None, None);
        let (result, code) = map_cmd_result_to_json::<()>(Err(err));
        assert!(result.is_err());
        assert_eq!(code, 2);
    }

    #[test]
    fn config_errors_exit_with_two_and_report_category() {
        let err = Error::config_invalid_value("defaults.text.pad_char", None, "empty");
        let response = CliResponse::<()>::from_error(&err);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"]["category"], "config");

        let (_, code) = map_cmd_result_to_json::<()>(Err(err));
        assert_eq!(code, 2);
    }

    #[test]
    fn internal_errors_exit_with_one() {
        let err = Error::internal_unexpected("boom");
        let (_, code) = map_cmd_result_to_json::<()>(Err(err));
        assert_eq!(code, 1);
    }

    #[test]
    fn success_passes_exit_code_through() {
        let (result, code) = map_cmd_result_to_json(Ok((vec![1, 2], 0)));
        assert_eq!(result.unwrap(), serde_json::json!([1, 2]));
        assert_eq!(code, 0);
    }

    #[test]
    fn error_envelope_omits_data() {
        let err = Error::internal_unexpected("boom").with_hint("try again");
        let response = CliResponse::<()>::from_error(&err);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "internal.unexpected");
        assert_eq!(json["error"]["category"], "internal");
        assert_eq!(json["error"]["hints"][0]["message"], "try again");
    }
}
