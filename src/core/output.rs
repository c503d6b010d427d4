//! CLI response formatting and output.
//!
//! Provides the JSON envelope, printing, and exit code mapping used by the
//! `denox` binary and available to library consumers embedding the CLI flow.

use serde::Serialize;

use crate::error::{Error, ErrorCode, Hint, Result};

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

    pub fn to_json(&self) -> Result<String> {
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

/// Serialize a command result into its JSON payload and derive the process
/// exit code from the error class.
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
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidYaml | ErrorCode::OptionUnsupportedValueType => 2,

        ErrorCode::ConfigNotFound | ErrorCode::ScriptNotFound => 4,

        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) {
    use std::io::Write;

    match response.to_json() {
        Ok(payload) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let _ = writeln!(handle, "{}", payload);
        }
        Err(err) => eprintln!("Failed to serialize response: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_code_and_details() {
        let err = Error::unsupported_option_value("seed", "string", Some(vec!["number".into()]));
        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"code\": \"option.unsupported_value_type\""));
        assert!(json.contains("\"option\": \"seed\""));
        assert!(json.contains("\"valueType\": \"string\""));
    }

    #[test]
    fn option_errors_map_to_exit_code_2() {
        let err = Error::unsupported_option_value("allow-everything", "boolean", None);
        let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(exit_code, 2);
    }

    #[test]
    fn not_found_errors_map_to_exit_code_4() {
        let err = Error::script_not_found("start");
        let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(exit_code, 4);
    }

    #[test]
    fn success_payload_passes_through() {
        let (value, exit_code) = map_cmd_result_to_json(Ok((serde_json::json!({"ok": true}), 0)));
        assert_eq!(exit_code, 0);
        assert_eq!(value.unwrap(), serde_json::json!({"ok": true}));
    }
}
