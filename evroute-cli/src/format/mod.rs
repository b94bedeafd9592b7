//! JSON formats of planning requests, responses and station catalogs.

pub mod request;
pub mod solution;
pub mod stations;

use serde::Serialize;

/// An error found in the planning request, reported with a code from the `E1xxx` range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormatError {
    /// Error code, e.g. `E1002`.
    pub code: String,
    /// What is wrong with the request.
    pub cause: String,
    /// How to fix the request.
    pub action: String,
    /// Offending value, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates an error without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates an error with details.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Returns errors as pretty printed JSON array.
    pub fn format_many_to_json(errors: &[Self]) -> String {
        serde_json::to_string_pretty(errors).unwrap_or_else(|_| Self::format_many(errors, "\n"))
    }

    /// Joins text representation of errors with the separator.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.code, self.cause, self.action)?;

        match &self.details {
            Some(details) => write!(f, ", got {details}"),
            None => Ok(()),
        }
    }
}
