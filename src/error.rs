//! Error types for the library admin client

use serde::Deserialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The request never reached the server or no response came back
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Api { status: u16, detail: Option<String> },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Text shown to the user: the server's `detail` when there is one,
    /// otherwise the error message itself.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::UnexpectedResponse(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

/// Error body returned by the API (`{"detail": ...}`)
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<ErrorDetail>,
}

/// `detail` is a plain string for handled errors and a list of issues for
/// request validation failures.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

#[derive(Debug, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl ErrorDetail {
    pub fn into_message(self) -> String {
        match self {
            ErrorDetail::Message(msg) => msg,
            ErrorDetail::Issues(issues) => issues
                .into_iter()
                .map(|issue| {
                    // loc is ["body", "field"]; the last segment names the field
                    match issue.loc.last() {
                        Some(serde_json::Value::String(field)) => format!("{}: {}", field, issue.msg),
                        Some(other) => format!("{}: {}", other, issue.msg),
                        None => issue.msg,
                    }
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Build an `AppError::Api` from a status code and the raw response body.
pub fn api_error(status: u16, body: &str) -> AppError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .map(ErrorDetail::into_message)
        .filter(|d| !d.is_empty());
    AppError::Api { status, detail }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
