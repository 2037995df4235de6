//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Transport failures of the browser Fetch API
//! - [`ApiError`] - Failures of a blog API call (transport, status, payload)
//! - [`ValidationError`] - Local checks on a draft before it is submitted
//! - [`ActionError`] - What a user-initiated action reports back

use thiserror::Error;

use crate::models::DraftField;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, connection reset, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
}

/// Errors returned by [`BlogApi`](crate::core::BlogApi) calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Non-2xx response, with the server's `error` field when it sent one.
    #[error("HTTP error {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Http { status: u16, message: Option<String> },
    /// Request or response body was not the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(String),
    /// Response was well-formed but carried no `data` object.
    #[error("Response carried no data{}", .0.as_deref().map(|m| format!(" ({})", m)).unwrap_or_default())]
    MissingData(Option<String>),
}

/// A draft failed local validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields have zero length.
    #[error("One or more fields is/are empty: {}", field_list(.0))]
    EmptyFields(Vec<DraftField>),
}

fn field_list(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of a failed user action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
