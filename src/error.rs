//
//  msgmorph
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/05.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for the MsgMorph API.
//!
//! This module provides the error taxonomy shared by every SDK operation.
//! Every failure, whether reported by the API, produced while encoding a
//! request, or raised by the transport, surfaces as a single [`Error`]
//! value carrying a machine-readable [`ErrorCode`], the HTTP status (0 for
//! non-HTTP failures), a message, and an optional remediation hint.
//!
//! # Overview
//!
//! - [`ErrorCode`] - Closed set of error codes used by the MsgMorph API
//! - [`Error`] - Structured error returned by all SDK operations
//!
//! # Example
//!
//! ```rust,no_run
//! use msgmorph::Client;
//!
//! # async fn example(client: Client) {
//! match client.contacts().get("cnt_abc123").await {
//!     Ok(contact) => println!("Found: {}", contact.email),
//!     Err(e) if e.is_not_found() => println!("Contact does not exist"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```
//!
//! # Notes
//!
//! - [`Error`] implements the standard `Error` trait via `thiserror`
//! - The `Display` rendering is a single line suitable for direct logging;
//!   use [`Error::to_json`] for structured log pipelines

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error as ThisError;

/// Fallback message used when the API returns an error without any text.
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Error codes returned by the MsgMorph API.
///
/// The set is closed: every error produced by the SDK carries exactly one
/// of these codes. Codes serialize to their SCREAMING_SNAKE_CASE wire form
/// (e.g. [`ErrorCode::NotFound`] becomes `"NOT_FOUND"`).
///
/// # Categories
///
/// | Category | Codes |
/// |----------|-------|
/// | Client input | `InvalidApiKey`, `InvalidOrganizationId`, `MissingRequiredField`, `ValidationError` |
/// | Authentication | `Unauthorized`, `Forbidden` |
/// | Resource state | `NotFound`, `Conflict`, `AlreadyExists` |
/// | Transport/server | `InternalError`, `ServiceUnavailable`, `NetworkError`, `Timeout` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The API key is missing or not recognized.
    InvalidApiKey,

    /// The organization ID is missing or not recognized.
    InvalidOrganizationId,

    /// A required field was absent from the request.
    MissingRequiredField,

    /// The request data failed validation.
    ValidationError,

    /// Authentication failed (HTTP 401).
    Unauthorized,

    /// The credentials lack permission for this action (HTTP 403).
    Forbidden,

    /// The requested resource does not exist (HTTP 404).
    NotFound,

    /// The request conflicts with the current resource state (HTTP 409).
    Conflict,

    /// A resource with the same identity already exists.
    AlreadyExists,

    /// The API failed internally (HTTP 5xx).
    InternalError,

    /// The API is temporarily unavailable (HTTP 503).
    ServiceUnavailable,

    /// The request never completed an HTTP round trip.
    NetworkError,

    /// The request timed out.
    Timeout,
}

impl ErrorCode {
    /// Maps an HTTP status code to an error code.
    ///
    /// Total over all status values: the well-known 4xx statuses map to
    /// their dedicated codes, any other 5xx maps to
    /// [`ErrorCode::InternalError`], and everything else falls back to
    /// [`ErrorCode::ValidationError`].
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::ValidationError,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            503 => Self::ServiceUnavailable,
            s if s >= 500 => Self::InternalError,
            _ => Self::ValidationError,
        }
    }

    /// Returns the human-readable remediation hint for this code.
    ///
    /// Hints come from a fixed lookup table; codes without an entry return
    /// the empty string.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => {
                "Invalid API key. Please check your MSGMORPH_API_KEY environment variable."
            }
            Self::InvalidOrganizationId => {
                "Invalid organization ID. Please check your MSGMORPH_ORGANIZATION_ID environment variable."
            }
            Self::MissingRequiredField => "",
            Self::ValidationError => "Invalid request data. Please check the required fields.",
            Self::Unauthorized => {
                "Authentication failed. Please verify your API key is correct and has not expired."
            }
            Self::Forbidden => {
                "Access denied. Your API key does not have permission to perform this action."
            }
            Self::NotFound => "The requested resource was not found.",
            Self::Conflict => {
                "A conflict occurred. The resource may already exist or be in an invalid state."
            }
            Self::AlreadyExists => "This resource already exists. Use update instead of create.",
            Self::InternalError => "An internal server error occurred. Please try again later.",
            Self::ServiceUnavailable => {
                "The MsgMorph API is temporarily unavailable. Please try again later."
            }
            Self::NetworkError => {
                "Network error. Please check your internet connection and that the API URL is correct."
            }
            Self::Timeout => "Request timed out. Please try again.",
        }
    }

    /// Returns the SCREAMING_SNAKE_CASE wire form of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::InvalidOrganizationId => "INVALID_ORGANIZATION_ID",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::NetworkError => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
        }
    }

    /// Parses a wire-form code string, returning `None` for codes outside
    /// the known set.
    pub(crate) fn from_wire(code: &str) -> Option<Self> {
        match code {
            "INVALID_API_KEY" => Some(Self::InvalidApiKey),
            "INVALID_ORGANIZATION_ID" => Some(Self::InvalidOrganizationId),
            "MISSING_REQUIRED_FIELD" => Some(Self::MissingRequiredField),
            "VALIDATION_ERROR" => Some(Self::ValidationError),
            "UNAUTHORIZED" => Some(Self::Unauthorized),
            "FORBIDDEN" => Some(Self::Forbidden),
            "NOT_FOUND" => Some(Self::NotFound),
            "CONFLICT" => Some(Self::Conflict),
            "ALREADY_EXISTS" => Some(Self::AlreadyExists),
            "INTERNAL_ERROR" => Some(Self::InternalError),
            "SERVICE_UNAVAILABLE" => Some(Self::ServiceUnavailable),
            "NETWORK_ERROR" => Some(Self::NetworkError),
            "TIMEOUT" => Some(Self::Timeout),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error returned by every MsgMorph API operation.
///
/// `Error` carries everything a caller needs to react programmatically
/// (the [`ErrorCode`] and HTTP status) and everything an operator needs to
/// diagnose the failure (message, hint, and the server's diagnostic
/// `details` payload when one was supplied).
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `message` | Error message, from the API where available |
/// | `status` | HTTP status code, or `0` for failures before/outside HTTP |
/// | `code` | Machine-readable [`ErrorCode`] |
/// | `hint` | Fixed remediation hint for the code (may be empty) |
/// | `details` | Open diagnostic mapping from the API, if supplied |
///
/// # Example
///
/// ```rust,no_run
/// use msgmorph::Client;
///
/// # async fn example(client: Client) {
/// if let Err(e) = client.contacts().delete("cnt_gone").await {
///     if e.is_not_found() {
///         println!("Contact already deleted");
///     } else {
///         eprintln!("{}", e.to_json());
///     }
/// }
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ThisError)]
#[error("MsgMorphError [{code}]: {message}{}", hint_suffix(.message, .hint))]
pub struct Error {
    /// The error message returned by the API.
    pub message: String,

    /// The HTTP status code, or `0` for non-HTTP failures.
    pub status: u16,

    /// The error code identifying the type of error.
    pub code: ErrorCode,

    /// Human-readable suggestion for resolving the error.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hint: String,

    /// Additional diagnostic information from the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

/// Formats the ` (Hint: …)` tail of the single-line rendering.
///
/// The hint is appended only when it is non-empty and adds something the
/// message does not already say.
fn hint_suffix(message: &str, hint: &str) -> String {
    if !hint.is_empty() && hint != message {
        format!(" (Hint: {hint})")
    } else {
        String::new()
    }
}

impl Error {
    /// Creates a new `Error` with the given parameters.
    ///
    /// The hint is always populated from the code's lookup table. When the
    /// message is empty or equals the generic fallback text, the hint is
    /// substituted as the message so callers never see a blank error.
    pub fn new(
        message: impl Into<String>,
        status: u16,
        code: ErrorCode,
        details: Option<Map<String, Value>>,
    ) -> Self {
        let mut message = message.into();
        let hint = code.hint();
        if (message.is_empty() || message == GENERIC_ERROR_MESSAGE) && !hint.is_empty() {
            message = hint.to_string();
        }

        Self {
            message,
            status,
            code,
            hint: hint.to_string(),
            details,
        }
    }

    /// Creates an `Error` for a network-level failure.
    ///
    /// Network failures never complete an HTTP round trip, so the status
    /// is `0` and the code is [`ErrorCode::NetworkError`]. The message is
    /// taken from the underlying failure, falling back to a generic text
    /// when the failure renders as an empty string.
    pub fn network<E: std::fmt::Display>(err: E) -> Self {
        let mut message = err.to_string();
        if message.is_empty() {
            message = "Network request failed".to_string();
        }

        Self::new(message, 0, ErrorCode::NetworkError, None)
    }

    /// Renders the error as a JSON string for structured logging.
    ///
    /// Empty `hint` and absent `details` fields are omitted.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Returns `true` if the error is a not found error.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }

    /// Returns `true` if the error is an authentication error.
    pub fn is_unauthorized(&self) -> bool {
        self.code == ErrorCode::Unauthorized
    }

    /// Returns `true` if the error is a validation error.
    pub fn is_validation_error(&self) -> bool {
        self.code == ErrorCode::ValidationError
    }

    /// Returns `true` if the error is a server-side error.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: [ErrorCode; 13] = [
        ErrorCode::InvalidApiKey,
        ErrorCode::InvalidOrganizationId,
        ErrorCode::MissingRequiredField,
        ErrorCode::ValidationError,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::NotFound,
        ErrorCode::Conflict,
        ErrorCode::AlreadyExists,
        ErrorCode::InternalError,
        ErrorCode::ServiceUnavailable,
        ErrorCode::NetworkError,
        ErrorCode::Timeout,
    ];

    #[test]
    fn test_from_status_mapped_codes() {
        assert_eq!(ErrorCode::from_status(400), ErrorCode::ValidationError);
        assert_eq!(ErrorCode::from_status(401), ErrorCode::Unauthorized);
        assert_eq!(ErrorCode::from_status(403), ErrorCode::Forbidden);
        assert_eq!(ErrorCode::from_status(404), ErrorCode::NotFound);
        assert_eq!(ErrorCode::from_status(409), ErrorCode::Conflict);
        assert_eq!(ErrorCode::from_status(503), ErrorCode::ServiceUnavailable);
    }

    #[test]
    fn test_from_status_server_errors() {
        assert_eq!(ErrorCode::from_status(500), ErrorCode::InternalError);
        assert_eq!(ErrorCode::from_status(502), ErrorCode::InternalError);
        assert_eq!(ErrorCode::from_status(599), ErrorCode::InternalError);
    }

    #[test]
    fn test_from_status_fallback_is_validation() {
        for status in [0, 200, 204, 300, 402, 410, 418, 429, 499] {
            assert_eq!(ErrorCode::from_status(status), ErrorCode::ValidationError);
        }
    }

    #[test]
    fn test_new_substitutes_hint_for_empty_message() {
        let err = Error::new("", 404, ErrorCode::NotFound, None);
        assert_eq!(err.message, ErrorCode::NotFound.hint());
        assert_eq!(err.hint, ErrorCode::NotFound.hint());
    }

    #[test]
    fn test_new_substitutes_hint_for_generic_message() {
        let err = Error::new(GENERIC_ERROR_MESSAGE, 500, ErrorCode::InternalError, None);
        assert_eq!(err.message, ErrorCode::InternalError.hint());
    }

    #[test]
    fn test_new_empty_message_without_hint_stays_empty() {
        let err = Error::new("", 400, ErrorCode::MissingRequiredField, None);
        assert_eq!(err.message, "");
        assert_eq!(err.hint, "");
    }

    #[test]
    fn test_new_keeps_explicit_message() {
        let err = Error::new("contact missing", 404, ErrorCode::NotFound, None);
        assert_eq!(err.message, "contact missing");
        assert_eq!(err.hint, ErrorCode::NotFound.hint());
    }

    #[test]
    fn test_network_error_from_message() {
        let err = Error::network("connection refused");
        assert_eq!(err.code, ErrorCode::NetworkError);
        assert_eq!(err.status, 0);
        assert_eq!(err.message, "connection refused");
    }

    #[test]
    fn test_network_error_without_text_is_generic() {
        let err = Error::network("");
        assert_eq!(err.code, ErrorCode::NetworkError);
        assert_eq!(err.status, 0);
        assert_eq!(err.message, "Network request failed");
    }

    #[test]
    fn test_predicates_exhaustive() {
        for code in ALL_CODES {
            let err = Error::new("x", 0, code, None);
            assert_eq!(err.is_not_found(), code == ErrorCode::NotFound);
            assert_eq!(err.is_unauthorized(), code == ErrorCode::Unauthorized);
            assert_eq!(err.is_validation_error(), code == ErrorCode::ValidationError);
            assert_eq!(
                err.is_server_error(),
                code == ErrorCode::InternalError || code == ErrorCode::ServiceUnavailable
            );
        }
    }

    #[test]
    fn test_json_round_trip() {
        let mut details = Map::new();
        details.insert("field".to_string(), Value::String("email".to_string()));

        let err = Error::new("bad email", 400, ErrorCode::ValidationError, Some(details));
        let parsed: Error = serde_json::from_str(&err.to_json()).unwrap();

        assert_eq!(parsed.message, err.message);
        assert_eq!(parsed.status, err.status);
        assert_eq!(parsed.code, err.code);
        assert_eq!(parsed.hint, err.hint);
        assert_eq!(parsed.details, err.details);
    }

    #[test]
    fn test_to_json_omits_empty_optional_fields() {
        let err = Error::new("field required", 400, ErrorCode::MissingRequiredField, None);
        let value: Value = serde_json::from_str(&err.to_json()).unwrap();
        assert!(value.get("hint").is_none());
        assert!(value.get("details").is_none());
        assert_eq!(value["code"], "MISSING_REQUIRED_FIELD");
    }

    #[test]
    fn test_display_includes_distinct_hint() {
        let err = Error::new("nope", 404, ErrorCode::NotFound, None);
        let line = err.to_string();
        assert!(line.starts_with("MsgMorphError [NOT_FOUND]: nope"));
        assert!(line.contains("(Hint: The requested resource was not found.)"));
    }

    #[test]
    fn test_display_skips_hint_equal_to_message() {
        let err = Error::new("", 404, ErrorCode::NotFound, None);
        assert_eq!(
            err.to_string(),
            "MsgMorphError [NOT_FOUND]: The requested resource was not found."
        );
    }

    #[test]
    fn test_wire_codes_round_trip() {
        for code in ALL_CODES {
            assert_eq!(ErrorCode::from_wire(code.as_str()), Some(code));
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
        assert_eq!(ErrorCode::from_wire("SOMETHING_ELSE"), None);
    }
}
