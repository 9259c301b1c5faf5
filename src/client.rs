//
//  msgmorph
//  client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/05.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the MsgMorph API
//!
//! This module provides the core client for interacting with MsgMorph.
//! It handles configuration, authentication header injection, and
//! request/response serialization.
//!
//! ## Features
//!
//! - Authenticated requests (API key + organization ID headers)
//! - JSON serialization/deserialization
//! - Error-payload parsing into the SDK's structured [`Error`]
//! - Configurable base URL, timeout, and underlying HTTP client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use msgmorph::Client;
//!
//! // Defaults: production base URL, 30 second timeout
//! let client = Client::new("your-api-key", "your-org-id");
//!
//! // Custom configuration
//! let client = Client::builder("your-api-key", "your-org-id")
//!     .base_url("http://localhost:3001")
//!     .timeout(std::time::Duration::from_secs(60))
//!     .build();
//! ```

use std::time::Duration;

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::contacts::ContactsResource;
use crate::error::{Error, ErrorCode, GENERIC_ERROR_MESSAGE};

/// The default MsgMorph API URL.
pub const DEFAULT_BASE_URL: &str = "https://api.msgmorph.com";

/// The default HTTP client timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the organization ID.
const ORGANIZATION_ID_HEADER: &str = "X-Organization-Id";

/// The MsgMorph API client.
///
/// `Client` holds the read-only configuration (API key, organization ID,
/// base URL, HTTP client) shared by every request. Configuration is fixed
/// at construction; build a new client to change it. The client is safe
/// to share across concurrent in-flight calls.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use msgmorph::Client;
///
/// let client = Client::new(
///     std::env::var("MSGMORPH_API_KEY").unwrap_or_default(),
///     std::env::var("MSGMORPH_ORGANIZATION_ID").unwrap_or_default(),
/// );
/// ```
///
/// # Resources
///
/// API operations are grouped into resources accessed through the client:
///
/// ```rust,no_run
/// use msgmorph::{Client, CreateContactInput};
///
/// # async fn example(client: Client) -> Result<(), msgmorph::Error> {
/// let contact = client.contacts().create(CreateContactInput {
///     external_id: "user-123".to_string(),
///     email: "user@example.com".to_string(),
///     name: None,
///     project_id: "proj-456".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```
pub struct Client {
    /// The MsgMorph API key for authentication.
    api_key: String,
    /// The MsgMorph organization ID.
    organization_id: String,
    /// The API base URL, without a trailing slash.
    base_url: String,
    /// The underlying HTTP client.
    http: reqwest::Client,
}

impl Client {
    /// Creates a new MsgMorph API client with default configuration.
    ///
    /// Equivalent to `Client::builder(api_key, organization_id).build()`.
    ///
    /// # Panics
    ///
    /// Panics if `api_key` or `organization_id` is empty. Missing
    /// credentials are a deployment mistake, caught before any network
    /// call is attempted.
    pub fn new(api_key: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self::builder(api_key, organization_id).build()
    }

    /// Returns a [`ClientBuilder`] for custom configuration.
    ///
    /// Defaults are applied first; each builder method overrides one
    /// setting, and later calls win when they touch the same setting.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// use msgmorph::Client;
    ///
    /// let client = Client::builder("key", "org")
    ///     .base_url("http://localhost:3001")
    ///     .timeout(Duration::from_secs(60))
    ///     .build();
    /// ```
    pub fn builder(
        api_key: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            organization_id: organization_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    /// Provides access to contact management operations.
    pub fn contacts(&self) -> ContactsResource<'_> {
        ContactsResource::new(self)
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request and deserializes the response body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let (status, body) = self.execute::<()>(Method::GET, path, None).await?;
        parse_json(status, &body)
    }

    /// Makes a POST request with a JSON body and deserializes the
    /// response body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, body) = self.execute(Method::POST, path, Some(body)).await?;
        parse_json(status, &body)
    }

    /// Makes a PATCH request with a JSON body and deserializes the
    /// response body.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, body) = self.execute(Method::PATCH, path, Some(body)).await?;
        parse_json(status, &body)
    }

    /// Makes a DELETE request, discarding any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Performs one authenticated HTTP round trip.
    ///
    /// Returns the response status and raw body on any status below 400.
    /// Statuses of 400 and above are parsed as error payloads and
    /// returned as [`Error`]; a failed call never partially succeeds.
    ///
    /// # Errors
    ///
    /// - Request body serialization failure: `ValidationError`, status 0
    /// - Transport failure (DNS, refused connection, timeout,
    ///   cancellation) or response read failure: `NetworkError`, status 0
    /// - Response status >= 400: the parsed API error
    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(u16, Vec<u8>), Error>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        // Request bodies only accompany writes; GET never carries one.
        let payload = match body {
            Some(body) if method != Method::GET => {
                Some(serde_json::to_vec(body).map_err(|e| {
                    Error::new(
                        format!("failed to serialize request body: {e}"),
                        0,
                        ErrorCode::ValidationError,
                        None,
                    )
                })?)
            }
            _ => None,
        };

        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header(ORGANIZATION_ID_HEADER, self.organization_id.as_str());

        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await.map_err(Error::network)?;
        let status = response.status().as_u16();

        let body = response.bytes().await.map_err(Error::network)?;

        tracing::debug!("{} returned {} ({} bytes)", url, status, body.len());

        if status >= 400 {
            return Err(parse_error_response(&body, status));
        }

        Ok((status, body.to_vec()))
    }
}

/// Builder for [`Client`] configuration.
///
/// Created by [`Client::builder`]. Defaults (production base URL, 30
/// second timeout, SDK-constructed HTTP client) are in place from the
/// start; each setter overrides exactly one of them.
pub struct ClientBuilder {
    api_key: String,
    organization_id: String,
    base_url: String,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Sets a custom base URL for the API.
    ///
    /// Trailing slashes are trimmed so composed request URLs stay
    /// canonical.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use msgmorph::Client;
    ///
    /// let client = Client::builder("key", "org")
    ///     .base_url("http://localhost:3001")
    ///     .build();
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the HTTP client timeout.
    ///
    /// Applies to the HTTP client the builder constructs. When a custom
    /// client is supplied via [`ClientBuilder::http_client`], that
    /// client's own timeout governs instead.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// The client is used as-is; configure its timeout, proxy, and TLS
    /// settings through `reqwest::Client::builder` before passing it in.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the configured [`Client`].
    ///
    /// # Panics
    ///
    /// Panics if the API key or organization ID is empty. This is a
    /// fail-fast-at-startup policy: a misconfigured process stops
    /// immediately rather than failing on its first API call.
    pub fn build(self) -> Client {
        if self.api_key.is_empty() {
            panic!(
                "{}",
                Error::new(
                    "API key is required. Set the MSGMORPH_API_KEY environment variable.",
                    400,
                    ErrorCode::InvalidApiKey,
                    None,
                )
            );
        }
        if self.organization_id.is_empty() {
            panic!(
                "{}",
                Error::new(
                    "Organization ID is required. Set the MSGMORPH_ORGANIZATION_ID environment variable.",
                    400,
                    ErrorCode::InvalidOrganizationId,
                    None,
                )
            );
        }

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .user_agent(format!("msgmorph-rs/{}", crate::VERSION))
                .timeout(self.timeout)
                .build()
                .expect("failed to construct HTTP client"),
        };

        Client {
            api_key: self.api_key,
            organization_id: self.organization_id,
            base_url: self.base_url,
            http,
        }
    }
}

/// Error payload shape returned by the MsgMorph API.
///
/// Every field is optional; an error response carrying none of them still
/// produces a usable generic [`Error`].
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    error: Option<String>,

    #[serde(default)]
    code: Option<String>,

    #[serde(default)]
    details: Option<Map<String, Value>>,
}

/// Parses an error response body from the API.
///
/// Message resolution order: explicit `message` field, then `error`
/// field, then the generic fallback. The code is taken from the payload
/// when it names a known [`ErrorCode`]; otherwise it is derived from the
/// HTTP status. A body that is not valid JSON yields the generic error
/// for the status.
fn parse_error_response(body: &[u8], status: u16) -> Error {
    let parsed: ErrorBody = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(_) => {
            return Error::new(
                GENERIC_ERROR_MESSAGE,
                status,
                ErrorCode::from_status(status),
                None,
            );
        }
    };

    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .or(parsed.error.filter(|m| !m.is_empty()))
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

    let code = parsed
        .code
        .as_deref()
        .and_then(ErrorCode::from_wire)
        .unwrap_or_else(|| ErrorCode::from_status(status));

    Error::new(message, status, code, parsed.details)
}

/// Deserializes a success body, mapping parse failures to an
/// `InternalError` carrying the response status.
fn parse_json<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|e| {
        Error::new(
            format!("failed to parse response: {e}"),
            status,
            ErrorCode::InternalError,
            None,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_response_full_payload() {
        let body = br#"{"message":"not found","code":"NOT_FOUND","details":{"id":"cnt_1"}}"#;
        let err = parse_error_response(body, 404);

        assert_eq!(err.message, "not found");
        assert_eq!(err.status, 404);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.details.as_ref().unwrap()["id"], "cnt_1");
    }

    #[test]
    fn test_parse_error_response_falls_back_to_error_field() {
        let body = br#"{"error":"project missing"}"#;
        let err = parse_error_response(body, 400);

        assert_eq!(err.message, "project missing");
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_parse_error_response_empty_object_is_generic() {
        let err = parse_error_response(b"{}", 401);

        // The generic message is replaced by the code's hint.
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, ErrorCode::Unauthorized.hint());
    }

    #[test]
    fn test_parse_error_response_unknown_code_uses_status() {
        let body = br#"{"message":"weird","code":"SOMETHING_NEW"}"#;
        let err = parse_error_response(body, 409);

        assert_eq!(err.message, "weird");
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[test]
    fn test_parse_error_response_non_json_body() {
        let err = parse_error_response(b"<html>Bad Gateway</html>", 502);

        assert_eq!(err.status, 502);
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, ErrorCode::InternalError.hint());
    }

    #[test]
    fn test_parse_json_failure_carries_status() {
        let err = parse_json::<Vec<String>>(200, b"not json").unwrap_err();
        assert_eq!(err.status, 200);
        assert_eq!(err.code, ErrorCode::InternalError);
        assert!(err.message.starts_with("failed to parse response:"));
    }

    #[test]
    fn test_builder_defaults() {
        let client = Client::builder("key", "org").build();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = Client::builder("key", "org")
            .base_url("http://localhost:3001/")
            .build();
        assert_eq!(client.base_url(), "http://localhost:3001");
    }

    #[test]
    fn test_builder_later_option_wins() {
        let client = Client::builder("key", "org")
            .base_url("http://first")
            .base_url("http://second")
            .build();
        assert_eq!(client.base_url(), "http://second");
    }

    #[test]
    #[should_panic(expected = "API key is required")]
    fn test_empty_api_key_is_fatal() {
        let _ = Client::new("", "org");
    }

    #[test]
    #[should_panic(expected = "Organization ID is required")]
    fn test_empty_organization_id_is_fatal() {
        let _ = Client::new("key", "");
    }
}
