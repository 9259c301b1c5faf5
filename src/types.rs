//
//  msgmorph
//  types.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/05.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contact resource types and request/response data structures.
//!
//! This module provides the typed payloads exchanged with the MsgMorph
//! API: the [`Contact`] entity and the input/parameter shapes for the
//! contact operations.
//!
//! # Notes
//!
//! - Wire field names are camelCase (`externalId`, `projectId`, ...)
//! - All timestamps are ISO 8601 and deserialize into `DateTime<Utc>`
//! - Optional input fields are omitted from request payloads entirely;
//!   the API treats an absent field as "no change"

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact tracked by MsgMorph.
///
/// Contacts represent users in your application who can receive feedback
/// requests. They are owned server-side; the SDK only ever holds a
/// transient copy returned by an API call.
///
/// # Fields
///
/// * `id` - Server-assigned unique identifier
/// * `external_id` - Your system's user ID, unique per project
/// * `email` - The contact's email address
/// * `name` - Optional display name
/// * `project_id` - The MsgMorph project this contact belongs to
/// * `feedback_sent` - Whether feedback has been sent to this contact
/// * `feedback_scheduled_at` - When feedback is scheduled, if at all
/// * `created_at` - Creation timestamp
/// * `updated_at` - Last-update timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Server-assigned unique identifier for the contact.
    pub id: String,

    /// Your system's user ID, used to link contacts to your users.
    pub external_id: String,

    /// The contact's email address.
    pub email: String,

    /// The contact's display name, if one was provided.
    #[serde(default)]
    pub name: Option<String>,

    /// The MsgMorph project ID this contact belongs to.
    pub project_id: String,

    /// Whether feedback has been sent to this contact.
    #[serde(default)]
    pub feedback_sent: bool,

    /// When feedback is scheduled to be sent, if scheduled.
    #[serde(default)]
    pub feedback_scheduled_at: Option<DateTime<Utc>>,

    /// When the contact was created.
    pub created_at: DateTime<Utc>,

    /// When the contact was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Parameters for creating a new contact.
///
/// `external_id`, `email`, and `project_id` are required by the API; a
/// missing value fails server-side validation. `name` is optional and
/// omitted from the payload when `None`.
///
/// # Example
///
/// ```rust
/// use msgmorph::CreateContactInput;
///
/// let input = CreateContactInput {
///     external_id: "user-123".to_string(),
///     email: "alice@example.com".to_string(),
///     name: Some("Alice Smith".to_string()),
///     project_id: "proj-456".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactInput {
    /// Your system's user ID (required). Used to prevent duplicate
    /// contacts and link them to users in your system.
    pub external_id: String,

    /// The contact's email address (required).
    pub email: String,

    /// The contact's display name (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The MsgMorph project ID to associate this contact with (required).
    pub project_id: String,
}

/// Parameters for updating an existing contact.
///
/// All fields are optional; only the fields provided are updated. An
/// absent field means "leave unchanged"; the SDK draws no distinction
/// between absent and empty, that interpretation is the server's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactInput {
    /// New email address for the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New display name for the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parameters for listing contacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContactsParams {
    /// Filters contacts by project ID (required).
    pub project_id: String,
}

/// Generic `{data, error}` response envelope used by some MsgMorph
/// endpoints.
///
/// The transport does not require or enforce this shape; it is provided
/// for consumers that interact with enveloped endpoints directly.
///
/// # Example
///
/// ```rust
/// use msgmorph::{ApiResponse, Contact};
///
/// let json = r#"{"data": [], "error": null}"#;
/// let response: ApiResponse<Vec<Contact>> = serde_json::from_str(json).unwrap();
/// assert!(response.data.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The response payload.
    pub data: T,

    /// Error message if the request failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
