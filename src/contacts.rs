//
//  msgmorph
//  contacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/05.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contact management operations.
//!
//! Contacts represent users in your application who can receive feedback
//! requests. This module provides the [`ContactsResource`] with
//! operations to create, list, get, update, and delete contacts.
//!
//! # Example
//!
//! ```rust,no_run
//! use msgmorph::{Client, CreateContactInput, ListContactsParams};
//!
//! # async fn example(client: Client) -> Result<(), msgmorph::Error> {
//! // Create a contact
//! let contact = client.contacts().create(CreateContactInput {
//!     external_id: "user-123".to_string(),
//!     email: "user@example.com".to_string(),
//!     name: None,
//!     project_id: "proj-456".to_string(),
//! }).await?;
//!
//! // List contacts in a project
//! let contacts = client.contacts().list(ListContactsParams {
//!     project_id: "proj-456".to_string(),
//! }).await?;
//! println!("{} contacts", contacts.len());
//! # Ok(())
//! # }
//! ```

use crate::client::Client;
use crate::error::Error;
use crate::types::{Contact, CreateContactInput, ListContactsParams, UpdateContactInput};

/// Provides methods to manage contacts in MsgMorph.
///
/// Obtained through [`Client::contacts`]. The resource borrows the
/// client; every operation maps directly onto one HTTP request with no
/// additional business logic, local validation, or retries. Identifiers
/// are interpolated into paths without escaping; callers pass API-safe
/// IDs.
pub struct ContactsResource<'c> {
    client: &'c Client,
}

impl<'c> ContactsResource<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Creates a new contact.
    ///
    /// The `external_id` field should be your system's user ID. It is
    /// used to prevent duplicate contacts and to link contacts to users
    /// in your system.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if required fields are missing
    /// - `AlreadyExists` if a contact with the same `external_id` exists
    /// - `Unauthorized` if the API key is invalid
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use msgmorph::{Client, CreateContactInput};
    ///
    /// # async fn example(client: Client) -> Result<(), msgmorph::Error> {
    /// let contact = client.contacts().create(CreateContactInput {
    ///     external_id: "user-123".to_string(),
    ///     email: "alice@example.com".to_string(),
    ///     name: Some("Alice Smith".to_string()),
    ///     project_id: "proj-456".to_string(),
    /// }).await?;
    /// println!("Created contact: {}", contact.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, input: CreateContactInput) -> Result<Contact, Error> {
        self.client.post("/api/v1/contacts", &input).await
    }

    /// Retrieves all contacts for a project.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the project ID is missing
    /// - `Unauthorized` if the API key is invalid
    pub async fn list(&self, params: ListContactsParams) -> Result<Vec<Contact>, Error> {
        let path = format!("/api/v1/contacts?projectId={}", params.project_id);
        self.client.get(&path).await
    }

    /// Retrieves a single contact by ID.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the contact doesn't exist
    /// - `Unauthorized` if the API key is invalid
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use msgmorph::Client;
    ///
    /// # async fn example(client: Client) {
    /// match client.contacts().get("cnt_abc123").await {
    ///     Ok(contact) => println!("Contact: {}", contact.email),
    ///     Err(e) if e.is_not_found() => println!("Contact not found"),
    ///     Err(e) => eprintln!("{e}"),
    /// }
    /// # }
    /// ```
    pub async fn get(&self, id: &str) -> Result<Contact, Error> {
        let path = format!("/api/v1/contacts/{id}");
        self.client.get(&path).await
    }

    /// Modifies an existing contact.
    ///
    /// Only the fields provided in the input are updated; all fields of
    /// [`UpdateContactInput`] are optional.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the contact doesn't exist
    /// - `ValidationError` if the input is invalid
    /// - `Unauthorized` if the API key is invalid
    pub async fn update(&self, id: &str, input: UpdateContactInput) -> Result<Contact, Error> {
        let path = format!("/api/v1/contacts/{id}");
        self.client.patch(&path, &input).await
    }

    /// Removes a contact.
    ///
    /// This operation is permanent and cannot be undone.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the contact doesn't exist
    /// - `Unauthorized` if the API key is invalid
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let path = format!("/api/v1/contacts/{id}");
        self.client.delete(&path).await
    }
}
