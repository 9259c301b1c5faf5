//
//  msgmorph
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/05.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # MsgMorph Rust SDK
//!
//! A Rust client for the MsgMorph API. MsgMorph is a feedback collection
//! platform; this SDK lets you manage contacts and feedback collection
//! from your Rust applications.
//!
//! ## Overview
//!
//! The SDK wraps the MsgMorph HTTP API with typed async operations. It
//! builds authenticated requests, handles JSON serialization in both
//! directions, and translates every failure into a structured
//! [`Error`] carrying a machine-readable [`ErrorCode`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use msgmorph::{Client, CreateContactInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), msgmorph::Error> {
//!     let client = Client::new(
//!         std::env::var("MSGMORPH_API_KEY").unwrap_or_default(),
//!         std::env::var("MSGMORPH_ORGANIZATION_ID").unwrap_or_default(),
//!     );
//!
//!     let contact = client.contacts().create(CreateContactInput {
//!         external_id: "user-123".to_string(),
//!         email: "user@example.com".to_string(),
//!         name: None,
//!         project_id: std::env::var("MSGMORPH_PROJECT_ID").unwrap_or_default(),
//!     }).await?;
//!
//!     println!("Created contact: {}", contact.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<_, msgmorph::Error>`. The error carries
//! the code, HTTP status, message, and an optional hint and details
//! payload:
//!
//! ```rust,no_run
//! use msgmorph::Client;
//!
//! # async fn example(client: Client) {
//! if let Err(e) = client.contacts().get("invalid-id").await {
//!     eprintln!("code: {:?}, status: {}", e.code, e.status);
//!     if e.is_not_found() {
//!         eprintln!("Contact not found");
//!     }
//! }
//! # }
//! ```
//!
//! ## Configuration
//!
//! The client is customized through its builder:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use msgmorph::Client;
//!
//! let client = Client::builder("api-key", "org-id")
//!     .base_url("http://localhost:3001")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! Cancellation follows normal async Rust semantics: dropping an
//! in-flight call's future (for example via `tokio::select!` or
//! `tokio::time::timeout`) aborts the request.
//!
//! ## Module Structure
//!
//! - [`client`]: Client configuration and the HTTP transport
//! - [`contacts`]: Contact management operations
//! - [`error`]: Error taxonomy shared by all operations
//! - [`types`]: Request and response data structures

/// Client configuration and the HTTP transport.
///
/// Provides [`Client`], its builder, and the authenticated
/// request/response cycle every resource operation goes through.
pub mod client;

/// Contact management operations.
///
/// The [`ContactsResource`] façade: create, list, get, update, and
/// delete contacts.
pub mod contacts;

/// Error taxonomy for the SDK.
///
/// Defines [`ErrorCode`], the structured [`Error`], the HTTP status
/// mapping, and per-code remediation hints.
pub mod error;

/// Request and response data structures.
///
/// Contact entity and operation input/parameter types, plus the optional
/// [`ApiResponse`] envelope.
pub mod types;

/// Re-export of the main client and its configuration surface.
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Re-export of the contacts resource.
pub use contacts::ContactsResource;

/// Re-export of the SDK error types.
pub use error::{Error, ErrorCode};

/// Re-export of the resource data types.
pub use types::{
    ApiResponse, Contact, CreateContactInput, ListContactsParams, UpdateContactInput,
};

/// SDK version constant.
///
/// Derived from Cargo.toml at compile time and sent as part of the
/// default `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
