//! REST client for the listing admin backend
//!
//! This crate provides a trait-based client for the admin REST API.
//! Every backend response is wrapped in an envelope:
//!
//! ```text
//! { status: bool, statusCode: int, message: string, data?: T }
//! ```
//!
//! `status: false` or a non-2xx HTTP status is a failure regardless of
//! the HTTP nuance; the envelope message is carried into [`ApiError`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              AdminClient trait                  │
//! │  - fetch_page() / fetch_all()                   │
//! │  - delete() / mark_seen()                       │
//! │  - create_amenity() / update_amenity()          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────────┐
//!              │   HttpAdminClient   │  bearer token from SessionContext
//!              │   (reqwest)         │
//!              └─────────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod resource;
pub mod types;

pub use client::AdminClient;
pub use error::{ApiError, ApiResult};
pub use http_client::HttpAdminClient;
pub use resource::Resource;
pub use types::{
    Amenity, AmenityInput, CorporateUser, Enquiry, Envelope, Page, PageData, Property, Record,
    Requirement,
};
