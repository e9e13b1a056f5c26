//! Console Domain - Core types
//!
//! This crate defines the domain model for the admin console client:
//! request payloads and their encoding policy, credentials, responses and
//! pagination windows. All types here are pure Rust with no I/O dependencies.

pub mod credential;
pub mod error;
pub mod pagination;
pub mod request;
pub mod response;
pub mod settings;

pub use credential::{Credential, CredentialKind, CredentialSlots};
pub use error::{DomainError, DomainResult};
pub use pagination::{PageControl, PageControlKind, PageWindow, PaginationState, build_controls};
pub use request::{
    HttpMethod, MultipartField, MultipartForm, MultipartValue, PreparedBody, PreparedRequest,
    QueryParams, RequestPayload, RequestSpec,
};
pub use response::{ApiResponse, RawResponse, ServerErrorBody, StatusCode};
pub use settings::ClientSettings;
