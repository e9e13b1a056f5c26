//! Console Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod cookies;
pub mod credentials;
pub mod http;
pub mod render;
pub mod telemetry;

pub use adapters::ReqwestTransport;
pub use config::{ConfigError, settings_from_env, settings_from_lookup};
pub use cookies::CookieHeaderReader;
pub use credentials::{CredentialStoreError, FileCredentialStore, MemoryCredentialStore};
pub use http::{BodyBuildError, build_multipart_form};
pub use render::{MarkupSurface, RenderedElement};
pub use telemetry::{TelemetryError, init_tracing};
