//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod cookie_reader;
mod credential_resolver;
mod http_transport;
mod render_surface;

pub use cookie_reader::CookieReader;
pub use credential_resolver::CredentialResolver;
pub use http_transport::{HttpTransport, TransportError};
pub use render_surface::{PageSelectedHandler, RenderSurface};
