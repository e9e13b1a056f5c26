//! Console Application - Use cases and ports
//!
//! This crate holds the request dispatchers and the pagination controller,
//! together with the ports they drive. Adapters live in the infrastructure
//! crate.

pub mod dispatch;
pub mod error;
pub mod pagination;
pub mod ports;

#[cfg(test)]
mod testing;

pub use dispatch::{CsrfClient, DispatchHandle, RequestDispatcher};
pub use error::{DispatchError, DispatchResult};
pub use pagination::PaginationController;
