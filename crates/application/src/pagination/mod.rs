//! Pagination rendering use case.

mod controller;

pub use controller::{DEFAULT_CONTAINER, PaginationController};
