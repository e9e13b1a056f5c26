//! Pagination windowing.
//!
//! Pure computation of which page links a list view shows. Rendering and
//! click handling live with the callers of [`build_controls`].

mod controls;
mod window;

pub use controls::{PageControl, PageControlKind, build_controls, controls_for_window};
pub use window::{PageWindow, PaginationState};
