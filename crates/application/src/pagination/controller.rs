//! Pagination controller.

use std::sync::Arc;

use console_domain::{PageControl, PaginationState, build_controls};

use crate::ports::RenderSurface;

/// Container id used by the list views when none is given.
pub const DEFAULT_CONTAINER: &str = "pagination";

/// Renders the pagination bar of one container and routes clicks back to
/// the caller.
///
/// Holds no state between renders: each call is a function of the state and
/// the container id. The controller never fetches data and does not check
/// that a selected page is in range; the handler owns both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    container: String,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER)
    }
}

impl PaginationController {
    /// Creates a controller for the given container id.
    #[must_use]
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
        }
    }

    /// Container this controller renders into.
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Replaces the container's controls with those for `state` and binds
    /// `on_select` to their clicks.
    ///
    /// Returns the rendered controls.
    pub fn render<S, F>(
        &self,
        surface: &mut S,
        state: &PaginationState,
        on_select: F,
    ) -> Vec<PageControl>
    where
        S: RenderSurface + ?Sized,
        F: Fn(u32) + Send + Sync + 'static,
    {
        let controls = build_controls(state);
        tracing::trace!(
            container = %self.container,
            current_page = state.current_page(),
            total_pages = state.total_pages(),
            controls = controls.len(),
            "rendering pagination"
        );

        surface.clear(&self.container);
        for control in &controls {
            surface.append(&self.container, control);
        }
        surface.bind_click(&self.container, Arc::new(on_select));
        controls
    }
}
