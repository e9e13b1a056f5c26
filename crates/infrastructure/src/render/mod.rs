//! Render surfaces for the pagination controller.

mod markup_surface;

pub use markup_surface::{MarkupSurface, RenderedElement};
