//! Render surface port

use std::sync::Arc;

use console_domain::PageControl;

/// Callback receiving the page number of a clicked control.
pub type PageSelectedHandler = Arc<dyn Fn(u32) + Send + Sync>;

/// A DOM-like surface holding rendered controls per container.
pub trait RenderSurface {
    /// Removes every control previously rendered into `container`.
    fn clear(&mut self, container: &str);

    /// Appends a control to `container`.
    fn append(&mut self, container: &str, control: &PageControl);

    /// Routes clicks on the controls of `container` to `handler`.
    ///
    /// The surface passes the clicked control's page attribute.
    fn bind_click(&mut self, container: &str, handler: PageSelectedHandler);
}
