//! Markup render surface.
//!
//! An in-memory stand-in for the page's DOM: each container keeps its list
//! items and one click handler. Controls render as Bootstrap page items:
//!
//! ```html
//! <li class="page-item active"><a class="page-link" href="#" data-page=3>3</a></li>
//! ```

use std::collections::HashMap;

use console_application::ports::{PageSelectedHandler, RenderSurface};
use console_domain::{PageControl, PageControlKind};

/// A rendered element: the control and its markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    /// Control descriptor.
    pub control: PageControl,
    /// `<li>` markup for the control.
    pub markup: String,
}

#[derive(Default)]
struct Container {
    elements: Vec<RenderedElement>,
    handler: Option<PageSelectedHandler>,
}

/// In-memory surface producing list-item markup.
#[derive(Default)]
pub struct MarkupSurface {
    containers: HashMap<String, Container>,
}

impl MarkupSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements currently rendered in `container`.
    #[must_use]
    pub fn elements(&self, container: &str) -> &[RenderedElement] {
        self.containers
            .get(container)
            .map(|c| c.elements.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated markup of `container`.
    #[must_use]
    pub fn markup(&self, container: &str) -> String {
        self.elements(container)
            .iter()
            .map(|e| e.markup.as_str())
            .collect()
    }

    /// Simulates a click on the element at `index`.
    ///
    /// Returns the page passed to the handler, or `None` when there is no
    /// such element or no handler is bound.
    pub fn click(&self, container: &str, index: usize) -> Option<u32> {
        let target = self.containers.get(container)?;
        let element = target.elements.get(index)?;
        let handler = target.handler.as_ref()?;
        let page = page_attribute(&element.markup)?;
        handler(page);
        Some(page)
    }

    /// Simulates a click on the first element with the given visible label.
    pub fn click_label(&self, container: &str, label: &str) -> Option<u32> {
        let index = self
            .elements(container)
            .iter()
            .position(|e| e.control.label == label)?;
        self.click(container, index)
    }
}

impl RenderSurface for MarkupSurface {
    fn clear(&mut self, container: &str) {
        self.containers.remove(container);
    }

    fn append(&mut self, container: &str, control: &PageControl) {
        self.containers
            .entry(container.to_string())
            .or_default()
            .elements
            .push(RenderedElement {
                control: control.clone(),
                markup: render_item(control),
            });
    }

    fn bind_click(&mut self, container: &str, handler: PageSelectedHandler) {
        self.containers.entry(container.to_string()).or_default().handler = Some(handler);
    }
}

fn render_item(control: &PageControl) -> String {
    let class = if control.is_active {
        "page-item active"
    } else {
        "page-item"
    };
    let label = match control.kind {
        PageControlKind::First => "&laquo;",
        PageControlKind::Previous => "&lsaquo;",
        PageControlKind::Next => "&rsaquo;",
        PageControlKind::Last => "&raquo;",
        PageControlKind::Page => control.label.as_str(),
    };
    format!(
        r##"<li class="{class}"><a class="page-link" href="#" data-page={page}>{label}</a></li>"##,
        page = control.target_page
    )
}

/// Reads the `data-page` attribute back from element markup.
fn page_attribute(markup: &str) -> Option<u32> {
    let start = markup.find("data-page=")? + "data-page=".len();
    let digits: String = markup[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
