//! Declarative page controls.

use serde::{Deserialize, Serialize};

use super::{PageWindow, PaginationState};

/// Role of a control within the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageControlKind {
    /// Jump to page 1.
    First,
    /// Step back one page.
    Previous,
    /// Numbered page link.
    Page,
    /// Step forward one page.
    Next,
    /// Jump to the last page.
    Last,
}

impl PageControlKind {
    /// Glyph used as the label of navigation controls.
    #[must_use]
    pub const fn glyph(self) -> Option<&'static str> {
        match self {
            Self::First => Some("«"),
            Self::Previous => Some("‹"),
            Self::Page => None,
            Self::Next => Some("›"),
            Self::Last => Some("»"),
        }
    }
}

/// One clickable element of the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageControl {
    /// Role of the control.
    pub kind: PageControlKind,
    /// Visible label.
    pub label: String,
    /// Page dispatched when the control is clicked.
    pub target_page: u32,
    /// Marks the current page.
    pub is_active: bool,
}

impl PageControl {
    fn navigation(kind: PageControlKind, target_page: u32) -> Self {
        Self {
            kind,
            label: kind.glyph().unwrap_or_default().to_string(),
            target_page,
            is_active: false,
        }
    }

    fn page(page: u32, current_page: u32) -> Self {
        Self {
            kind: PageControlKind::Page,
            label: page.to_string(),
            target_page: page,
            is_active: page == current_page,
        }
    }
}

/// Lays out the controls for a window, left to right.
#[must_use]
pub fn controls_for_window(window: &PageWindow) -> Vec<PageControl> {
    let current = window.current_page;
    let mut controls = Vec::new();

    if window.shows_backward() {
        controls.push(PageControl::navigation(PageControlKind::First, 1));
        controls.push(PageControl::navigation(PageControlKind::Previous, current - 1));
    }

    controls.extend(window.pages().map(|page| PageControl::page(page, current)));

    if window.shows_forward() {
        controls.push(PageControl::navigation(PageControlKind::Next, current + 1));
        controls.push(PageControl::navigation(PageControlKind::Last, window.last_page));
    }

    controls
}

/// Lays out the controls for a pagination state.
#[must_use]
pub fn build_controls(state: &PaginationState) -> Vec<PageControl> {
    controls_for_window(&state.window())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn controls(current: u32, total: u32, group: u32) -> Vec<PageControl> {
        build_controls(&PaginationState::new(current, total, group).unwrap())
    }

    fn summary(controls: &[PageControl]) -> Vec<(PageControlKind, u32, bool)> {
        controls
            .iter()
            .map(|c| (c.kind, c.target_page, c.is_active))
            .collect()
    }

    #[test]
    fn test_middle_of_first_group() {
        use PageControlKind::{First, Last, Next, Page, Previous};
        assert_eq!(
            summary(&controls(5, 20, 5)),
            vec![
                (First, 1, false),
                (Previous, 4, false),
                (Page, 1, false),
                (Page, 2, false),
                (Page, 3, false),
                (Page, 4, false),
                (Page, 5, true),
                (Next, 6, false),
                (Last, 20, false),
            ]
        );
    }

    #[test]
    fn test_single_short_group() {
        let c = controls(1, 3, 5);
        assert_eq!(c.len(), 3);
        assert!(c.iter().all(|c| c.kind == PageControlKind::Page));
        assert_eq!(c.iter().filter(|c| c.is_active).count(), 1);
        assert!(c[0].is_active);
    }

    #[test]
    fn test_nothing_rendered_without_pages() {
        assert!(controls(1, 0, 5).is_empty());
    }

    #[test]
    fn test_last_page_hides_forward_controls() {
        let c = controls(20, 20, 5);
        assert_eq!(c.first().map(|c| c.kind), Some(PageControlKind::First));
        assert_eq!(c.last().map(|c| (c.kind, c.target_page)), Some((PageControlKind::Page, 20)));
    }

    #[test]
    fn test_labels() {
        let c = controls(2, 3, 5);
        let labels: Vec<_> = c.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["«", "‹", "1", "2", "3", "›", "»"]);
    }

    #[test]
    fn test_exactly_one_active_for_valid_states() {
        for total in 1..=25 {
            for current in 1..=total {
                let active = controls(current, total, 4)
                    .into_iter()
                    .filter(|c| c.is_active)
                    .collect::<Vec<_>>();
                assert_eq!(active.len(), 1);
                assert_eq!(active[0].target_page, current);
            }
        }
    }
}
