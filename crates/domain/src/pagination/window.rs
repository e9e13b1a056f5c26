//! Page window computation.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{DomainError, DomainResult};

/// Input of a pagination render.
///
/// `total_pages` bounds the window. `page_size` divides `total_pages` to
/// obtain the last page; with the default divisor of 1 the last page equals
/// `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PaginationStateDocument")]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
    page_group_size: u32,
    page_size: u32,
}

/// Unvalidated wire form of [`PaginationState`].
#[derive(Deserialize)]
struct PaginationStateDocument {
    current_page: u32,
    total_pages: u32,
    page_group_size: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

const fn default_page_size() -> u32 {
    1
}

impl TryFrom<PaginationStateDocument> for PaginationState {
    type Error = DomainError;

    fn try_from(doc: PaginationStateDocument) -> DomainResult<Self> {
        Self::new(doc.current_page, doc.total_pages, doc.page_group_size)?
            .with_page_size(doc.page_size)
    }
}

impl PaginationState {
    /// Creates a state with a page-size divisor of 1.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPagination`] if `current_page` or
    /// `page_group_size` is zero.
    pub fn new(current_page: u32, total_pages: u32, page_group_size: u32) -> DomainResult<Self> {
        if current_page == 0 {
            return Err(DomainError::InvalidPagination(
                "current page starts at 1".to_string(),
            ));
        }
        if page_group_size == 0 {
            return Err(DomainError::InvalidPagination(
                "page group size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            current_page,
            total_pages,
            page_group_size,
            page_size: 1,
        })
    }

    /// Replaces the divisor used to derive the last page.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPagination`] if `page_size` is zero.
    pub fn with_page_size(mut self, page_size: u32) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::InvalidPagination(
                "page size must be at least 1".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Currently selected page (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total pages bounding the window.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Number of page links shown at once.
    #[must_use]
    pub const fn page_group_size(&self) -> u32 {
        self.page_group_size
    }

    /// Divisor applied to `total_pages` to obtain the last page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Computes the visible window.
    #[must_use]
    pub const fn window(&self) -> PageWindow {
        let group_index = (self.current_page - 1) / self.page_group_size;
        let window_start = group_index * self.page_group_size + 1;
        let group_end = window_start.saturating_add(self.page_group_size - 1);
        let mut window_end = if group_end < self.total_pages {
            group_end
        } else {
            self.total_pages
        };
        let last_page = self.total_pages.div_ceil(self.page_size);
        if window_end >= last_page {
            window_end = last_page;
        }

        PageWindow {
            current_page: self.current_page,
            window_start,
            window_end,
            last_page,
        }
    }
}

/// The derived `[window_start, window_end]` range plus the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    /// Page the window was computed for.
    pub current_page: u32,
    /// First page link in the window.
    pub window_start: u32,
    /// Last page link in the window. Below `window_start` when empty.
    pub window_end: u32,
    /// Final page; the sole authority for next/last decisions.
    pub last_page: u32,
}

impl PageWindow {
    /// Page numbers in the window, in ascending order.
    #[must_use]
    pub const fn pages(&self) -> RangeInclusive<u32> {
        self.window_start..=self.window_end
    }

    /// Returns true when no page link is shown.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.window_start > self.window_end
    }

    /// Returns true when an earlier page group exists.
    #[must_use]
    pub const fn has_prev_group(&self) -> bool {
        self.window_start > 1
    }

    /// Returns true when a later page group exists.
    #[must_use]
    pub const fn has_next_group(&self) -> bool {
        self.window_end < self.last_page
    }

    /// Returns true when backward navigation controls are shown.
    #[must_use]
    pub const fn shows_backward(&self) -> bool {
        self.current_page > 1
    }

    /// Returns true when forward navigation controls are shown.
    #[must_use]
    pub const fn shows_forward(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Returns true if `page` falls inside the window.
    #[must_use]
    pub const fn contains(&self, page: u32) -> bool {
        self.window_start <= page && page <= self.window_end
    }
}
