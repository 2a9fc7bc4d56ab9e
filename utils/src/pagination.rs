// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::page_strip::{self, PageStripEntry};

/// Holds the pagination state (generic, for various list surfaces)
///
/// An immutable window over a logical sequence of items. Surfaces replace the
/// whole value on every navigation or total-count change, they never mutate it
/// in place, so one value per independent paginated surface is all the state
/// there is.
///
/// `page_size` must be greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Zero-based index of the active page
    pub current_page: usize,
    /// Maximum number of items per page
    pub page_size: usize,
    /// Size of the logical collection being paginated
    pub total_items: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        PaginationState {
            current_page: 0,
            page_size: 10,
            total_items: 0,
        }
    }
}

impl PaginationState {
    /// Fresh state on the first page of an empty collection
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        PaginationState {
            page_size,
            ..Default::default()
        }
    }

    /// Total number of pages, zero when the collection is empty
    pub fn total_pages(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            self.total_items.div_ceil(self.page_size)
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    /// Index of the first item of the active page
    pub fn start_index(&self) -> usize {
        self.current_page * self.page_size
    }

    /// One past the index of the last item of the active page
    pub fn end_index(&self) -> usize {
        usize::min(self.start_index() + self.page_size, self.total_items)
    }

    /// Half-open index range of the active page
    pub fn page_range(&self) -> std::ops::Range<usize> {
        self.start_index()..self.end_index()
    }

    /// Returns a copy moved one page forward, staying on the last page
    pub fn next_page(self) -> Self {
        self.go_to_page(self.current_page + 1)
    }

    /// Returns a copy moved one page back, staying on the first page
    pub fn previous_page(self) -> Self {
        PaginationState {
            current_page: self.current_page.saturating_sub(1),
            ..self
        }
    }

    /// Returns a copy on the requested page, clamped into the valid range.
    ///
    /// Asking for the current page returns an equal state.
    pub fn go_to_page(self, page: usize) -> Self {
        PaginationState {
            current_page: usize::min(page, self.total_pages().saturating_sub(1)),
            ..self
        }
    }

    /// Returns a copy with the new collection size.
    ///
    /// The active page is kept as long as it still falls inside the new range
    /// and reset to the first page otherwise, so a shrinking collection (a
    /// filter cutting the result count, say) never leaves an unexplained empty
    /// page on screen.
    pub fn update_total_items(self, total: usize) -> Self {
        let pages_after = if total == 0 {
            0
        } else {
            total.div_ceil(self.page_size)
        };

        PaginationState {
            total_items: total,
            current_page: if self.current_page >= pages_after {
                0
            } else {
                self.current_page
            },
            ..self
        }
    }

    /// Routes a navigation request through the gated transitions.
    ///
    /// `Back` and `Forward` are no-ops at the first and last page, matching
    /// views that disable the corresponding control.
    pub fn apply(self, action: PaginationAction) -> Self {
        match action {
            PaginationAction::Back => {
                if self.has_previous_page() {
                    self.previous_page()
                } else {
                    self
                }
            }
            PaginationAction::Forward => {
                if self.has_next_page() {
                    self.next_page()
                } else {
                    self
                }
            }
            PaginationAction::GoTo(page) => self.go_to_page(page),
        }
    }

    /// Entries of the page-number strip for this window
    pub fn page_strip(&self) -> Vec<PageStripEntry> {
        page_strip::page_strip(self.current_page, self.total_pages())
    }

    /// Selects exactly the active page out of the full ordered sequence.
    ///
    /// A window lying past the end of `items` yields an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::min(self.start_index(), items.len());
        let end = self.end_index().clamp(start, items.len());
        &items[start..end]
    }
}

/// Identifies a pagination action requested from a list surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Back,
    Forward,
    GoTo(usize),
}
