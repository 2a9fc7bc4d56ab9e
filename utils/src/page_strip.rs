// SPDX-License-Identifier: GPL-3.0-only

/// Most page numbers a strip ever shows at once
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One element of a page-number navigation strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStripEntry {
    /// A selectable zero-based page number
    Page(usize),
    /// Stands in for the pages elided between the window and the first or
    /// last page
    Ellipsis,
}

/// Bounded strip of page numbers for a navigation widget.
///
/// At most [`MAX_VISIBLE_PAGES`] consecutive numbers are shown, anchored so
/// the current page sits in the middle whenever the bounds allow it. When the
/// window leaves out the first or last page, that page is appended on the
/// matching side, with an ellipsis whenever further pages are skipped in
/// between.
pub fn page_strip(current_page: usize, total_pages: usize) -> Vec<PageStripEntry> {
    if total_pages == 0 {
        return Vec::new();
    }

    let half = MAX_VISIBLE_PAGES / 2;
    let start = usize::min(
        current_page.saturating_sub(half),
        total_pages.saturating_sub(MAX_VISIBLE_PAGES),
    );
    let end = usize::min(total_pages - 1, start + MAX_VISIBLE_PAGES - 1);

    let mut entries = Vec::new();

    if start > 0 {
        entries.push(PageStripEntry::Page(0));
        if start > 1 {
            entries.push(PageStripEntry::Ellipsis);
        }
    }

    entries.extend((start..=end).map(PageStripEntry::Page));

    if end < total_pages - 1 {
        if end < total_pages - 2 {
            entries.push(PageStripEntry::Ellipsis);
        }
        entries.push(PageStripEntry::Page(total_pages - 1));
    }

    entries
}
