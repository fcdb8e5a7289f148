//! Pagination window math and the per-screen page state.

/// How many page numbers are shown before the window collapses with
/// ellipses.
pub const MAX_VISIBLE: i64 = 5;

/// One slot in the rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(i64),
    /// A collapsed run of pages.
    Ellipsis,
}

/// Computes the visible window of page numbers for a pagination control.
///
/// Short ranges are emitted verbatim; longer ranges pin the first and last
/// page and collapse the middle with ellipses around the current page.
pub fn page_window(current: i64, total: i64) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    // A page addressed past the server's end still renders a sane window.
    let total = total.max(1);
    let current = current.clamp(1, total);

    if total <= MAX_VISIBLE {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        let mut window: Vec<PageItem> = (1..=4).map(Page).collect();
        window.push(Ellipsis);
        window.push(Page(total));
        return window;
    }
    if current >= total - 2 {
        let mut window = vec![Page(1), Ellipsis];
        window.extend((total - 3..=total).map(Page));
        return window;
    }
    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(total),
    ]
}

/// Current page state of one list screen: `current_page ∈ [1, total_pages]`.
///
/// The pager clamps page-change requests but never second-guesses the page
/// against an upcoming fetch; a page past the server's end simply comes back
/// as an empty result.
#[derive(Debug, Clone)]
pub struct Pager {
    current: i64,
    total: i64,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    /// Creates a pager at page 1 of 1.
    pub fn new() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }

    pub fn current_page(&self) -> i64 {
        self.current
    }

    pub fn total_pages(&self) -> i64 {
        self.total
    }

    /// Adopts a fresh total from a list result. Totals below 1 are treated
    /// as 1 (an empty collection still has one, empty, page).
    pub fn set_total_pages(&mut self, total: i64) {
        self.total = total.max(1);
    }

    /// Moves to `page`. A no-op returning `false` when `page` equals the
    /// current page or lies outside `[1, total_pages]`.
    pub fn set_page(&mut self, page: i64) -> bool {
        if page < 1 || page > self.total || page == self.current {
            return false;
        }
        self.current = page;
        true
    }

    /// Returns to page 1, e.g. after the search term or page size changed.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Jumps straight to `page` without range checks, for entry points that
    /// address a page directly (deep links, CLI flags). The total reported
    /// by the next result still decides what the window shows; a page past
    /// the end simply fetches empty.
    pub fn jump_to(&mut self, page: i64) {
        self.current = page.max(1);
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Moves back one page; refuses at the first page.
    pub fn prev(&mut self) -> bool {
        self.set_page(self.current - 1)
    }

    /// Moves forward one page; refuses at the last page.
    pub fn next(&mut self) -> bool {
        self.set_page(self.current + 1)
    }

    /// The visible window of page numbers for the current state.
    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current, self.total)
    }
}
