//! Screen-level list browsing state.
//!
//! A [`ListBrowser`] owns the query descriptor that drives one list screen
//! (page, page size, debounced search term) and the fetch sequencing that
//! makes rendering safe when responses arrive out of order: every fetch is
//! tagged with a monotonically increasing sequence number and only the
//! newest issued descriptor may update the display (last-request-wins).

use storefront_api::types::PaginatedResponse;
use storefront_api::ListParams;

use crate::pager::{PageItem, Pager};

/// Render state of a list screen. Long-lived; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseStatus {
    /// No fetch has been issued yet.
    Idle,
    /// A fetch for the newest descriptor is in flight.
    Loading,
    /// The newest descriptor resolved successfully.
    Ready,
    /// The newest descriptor failed. The screen stays interactive so the
    /// user can retry by changing the input.
    Failed,
}

/// Handle for one issued fetch: the sequence number plus the descriptor it
/// was built from. Resolving a ticket whose sequence number has been
/// superseded leaves the display untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub params: ListParams,
}

/// The single source of truth for one list screen's query and rows.
pub struct ListBrowser<T> {
    limit: Option<i64>,
    search: Option<String>,
    pager: Pager,
    /// Sequence number of the newest issued fetch.
    seq: u64,
    items: Vec<T>,
    status: BrowseStatus,
}

impl<T> Default for ListBrowser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListBrowser<T> {
    pub fn new() -> Self {
        Self {
            limit: None,
            search: None,
            pager: Pager::new(),
            seq: 0,
            items: Vec::new(),
            status: BrowseStatus::Idle,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Adopts a (debounced) search term. A changed term resets the page to 1:
    /// the old offset is meaningless against a new result set. Returns
    /// whether anything changed. An empty term clears the filter.
    pub fn set_search(&mut self, term: &str) -> bool {
        let term = term.trim();
        let next = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        if next == self.search {
            return false;
        }
        self.search = next;
        self.pager.reset();
        true
    }

    /// Changes the page size, resetting the page to 1 (a new page size
    /// invalidates the old offset).
    pub fn set_limit(&mut self, limit: i64) -> bool {
        if self.limit == Some(limit) {
            return false;
        }
        self.limit = Some(limit);
        self.pager.reset();
        true
    }

    /// Moves to `page` under the pager's clamp/no-op rules.
    pub fn set_page(&mut self, page: i64) -> bool {
        self.pager.set_page(page)
    }

    /// Enters at `page` directly, bypassing the range check (deep links and
    /// CLI flags address a page before any total is known).
    pub fn jump_to_page(&mut self, page: i64) {
        self.pager.jump_to(page);
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next()
    }

    pub fn prev_page(&mut self) -> bool {
        self.pager.prev()
    }

    /// Issues a new fetch: bumps the sequence number, captures the current
    /// descriptor, and marks the screen as loading. Any ticket issued
    /// earlier is stale from this point on.
    pub fn start_fetch(&mut self) -> FetchTicket {
        self.seq += 1;
        self.status = BrowseStatus::Loading;
        FetchTicket {
            seq: self.seq,
            params: ListParams {
                page: self.pager.current_page(),
                limit: self.limit,
                search: self.search.clone(),
                ..ListParams::default()
            },
        }
    }

    /// Applies the outcome of a fetch. Returns `false` and leaves the
    /// display untouched when the ticket is stale (its descriptor has been
    /// superseded), regardless of arrival order. A successful outcome
    /// replaces the rows wholesale and adopts the reported total.
    pub fn resolve<E>(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<PaginatedResponse<T>, E>,
    ) -> bool {
        if ticket.seq != self.seq {
            tracing::debug!(
                "discarding stale result for page {} (seq {} superseded by {})",
                ticket.params.page,
                ticket.seq,
                self.seq
            );
            return false;
        }
        match outcome {
            Ok(resp) => {
                self.pager.set_total_pages(resp.meta.total_pages);
                self.items = resp.data;
                self.status = BrowseStatus::Ready;
            }
            Err(_) => {
                self.status = BrowseStatus::Failed;
            }
        }
        true
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> BrowseStatus {
        self.status
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn current_page(&self) -> i64 {
        self.pager.current_page()
    }

    pub fn total_pages(&self) -> i64 {
        self.pager.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.pager.has_prev()
    }

    pub fn has_next(&self) -> bool {
        self.pager.has_next()
    }

    /// The visible pagination window for the current state.
    pub fn window(&self) -> Vec<PageItem> {
        self.pager.window()
    }
}

#[cfg(test)]
mod tests {
    use storefront_api::types::{Meta, PaginatedResponse};

    use super::*;

    fn page_of(items: Vec<&'static str>, total_pages: i64) -> PaginatedResponse<&'static str> {
        PaginatedResponse {
            data: items,
            meta: Meta { total_pages },
        }
    }

    #[test]
    fn late_result_for_superseded_descriptor_is_discarded() {
        let mut browser: ListBrowser<&str> = ListBrowser::new().with_limit(10);

        let ticket_a = browser.start_fetch();
        assert_eq!(ticket_a.params.page, 1);

        // First result lands normally so page 2 becomes reachable.
        assert!(browser.resolve::<()>(&ticket_a, Ok(page_of(vec!["a1", "a2"], 3))));
        assert!(browser.set_page(2));

        let ticket_b = browser.start_fetch();
        // The user clicks again before B resolves.
        assert!(browser.set_page(3));
        let ticket_c = browser.start_fetch();

        // C resolves first, then B arrives late: B must not overwrite C.
        assert!(browser.resolve::<()>(&ticket_c, Ok(page_of(vec!["c1"], 3))));
        assert!(!browser.resolve::<()>(&ticket_b, Ok(page_of(vec!["b1"], 3))));

        assert_eq!(browser.items(), &["c1"]);
        assert_eq!(browser.status(), BrowseStatus::Ready);
    }

    #[test]
    fn stale_error_is_discarded_too() {
        let mut browser: ListBrowser<&str> = ListBrowser::new();

        let old = browser.start_fetch();
        let new = browser.start_fetch();

        assert!(browser.resolve::<()>(&new, Ok(page_of(vec!["fresh"], 1))));
        assert!(!browser.resolve(&old, Err(())));

        assert_eq!(browser.status(), BrowseStatus::Ready);
        assert_eq!(browser.items(), &["fresh"]);
    }

    #[test]
    fn search_change_resets_page() {
        let mut browser: ListBrowser<&str> = ListBrowser::new();
        let ticket = browser.start_fetch();
        browser.resolve::<()>(&ticket, Ok(page_of(vec![], 10)));
        assert!(browser.set_page(7));

        assert!(browser.set_search("lamp"));
        assert_eq!(browser.current_page(), 1);
        assert_eq!(browser.start_fetch().params.search.as_deref(), Some("lamp"));

        // Same term again is a no-op and must not reset the page.
        assert!(browser.set_page(4));
        assert!(!browser.set_search("lamp"));
        assert_eq!(browser.current_page(), 4);
    }

    #[test]
    fn limit_change_resets_page() {
        let mut browser: ListBrowser<&str> = ListBrowser::new().with_limit(20);
        let ticket = browser.start_fetch();
        browser.resolve::<()>(&ticket, Ok(page_of(vec![], 5)));
        assert!(browser.set_page(3));

        assert!(browser.set_limit(50));
        assert_eq!(browser.current_page(), 1);
        assert!(!browser.set_limit(50));
    }

    #[test]
    fn empty_search_clears_filter() {
        let mut browser: ListBrowser<&str> = ListBrowser::new();
        assert!(browser.set_search("lamp"));
        assert!(browser.set_search("  "));
        assert_eq!(browser.search(), None);
        assert_eq!(browser.start_fetch().params.search, None);
    }

    #[test]
    fn failure_keeps_last_good_rows_and_stays_interactive() {
        let mut browser: ListBrowser<&str> = ListBrowser::new();

        let ok = browser.start_fetch();
        browser.resolve::<()>(&ok, Ok(page_of(vec!["kept"], 4)));

        let failing = browser.start_fetch();
        assert!(browser.resolve(&failing, Err(())));

        assert_eq!(browser.status(), BrowseStatus::Failed);
        assert_eq!(browser.items(), &["kept"]);
        // Still interactive: a new search issues a fresh descriptor.
        assert!(browser.set_search("retry"));
        let retry = browser.start_fetch();
        assert_eq!(retry.params.page, 1);
        assert_eq!(browser.status(), BrowseStatus::Loading);
    }

    #[test]
    fn page_changes_out_of_range_are_noops() {
        let mut browser: ListBrowser<&str> = ListBrowser::new();
        let ticket = browser.start_fetch();
        browser.resolve::<()>(&ticket, Ok(page_of(vec![], 3)));

        assert!(!browser.set_page(0));
        assert!(!browser.set_page(4));
        assert_eq!(browser.current_page(), 1);
    }
}
