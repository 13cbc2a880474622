//! Paginated list-fetch state machine shared by the Logs and Evaluations views.
//!
//! Every page change issues exactly one fetch, tagged with a [`FetchTicket`].
//! A completion is applied only when its ticket is the controller's current
//! one, so a slow response for an earlier page can never overwrite a newer one.

use crate::api::types::{EvaluationListResponse, LogListResponse};
use crate::core::errors::LqoError;

use super::load_state::LoadState;

/// Fixed page size for list views.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A paginated payload that reports its own totals.
pub trait Paged {
    fn total(&self) -> u64;
}

impl Paged for LogListResponse {
    fn total(&self) -> u64 {
        self.total
    }
}

impl Paged for EvaluationListResponse {
    fn total(&self) -> u64 {
        self.total
    }
}

/// `ceil(total / page_size)`; zero when there are no items.
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    u32::try_from(total.div_ceil(page_size)).unwrap_or(u32::MAX)
}

/// Identity of one issued page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub page: u32,
    pub page_size: u32,
    generation: u64,
}

/// Result of feeding a completion into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Payload or error now visible.
    Applied,
    /// Ticket superseded; result dropped.
    Stale,
    /// The payload showed the current page is past the end; the controller
    /// moved to the last page and needs this fetch issued.
    Refetch(FetchTicket),
}

/// Page cursor plus the load state of the current page.
#[derive(Debug, Clone)]
pub struct PaginationController<T> {
    page: u32,
    page_size: u32,
    generation: u64,
    in_flight: Option<FetchTicket>,
    known_total_pages: Option<u32>,
    state: LoadState<T>,
}

impl<T: Paged> PaginationController<T> {
    /// New controller on page 1. Nothing is fetched until [`Self::mount`].
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            generation: 0,
            in_flight: None,
            known_total_pages: None,
            state: LoadState::Idle,
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Page count from the last payload; `None` before the first one.
    #[must_use]
    pub const fn known_total_pages(&self) -> Option<u32> {
        self.known_total_pages
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.known_total_pages.is_some_and(|pages| self.page < pages)
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Initial fetch (or explicit reload) at the current page.
    pub fn mount(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Move to page `n`.
    ///
    /// Pages below 1 are rejected. Once a payload has reported the page count,
    /// `n` is clamped to `[1, max(total_pages, 1)]`. Staying on the same page
    /// issues nothing.
    pub fn go_to_page(&mut self, n: u32) -> Option<FetchTicket> {
        if n < 1 {
            return None;
        }
        let target = self
            .known_total_pages
            .map_or(n, |pages| n.min(pages.max(1)));
        if target == self.page && !matches!(self.state, LoadState::Idle) {
            return None;
        }
        self.page = target;
        Some(self.issue())
    }

    /// Next page; no-op on the last page or before page count is known.
    pub fn next(&mut self) -> Option<FetchTicket> {
        if !self.has_next() {
            return None;
        }
        self.go_to_page(self.page + 1)
    }

    /// Previous page; no-op on page 1.
    pub fn previous(&mut self) -> Option<FetchTicket> {
        if !self.has_previous() {
            return None;
        }
        self.go_to_page(self.page - 1)
    }

    /// Feed a fetch result back. Only the current ticket is applied.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, LqoError>) -> Completion {
        if self.in_flight != Some(ticket) {
            tracing::debug!(
                page = ticket.page,
                current_page = self.page,
                "discarding stale page result"
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        if let Ok(payload) = &result {
            let pages = total_pages(payload.total(), self.page_size);
            self.known_total_pages = Some(pages);
            let last = pages.max(1);
            if self.page > last {
                tracing::debug!(page = self.page, last, "page past end, moving to last page");
                self.page = last;
                return Completion::Refetch(self.issue());
            }
        }

        self.state = LoadState::from_result(result);
        Completion::Applied
    }

    fn issue(&mut self) -> FetchTicket {
        self.generation += 1;
        let ticket = FetchTicket {
            page: self.page,
            page_size: self.page_size,
            generation: self.generation,
        };
        self.in_flight = Some(ticket);
        self.state = LoadState::Loading;
        tracing::debug!(page = ticket.page, page_size = ticket.page_size, "page fetch issued");
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct FakePage {
        total: u64,
    }

    impl Paged for FakePage {
        fn total(&self) -> u64 {
            self.total
        }
    }

    fn page_of(total: u64) -> FakePage {
        FakePage { total }
    }

    #[test]
    fn total_pages_examples() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn mount_issues_one_fetch_on_page_one() {
        let mut ctl = PaginationController::<FakePage>::new(DEFAULT_PAGE_SIZE);
        let ticket = ctl.mount();
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.page_size, 10);
        assert!(ctl.state().is_loading());
    }

    #[test]
    fn twenty_five_items_make_three_pages() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let ticket = ctl.mount();
        assert_eq!(ctl.complete(ticket, Ok(page_of(25))), Completion::Applied);
        assert_eq!(ctl.known_total_pages(), Some(3));

        let next = ctl.next().expect("next should fetch");
        assert_eq!(next.page, 2);
        assert_eq!(ctl.page(), 2);
        assert!(ctl.state().is_loading());
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let ticket = ctl.mount();
        ctl.complete(ticket, Ok(page_of(25)));
        assert!(ctl.previous().is_none());
        assert_eq!(ctl.page(), 1);
        assert!(ctl.state().is_settled());
    }

    #[test]
    fn next_on_last_page_is_noop() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let t = ctl.mount();
        ctl.complete(t, Ok(page_of(25)));
        let t = ctl.go_to_page(3).unwrap();
        ctl.complete(t, Ok(page_of(25)));
        assert!(!ctl.has_next());
        assert!(ctl.next().is_none());
    }

    #[test]
    fn go_to_page_zero_is_rejected() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        ctl.mount();
        assert!(ctl.go_to_page(0).is_none());
        assert_eq!(ctl.page(), 1);
    }

    #[test]
    fn go_to_page_before_first_payload_is_unbounded() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let ticket = ctl.go_to_page(7).expect("fresh controller accepts any page");
        assert_eq!(ticket.page, 7);
    }

    #[test]
    fn go_to_page_clamps_once_page_count_known() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let t = ctl.mount();
        ctl.complete(t, Ok(page_of(25)));
        let ticket = ctl.go_to_page(40).unwrap();
        assert_eq!(ticket.page, 3);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let first = ctl.mount();
        let second = ctl.go_to_page(2).unwrap();
        assert_eq!(ctl.complete(first, Ok(page_of(25))), Completion::Stale);
        assert!(ctl.state().is_loading());
        assert_eq!(ctl.complete(second, Ok(page_of(25))), Completion::Applied);
        assert_eq!(ctl.page(), 2);
    }

    #[test]
    fn same_page_tickets_differ_by_generation() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let first = ctl.mount();
        let reload = ctl.mount();
        assert_ne!(first, reload);
        assert_eq!(ctl.complete(first, Ok(page_of(3))), Completion::Stale);
    }

    #[test]
    fn failure_surfaces_message() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let t = ctl.mount();
        let err = LqoError::Api {
            status: 502,
            status_text: "Bad Gateway".to_string(),
        };
        assert_eq!(ctl.complete(t, Err(err)), Completion::Applied);
        assert_eq!(ctl.state().error(), Some("API Error: Bad Gateway"));
    }

    #[test]
    fn shrinking_total_moves_to_last_page() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let t = ctl.go_to_page(5).unwrap();
        match ctl.complete(t, Ok(page_of(12))) {
            Completion::Refetch(ticket) => {
                assert_eq!(ticket.page, 2);
                assert_eq!(ctl.page(), 2);
            }
            other => panic!("expected refetch, got {other:?}"),
        }
    }

    #[test]
    fn empty_listing_stays_on_page_one() {
        let mut ctl = PaginationController::<FakePage>::new(10);
        let t = ctl.mount();
        assert_eq!(ctl.complete(t, Ok(FakePage { total: 0 })), Completion::Applied);
        assert_eq!(ctl.known_total_pages(), Some(0));
        assert_eq!(ctl.page(), 1);
        assert!(ctl.next().is_none());
    }

    proptest! {
        #[test]
        fn total_pages_is_ceiling(total in 0u64..1_000_000, size in 1u32..500) {
            let pages = u64::from(total_pages(total, size));
            prop_assert!(pages * u64::from(size) >= total);
            if total > 0 {
                prop_assert!((pages - 1) * u64::from(size) < total);
            } else {
                prop_assert_eq!(pages, 0);
            }
        }

        #[test]
        fn page_always_in_range_after_payload(
            total in 0u64..500,
            size in 1u32..30,
            moves in proptest::collection::vec(0u32..60, 1..20),
        ) {
            let mut ctl = PaginationController::<FakePage>::new(size);
            let mut ticket = ctl.mount();
            loop {
                match ctl.complete(ticket, Ok(FakePage { total })) {
                    Completion::Refetch(t) => ticket = t,
                    _ => break,
                }
            }
            let upper = total_pages(total, size).max(1);
            for target in moves {
                if let Some(t) = ctl.go_to_page(target) {
                    let mut t = t;
                    while let Completion::Refetch(next) = ctl.complete(t, Ok(FakePage { total })) {
                        t = next;
                    }
                }
                prop_assert!(ctl.page() >= 1 && ctl.page() <= upper);
            }
        }
    }
}
