//! The discovery pipeline shared by the browse views.
//!
//! Filter edits reset the page, every fetch is tagged with a request id and
//! only the response to the most recently issued request is ever applied.
//! Failed fetches leave the previous results on screen behind a dismissible
//! error message.

use crate::domain::filter::{FilterChange, FilterField, FilterState, FilterUpdate};
use crate::domain::listing::{Listing, ListingKind, ListingPage, RealtimeEvent};
use crate::domain::types::{EntityId, GeoPoint};
use crate::pagination::PageState;
use crate::query::{ListingParams, build_query};
use crate::source::{FetchError, ListingSource};

/// Entities currently displayed along with the server-side total.
pub type ResultSet<T> = ListingPage<T>;

fn position_of<T: Listing>(items: &[T], id: EntityId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// A request issued by [`DiscoveryPipeline::begin_fetch`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    id: u64,
    page: usize,
    pub params: ListingParams,
}

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Page the request was issued for.
    pub fn page(&self) -> usize {
        self.page
    }
}

/// What [`DiscoveryPipeline::complete_fetch`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the result set.
    Applied,
    /// A newer request had been issued; the response was dropped.
    Stale,
    /// The request failed; previous results are kept and an error is shown.
    Failed,
    /// The reported total moved the current page away from the requested
    /// one. The total was recorded but the items were not applied; the
    /// current page has to be fetched again.
    PageMoved,
}

#[derive(Debug, Clone)]
pub struct DiscoveryPipeline<T> {
    kind: ListingKind,
    filter: FilterState,
    page: PageState,
    results: ResultSet<T>,
    error: Option<String>,
    latest_request: u64,
    loading: bool,
}

impl<T: Listing + Clone> DiscoveryPipeline<T> {
    pub fn new(kind: ListingKind, items_per_page: usize) -> Self {
        Self {
            kind,
            filter: FilterState::default(),
            page: PageState::new(items_per_page),
            results: ResultSet::default(),
            error: None,
            latest_request: 0,
            loading: false,
        }
    }

    pub fn kind(&self) -> ListingKind {
        self.kind
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn results(&self) -> &ResultSet<T> {
        &self.results
    }

    /// User-facing message of the last failed fetch, until dismissed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn after_filter_change(&mut self, change: FilterChange) -> FilterChange {
        if change.resets_page {
            self.page.reset();
        }
        change
    }

    pub fn update_filter(&mut self, update: FilterUpdate) -> FilterChange {
        let change = self.filter.set_field(update);
        self.after_filter_change(change)
    }

    pub fn clear_filter(&mut self, field: FilterField) -> FilterChange {
        let change = self.filter.clear_field(field);
        self.after_filter_change(change)
    }

    pub fn clear_filters(&mut self) -> FilterChange {
        let change = self.filter.clear_all();
        self.after_filter_change(change)
    }

    pub fn enable_geo(&mut self, center: GeoPoint) -> FilterChange {
        let change = self.filter.enable_geo(center);
        self.after_filter_change(change)
    }

    pub fn disable_geo(&mut self) -> FilterChange {
        let change = self.filter.disable_geo();
        self.after_filter_change(change)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.page.go_to_page(page)
    }

    /// Parameters for the current filter state and page.
    pub fn params(&self) -> ListingParams {
        build_query(
            self.kind,
            &self.filter,
            self.page.current_page(),
            self.page.items_per_page(),
        )
    }

    /// Issues a new request id, superseding every earlier one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_request += 1;
        self.loading = true;
        FetchTicket {
            id: self.latest_request,
            page: self.page.current_page(),
            params: self.params(),
        }
    }

    /// Applies the response to `ticket` unless a newer request was issued.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ListingPage<T>, FetchError>,
    ) -> FetchOutcome {
        if ticket.id != self.latest_request {
            log::debug!(
                "Dropping stale {} response #{} (latest is #{})",
                self.kind,
                ticket.id,
                self.latest_request
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.page.set_total(page.total);
                self.error = None;
                if self.page.current_page() != ticket.page {
                    log::debug!(
                        "{} page {} out of range for total {}, now on page {}",
                        self.kind,
                        ticket.page,
                        page.total,
                        self.page.current_page()
                    );
                    return FetchOutcome::PageMoved;
                }
                self.results = page;
                FetchOutcome::Applied
            }
            Err(err) => {
                log::error!("Failed to fetch {}: {err}", self.kind);
                self.error = Some(err.user_message().to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Fetches the current page from `source` and applies it.
    ///
    /// Fetches again whenever the response moved the current page, which
    /// can only lower it, so this ends at page 1 at the latest.
    pub async fn refresh<S>(&mut self, source: &S) -> FetchOutcome
    where
        S: ListingSource<T> + ?Sized,
    {
        loop {
            let ticket = self.begin_fetch();
            let result = source.fetch(self.kind, &ticket.params).await;
            match self.complete_fetch(ticket, result) {
                FetchOutcome::PageMoved => continue,
                outcome => return outcome,
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Splices a pushed change into the displayed results without refetching.
    ///
    /// Returns `true` when the result set changed.
    pub fn apply_realtime(&mut self, event: RealtimeEvent<T>) -> bool {
        match event {
            RealtimeEvent::Insert(item) => match position_of(&self.results.items, item.id()) {
                Some(index) => {
                    self.results.items[index] = item;
                    true
                }
                None => {
                    self.results.items.insert(0, item);
                    self.results.items.truncate(self.page.items_per_page());
                    self.results.total += 1;
                    self.page.set_total(self.results.total);
                    true
                }
            },
            RealtimeEvent::Update(item) => match position_of(&self.results.items, item.id()) {
                Some(index) => {
                    self.results.items[index] = item;
                    true
                }
                None => false,
            },
            RealtimeEvent::Delete(id) => match position_of(&self.results.items, id) {
                Some(index) => {
                    self.results.items.remove(index);
                    self.results.total = self.results.total.saturating_sub(1);
                    self.page.set_total(self.results.total);
                    true
                }
                None => false,
            },
        }
    }
}
