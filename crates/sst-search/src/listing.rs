//! Paged document listings (PGR, CAT, ...) with filter, sort and navigation.
//!
//! Shares the ticket discipline of the search modal: every change issues a
//! new [`Ticket`] and only the latest one is applied.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use sst_client::pgr::PgrFilter;
use sst_client::{ApiError, SstClient};
use sst_core::entities::Pgr;
use sst_core::enums::PgrStatus;
use sst_core::{Envelope, Page, PageRequest, Sort};

use crate::error::SearchError;
use crate::normalize::normalize_by;
use crate::ticket::{Generation, Resolution, Ticket};

/// Filter, sort and position of a listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<St> {
    pub search: Option<String>,
    pub status: Option<St>,
    pub page: PageRequest,
}

/// A backend collection a [`Listing`] can page through.
pub trait ListSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;
    /// Status filter values of this collection.
    type Status: Copy + Eq + fmt::Debug + Send + Sync + 'static;

    fn fetch(
        &self,
        query: ListQuery<Self::Status>,
    ) -> impl Future<Output = Result<Envelope<Self::Item>, ApiError>> + Send;
}

/// Loading state of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    Error { message: String },
}

pub type ListTicket<St> = Ticket<ListQuery<St>>;

/// Controller behind a document list page.
pub struct Listing<S: ListSource> {
    source: Arc<S>,
    query: ListQuery<S::Status>,
    generation: Generation,
    phase: ListPhase,
    page: Page<S::Item>,
}

impl<S: ListSource> Listing<S> {
    #[must_use]
    pub fn new(source: Arc<S>, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        Self {
            source,
            query: ListQuery {
                search: None,
                status: None,
                page: PageRequest::new(0, page_size),
            },
            generation: Generation::default(),
            phase: ListPhase::Loading,
            page: Page::empty(page_size),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &ListPhase {
        &self.phase
    }

    #[must_use]
    pub const fn page(&self) -> &Page<S::Item> {
        &self.page
    }

    #[must_use]
    pub const fn query(&self) -> &ListQuery<S::Status> {
        &self.query
    }

    #[must_use]
    pub fn pagination_label(&self) -> String {
        self.page.label()
    }

    /// Request the current query again (initial load, refresh after edits).
    pub fn reload(&mut self) -> ListTicket<S::Status> {
        self.issue()
    }

    /// Change the free-text filter and go back to the first page.
    pub fn set_search(&mut self, text: &str) -> ListTicket<S::Status> {
        let text = text.trim();
        self.query.search = (!text.is_empty()).then(|| text.to_string());
        self.query.page.page = 0;
        self.issue()
    }

    /// Change the status filter and go back to the first page.
    pub fn set_status(&mut self, status: Option<S::Status>) -> ListTicket<S::Status> {
        self.query.status = status;
        self.query.page.page = 0;
        self.issue()
    }

    /// Change the sort, keeping the current page.
    pub fn sort_by(&mut self, sort: Sort) -> ListTicket<S::Status> {
        self.query.page.sort = Some(sort);
        self.issue()
    }

    /// Request page `number` (0-based).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::PageOutOfRange`] when the page does not exist.
    pub fn go_to_page(&mut self, number: u32) -> Result<ListTicket<S::Status>, SearchError> {
        let total = self.page.total_pages;
        if number > 0 && number >= total {
            return Err(SearchError::PageOutOfRange {
                requested: number,
                total,
            });
        }
        self.query.page.page = number;
        Ok(self.issue())
    }

    /// # Errors
    ///
    /// See [`Self::go_to_page`].
    pub fn next_page(&mut self) -> Result<ListTicket<S::Status>, SearchError> {
        self.go_to_page(self.page.number.saturating_add(1))
    }

    /// # Errors
    ///
    /// Returns [`SearchError::PageOutOfRange`] on the first page.
    pub fn previous_page(&mut self) -> Result<ListTicket<S::Status>, SearchError> {
        let number = self
            .page
            .number
            .checked_sub(1)
            .ok_or(SearchError::PageOutOfRange {
                requested: 0,
                total: self.page.total_pages,
            })?;
        self.go_to_page(number)
    }

    pub fn fetch(
        &self,
        ticket: &ListTicket<S::Status>,
    ) -> impl Future<Output = Result<Envelope<S::Item>, ApiError>> + Send + use<S> {
        let source = Arc::clone(&self.source);
        let query = ticket.request.clone();
        async move { source.fetch(query).await }
    }

    /// Fetch `ticket` and apply the outcome.
    pub async fn run(&mut self, ticket: ListTicket<S::Status>) -> Resolution {
        let result = self.fetch(&ticket).await;
        self.resolve(&ticket, result)
    }

    /// Apply the outcome of `ticket` unless a newer request superseded it.
    pub fn resolve(
        &mut self,
        ticket: &ListTicket<S::Status>,
        result: Result<Envelope<S::Item>, ApiError>,
    ) -> Resolution {
        if !self.generation.is_current(ticket) {
            tracing::debug!(generation = ticket.generation(), "dropping stale listing response");
            return Resolution::Stale;
        }
        match result {
            Ok(envelope) => {
                let request = &ticket.request.page;
                // The backend already applied the filters; raw arrays are only paged.
                self.page = normalize_by(envelope, None, request.page, request.size, |_| {
                    Vec::new()
                });
                self.phase = ListPhase::Ready;
            }
            Err(error) => {
                self.phase = ListPhase::Error {
                    message: error.message().to_string(),
                };
            }
        }
        Resolution::Applied
    }

    fn issue(&mut self) -> ListTicket<S::Status> {
        self.phase = ListPhase::Loading;
        let ticket = self.generation.issue(self.query.clone());
        tracing::debug!(
            generation = ticket.generation(),
            search = ?ticket.request.search,
            status = ?ticket.request.status,
            page = ticket.request.page.page,
            "listing issued"
        );
        ticket
    }
}

// ── PGR ────────────────────────────────────────────────────────────

/// PGR list backed by `GET /pgrs`.
pub struct PgrListSource {
    client: Arc<SstClient>,
}

impl PgrListSource {
    #[must_use]
    pub const fn new(client: Arc<SstClient>) -> Self {
        Self { client }
    }
}

impl ListSource for PgrListSource {
    type Item = Pgr;
    type Status = PgrStatus;

    fn fetch(
        &self,
        query: ListQuery<PgrStatus>,
    ) -> impl Future<Output = Result<Envelope<Pgr>, ApiError>> + Send {
        let client = Arc::clone(&self.client);
        async move {
            let filter = PgrFilter {
                search: query.search,
                status: query.status,
                page: query.page,
            };
            client.list_pgrs(&filter).await
        }
    }
}
