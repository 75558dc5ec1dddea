//! Search-and-select modal.
//!
//! One generic controller serves every lookup (CID, médico, CBO, ...). It is
//! I/O-free: each operation that needs rows returns a [`Ticket`], the caller
//! fetches it (directly with [`SearchModal::run`] or concurrently through
//! [`SearchModal::fetch`]) and hands the outcome back to
//! [`SearchModal::resolve`]. Only the most recently issued ticket is applied.
//!
//! ```text
//! Closed ──open──▶ Loading ──resolve──▶ Results | Empty | Idle | Error
//!                     ▲                    │
//!                     └─ submit / page / retry
//! Results ──select──▶ Closed
//! ```

use std::future::Future;
use std::sync::Arc;

use sst_client::ApiError;
use sst_core::{Envelope, Page, PageRequest, SearchItem, SearchRequest, Searchable};

use crate::error::SearchError;
use crate::highlight::{Segment, highlight};
use crate::normalize::normalize;
use crate::source::SearchSource;
use crate::ticket::{Generation, Resolution, Ticket};

/// Where the modal is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Loading,
    /// Resolved with no rows before anything was explicitly searched.
    Idle,
    Results,
    /// An explicit search matched nothing.
    Empty,
    Error {
        message: String,
    },
}

/// A result row prepared for display, with the search term marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedRow {
    pub item: SearchItem,
    pub primary: Vec<Segment>,
    pub secondary: Option<Vec<Segment>>,
    pub code: Option<Vec<Segment>>,
}

pub type SearchTicket = Ticket<SearchRequest>;

/// Generic search-and-select controller over a [`SearchSource`].
pub struct SearchModal<S: SearchSource> {
    source: Arc<S>,
    page_size: u32,
    phase: Phase,
    generation: Generation,
    /// Term and page of the most recent request, used by `retry`.
    current: Option<SearchRequest>,
    /// Whether the user explicitly submitted a search since opening.
    searched: bool,
    page: Page<S::Item>,
}

impl<S: SearchSource> SearchModal<S> {
    #[must_use]
    pub fn new(source: Arc<S>, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        Self {
            source,
            page_size,
            phase: Phase::Closed,
            generation: Generation::default(),
            current: None,
            searched: false,
            page: Page::empty(page_size),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.source.title()
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    #[must_use]
    pub const fn page(&self) -> &Page<S::Item> {
        &self.page
    }

    /// The term the visible rows were searched with.
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        self.current.as_ref().and_then(SearchRequest::effective_term)
    }

    /// `Página X de Y` for the visible page.
    #[must_use]
    pub fn pagination_label(&self) -> String {
        self.page.label()
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page.has_next()
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page.has_previous()
    }

    /// Open with no search term on the first page.
    pub fn open(&mut self) -> SearchTicket {
        self.searched = false;
        self.page = Page::empty(self.page_size);
        self.issue(SearchRequest::new(None, PageRequest::new(0, self.page_size)))
    }

    /// Close without selecting. Responses still in flight are dropped.
    pub fn close(&mut self) {
        self.generation.invalidate();
        self.phase = Phase::Closed;
        self.current = None;
    }

    /// Search for `term`, starting again from the first page.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Closed`] when the modal is not open.
    pub fn submit(&mut self, term: &str) -> Result<SearchTicket, SearchError> {
        self.ensure_open()?;
        self.searched = true;
        let term = term.trim();
        let term = (!term.is_empty()).then(|| term.to_string());
        Ok(self.issue(SearchRequest::new(
            term,
            PageRequest::new(0, self.page_size),
        )))
    }

    /// Request page `number` (0-based) of the current search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Closed`] when the modal is not open, or
    /// [`SearchError::PageOutOfRange`] when the page does not exist.
    pub fn go_to_page(&mut self, number: u32) -> Result<SearchTicket, SearchError> {
        self.ensure_open()?;
        let total = self.page.total_pages;
        if number > 0 && number >= total {
            return Err(SearchError::PageOutOfRange {
                requested: number,
                total,
            });
        }
        let term = self.current.as_ref().and_then(|r| r.term.clone());
        Ok(self.issue(SearchRequest::new(
            term,
            PageRequest::new(number, self.page_size),
        )))
    }

    /// Request the page after the visible one.
    ///
    /// # Errors
    ///
    /// See [`Self::go_to_page`].
    pub fn next_page(&mut self) -> Result<SearchTicket, SearchError> {
        self.go_to_page(self.page.number.saturating_add(1))
    }

    /// Request the page before the visible one.
    ///
    /// # Errors
    ///
    /// See [`Self::go_to_page`]; also fails on the first page.
    pub fn previous_page(&mut self) -> Result<SearchTicket, SearchError> {
        self.ensure_open()?;
        match self.page.number.checked_sub(1) {
            Some(number) => self.go_to_page(number),
            None => Err(SearchError::PageOutOfRange {
                requested: 0,
                total: self.page.total_pages,
            }),
        }
    }

    /// Re-issue the identical request of the last ticket.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Closed`] when the modal is not open, or
    /// [`SearchError::NothingToRetry`] if nothing was requested yet.
    pub fn retry(&mut self) -> Result<SearchTicket, SearchError> {
        self.ensure_open()?;
        let request = self.current.clone().ok_or(SearchError::NothingToRetry)?;
        Ok(self.issue(request))
    }

    /// Future that fetches the rows for `ticket`.
    ///
    /// Owns everything it needs, so several can be in flight while the modal
    /// keeps accepting operations.
    pub fn fetch(
        &self,
        ticket: &SearchTicket,
    ) -> impl Future<Output = Result<Envelope<S::Item>, ApiError>> + Send + use<S> {
        let source = Arc::clone(&self.source);
        let request = ticket.request.clone();
        async move { source.fetch(request).await }
    }

    /// Fetch `ticket` and apply the outcome.
    pub async fn run(&mut self, ticket: SearchTicket) -> Resolution {
        let result = self.fetch(&ticket).await;
        self.resolve(&ticket, result)
    }

    /// Apply the outcome of `ticket` unless a newer request superseded it.
    ///
    /// Failures have already been notified by the transport; here they only
    /// set the local error phase.
    pub fn resolve(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Envelope<S::Item>, ApiError>,
    ) -> Resolution {
        if !self.generation.is_current(ticket) {
            tracing::debug!(
                source = self.source.title(),
                generation = ticket.generation(),
                "dropping stale search response"
            );
            return Resolution::Stale;
        }

        match result {
            Ok(envelope) => {
                let request = &ticket.request;
                self.page = normalize(
                    envelope,
                    request.effective_term(),
                    request.page.page,
                    self.page_size,
                );
                self.phase = if !self.page.is_empty() {
                    Phase::Results
                } else if self.searched {
                    Phase::Empty
                } else {
                    Phase::Idle
                };
            }
            Err(error) => {
                self.page = Page::empty(self.page_size);
                self.phase = Phase::Error {
                    message: error.message().to_string(),
                };
            }
        }
        Resolution::Applied
    }

    /// Pick row `index` of the visible page.
    ///
    /// Invokes `on_select` exactly once with the mapped row and closes the
    /// modal. On error the callback is not invoked and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Closed`] when the modal is closed,
    /// [`SearchError::NotSelectable`] outside the results phase, or
    /// [`SearchError::NoSuchRow`] for an out-of-range index.
    pub fn select<F>(&mut self, index: usize, on_select: F) -> Result<(), SearchError>
    where
        F: FnOnce(S::Selected),
    {
        self.ensure_open()?;
        if self.phase != Phase::Results {
            return Err(SearchError::NotSelectable);
        }
        let item = self.page.content.get(index).ok_or(SearchError::NoSuchRow {
            index,
            len: self.page.content.len(),
        })?;
        let selected = self.source.select(item);
        self.close();
        on_select(selected);
        Ok(())
    }

    /// Visible rows with the current term highlighted.
    #[must_use]
    pub fn rows(&self) -> Vec<HighlightedRow> {
        let term = self.term().unwrap_or_default();
        self.page
            .content
            .iter()
            .map(|row| {
                let item = row.to_search_item();
                HighlightedRow {
                    primary: highlight(&item.primary_label, term),
                    secondary: item.secondary_label.as_deref().map(|s| highlight(s, term)),
                    code: item.code.as_deref().map(|s| highlight(s, term)),
                    item,
                }
            })
            .collect()
    }

    fn issue(&mut self, request: SearchRequest) -> SearchTicket {
        self.phase = Phase::Loading;
        self.current = Some(request.clone());
        let ticket = self.generation.issue(request);
        tracing::debug!(
            source = self.source.title(),
            generation = ticket.generation(),
            term = ?ticket.request.effective_term(),
            page = ticket.request.page.page,
            "search issued"
        );
        ticket
    }

    const fn ensure_open(&self) -> Result<(), SearchError> {
        if matches!(self.phase, Phase::Closed) {
            Err(SearchError::Closed)
        } else {
            Ok(())
        }
    }
}
