//! # sst-search
//!
//! Front-end controllers for the SST admin toolkit, free of any rendering.
//!
//! - [`mod@normalize`]: one canonical [`sst_core::Page`] from any list response
//! - [`mod@highlight`]: case-insensitive match segments for result rows
//! - [`modal::SearchModal`]: the search-and-select lifecycle shared by every
//!   lookup, driven through a [`source::SearchSource`]
//! - [`listing::Listing`]: paged document lists with filters and sort
//! - [`debounce::Debouncer`]: quiet-period delivery for filter input
//!
//! Controllers never cancel requests. Each request carries a
//! [`ticket::Ticket`]; responses to superseded tickets are dropped.

pub mod debounce;
pub mod highlight;
pub mod listing;
pub mod modal;
pub mod normalize;
pub mod source;
pub mod ticket;

mod error;

pub use debounce::Debouncer;
pub use error::SearchError;
pub use highlight::{Segment, contains_ignore_case, highlight};
pub use listing::{ListPhase, ListQuery, ListSource, Listing, PgrListSource};
pub use modal::{HighlightedRow, Phase, SearchModal, SearchTicket};
pub use normalize::{matches_term, normalize, normalize_by};
pub use source::{ClientSource, SearchSource};
pub use ticket::{Resolution, Ticket};
