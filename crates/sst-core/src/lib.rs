//! # sst-core
//!
//! Core types shared by every SST admin crate.
//!
//! This crate provides:
//! - Entity structs for the remote resources (CAT, PGR, CID, CBO, médico,
//!   setor, unidade, LTIP, NR-16 anexo, risco, agente nocivo, parte do corpo,
//!   situação geradora)
//! - Status and type enums with their wire representation
//! - Opaque resource identifiers
//! - The canonical [`page::Page`] and the [`page::Envelope`] union the backend
//!   responses are decoded into
//! - The [`item::Searchable`] contract used by the search widgets
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod id;
pub mod item;
pub mod page;

pub use errors::CoreError;
pub use id::ResourceId;
pub use item::{SearchItem, Searchable};
pub use page::{
    DEFAULT_PAGE_SIZE, Envelope, Page, PageRequest, PagedBody, SearchRequest, Sort, SortDirection,
};
