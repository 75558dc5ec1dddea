//! Paged results and the response envelope they are normalized from.
//!
//! The backend answers list endpoints in one of two shapes: a Spring-style
//! page object (`content`, `number`, `totalPages`, `totalElements`, ...) or a
//! bare JSON array holding the whole result set. [`Envelope`] captures both
//! (plus the degenerate "anything else" case) so callers never inspect raw
//! JSON; `sst-search` turns an envelope into one canonical [`Page`].

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Rows per page when neither the caller nor configuration says otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ── Page ───────────────────────────────────────────────────────────

/// One page of a result set with its position metadata.
///
/// `number` is 0-based. When `total_elements > 0`, `number < total_pages`
/// and `content.len() <= size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// A page with no rows and no further pages.
    #[must_use]
    pub const fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size,
            total_pages: 0,
            total_elements: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether a page after this one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    /// Whether a page before this one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 0
    }

    /// Human-facing position label, 1-based: `Página 1 de 2`.
    ///
    /// An empty result reads `Página 1 de 1` so the control never shows a
    /// zero page.
    #[must_use]
    pub fn label(&self) -> String {
        let total = self.total_pages.max(1);
        let current = self.number.saturating_add(1).min(total);
        format!("Página {current} de {total}")
    }

    /// Transform the rows while keeping the position metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
        }
    }
}

// ── Envelope ───────────────────────────────────────────────────────

/// Metadata and rows of a server-side paginated body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedBody<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

/// A list response in whichever shape the endpoint chose to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<T> {
    /// Already paginated by the server.
    Paged(PagedBody<T>),
    /// The complete, unpaginated result set.
    Raw(Vec<T>),
    /// No usable body (`null`, a scalar, or an object without `content`).
    Empty,
}

impl<T> Envelope<T> {
    /// Number of rows carried by this envelope before any client-side work.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Paged(body) => body.content.len(),
            Self::Raw(items) => items.len(),
            Self::Empty => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Classify and decode an arbitrary JSON body.
    ///
    /// Missing page metadata defaults to 0 (`size` defaults to the content
    /// length). Rows that fail to decode as `T` fail the whole envelope.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when a row does not match
    /// the shape of `T`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => Ok(Self::Raw(decode_rows(items)?)),
            Value::Object(mut map) => match map.remove("content") {
                Some(Value::Array(items)) => {
                    let content = decode_rows(items)?;
                    let fallback_size = u32::try_from(content.len()).unwrap_or(u32::MAX);
                    Ok(Self::Paged(PagedBody {
                        number: read_u32(&map, "number").unwrap_or(0),
                        size: read_u32(&map, "size").unwrap_or(fallback_size),
                        total_pages: read_u32(&map, "totalPages").unwrap_or(0),
                        total_elements: map
                            .get("totalElements")
                            .and_then(Value::as_u64)
                            .unwrap_or(0),
                        content,
                    }))
                }
                _ => Ok(Self::Empty),
            },
            _ => Ok(Self::Empty),
        }
    }
}

fn decode_rows<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, serde_json::Error> {
    items.into_iter().map(serde_json::from_value).collect()
}

fn read_u32(map: &Map<String, Value>, key: &str) -> Option<u32> {
    map.get(key)
        .and_then(Value::as_u64)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

// ── Requests ───────────────────────────────────────────────────────

/// Sort direction of a `sort=field,direction` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A single sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction.as_str())
    }
}

impl FromStr for Sort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, dir)) => {
                let direction = match dir.trim().to_ascii_lowercase().as_str() {
                    "asc" => SortDirection::Asc,
                    "desc" => SortDirection::Desc,
                    _ => return Err(CoreError::InvalidSort(s.to_string())),
                };
                (field.trim(), direction)
            }
            None => (s.trim(), SortDirection::Asc),
        };
        if field.is_empty() {
            return Err(CoreError::InvalidSort(s.to_string()));
        }
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// Position and ordering of a page request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// 0-based page index.
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// A free-text search at a given page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search text; blank means "everything".
    pub term: Option<String>,
    pub page: PageRequest,
}

impl SearchRequest {
    #[must_use]
    pub fn new(term: Option<String>, page: PageRequest) -> Self {
        Self { term, page }
    }

    /// The trimmed term, or `None` when absent or blank.
    #[must_use]
    pub fn effective_term(&self) -> Option<&str> {
        self.term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}
