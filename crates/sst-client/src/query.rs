//! Query string assembly.

use std::fmt::Display;

use sst_core::{PageRequest, Sort};

/// Ordered list of query parameters. Blank values are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` unless the rendered value is blank.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            self.pairs.push((key.to_string(), trimmed.to_string()));
        }
        self
    }

    /// Add `key=value` when `value` is present and not blank.
    #[must_use]
    pub fn opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Add `page`, `size` and, when set, `sort`.
    #[must_use]
    pub fn page(self, page: &PageRequest) -> Self {
        self.param("page", page.page)
            .param("size", page.size)
            .opt("sort", page.sort.as_ref())
    }

    /// Like [`Self::page`], using `default_sort` when the request has none.
    #[must_use]
    pub fn page_or_sort(self, page: &PageRequest, default_sort: Option<Sort>) -> Self {
        let sort = page.sort.clone().or(default_sort);
        self.param("page", page.page)
            .param("size", page.size)
            .opt("sort", sort)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as `?k=v&...`, or an empty string when there are no parameters.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}
