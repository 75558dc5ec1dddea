//! The uniform row shape search widgets display and hand back on selection.

use serde::{Deserialize, Serialize};

use crate::id::ResourceId;

/// A search result reduced to what a picker needs to show and return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub id: ResourceId,
    pub primary_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Resources that can be listed in a search-and-select widget.
pub trait Searchable {
    /// Text fields matched by the client-side filter, in display priority.
    fn search_fields(&self) -> Vec<&str>;

    /// Reduce the record to a displayable row.
    fn to_search_item(&self) -> SearchItem;
}
