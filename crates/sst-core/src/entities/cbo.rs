use serde::{Deserialize, Serialize};

use crate::id::ResourceId;
use crate::item::{SearchItem, Searchable};

/// A Brazilian occupation code (CBO).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cbo {
    pub id: ResourceId,
    pub codigo: String,
    pub titulo: String,
}

impl Searchable for Cbo {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.codigo.as_str(), self.titulo.as_str()]
    }

    fn to_search_item(&self) -> SearchItem {
        SearchItem {
            id: self.id.clone(),
            primary_label: self.titulo.clone(),
            secondary_label: None,
            code: Some(self.codigo.clone()),
        }
    }
}
