use serde::{Deserialize, Serialize};

use crate::id::ResourceId;
use crate::item::{SearchItem, Searchable};

/// An ICD-10 (CID-10) disease classification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cid {
    pub id: ResourceId,
    pub codigo: String,
    pub descricao: String,
}

impl Searchable for Cid {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.codigo.as_str(), self.descricao.as_str()]
    }

    fn to_search_item(&self) -> SearchItem {
        SearchItem {
            id: self.id.clone(),
            primary_label: self.descricao.clone(),
            secondary_label: None,
            code: Some(self.codigo.clone()),
        }
    }
}
