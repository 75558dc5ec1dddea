use serde::{Deserialize, Serialize};

use super::push_opt;
use crate::id::ResourceId;
use crate::item::{SearchItem, Searchable};

/// An annex of the NR-16 regulation (hazardous activities).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nr16Anexo {
    pub id: ResourceId,
    pub numero: String,
    pub titulo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

impl Searchable for Nr16Anexo {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.numero.as_str(), self.titulo.as_str()];
        push_opt(&mut fields, self.descricao.as_deref());
        fields
    }

    fn to_search_item(&self) -> SearchItem {
        SearchItem {
            id: self.id.clone(),
            primary_label: self.titulo.clone(),
            secondary_label: self.descricao.clone(),
            code: Some(self.numero.clone()),
        }
    }
}
