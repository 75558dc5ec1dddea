use serde::{Deserialize, Serialize};

use super::push_opt;
use crate::id::ResourceId;
use crate::item::{SearchItem, Searchable};

/// Situation that caused an accident or disease (eSocial table 15).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SituacaoGeradora {
    pub id: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    pub descricao: String,
}

impl Searchable for SituacaoGeradora {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.descricao.as_str()];
        push_opt(&mut fields, self.codigo.as_deref());
        fields
    }

    fn to_search_item(&self) -> SearchItem {
        SearchItem {
            id: self.id.clone(),
            primary_label: self.descricao.clone(),
            secondary_label: None,
            code: self.codigo.clone(),
        }
    }
}
