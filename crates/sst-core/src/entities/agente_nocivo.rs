use serde::{Deserialize, Serialize};

use super::push_opt;
use crate::id::ResourceId;
use crate::item::{SearchItem, Searchable};

/// A harmful agent from eSocial table 24.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgenteNocivo {
    pub id: ResourceId,
    pub codigo: String,
    pub descricao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grupo: Option<String>,
}

impl Searchable for AgenteNocivo {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.codigo.as_str(), self.descricao.as_str()];
        push_opt(&mut fields, self.grupo.as_deref());
        fields
    }

    fn to_search_item(&self) -> SearchItem {
        SearchItem {
            id: self.id.clone(),
            primary_label: self.descricao.clone(),
            secondary_label: self.grupo.clone(),
            code: Some(self.codigo.clone()),
        }
    }
}
