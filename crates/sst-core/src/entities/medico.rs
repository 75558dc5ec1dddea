use serde::{Deserialize, Serialize};

use super::push_opt;
use crate::id::ResourceId;
use crate::item::{SearchItem, Searchable};

/// A medical provider who can sign a CAT certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medico {
    pub id: ResourceId,
    pub nome: String,
    /// Regional medical council registration.
    pub crm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub especialidade: Option<String>,
}

impl Searchable for Medico {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.nome.as_str(), self.crm.as_str()]
    }

    fn to_search_item(&self) -> SearchItem {
        let mut secondary = Vec::new();
        push_opt(&mut secondary, self.especialidade.as_deref());
        push_opt(&mut secondary, self.uf.as_deref());
        SearchItem {
            id: self.id.clone(),
            primary_label: self.nome.clone(),
            secondary_label: (!secondary.is_empty()).then(|| secondary.join(" / ")),
            code: Some(self.crm.clone()),
        }
    }
}
