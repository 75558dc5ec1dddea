use serde::{Deserialize, Serialize};

use crate::id::ResourceId;

/// An operating unit (establishment) of the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unidade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(default = "default_true")]
    pub ativo: bool,
}

const fn default_true() -> bool {
    true
}
