use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::CatTipo;
use crate::id::ResourceId;

/// A workplace accident report (Comunicação de Acidente de Trabalho).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    pub tipo: CatTipo,
    pub nome_acidentado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_acidente: Option<NaiveDate>,
    /// Local time of the accident, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hora_acidente: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid_codigo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parte_corpo_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situacao_geradora_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medico_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setor_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
