use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::ResourceId;

/// An LTIP technical report on unhealthy and hazardous conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ltip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub titulo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidade_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setor_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_emissao: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsavel_tecnico: Option<String>,
    /// NR-16 annexes that apply to the assessed activities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anexos_nr16: Vec<ResourceId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
