use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::PgrStatus;
use crate::id::ResourceId;

/// A risk-management program document for a company unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pgr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub titulo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidade_id: Option<ResourceId>,
    pub status: PgrStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsavel: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pgr {
    /// Whether `date` falls inside the validity window. Open ends are unbounded.
    #[must_use]
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.data_inicio.is_none_or(|start| start <= date)
            && self.data_fim.is_none_or(|end| date <= end)
    }
}
