use serde::{Deserialize, Serialize};

use super::AgenteNocivo;
use crate::enums::RiscoTipo;
use crate::id::ResourceId;

/// A risk identified in a PGR inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risco {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub descricao: String,
    pub tipo: RiscoTipo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonte_geradora: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agente_nocivo: Option<AgenteNocivo>,
    /// Probability rating, 1 (rare) to 5 (almost certain).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilidade: Option<u8>,
    /// Severity rating, 1 (negligible) to 5 (catastrophic).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severidade: Option<u8>,
}

impl Risco {
    /// Probability × severity, when both ratings are present.
    #[must_use]
    pub fn nivel(&self) -> Option<u8> {
        Some(self.probabilidade?.saturating_mul(self.severidade?))
    }
}
