//! Status and type enums with their backend wire representation.
//!
//! The backend serializes enums as `SCREAMING_SNAKE_CASE` constants. Each enum
//! exposes `as_str()` for query parameters and parses case-insensitively from
//! CLI input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation used in payloads and query strings.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == normalized)
                    .ok_or_else(|| CoreError::InvalidEnum {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str().to_ascii_lowercase())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

wire_enum! {
    /// Lifecycle of a PGR document.
    ///
    /// ```text
    /// rascunho → vigente → vencido
    ///          ↘         ↘
    ///            arquivado
    /// ```
    PgrStatus, "PGR status" {
        Rascunho => "RASCUNHO",
        Vigente => "VIGENTE",
        Vencido => "VENCIDO",
        Arquivado => "ARQUIVADO",
    }
}

impl PgrStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Rascunho => &[Self::Vigente, Self::Arquivado],
            Self::Vigente => &[Self::Vencido, Self::Arquivado],
            Self::Vencido => &[Self::Arquivado],
            Self::Arquivado => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }
}

wire_enum! {
    /// Kind of CAT being filed.
    CatTipo, "CAT type" {
        Inicial => "INICIAL",
        Reabertura => "REABERTURA",
        ComunicacaoObito => "COMUNICACAO_OBITO",
    }
}

wire_enum! {
    /// Risk group of an occupational hazard.
    RiscoTipo, "risk type" {
        Fisico => "FISICO",
        Quimico => "QUIMICO",
        Biologico => "BIOLOGICO",
        Ergonomico => "ERGONOMICO",
        Acidente => "ACIDENTE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_as_wire_constant() {
        assert_eq!(
            serde_json::to_string(&CatTipo::ComunicacaoObito).unwrap(),
            r#""COMUNICACAO_OBITO""#
        );
        let parsed: PgrStatus = serde_json::from_str(r#""VIGENTE""#).unwrap();
        assert_eq!(parsed, PgrStatus::Vigente);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("vigente".parse::<PgrStatus>().unwrap(), PgrStatus::Vigente);
        assert_eq!(
            "comunicacao-obito".parse::<CatTipo>().unwrap(),
            CatTipo::ComunicacaoObito
        );
        assert_eq!(" Quimico ".parse::<RiscoTipo>().unwrap(), RiscoTipo::Quimico);
    }

    #[test]
    fn rejects_unknown_values_with_expected_list() {
        let err = "draft".parse::<PgrStatus>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid PGR status: 'draft' (expected one of: rascunho, vigente, vencido, arquivado)"
        );
    }

    #[test]
    fn pgr_status_transitions() {
        assert!(PgrStatus::Rascunho.can_transition_to(PgrStatus::Vigente));
        assert!(!PgrStatus::Vencido.can_transition_to(PgrStatus::Vigente));
        assert!(PgrStatus::Arquivado.allowed_next_states().is_empty());
    }
}
