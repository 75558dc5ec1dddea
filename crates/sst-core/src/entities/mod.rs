//! Remote resource records.
//!
//! Lookup tables (CID, CBO, médico, ...) always carry an `id`. Documents the
//! back office creates (CAT, PGR, LTIP, setor, unidade, risco) use
//! `Option<ResourceId>` so the same struct serves as the create payload.
//! Fields the toolkit does not interpret are kept in `extra` and written back
//! untouched.

mod agente_nocivo;
mod cat;
mod cbo;
mod cid;
mod ltip;
mod medico;
mod nr16;
mod parte_corpo;
mod pgr;
mod risco;
mod setor;
mod situacao_geradora;
mod unidade;

pub use agente_nocivo::AgenteNocivo;
pub use cat::Cat;
pub use cbo::Cbo;
pub use cid::Cid;
pub use ltip::Ltip;
pub use medico::Medico;
pub use nr16::Nr16Anexo;
pub use parte_corpo::ParteCorpo;
pub use pgr::Pgr;
pub use risco::Risco;
pub use setor::Setor;
pub use situacao_geradora::SituacaoGeradora;
pub use unidade::Unidade;

/// Push `value` onto `fields` when present and non-empty.
pub(crate) fn push_opt<'a>(fields: &mut Vec<&'a str>, value: Option<&'a str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        fields.push(value);
    }
}
