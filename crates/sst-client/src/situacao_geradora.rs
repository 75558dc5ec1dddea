use sst_core::Sort;
use sst_core::entities::SituacaoGeradora;

use crate::search::SearchEndpoint;

impl SearchEndpoint for SituacaoGeradora {
    const PATH: &'static str = "/situacoes-geradoras";
    const TERM_PARAM: &'static str = "descricao";
    const LABEL: &'static str = "Situação geradora";

    fn default_sort() -> Option<Sort> {
        Some(Sort::asc("descricao"))
    }
}
