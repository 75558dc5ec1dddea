use sst_core::Sort;
use sst_core::entities::ParteCorpo;

use crate::search::SearchEndpoint;

impl SearchEndpoint for ParteCorpo {
    const PATH: &'static str = "/partes-corpo";
    const TERM_PARAM: &'static str = "descricao";
    const LABEL: &'static str = "Parte do corpo";

    fn default_sort() -> Option<Sort> {
        Some(Sort::asc("descricao"))
    }
}
