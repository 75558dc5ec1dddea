//! eSocial harmful agent lookup (table 24).

use sst_core::Sort;
use sst_core::entities::AgenteNocivo;

use crate::search::SearchEndpoint;

impl SearchEndpoint for AgenteNocivo {
    const PATH: &'static str = "/agentes-nocivos";
    const TERM_PARAM: &'static str = "codigo";
    const LABEL: &'static str = "Agente nocivo";

    fn default_sort() -> Option<Sort> {
        Some(Sort::asc("codigo"))
    }
}
