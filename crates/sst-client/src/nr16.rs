//! NR-16 annex lookup (hazardous activities).

use sst_core::Sort;
use sst_core::entities::Nr16Anexo;

use crate::search::SearchEndpoint;

impl SearchEndpoint for Nr16Anexo {
    const PATH: &'static str = "/nr16/anexos";
    const TERM_PARAM: &'static str = "descricao";
    const LABEL: &'static str = "Anexo NR-16";

    fn default_sort() -> Option<Sort> {
        Some(Sort::asc("numero"))
    }
}
