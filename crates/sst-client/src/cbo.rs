//! CBO occupation lookup.

use sst_core::Sort;
use sst_core::entities::Cbo;

use crate::search::SearchEndpoint;

impl SearchEndpoint for Cbo {
    const PATH: &'static str = "/cbos";
    const TERM_PARAM: &'static str = "termo";
    const LABEL: &'static str = "CBO";

    fn default_sort() -> Option<Sort> {
        Some(Sort::asc("codigo"))
    }
}
