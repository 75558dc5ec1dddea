//! Search modal lifecycle against in-memory sources.

use std::future::Future;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use sst_client::ApiError;
use sst_core::entities::{Cid, Medico};
use sst_core::{Envelope, PagedBody, ResourceId, SearchItem, SearchRequest};
use sst_search::{Phase, Resolution, SearchError, SearchModal, SearchSource};

// ── Sources ────────────────────────────────────────────────────────

/// Answers every request with the whole médico table as a raw array.
struct MedicoTable {
    rows: Vec<Medico>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl MedicoTable {
    fn new(rows: Vec<Medico>) -> Arc<Self> {
        Arc::new(Self {
            rows,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SearchSource for MedicoTable {
    type Item = Medico;
    type Selected = SearchItem;

    fn title(&self) -> &str {
        "Médico"
    }

    fn fetch(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Envelope<Medico>, ApiError>> + Send {
        self.requests.lock().unwrap().push(request);
        let rows = self.rows.clone();
        async move { Ok(Envelope::Raw(rows)) }
    }

    fn select(&self, item: &Medico) -> SearchItem {
        sst_core::Searchable::to_search_item(item)
    }
}

/// Server-paged CID endpoint with 12 entries, 10 per page.
struct CidPages {
    requests: Mutex<Vec<SearchRequest>>,
}

impl SearchSource for CidPages {
    type Item = Cid;
    type Selected = String;

    fn title(&self) -> &str {
        "CID"
    }

    fn fetch(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Envelope<Cid>, ApiError>> + Send {
        let number = request.page.page;
        self.requests.lock().unwrap().push(request);
        let all: Vec<Cid> = (0..12).map(cid).collect();
        let content = all.into_iter().skip(number as usize * 10).take(10).collect();
        async move {
            Ok(Envelope::Paged(PagedBody {
                content,
                number,
                size: 10,
                total_pages: 2,
                total_elements: 12,
            }))
        }
    }

    fn select(&self, item: &Cid) -> String {
        item.codigo.clone()
    }
}

/// Fails every request.
struct Broken;

impl SearchSource for Broken {
    type Item = Cid;
    type Selected = SearchItem;

    fn title(&self) -> &str {
        "CID"
    }

    fn fetch(
        &self,
        _request: SearchRequest,
    ) -> impl Future<Output = Result<Envelope<Cid>, ApiError>> + Send {
        async {
            Err(ApiError::Status {
                status: 503,
                message: "Serviço indisponível".into(),
            })
        }
    }

    fn select(&self, item: &Cid) -> SearchItem {
        sst_core::Searchable::to_search_item(item)
    }
}

fn medico(n: u32, nome: &str, especialidade: &str) -> Medico {
    Medico {
        id: ResourceId::from(i64::from(n)),
        nome: nome.to_string(),
        crm: format!("{:05}", 10_000 + n),
        uf: Some("SP".into()),
        especialidade: Some(especialidade.to_string()),
    }
}

fn cid(n: u32) -> Cid {
    Cid {
        id: ResourceId::from(i64::from(n)),
        codigo: format!("S{n:02}"),
        descricao: format!("Lesão {n}"),
    }
}

fn medicos() -> Vec<Medico> {
    let mut rows: Vec<Medico> = (0..20)
        .map(|n| medico(n, &format!("Clínico {n}"), "Clínica geral"))
        .collect();
    rows.push(medico(20, "Ana CARDIOSO", "Clínica geral"));
    rows.push(medico(21, "Bruno Cardiologista", "Cardiologia"));
    rows.push(medico(22, "Carla Prado", "Ortopedia"));
    rows
}

// ── Médico scenario ────────────────────────────────────────────────

#[tokio::test]
async fn opening_shows_all_medicos_ten_per_page() {
    let source = MedicoTable::new(medicos());
    let mut modal = SearchModal::new(Arc::clone(&source), 10);

    let ticket = modal.open();
    assert_eq!(modal.phase(), &Phase::Loading);
    assert_eq!(modal.run(ticket).await, Resolution::Applied);

    assert_eq!(modal.phase(), &Phase::Results);
    assert_eq!(modal.page().content.len(), 10);
    assert_eq!(modal.page().total_elements, 23);
    assert_eq!(modal.pagination_label(), "Página 1 de 3");
    assert_eq!(source.requests()[0].effective_term(), None);
}

#[tokio::test]
async fn submitting_filters_by_name_case_insensitively_and_resets_page() {
    let source = MedicoTable::new(medicos());
    let mut modal = SearchModal::new(Arc::clone(&source), 10);
    let ticket = modal.open();
    modal.run(ticket).await;
    let ticket = modal.go_to_page(2).unwrap();
    modal.run(ticket).await;
    assert_eq!(modal.page().number, 2);

    let ticket = modal.submit("cardio").unwrap();
    assert_eq!(ticket.request.page.page, 0);
    modal.run(ticket).await;

    let names: Vec<&str> = modal.page().content.iter().map(|m| m.nome.as_str()).collect();
    assert_eq!(names, vec!["Ana CARDIOSO", "Bruno Cardiologista"]);
    assert_eq!(modal.page().number, 0);
    assert_eq!(modal.pagination_label(), "Página 1 de 1");
    assert_eq!(source.requests().last().unwrap().effective_term(), Some("cardio"));
}

#[tokio::test]
async fn filter_also_matches_crm() {
    let source = MedicoTable::new(medicos());
    let mut modal = SearchModal::new(source, 10);
    let ticket = modal.open();
    modal.run(ticket).await;

    let ticket = modal.submit("10022").unwrap();
    modal.run(ticket).await;

    assert_eq!(modal.page().content.len(), 1);
    assert_eq!(modal.page().content[0].nome, "Carla Prado");
}

#[tokio::test]
async fn rows_highlight_the_submitted_term() {
    let source = MedicoTable::new(medicos());
    let mut modal = SearchModal::new(source, 10);
    let ticket = modal.open();
    modal.run(ticket).await;
    let ticket = modal.submit("CARDIO").unwrap();
    modal.run(ticket).await;

    let rows = modal.rows();
    let marked: Vec<String> = rows[1]
        .primary
        .iter()
        .filter(|s| s.matched)
        .map(|s| s.text.clone())
        .collect();
    assert_eq!(marked, vec!["Cardio"]);
    assert_eq!(rows[1].secondary.as_ref().unwrap().len(), 2);
}

#[tokio::test]
async fn explicit_search_without_matches_is_empty_not_idle() {
    let source = MedicoTable::new(Vec::new());
    let mut modal = SearchModal::new(Arc::clone(&source), 10);

    let ticket = modal.open();
    modal.run(ticket).await;
    assert_eq!(modal.phase(), &Phase::Idle);

    let ticket = modal.submit("ninguém").unwrap();
    modal.run(ticket).await;
    assert_eq!(modal.phase(), &Phase::Empty);
    assert_eq!(modal.pagination_label(), "Página 1 de 1");
}

// ── CID scenario ───────────────────────────────────────────────────

#[tokio::test]
async fn server_page_is_shown_as_given_and_next_replaces_it() {
    let source = Arc::new(CidPages {
        requests: Mutex::new(Vec::new()),
    });
    let mut modal = SearchModal::new(Arc::clone(&source), 10);

    let ticket = modal.open();
    modal.run(ticket).await;
    assert_eq!(modal.page().content.len(), 10);
    assert_eq!(modal.pagination_label(), "Página 1 de 2");
    assert!(modal.has_next());
    assert!(!modal.has_previous());

    let ticket = modal.next_page().unwrap();
    assert_eq!(ticket.request.page.page, 1);
    modal.run(ticket).await;

    let codes: Vec<&str> = modal.page().content.iter().map(|c| c.codigo.as_str()).collect();
    assert_eq!(codes, vec!["S10", "S11"]);
    assert_eq!(modal.pagination_label(), "Página 2 de 2");
    assert_eq!(
        modal.next_page().unwrap_err(),
        SearchError::PageOutOfRange {
            requested: 2,
            total: 2
        }
    );
    assert_eq!(source.requests.lock().unwrap().len(), 2);
}

// ── Selection ──────────────────────────────────────────────────────

#[tokio::test]
async fn selecting_invokes_callback_once_and_closes() {
    let source = Arc::new(CidPages {
        requests: Mutex::new(Vec::new()),
    });
    let mut modal = SearchModal::new(source, 10);
    let ticket = modal.open();
    modal.run(ticket).await;

    let mut picked = Vec::new();
    modal.select(3, |code| picked.push(code)).unwrap();

    assert_eq!(picked, vec!["S03".to_string()]);
    assert_eq!(modal.phase(), &Phase::Closed);

    let err = modal.select(3, |code| picked.push(code)).unwrap_err();
    assert_eq!(err, SearchError::Closed);
    assert_eq!(picked.len(), 1);
}

#[tokio::test]
async fn out_of_range_selection_emits_nothing() {
    let source = Arc::new(CidPages {
        requests: Mutex::new(Vec::new()),
    });
    let mut modal = SearchModal::new(source, 10);
    let ticket = modal.open();
    modal.run(ticket).await;

    let mut calls = 0;
    let err = modal.select(10, |_| calls += 1).unwrap_err();

    assert_eq!(err, SearchError::NoSuchRow { index: 10, len: 10 });
    assert_eq!(calls, 0);
    assert!(modal.is_open());
}

#[tokio::test]
async fn selection_is_refused_while_loading() {
    let source = Arc::new(CidPages {
        requests: Mutex::new(Vec::new()),
    });
    let mut modal = SearchModal::new(source, 10);
    let ticket = modal.open();
    modal.run(ticket).await;
    let _pending = modal.submit("S0").unwrap();

    assert_eq!(
        modal.select(0, |_| panic!("must not be called")),
        Err(SearchError::NotSelectable)
    );
}

// ── Staleness, errors, retry ───────────────────────────────────────

#[tokio::test]
async fn late_response_to_superseded_request_is_dropped() {
    let source = MedicoTable::new(medicos());
    let mut modal = SearchModal::new(Arc::clone(&source), 10);

    let first = modal.open();
    let second = modal.submit("prado").unwrap();
    let first_result = modal.fetch(&first).await;
    let second_result = modal.fetch(&second).await;

    assert_eq!(modal.resolve(&second, second_result), Resolution::Applied);
    assert_eq!(modal.resolve(&first, first_result), Resolution::Stale);

    assert_eq!(modal.page().content.len(), 1);
    assert_eq!(modal.page().content[0].nome, "Carla Prado");
}

#[tokio::test]
async fn closing_drops_in_flight_response() {
    let source = MedicoTable::new(medicos());
    let mut modal = SearchModal::new(source, 10);

    let ticket = modal.open();
    let result = modal.fetch(&ticket).await;
    modal.close();

    assert_eq!(modal.resolve(&ticket, result), Resolution::Stale);
    assert_eq!(modal.phase(), &Phase::Closed);
}

#[tokio::test]
async fn failure_sets_error_phase_and_retry_repeats_request() {
    let mut modal = SearchModal::new(Arc::new(Broken), 10);
    let _ = modal.open();
    let ticket = modal.submit("fratura").unwrap();
    let issued = ticket.request.clone();
    modal.run(ticket).await;

    assert_eq!(
        modal.phase(),
        &Phase::Error {
            message: "Serviço indisponível".into()
        }
    );

    let retried = modal.retry().unwrap();
    assert_eq!(retried.request, issued);
    assert_eq!(modal.phase(), &Phase::Loading);
}

#[test]
fn retry_on_closed_modal_is_refused() {
    let mut modal = SearchModal::new(Arc::new(Broken), 10);
    assert_eq!(modal.retry().unwrap_err(), SearchError::Closed);
}
