//! In-process fake backend for transport and service tests.
//!
//! Serves canned responses in order (the last one repeats) and records every
//! request it receives.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use sst_client::{MemoryNotifier, SstClient, Transport};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl Canned {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string().into_bytes(),
            content_type: "application/json",
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            content_type: "text/plain",
        }
    }

    pub fn pdf(bytes: &[u8]) -> Self {
        Self {
            status: 200,
            body: bytes.to_vec(),
            content_type: "application/pdf",
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: Vec::new(),
            content_type: "text/plain",
        }
    }
}

pub struct FakeBackend {
    server: Arc<tiny_http::Server>,
    base_url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeBackend {
    pub fn start(responses: Vec<Canned>) -> Self {
        assert!(!responses.is_empty(), "at least one canned response");
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let recorded = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let recorded = Arc::clone(&recorded);
            std::thread::spawn(move || {
                for (served, mut request) in server.incoming_requests().enumerate() {
                    let mut body = Vec::new();
                    let _ = request.as_reader().read_to_end(&mut body);
                    recorded.lock().unwrap().push(Recorded {
                        method: request.method().to_string(),
                        url: request.url().to_string(),
                        headers: request
                            .headers()
                            .iter()
                            .map(|h| (h.field.to_string(), h.value.to_string()))
                            .collect(),
                        body,
                    });

                    let canned = &responses[served.min(responses.len() - 1)];
                    let response = tiny_http::Response::from_data(canned.body.clone())
                        .with_status_code(canned.status)
                        .with_header(
                            tiny_http::Header::from_bytes("Content-Type", canned.content_type)
                                .unwrap(),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base_url: format!("http://127.0.0.1:{port}/api"),
            recorded,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }

    /// Client wired to this backend with an in-memory notification sink.
    pub fn client(&self) -> (SstClient, Arc<MemoryNotifier>) {
        client_for(&self.base_url)
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn client_for(base_url: &str) -> (SstClient, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let transport = Transport::builder(base_url)
        .timeout(Duration::from_secs(5))
        .notifier(notifier.clone())
        .dismiss_after(Duration::from_millis(5000))
        .build()
        .unwrap();
    (SstClient::new(transport), notifier)
}

/// A base URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}
