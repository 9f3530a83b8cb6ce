//! Shared test doubles: scripted transport and recording navigator.

use std::sync::{Arc, Mutex};

use crate::context::SessionContext;
use crate::routes::Navigator;
use crate::store::{MemoryStore, StorageKey};
use crate::transport::{HttpError, HttpRequest, HttpResponse, Transport};

/// Transport answering from a queue and remembering what it was sent.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self { responses: Mutex::new(responses), requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(HttpResponse { status: 204, body: serde_json::Value::Null })
        } else {
            responses.remove(0)
        }
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub(crate) fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

pub(crate) fn ok(status: u16, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse { status, body })
}

pub(crate) fn status_err(status: u16) -> Result<HttpResponse, HttpError> {
    Err(HttpError::Status { status, message: format!("HTTP {status}") })
}

pub(crate) fn session_with(entries: &[(StorageKey, &str)]) -> (Arc<MemoryStore>, SessionContext) {
    let store = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
    let ctx = SessionContext::new(store.clone());
    (store, ctx)
}
