//! Test doubles for the REST layer.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::api::ApiClient;
use super::error::TransportError;
use super::request::{ApiRequest, RawResponse};
use super::session::Session;
use super::transport::Transport;
use crate::util::navigation::Navigator;

/// Replays queued responses and records every request it was handed.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Result<RawResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<(String, ApiRequest)>>>,
}

impl MockTransport {
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse { status, body: body.as_bytes().to_vec() }));
        self
    }

    pub fn reply_bytes(&self, status: u16, body: Vec<u8>) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(RawResponse { status, body }));
        self
    }

    pub fn fail(&self, err: TransportError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }

    pub fn sent_urls(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(base, r)| r.url(base))
            .collect()
    }

    pub fn last(&self) -> ApiRequest {
        self.sent().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, base_url: &str, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.sent.lock().unwrap().push((base_url.to_owned(), request));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no mock reply queued".to_owned())))
    }
}

/// Records redirect targets instead of navigating.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

/// Client wired to fresh doubles and an in-memory session.
pub struct Harness {
    pub client: ApiClient<MockTransport>,
    pub transport: MockTransport,
    pub navigator: RecordingNavigator,
}

impl Harness {
    pub fn new() -> Self {
        let transport = MockTransport::default();
        let navigator = RecordingNavigator::default();
        let client = ApiClient::new(transport.clone(), Session::memory(), Arc::new(navigator.clone()))
            .with_base_url("/api");
        Self { client, transport, navigator }
    }

    pub fn logged_in(token: &str) -> Self {
        let harness = Self::new();
        harness.client.session().begin(token);
        harness
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }
}
