//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::client::ChatworkClient;
use crate::error::{Error, Result};
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Records every request and replays queued responses in order.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<TransportRequest>>>,
    responses: Arc<Mutex<VecDeque<TransportResponse>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, response: TransportResponse) {
        self.responses.lock().push_back(response);
    }

    pub(crate) fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn last(&self) -> TransportRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| Error::Transport("connection refused".to_string()))
    }
}

pub(crate) fn json_response(body: &str) -> TransportResponse {
    TransportResponse::new(200, body)
}

/// A client on the default base URL wired to a fresh recording transport.
pub(crate) fn client_with(
    responses: Vec<TransportResponse>,
) -> (ChatworkClient, RecordingTransport) {
    let transport = RecordingTransport::new();
    for response in responses {
        transport.push(response);
    }
    let client = ChatworkClient::builder()
        .token("test-token")
        .transport(transport.clone())
        .build()
        .expect("client builds");
    (client, transport)
}
