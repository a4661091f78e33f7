//! Mock Server State

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

/// What the mock endpoint answers with
#[derive(Clone, Debug)]
pub enum Reply {
    /// Fixed JSON body with status 200
    Answer(serde_json::Value),

    /// Demo answer derived from the incoming message
    Echo,

    /// Non-2xx status with a plain-text body
    Status { status: u16, body: String },

    /// Raw body served as `application/json`, valid or not
    Raw(String),
}

/// Query parameters of one received request, in arrival order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Value of the first `msg` parameter
    pub fn msg(&self) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == "msg")
            .map(|(_, value)| value.as_str())
    }
}

/// Shared mock state
#[derive(Clone, Debug)]
pub struct MockState {
    reply: Arc<RwLock<Reply>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockState {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply: Arc::new(RwLock::new(reply)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer with `body`
    pub fn answering(body: serde_json::Value) -> Self {
        Self::new(Reply::Answer(body))
    }

    /// Always fail with `status`
    pub fn failing(status: u16) -> Self {
        Self::new(Reply::Status {
            status,
            body: "mock failure".into(),
        })
    }

    /// Answer with demo payloads built from the message
    pub fn echo() -> Self {
        Self::new(Reply::Echo)
    }

    /// Change the reply for subsequent requests
    pub async fn set_reply(&self, reply: Reply) {
        *self.reply.write().await = reply;
    }

    pub async fn reply(&self) -> Reply {
        self.reply.read().await.clone()
    }

    pub async fn record(&self, request: RecordedRequest) {
        self.requests.lock().await.push(request);
    }

    /// Every request received so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}
