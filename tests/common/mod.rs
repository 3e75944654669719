//! Shared test transport that records every request and replays a
//! canned response.

use std::sync::Mutex;

use serde_json::Value;
use toshi::transport::{Transport, TransportError};

/// One request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    PostForm {
        path: String,
        form: Vec<(String, String)>,
    },
    PostJson {
        path: String,
        body: Value,
    },
}

enum Reply {
    Body(Vec<u8>),
    Status(u16, String),
}

/// A [`Transport`] that never touches the network: it records each call
/// and answers every request with the same canned reply.
pub struct MockTransport {
    calls: Mutex<Vec<Recorded>>,
    reply: Reply,
}

impl MockTransport {
    /// Replies to every request with a 2xx body.
    pub fn replying(body: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Body(body.as_bytes().to_vec()),
        }
    }

    /// Fails every request with a non-2xx status.
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Status(status, body.to_string()),
        }
    }

    /// Returns a copy of every request seen so far, in order.
    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self) -> Result<Vec<u8>, TransportError> {
        match &self.reply {
            Reply::Body(bytes) => Ok(bytes.clone()),
            Reply::Status(status, body) => Err(TransportError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(Recorded::Get {
            path: path.to_string(),
            query: owned(query),
        });
        self.respond()
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(Recorded::PostForm {
            path: path.to_string(),
            form: owned(form),
        });
        self.respond()
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(Recorded::PostJson {
            path: path.to_string(),
            body: body.clone(),
        });
        self.respond()
    }
}

fn owned(pairs: &[(&str, String)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
