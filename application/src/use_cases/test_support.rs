//! In-memory HTTP clients for use case tests.

use crate::ports::http_client::{ContentError, HttpClientPort, HttpRequest, HttpResponse};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Replays a fixed sequence of results and records every request it sees.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<HttpResponse, ContentError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<HttpResponse, ContentError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// One 200 response per page, each a JSON array of `n` stub records
    pub fn pages(sizes: &[usize]) -> Self {
        let mut next_id = 1;
        let responses = sizes
            .iter()
            .map(|&n| {
                let page: Vec<Value> = (0..n)
                    .map(|_| {
                        let record = json!({"id": next_id, "slug": format!("item-{}", next_id)});
                        next_id += 1;
                        record
                    })
                    .collect();
                Ok(HttpResponse::json(&Value::Array(page)))
            })
            .collect();
        Self::new(responses)
    }

    /// Append one more scripted result
    pub fn then(self, response: Result<HttpResponse, ContentError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClientPort for ScriptedClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ContentError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ContentError::Network("script exhausted".to_string())))
    }
}

/// Never answers within any reasonable timeout.
pub struct SlowClient {
    delay: Duration,
}

impl SlowClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl HttpClientPort for SlowClient {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ContentError> {
        tokio::time::sleep(self.delay).await;
        Ok(HttpResponse::new(200, "[]"))
    }
}
