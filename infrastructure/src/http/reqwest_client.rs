//! `reqwest` implementation of [`HttpClientPort`]

use async_trait::async_trait;
use gateway_application::{ContentError, HttpClientPort, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

const USER_AGENT: &str = concat!("content-gateway/", env!("CARGO_PKG_VERSION"));

/// Sends gateway requests to `{base_url}{path}`.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestHttpClient {
    /// Build a client for the site at `base_url` (e.g. `https://uaedigital.ae`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ContentError::Network(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an existing `reqwest::Client`
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ContentError> {
        let url = self.url(&request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        }
        .header("Accept", "application/json")
        .timeout(request.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_error(e, &request))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_error(e, &request))?;

        debug!("{} -> HTTP {} ({} bytes)", request, status, body.len());
        Ok(HttpResponse::new(status, body))
    }
}

fn map_error(error: reqwest::Error, request: &HttpRequest) -> ContentError {
    if error.is_timeout() {
        ContentError::timeout(request.timeout)
    } else {
        ContentError::Network(error.to_string())
    }
}
