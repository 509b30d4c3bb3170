//! Timed fetch and safe JSON decoding.
//!
//! These two functions are the only places where the transport and the
//! payload can fail; everything above them decides how to degrade.

use crate::ports::http_client::{ContentError, HttpClientPort, HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::{debug, trace};

/// Longest raw body excerpt written to the debug log on a parse failure
const LOGGED_BODY_LIMIT: usize = 500;

/// Send `request`, failing with [`ContentError::Timeout`] once
/// `request.timeout` elapses.
///
/// The in-flight request future is dropped on timeout, which aborts the
/// underlying connection.
pub async fn timed_fetch<C>(client: &C, request: HttpRequest) -> Result<HttpResponse, ContentError>
where
    C: HttpClientPort + ?Sized,
{
    let timeout = request.timeout;
    trace!("{}", request);

    match tokio::time::timeout(timeout, client.send(request)).await {
        Ok(result) => result,
        Err(_) => Err(ContentError::timeout(timeout)),
    }
}

/// Parse a response body as JSON.
///
/// Blank bodies fail with [`ContentError::EmptyResponse`] before parsing.
/// On a parse failure the raw body goes to the debug log only; the error
/// carries the parser message.
pub fn decode_json(response: &HttpResponse) -> Result<Value, ContentError> {
    let text = response.body.trim();
    if text.is_empty() {
        return Err(ContentError::EmptyResponse);
    }

    serde_json::from_str(text).map_err(|e| {
        let excerpt = gateway_domain::core::string::truncate_chars(text, LOGGED_BODY_LIMIT).0;
        debug!("Malformed JSON (status {}): {}", response.status, excerpt);
        ContentError::InvalidJson(e.to_string())
    })
}

/// [`timed_fetch`] then [`decode_json`], treating non-2xx as
/// [`ContentError::Status`]
pub async fn fetch_json<C>(client: &C, request: HttpRequest) -> Result<Value, ContentError>
where
    C: HttpClientPort + ?Sized,
{
    let response = timed_fetch(client, request).await?;
    if !response.is_success() {
        return Err(ContentError::Status(response.status));
    }
    decode_json(&response)
}
