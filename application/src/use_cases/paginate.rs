//! Paginated collection fetch.
//!
//! Walks `?per_page=N&page=1,2,...&_embed=1` strictly sequentially: whether
//! page `n + 1` is requested depends on how full page `n` was.
//!
//! # Termination (first match wins)
//!
//! | Condition | [`StopReason`] | Error? |
//! |-----------|----------------|--------|
//! | HTTP 400 on a page after the first | `PastLastPage` | no |
//! | any other non-2xx | `HttpStatus` | logged |
//! | transport or decode failure | `Failed` | logged |
//! | empty or non-array payload | `Exhausted` | no |
//! | enough items for the caller's limit | `LimitReached` | no |
//! | fewer items than `per_page` | `LastPage` | no |
//!
//! Whatever was accumulated before the stop is returned. A failed page is
//! never retried, and the run as a whole never fails.

use super::fetch::{decode_json, timed_fetch};
use crate::config::GatewayConfig;
use crate::ports::http_client::{HttpClientPort, HttpRequest};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use serde_json::Value;
use tracing::{debug, warn};

/// Why pagination stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// A page came back shorter than `per_page`
    LastPage,
    /// A page was empty or not an array
    Exhausted,
    /// The proxy answered 400 after the first page
    PastLastPage,
    /// The caller's limit was satisfied
    LimitReached,
    /// Non-2xx response (other than a 400 past the first page)
    HttpStatus(u16),
    /// Timeout, network failure, or undecodable body
    Failed(String),
}

impl StopReason {
    /// `true` when the collection may be incomplete because of an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::HttpStatus(_) | Self::Failed(_))
    }
}

/// Items accumulated by one pagination run, and how it ended
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRun {
    /// Raw records in server order across pages
    pub items: Vec<Value>,
    /// Number of HTTP requests made
    pub requests: u32,
    pub stop: StopReason,
}

impl CollectionRun {
    fn finish(collection: &str, items: Vec<Value>, requests: u32, stop: StopReason) -> Self {
        if stop.is_error() {
            warn!(
                "Fetching '{}' stopped early ({:?}); returning {} item(s) from {} request(s)",
                collection,
                stop,
                items.len(),
                requests
            );
        } else {
            debug!(
                "Fetched {} item(s) of '{}' in {} request(s) ({:?})",
                items.len(),
                collection,
                requests,
                stop
            );
        }
        Self {
            items,
            requests,
            stop,
        }
    }
}

/// Fetch every page of `collection`, or up to `limit` items.
pub async fn fetch_collection<C>(
    client: &C,
    config: &GatewayConfig,
    collection: &str,
    limit: Option<usize>,
) -> CollectionRun
where
    C: HttpClientPort + ?Sized,
{
    fetch_collection_with_progress(client, config, collection, limit, &NoProgress).await
}

/// [`fetch_collection`] with progress callbacks
pub async fn fetch_collection_with_progress<C>(
    client: &C,
    config: &GatewayConfig,
    collection: &str,
    limit: Option<usize>,
    progress: &dyn ProgressNotifier,
) -> CollectionRun
where
    C: HttpClientPort + ?Sized,
{
    progress.on_fetch_start(collection);
    let run = paginate(client, config, collection, limit, progress).await;
    progress.on_fetch_complete(collection, run.items.len(), run.stop.is_error());
    run
}

async fn paginate<C>(
    client: &C,
    config: &GatewayConfig,
    collection: &str,
    limit: Option<usize>,
    progress: &dyn ProgressNotifier,
) -> CollectionRun
where
    C: HttpClientPort + ?Sized,
{
    let path = config.collection_path(collection);
    let per_page = config.per_page.max(1);
    let mut items: Vec<Value> = Vec::new();
    let mut page: u32 = 1;

    if limit == Some(0) {
        return CollectionRun::finish(collection, items, 0, StopReason::LimitReached);
    }

    loop {
        let request = HttpRequest::get(path.as_str())
            .with_query("per_page", per_page)
            .with_query("page", page)
            .with_query("_embed", 1)
            .with_timeout(config.timeout);

        let response = match timed_fetch(client, request).await {
            Ok(response) => response,
            Err(e) => {
                return CollectionRun::finish(collection, items, page, StopReason::Failed(e.to_string()));
            }
        };

        if !response.is_success() {
            let stop = if response.status == 400 && page > 1 {
                StopReason::PastLastPage
            } else {
                StopReason::HttpStatus(response.status)
            };
            return CollectionRun::finish(collection, items, page, stop);
        }

        let page_items = match decode_json(&response) {
            Ok(Value::Array(page_items)) if !page_items.is_empty() => page_items,
            Ok(_) => return CollectionRun::finish(collection, items, page, StopReason::Exhausted),
            Err(e) => {
                return CollectionRun::finish(collection, items, page, StopReason::Failed(e.to_string()));
            }
        };

        let received = page_items.len();
        items.extend(page_items);
        progress.on_page_loaded(collection, page, items.len());

        if let Some(limit) = limit
            && items.len() >= limit
        {
            items.truncate(limit);
            return CollectionRun::finish(collection, items, page, StopReason::LimitReached);
        }

        if received < per_page {
            return CollectionRun::finish(collection, items, page, StopReason::LastPage);
        }

        page += 1;
    }
}
