//! Gateway parameters: where the proxy lives and how long to wait for it.
//!
//! [`GatewayConfig`] is passed explicitly into
//! [`ContentGateway`](crate::use_cases::content_gateway::ContentGateway);
//! nothing below reads environment state on its own.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Default (and WordPress maximum) page size
pub const DEFAULT_PER_PAGE: usize = 100;

/// Proxy paths and request limits.
///
/// Paths are relative to the site origin; the HTTP adapter joins them with
/// its base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// WordPress proxy prefix, e.g. `/api/wordpress`
    pub api_base: String,
    /// Contact form relay route
    pub contact_path: String,
    /// Newsletter relay route
    pub newsletter_path: String,
    /// Timeout applied to every individual HTTP call
    pub timeout: Duration,
    /// Items requested per page when paginating
    pub per_page: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/wordpress".to_string(),
            contact_path: "/api/contact".to_string(),
            newsletter_path: "/api/newsletter".to_string(),
            timeout: DEFAULT_TIMEOUT,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl GatewayConfig {
    // ==================== Builder Methods ====================

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_contact_path(mut self, path: impl Into<String>) -> Self {
        self.contact_path = path.into();
        self
    }

    pub fn with_newsletter_path(mut self, path: impl Into<String>) -> Self {
        self.newsletter_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    // ==================== Paths ====================

    /// `{api_base}/{collection}`
    pub fn collection_path(&self, collection: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), collection)
    }

    /// `{api_base}/taxonomy/{taxonomy}/{id}`
    pub fn term_path(&self, taxonomy: &str, id: u64) -> String {
        format!(
            "{}/taxonomy/{}/{}",
            self.api_base.trim_end_matches('/'),
            taxonomy,
            id
        )
    }

    /// `{api_base}/`, the liveness probe
    pub fn health_path(&self) -> String {
        format!("{}/", self.api_base.trim_end_matches('/'))
    }
}
