//! Application layer for content-gateway
//!
//! This crate contains the HTTP port, gateway configuration, and the use
//! cases that page components call: collection listing, slug lookup,
//! taxonomy resolution, form relays, and the health probe.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GatewayConfig;
pub use ports::http_client::{ContentError, HttpClientPort, HttpMethod, HttpRequest, HttpResponse};
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use use_cases::content_gateway::ContentGateway;
pub use use_cases::fetch::{decode_json, timed_fetch};
pub use use_cases::paginate::{
    CollectionRun, StopReason, fetch_collection, fetch_collection_with_progress,
};

// Pure text helpers that page components call alongside the gateway
pub use gateway_domain::{DEFAULT_EXCERPT_LENGTH, clean_html_content, get_excerpt};
