//! Application-level configuration.
//!
//! - [`GatewayConfig`]: proxy paths, page size, and per-request timeout

pub mod gateway_config;

pub use gateway_config::GatewayConfig;
