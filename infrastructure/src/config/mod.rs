//! Configuration file loading for content-gateway
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CONTENT_GATEWAY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./content-gateway.toml`
//! 4. Global: `~/.config/content-gateway/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGatewayConfig, FileLoggingConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILE};
