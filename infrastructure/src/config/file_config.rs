//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use gateway_application::GatewayConfig;
use gateway_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Largest page size WordPress accepts
const MAX_PER_PAGE: usize = 100;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gateway.timeout_ms cannot be 0")]
    InvalidTimeout,

    #[error("gateway.per_page must be between 1 and 100, got {0}")]
    InvalidPageSize(usize),

    #[error("gateway.site_url cannot be empty")]
    EmptySiteUrl,
}

/// Raw gateway configuration from TOML (`[gateway]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Origin serving the proxy routes
    pub site_url: String,
    pub api_base: String,
    pub contact_path: String,
    pub newsletter_path: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    pub per_page: usize,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        let defaults = GatewayConfig::default();
        Self {
            site_url: "http://localhost:3000".to_string(),
            api_base: defaults.api_base,
            contact_path: defaults.contact_path,
            newsletter_path: defaults.newsletter_path,
            timeout_ms: defaults.timeout.as_millis() as u64,
            per_page: defaults.per_page,
        }
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw logging configuration from TOML (`[logging]` section)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// `tracing` filter directive used when no `-v` flag is given
    pub level: Option<String>,
    /// Directory for daily-rolling log files
    pub file: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gateway: FileGatewayConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gateway.timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.gateway.per_page == 0 || self.gateway.per_page > MAX_PER_PAGE {
            return Err(ConfigValidationError::InvalidPageSize(self.gateway.per_page));
        }

        if self.gateway.site_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptySiteUrl);
        }

        Ok(())
    }

    /// Gateway parameters for the application layer
    pub fn to_gateway_config(&self) -> GatewayConfig {
        GatewayConfig::default()
            .with_api_base(self.gateway.api_base.clone())
            .with_contact_path(self.gateway.contact_path.clone())
            .with_newsletter_path(self.gateway.newsletter_path.clone())
            .with_timeout(Duration::from_millis(self.gateway.timeout_ms))
            .with_per_page(self.gateway.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gateway]
site_url = "https://uaedigital.ae"
api_base = "/proxy/wp"
timeout_ms = 5000
per_page = 50

[output]
format = "json"
color = false

[logging]
level = "debug"
file = "/var/log/content-gateway"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gateway.site_url, "https://uaedigital.ae");
        assert_eq!(config.gateway.api_base, "/proxy/wp");
        assert_eq!(config.gateway.contact_path, "/api/contact");
        assert_eq!(config.gateway.timeout_ms, 5000);
        assert_eq!(config.gateway.per_page, 50);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gateway]
site_url = "https://staging.uaedigital.ae"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.gateway.timeout_ms, 15_000);
        assert_eq!(config.gateway.per_page, 100);
        assert!(config.output.color);
        assert_eq!(config.output.format, None);
        assert_eq!(config.logging, FileLoggingConfig::default());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[gateway]
timeout_ms = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_page_size() {
        let mut config = FileConfig::default();
        config.gateway.per_page = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidPageSize(0)));

        config.gateway.per_page = 101;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidPageSize(101)));
    }

    #[test]
    fn test_validate_empty_site_url() {
        let mut config = FileConfig::default();
        config.gateway.site_url = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptySiteUrl));
    }

    #[test]
    fn test_to_gateway_config() {
        let mut config = FileConfig::default();
        config.gateway.timeout_ms = 2500;
        config.gateway.per_page = 20;
        config.gateway.newsletter_path = "/api/subscribe".to_string();

        let gateway = config.to_gateway_config();
        assert_eq!(gateway.timeout, Duration::from_millis(2500));
        assert_eq!(gateway.per_page, 20);
        assert_eq!(gateway.newsletter_path, "/api/subscribe");
        assert_eq!(gateway.api_base, "/api/wordpress");
    }
}
