//! Write-path envelopes: contact form, newsletter, and the health probe result

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A contact/quote form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// Service the visitor is interested in
    pub service: String,
    pub budget: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Reject submissions whose email could never be delivered to
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_email(&self.email)
    }
}

/// Minimal shape check: one `@`, a non-empty local part, a dotted domain.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail(email.to_string()))
    }
}

/// Response envelope of the contact and newsletter routes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Value::Null,
        }
    }
}

/// Outcome of the WordPress proxy liveness probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub healthy: bool,
    /// HTTP status of the probe, `0` when no response arrived
    pub status: u16,
    pub message: String,
}
