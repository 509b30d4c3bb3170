//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Slug cannot be empty")]
    EmptySlug,

    #[error("Unknown content kind: {0}")]
    UnknownContentKind(String),

    #[error("Unknown taxonomy: {0}")]
    UnknownTaxonomy(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptySlug.to_string(), "Slug cannot be empty");
        assert_eq!(
            DomainError::UnknownTaxonomy("genre".to_string()).to_string(),
            "Unknown taxonomy: genre"
        );
    }
}
