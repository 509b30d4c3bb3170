//! Core domain concepts shared across all subdomains.
//!
//! - [`slug::Slug`]: a normalized content slug used for single-item lookups
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod slug;
pub mod string;
