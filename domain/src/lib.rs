//! Domain layer for content-gateway
//!
//! This crate contains the content entities, text utilities, and the pure
//! transforms that turn loosely-shaped WordPress REST records into stable
//! entity shapes. Nothing here performs I/O.
//!
//! # Core Concepts
//!
//! ## Raw records
//!
//! WordPress exposes the same concept under different keys depending on the
//! content version (ACF custom fields, legacy meta keys, `*.rendered` REST
//! fields). [`RawRecord`] wraps the untyped payload and answers "which shape
//! did we get" questions so transforms stay declarative.
//!
//! ## Transforms
//!
//! One pure function per content type ([`transform_service`],
//! [`transform_case_study`], ...). Every transform returns a fully populated
//! entity, even for a record that carries nothing but an `id`.

pub mod config;
pub mod content;
pub mod core;
pub mod text;
pub mod wordpress;

// Re-export commonly used types
pub use content::{
    entities::{BlogPost, CaseStudy, Service, Solution, TeamMember, Testimonial, Tool},
    kind::{ContentKind, Taxonomy},
    submission::{ContactSubmission, HealthStatus, SubmissionResult},
    value_objects::{Faq, PricingModel, PricingRange, ProcessStep, TaxonomyTerm, ToolFeature},
};
pub use config::OutputFormat;
pub use core::{error::DomainError, slug::Slug};
pub use text::{
    fields::{
        parse_lines, parse_pairs, parse_technology_stack, parse_tool_feature_text,
        parse_tool_features,
    },
    html::{DEFAULT_EXCERPT_LENGTH, clean_html, clean_html_content, get_excerpt, read_time},
};
pub use wordpress::{
    record::RawRecord,
    transform::{
        transform_blog_post, transform_case_study, transform_service, transform_solution,
        transform_taxonomy_term, transform_team_member, transform_testimonial, transform_tool,
    },
};
