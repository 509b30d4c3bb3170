//! Content subdomain: the normalized shapes handed to page components.
//!
//! - [`entities`]: one struct per content type (Service, CaseStudy, ...)
//! - [`value_objects`]: nested parts (process steps, FAQs, features, pricing enums)
//! - [`kind`]: collection and taxonomy identifiers used to build endpoint paths
//! - [`submission`]: contact form, newsletter, and health probe envelopes

pub mod entities;
pub mod kind;
pub mod submission;
pub mod value_objects;
