//! Content entities
//!
//! Every field is non-optional: missing source data is represented by an
//! empty string, an empty list, a placeholder image path, or an enum default.
//! Consumers only ever check for emptiness.

use super::value_objects::{Faq, PricingModel, PricingRange, ProcessStep, ToolFeature};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A service offering (web design, SEO, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Rendered HTML body
    pub content: String,
    pub featured_image: String,
    pub icon: String,
    pub features: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub faqs: Vec<Faq>,
    pub categories: Vec<String>,
    pub pricing: String,
    pub technologies: Vec<String>,
    pub cta: String,
}

/// A published client project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub client: String,
    pub industry: String,
    pub services_provided: Vec<String>,
    pub project_url: String,
    pub challenge: String,
    pub solution: String,
    pub impact: String,
    pub process: String,
    pub gallery: Vec<String>,
    /// Publish year, e.g. `"2024"`
    pub year: String,
    pub technologies: Vec<String>,
}

/// A packaged answer to a business pain point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub pain_point: String,
    pub pain_point_subtitle: String,
    pub problem_description: String,
    pub solution_overview: String,
    pub key_benefits: Vec<String>,
    /// Display string, e.g. `"20 hours/week"`
    pub time_saved: String,
    pub revenue_increase: String,
    pub cost_reduction: String,
    pub pricing_range: PricingRange,
    pub implementation_time: String,
    /// `solution_category` term IDs
    pub categories: Vec<u64>,
    /// `target_audience` term IDs
    pub audiences: Vec<u64>,
}

/// A ready-made digital tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub tool_type: String,
    pub technology_stack: Vec<String>,
    pub key_features: Vec<ToolFeature>,
    pub pricing_model: PricingModel,
    pub price_monthly: String,
    pub price_one_time: String,
    pub demo_url: String,
    /// `tool_category` term IDs
    pub categories: Vec<u64>,
    /// `target_audience` term IDs
    pub audiences: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub role: String,
    /// Plain text, markup removed
    pub bio: String,
    pub image: String,
    /// Platform name (`linkedin`, `twitter`, ...) to profile URL
    pub social_links: BTreeMap<String, String>,
    pub expertise: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u64,
    pub name: String,
    pub content: String,
    pub role: String,
    pub company: String,
    pub image: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub project_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub featured_image: String,
    /// Publish timestamp as sent by WordPress
    pub date: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    /// Estimated minutes to read
    pub read_time: u32,
}
