//! Record-to-entity transforms.
//!
//! Each transform is a pure function from one [`RawRecord`] to one entity.
//! Lookups go ACF field, then legacy key, then a fixed default, so the
//! functions below read as a list of "field ← sources" declarations.
//!
//! Shape branching lives in [`RawRecord`](super::record::RawRecord), in
//! [`crate::text::fields`], and in the small helpers of this module.

mod case_study;
mod post;
mod service;
mod solution;
mod team;
mod testimonial;
mod tool;

pub use case_study::transform_case_study;
pub use post::transform_blog_post;
pub use service::transform_service;
pub use solution::transform_solution;
pub use team::transform_team_member;
pub use testimonial::transform_testimonial;
pub use tool::transform_tool;

use super::record::{RawRecord, value_image_url, value_lines, value_text, value_u64};
use crate::content::value_objects::TaxonomyTerm;
use crate::text::{
    fields::{parse_lines, parse_pairs},
    html::{DEFAULT_EXCERPT_LENGTH, clean_html, get_excerpt},
};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Transform a taxonomy term record
pub fn transform_taxonomy_term(record: &RawRecord) -> TaxonomyTerm {
    TaxonomyTerm {
        id: record.id(),
        name: record.clean_text(&["name"]).unwrap_or_default(),
        slug: record.slug(),
        count: record
            .value()
            .get("count")
            .and_then(value_u64)
            .unwrap_or(0),
    }
}

/// `content.rendered` as-is (HTML), or empty
fn rendered_content(record: &RawRecord) -> String {
    record.rendered("content").unwrap_or_default().to_string()
}

/// Cleaned `excerpt.rendered`, or an excerpt derived from the content
fn excerpt_for(record: &RawRecord, content: &str) -> String {
    record
        .rendered("excerpt")
        .map(clean_html)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| get_excerpt(content, DEFAULT_EXCERPT_LENGTH))
}

/// Embedded featured media, then the given image fields, then `placeholder`
fn image_or(record: &RawRecord, keys: &[&str], placeholder: &str) -> String {
    record
        .featured_image()
        .or_else(|| record.image(keys))
        .unwrap_or_else(|| placeholder.to_string())
}

/// A list that may be an array, newline text, or comma text
fn flexible_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) if !text.contains(['\n', '\r']) => text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        other => value_lines(other),
    }
}

/// Pairs from `left | right` text or from repeater rows.
///
/// Rows are objects; the left side is the first textual member among
/// `left_keys`, the right side among `right_keys`.
fn value_pairs(value: &Value, left_keys: &[&str], right_keys: &[&str]) -> Vec<(String, String)> {
    let first_of = |row: &serde_json::Map<String, Value>, keys: &[&str]| {
        keys.iter()
            .find_map(|key| row.get(*key).and_then(value_text))
            .unwrap_or_default()
    };
    match value {
        Value::String(text) => parse_pairs(text),
        Value::Array(items) => items
            .iter()
            .flat_map(|item| match item {
                Value::Object(row) => vec![(first_of(row, left_keys), first_of(row, right_keys))],
                Value::String(text) => parse_pairs(text),
                _ => Vec::new(),
            })
            .filter(|(left, right)| !left.is_empty() || !right.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Image URLs from an ACF gallery (array of images) or delimited URL text
fn gallery_urls(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(value_image_url).collect(),
        Value::String(text) => parse_lines(text)
            .iter()
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Year of a WordPress date (`2024-03-05T10:00:00`, RFC 3339, or `2024-03-05`)
fn publish_year(date: &str) -> Option<String> {
    let date = date.trim();
    let year = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.year())
        .or_else(|_| DateTime::parse_from_rfc3339(date).map(|dt| dt.year()))
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d").map(|d| d.year()))
        .ok()?;
    Some(year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> RawRecord {
        RawRecord::new(json!({"id": 1}))
    }

    #[test]
    fn test_id_only_record_yields_complete_entities() {
        let record = minimal();

        let service = transform_service(&record);
        assert_eq!(service.id, 1);
        assert!(!service.featured_image.is_empty());
        assert!(!service.icon.is_empty());
        assert!(!service.cta.is_empty());
        assert!(service.features.is_empty() && service.process.is_empty());

        let case = transform_case_study(&record);
        assert_eq!(case.year, "");
        assert!(!case.featured_image.is_empty());

        let solution = transform_solution(&record);
        assert_eq!(solution.pricing_range, Default::default());
        assert!(solution.categories.is_empty());

        let tool = transform_tool(&record);
        assert!(tool.key_features.is_empty());
        assert_eq!(tool.pricing_model, Default::default());

        let member = transform_team_member(&record);
        assert!(!member.image.is_empty());
        assert!(member.social_links.is_empty());

        let testimonial = transform_testimonial(&record);
        assert_eq!(testimonial.rating, 5);

        let post = transform_blog_post(&record);
        assert!(!post.author.is_empty());
        assert_eq!(post.read_time, 1);
    }

    #[test]
    fn test_id_only_record_serializes_without_nulls() {
        let record = minimal();
        let values = [
            serde_json::to_value(transform_service(&record)).unwrap(),
            serde_json::to_value(transform_case_study(&record)).unwrap(),
            serde_json::to_value(transform_solution(&record)).unwrap(),
            serde_json::to_value(transform_tool(&record)).unwrap(),
            serde_json::to_value(transform_team_member(&record)).unwrap(),
            serde_json::to_value(transform_testimonial(&record)).unwrap(),
            serde_json::to_value(transform_blog_post(&record)).unwrap(),
        ];
        for value in values {
            let object = value.as_object().unwrap();
            assert!(object.values().all(|v| !v.is_null()), "null in {}", value);
        }
    }

    #[test]
    fn test_transforms_tolerate_wrong_shapes() {
        let record = RawRecord::new(json!({
            "id": "9",
            "title": 42,
            "content": ["not", "html"],
            "acf": {"features": {"weird": true}, "gallery": 7, "rating": "abc"},
            "_embedded": {"wp:term": "nope", "wp:featuredmedia": [null]}
        }));
        let service = transform_service(&record);
        assert_eq!(service.id, 9);
        assert_eq!(service.title, "");
        assert_eq!(transform_case_study(&record).gallery, Vec::<String>::new());
        assert_eq!(transform_testimonial(&record).rating, 5);
    }

    #[test]
    fn test_taxonomy_term() {
        let term = transform_taxonomy_term(&RawRecord::new(json!({
            "id": 4, "name": "E-commerce &amp; Retail", "slug": "ecommerce", "count": 12
        })));
        assert_eq!(term.name, "E-commerce & Retail");
        assert_eq!(term.slug, "ecommerce");
        assert_eq!(term.count, 12);
    }

    #[test]
    fn test_publish_year_formats() {
        assert_eq!(publish_year("2023-11-02T09:30:00"), Some("2023".to_string()));
        assert_eq!(publish_year("2022-01-01T00:00:00+04:00"), Some("2022".to_string()));
        assert_eq!(publish_year("2021-06-15"), Some("2021".to_string()));
        assert_eq!(publish_year("yesterday"), None);
    }

    #[test]
    fn test_value_pairs_from_rows_and_text() {
        let rows = json!([
            {"step_title": "Discover", "step_description": "Workshops"},
            "Build | Sprints",
            {}
        ]);
        let pairs = value_pairs(&rows, &["title", "step_title"], &["description", "step_description"]);
        assert_eq!(
            pairs,
            vec![
                ("Discover".to_string(), "Workshops".to_string()),
                ("Build".to_string(), "Sprints".to_string()),
            ]
        );
    }

    #[test]
    fn test_flexible_list() {
        assert_eq!(flexible_list(&json!("SEO, PPC")), vec!["SEO", "PPC"]);
        assert_eq!(flexible_list(&json!("SEO, PPC\nBranding")), vec!["SEO, PPC", "Branding"]);
        assert_eq!(flexible_list(&json!(["A", "B"])), vec!["A", "B"]);
    }
}
