use super::rendered_content;
use crate::content::{entities::Solution, value_objects::PricingRange};
use crate::wordpress::record::{RawRecord, value_lines};

/// Transform a `solutions` record.
///
/// Solutions were first modelled around the pain point name
/// (`pain_point_name`) and later around the post title, so each of the two
/// falls back to the other.
pub fn transform_solution(record: &RawRecord) -> Solution {
    let pain_point_name = record.clean_text(&["pain_point_name", "pain_point"]);
    let title = record.title();
    let text = |keys: &[&str]| record.text(keys).unwrap_or_default();

    Solution {
        id: record.id(),
        slug: record.slug(),
        title: title
            .clone()
            .or_else(|| pain_point_name.clone())
            .unwrap_or_default(),
        pain_point: pain_point_name.or(title).unwrap_or_default(),
        pain_point_subtitle: record
            .clean_text(&["pain_point_subtitle", "subtitle"])
            .unwrap_or_default(),
        problem_description: text(&["problem_description", "problem"]),
        solution_overview: record
            .text(&["solution_overview", "overview"])
            .unwrap_or_else(|| rendered_content(record)),
        key_benefits: record
            .field(&["key_benefits", "benefits"])
            .map(value_lines)
            .unwrap_or_default(),
        time_saved: text(&["time_saved", "roi_time_saved"]),
        revenue_increase: text(&["revenue_increase", "roi_revenue_increase"]),
        cost_reduction: text(&["cost_reduction", "roi_cost_reduction"]),
        pricing_range: record
            .text(&["pricing_range", "price_range"])
            .map(|raw| PricingRange::from_field(&raw))
            .unwrap_or_default(),
        implementation_time: text(&["implementation_time", "timeline"]),
        categories: record.ids(&["solution_category", "categories"]),
        audiences: record.ids(&["target_audience", "audiences"]),
    }
}
