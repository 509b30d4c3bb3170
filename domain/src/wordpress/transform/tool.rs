use crate::content::{entities::Tool, value_objects::PricingModel};
use crate::text::{
    fields::{parse_technology_stack, parse_tool_features},
    html::clean_html,
};
use crate::wordpress::record::RawRecord;

/// Transform a `tools` record
pub fn transform_tool(record: &RawRecord) -> Tool {
    let text = |keys: &[&str]| record.text(keys).unwrap_or_default();

    Tool {
        id: record.id(),
        slug: record.slug(),
        title: record
            .title()
            .or_else(|| record.clean_text(&["tool_name"]))
            .unwrap_or_default(),
        tagline: record
            .clean_text(&["tagline", "tool_tagline"])
            .or_else(|| {
                record
                    .rendered("excerpt")
                    .map(clean_html)
                    .filter(|e| !e.is_empty())
            })
            .unwrap_or_default(),
        tool_type: record
            .embedded_terms("tool_type")
            .into_iter()
            .next()
            .or_else(|| record.clean_text(&["tool_type_name", "tool_type"]))
            .unwrap_or_default(),
        technology_stack: record
            .field(&["technology_stack", "tech_stack", "technologies"])
            .map(parse_technology_stack)
            .unwrap_or_default(),
        key_features: record
            .field(&["key_features", "features"])
            .map(parse_tool_features)
            .unwrap_or_default(),
        pricing_model: record
            .text(&["pricing_model"])
            .map(|raw| PricingModel::from_field(&raw))
            .unwrap_or_default(),
        price_monthly: text(&["price_monthly", "monthly_price"]),
        price_one_time: text(&["price_one_time", "one_time_price"]),
        demo_url: text(&["demo_url", "live_demo_url"]),
        categories: record.ids(&["tool_category", "categories"]),
        audiences: record.ids(&["target_audience", "audiences"]),
    }
}
