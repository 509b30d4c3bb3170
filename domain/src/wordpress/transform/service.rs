use super::{excerpt_for, image_or, rendered_content, value_pairs};
use crate::content::{
    entities::Service,
    value_objects::{Faq, ProcessStep},
};
use crate::text::fields::parse_technology_stack;
use crate::wordpress::record::{RawRecord, value_lines};

const PLACEHOLDER_IMAGE: &str = "/images/placeholder-service.jpg";
const DEFAULT_ICON: &str = "fas fa-cogs";
const DEFAULT_CTA: &str = "Get Started";

/// Transform a `services` record
pub fn transform_service(record: &RawRecord) -> Service {
    let content = rendered_content(record);

    Service {
        id: record.id(),
        title: record
            .title()
            .or_else(|| record.clean_text(&["service_name"]))
            .unwrap_or_default(),
        slug: record.slug(),
        excerpt: excerpt_for(record, &content),
        featured_image: image_or(record, &["featured_image", "service_image"], PLACEHOLDER_IMAGE),
        icon: record
            .text(&["service_icon", "icon"])
            .unwrap_or_else(|| DEFAULT_ICON.to_string()),
        features: record
            .field(&["service_features", "features"])
            .map(value_lines)
            .unwrap_or_default(),
        process: record
            .field(&["service_process", "process"])
            .map(|v| {
                value_pairs(v, &["title", "step_title"], &["description", "step_description"])
            })
            .unwrap_or_default()
            .into_iter()
            .map(|(title, description)| ProcessStep::new(title, description))
            .collect(),
        faqs: record
            .field(&["service_faqs", "faqs", "faq"])
            .map(|v| value_pairs(v, &["question"], &["answer"]))
            .unwrap_or_default()
            .into_iter()
            .map(|(question, answer)| Faq::new(question, answer))
            .collect(),
        categories: record.embedded_terms("service_category"),
        pricing: record
            .text(&["pricing", "service_pricing", "starting_price"])
            .unwrap_or_default(),
        technologies: record
            .field(&["technologies", "technology_stack", "tech_stack"])
            .map(parse_technology_stack)
            .unwrap_or_default(),
        cta: record
            .clean_text(&["cta_text", "cta"])
            .unwrap_or_else(|| DEFAULT_CTA.to_string()),
        content,
    }
}
