use super::{excerpt_for, flexible_list, gallery_urls, image_or, publish_year, rendered_content};
use crate::content::entities::CaseStudy;
use crate::text::fields::parse_technology_stack;
use crate::wordpress::record::RawRecord;

const PLACEHOLDER_IMAGE: &str = "/images/placeholder-case.jpg";

/// Transform a `cases` record
pub fn transform_case_study(record: &RawRecord) -> CaseStudy {
    let content = rendered_content(record);
    let text = |keys: &[&str]| record.text(keys).unwrap_or_default();

    CaseStudy {
        id: record.id(),
        title: record.title().unwrap_or_default(),
        slug: record.slug(),
        excerpt: excerpt_for(record, &content),
        featured_image: image_or(record, &["featured_image", "hero_image"], PLACEHOLDER_IMAGE),
        client: record
            .clean_text(&["client_name", "client"])
            .unwrap_or_default(),
        industry: record
            .clean_text(&["industry"])
            .or_else(|| record.embedded_terms("case_category").into_iter().next())
            .unwrap_or_default(),
        services_provided: record
            .field(&["services_provided", "services"])
            .map(flexible_list)
            .unwrap_or_default(),
        project_url: text(&["project_url", "website_url"]),
        challenge: text(&["challenge", "the_challenge"]),
        solution: text(&["solution", "our_solution"]),
        impact: text(&["impact", "results", "outcome"]),
        process: text(&["process", "our_process"]),
        gallery: record
            .field(&["gallery", "project_gallery"])
            .map(gallery_urls)
            .unwrap_or_default(),
        year: record
            .date()
            .and_then(publish_year)
            .or_else(|| record.text(&["year", "project_year"]))
            .unwrap_or_default(),
        technologies: record
            .field(&["technologies", "technology_stack", "tech_stack"])
            .map(parse_technology_stack)
            .unwrap_or_default(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_case_study_fields() {
        let record = RawRecord::new(json!({
            "id": 88,
            "slug": "souq-redesign",
            "date": "2023-05-17T08:00:00",
            "title": {"rendered": "Souq Redesign"},
            "content": {"rendered": "<p>Full story</p>"},
            "acf": {
                "client_name": "Souq &amp; Co",
                "services_provided": "Web Design, SEO",
                "project_url": "https://souq.example.ae",
                "challenge": "<p>Slow checkout</p>",
                "impact": "+40% conversions",
                "gallery": [
                    {"url": "https://cdn.example.ae/1.jpg"},
                    "https://cdn.example.ae/2.jpg",
                    101
                ],
                "technologies": ["Next.js", "Stripe"]
            },
            "_embedded": {
                "wp:featuredmedia": [{"source_url": "https://cdn.example.ae/hero.jpg"}],
                "wp:term": [[{"taxonomy": "case_category", "name": "Retail"}]]
            }
        }));

        let case = transform_case_study(&record);
        assert_eq!(case.client, "Souq & Co");
        assert_eq!(case.industry, "Retail");
        assert_eq!(case.services_provided, vec!["Web Design", "SEO"]);
        assert_eq!(case.challenge, "<p>Slow checkout</p>");
        assert_eq!(case.impact, "+40% conversions");
        assert_eq!(
            case.gallery,
            vec!["https://cdn.example.ae/1.jpg", "https://cdn.example.ae/2.jpg"]
        );
        assert_eq!(case.year, "2023");
        assert_eq!(case.featured_image, "https://cdn.example.ae/hero.jpg");
        assert_eq!(case.technologies, vec!["Next.js", "Stripe"]);
        assert_eq!(case.excerpt, "Full story");
    }

    #[test]
    fn test_year_falls_back_to_custom_field() {
        let record = RawRecord::new(json!({"id": 1, "date": "not a date", "acf": {"year": 2019}}));
        assert_eq!(transform_case_study(&record).year, "2019");
    }
}
