use crate::content::entities::Testimonial;
use crate::text::html::clean_html;
use crate::wordpress::record::{RawRecord, value_i64};

const PLACEHOLDER_IMAGE: &str = "/images/placeholder-avatar.jpg";
const DEFAULT_RATING: u8 = 5;

/// Transform a `testimonials` record
pub fn transform_testimonial(record: &RawRecord) -> Testimonial {
    Testimonial {
        id: record.id(),
        name: record
            .clean_text(&["client_name", "name"])
            .or_else(|| record.title())
            .unwrap_or_default(),
        content: record
            .clean_text(&["testimonial", "testimonial_text", "quote"])
            .or_else(|| record.rendered("content").map(clean_html))
            .unwrap_or_default(),
        role: record
            .clean_text(&["client_role", "role", "position"])
            .unwrap_or_default(),
        company: record
            .clean_text(&["company", "client_company", "company_name"])
            .unwrap_or_default(),
        image: record
            .image(&["client_photo", "photo", "image"])
            .or_else(|| record.featured_image())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        rating: record
            .field(&["rating", "stars"])
            .and_then(value_i64)
            .map(|stars| stars.clamp(1, 5) as u8)
            .unwrap_or(DEFAULT_RATING),
        project_type: record
            .clean_text(&["project_type", "service_type"])
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_testimonial_fields() {
        let record = RawRecord::new(json!({
            "id": 9,
            "title": {"rendered": "Testimonial 9"},
            "acf": {
                "client_name": "Rashid",
                "testimonial": "<p>They doubled our bookings&#8230;</p>",
                "client_role": "Owner",
                "company": "Desert Tours",
                "rating": "4",
                "project_type": "Booking site"
            }
        }));
        let t = transform_testimonial(&record);
        assert_eq!(t.name, "Rashid");
        assert_eq!(t.content, "They doubled our bookings...");
        assert_eq!(t.role, "Owner");
        assert_eq!(t.company, "Desert Tours");
        assert_eq!(t.rating, 4);
        assert_eq!(t.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_rating_is_clamped() {
        let high = RawRecord::new(json!({"id": 1, "rating": 11}));
        let low = RawRecord::new(json!({"id": 1, "rating": 0}));
        assert_eq!(transform_testimonial(&high).rating, 5);
        assert_eq!(transform_testimonial(&low).rating, 1);
    }

    #[test]
    fn test_rating_is_the_same_for_strings_and_numbers() {
        let rating = |value: serde_json::Value| {
            transform_testimonial(&RawRecord::new(json!({"id": 1, "rating": value}))).rating
        };
        assert_eq!(rating(json!("4.5")), 4);
        assert_eq!(rating(json!(4.5)), 4);
        assert_eq!(rating(json!(-2)), 1);
        assert_eq!(rating(json!("-2")), 1);
        assert_eq!(rating(json!("abc")), DEFAULT_RATING);
        assert_eq!(transform_testimonial(&RawRecord::new(json!({"id": 1}))).rating, DEFAULT_RATING);
    }
}
