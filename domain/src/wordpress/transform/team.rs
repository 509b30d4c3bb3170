use super::{flexible_list, image_or};
use crate::content::entities::TeamMember;
use crate::text::html::clean_html;
use crate::wordpress::record::{RawRecord, value_text};
use std::collections::BTreeMap;

const PLACEHOLDER_IMAGE: &str = "/images/placeholder-team.jpg";

/// Social platforms read from individual custom fields
const SOCIAL_PLATFORMS: [&str; 7] = [
    "linkedin",
    "twitter",
    "instagram",
    "facebook",
    "github",
    "website",
    "email",
];

/// Transform a `team` record
pub fn transform_team_member(record: &RawRecord) -> TeamMember {
    TeamMember {
        id: record.id(),
        name: record
            .title()
            .or_else(|| record.clean_text(&["name", "full_name"]))
            .unwrap_or_default(),
        role: record
            .clean_text(&["role", "position", "job_title"])
            .unwrap_or_default(),
        bio: record
            .clean_text(&["bio", "biography"])
            .or_else(|| record.rendered("content").map(clean_html))
            .unwrap_or_default(),
        image: image_or(record, &["photo", "image", "profile_image"], PLACEHOLDER_IMAGE),
        social_links: social_links(record),
        expertise: record
            .field(&["expertise", "skills"])
            .map(flexible_list)
            .unwrap_or_default(),
        languages: record
            .field(&["languages"])
            .map(flexible_list)
            .unwrap_or_default(),
    }
}

/// Platform → URL, from a `social_links` object and/or per-platform fields.
/// Per-platform fields win over the grouped object.
fn social_links(record: &RawRecord) -> BTreeMap<String, String> {
    let mut links = BTreeMap::new();

    if let Some(group) = record.field(&["social_links"]).and_then(|v| v.as_object()) {
        for (platform, url) in group {
            if let Some(url) = value_text(url) {
                links.insert(platform.to_lowercase(), url);
            }
        }
    }

    for platform in SOCIAL_PLATFORMS {
        let url_key = format!("{}_url", platform);
        if let Some(url) = record.text(&[platform, url_key.as_str()]) {
            links.insert(platform.to_string(), url);
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_member_fields() {
        let record = RawRecord::new(json!({
            "id": 4,
            "title": {"rendered": "Aisha Al Mansoori"},
            "content": {"rendered": "<p>Leads &amp; mentors the design team.</p>"},
            "acf": {
                "position": "Creative Director",
                "linkedin_url": "https://linkedin.com/in/aisha",
                "social_links": {"Twitter": "https://x.com/aisha", "Dribbble": ""},
                "expertise": "UX, Branding",
                "languages": ["Arabic", "English"],
                "photo": {"url": "https://cdn.example.ae/aisha.jpg"}
            }
        }));

        let member = transform_team_member(&record);
        assert_eq!(member.name, "Aisha Al Mansoori");
        assert_eq!(member.role, "Creative Director");
        assert_eq!(member.bio, "Leads & mentors the design team.");
        assert_eq!(member.image, "https://cdn.example.ae/aisha.jpg");
        assert_eq!(member.expertise, vec!["UX", "Branding"]);
        assert_eq!(member.languages, vec!["Arabic", "English"]);
        assert_eq!(
            member.social_links.get("linkedin").map(String::as_str),
            Some("https://linkedin.com/in/aisha")
        );
        assert_eq!(
            member.social_links.get("twitter").map(String::as_str),
            Some("https://x.com/aisha")
        );
        assert!(!member.social_links.contains_key("dribbble"));
    }

    #[test]
    fn test_bio_prefers_custom_field() {
        let record = RawRecord::new(json!({
            "id": 1,
            "content": {"rendered": "content bio"},
            "acf": {"bio": "<b>Field</b> bio"}
        }));
        assert_eq!(transform_team_member(&record).bio, "Field bio");
    }
}
