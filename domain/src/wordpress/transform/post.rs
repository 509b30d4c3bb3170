use super::{excerpt_for, image_or, rendered_content};
use crate::content::entities::BlogPost;
use crate::text::html::read_time;
use crate::wordpress::record::RawRecord;

const PLACEHOLDER_IMAGE: &str = "/images/placeholder-blog.jpg";
const DEFAULT_AUTHOR: &str = "UAE Digital Team";

/// Transform a `posts` record
pub fn transform_blog_post(record: &RawRecord) -> BlogPost {
    let content = rendered_content(record);

    BlogPost {
        id: record.id(),
        title: record.title().unwrap_or_default(),
        slug: record.slug(),
        excerpt: excerpt_for(record, &content),
        author: record
            .embedded_author()
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        featured_image: image_or(record, &["featured_image"], PLACEHOLDER_IMAGE),
        date: record.date().unwrap_or_default().to_string(),
        categories: record.embedded_terms("category"),
        tags: record.embedded_terms("post_tag"),
        read_time: read_time(&content),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blog_post_fields() {
        let body = format!("<p>{}</p>", vec!["word"; 450].join(" "));
        let record = RawRecord::new(json!({
            "id": 77,
            "slug": "seo-in-dubai",
            "date": "2024-02-01T12:00:00",
            "title": {"rendered": "SEO in Dubai &#8211; 2024"},
            "excerpt": {"rendered": "<p>What changed [&hellip;]</p>"},
            "content": {"rendered": body},
            "_embedded": {
                "author": [{"name": "Fatima"}],
                "wp:term": [
                    [{"taxonomy": "category", "name": "SEO"}],
                    [{"taxonomy": "post_tag", "name": "google"}]
                ]
            }
        }));

        let post = transform_blog_post(&record);
        assert_eq!(post.title, "SEO in Dubai – 2024");
        assert_eq!(post.excerpt, "What changed [...]");
        assert_eq!(post.author, "Fatima");
        assert_eq!(post.date, "2024-02-01T12:00:00");
        assert_eq!(post.categories, vec!["SEO"]);
        assert_eq!(post.tags, vec!["google"]);
        assert_eq!(post.read_time, 3);
        assert_eq!(post.featured_image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_default_author() {
        let post = transform_blog_post(&RawRecord::new(json!({"id": 1})));
        assert_eq!(post.author, DEFAULT_AUTHOR);
    }
}
