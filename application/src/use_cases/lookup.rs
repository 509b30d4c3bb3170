//! Single-item lookup by slug

use super::content_gateway::ContentGateway;
use super::fetch::fetch_json;
use crate::ports::http_client::{HttpClientPort, HttpRequest};
use gateway_domain::{
    BlogPost, CaseStudy, ContentKind, RawRecord, Service, Slug, Solution, Tool,
    transform_blog_post, transform_case_study, transform_service, transform_solution,
    transform_tool,
};
use serde_json::Value;
use tracing::{debug, warn};

impl<C: HttpClientPort + 'static> ContentGateway<C> {
    pub async fn get_service_by_slug(&self, slug: &str) -> Option<Service> {
        self.find_by_slug(ContentKind::Services, slug, transform_service)
            .await
    }

    pub async fn get_case_by_slug(&self, slug: &str) -> Option<CaseStudy> {
        self.find_by_slug(ContentKind::Cases, slug, transform_case_study)
            .await
    }

    pub async fn get_solution_by_slug(&self, slug: &str) -> Option<Solution> {
        self.find_by_slug(ContentKind::Solutions, slug, transform_solution)
            .await
    }

    pub async fn get_tool_by_slug(&self, slug: &str) -> Option<Tool> {
        self.find_by_slug(ContentKind::Tools, slug, transform_tool)
            .await
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.find_by_slug(ContentKind::Posts, slug, transform_blog_post)
            .await
    }

    /// `None` means "not found" to the caller, whether nothing matched or
    /// the request failed; failures are logged.
    async fn find_by_slug<T>(
        &self,
        kind: ContentKind,
        raw_slug: &str,
        transform: fn(&RawRecord) -> T,
    ) -> Option<T> {
        let slug = match Slug::parse(raw_slug) {
            Ok(slug) => slug,
            Err(e) => {
                debug!("Skipping {} lookup: {}", kind, e);
                return None;
            }
        };

        let request = HttpRequest::get(self.config.collection_path(kind.collection()))
            .with_query("slug", slug.as_str())
            .with_query("_embed", 1)
            .with_query("status", "publish")
            .with_timeout(self.config.timeout);

        match fetch_json(self.client.as_ref(), request).await {
            Ok(Value::Array(records)) => match records.into_iter().next() {
                Some(value) => Some(transform(&RawRecord::new(value))),
                None => {
                    debug!("No {} with slug '{}'", kind, slug);
                    None
                }
            },
            Ok(_) => {
                warn!("Unexpected payload looking up {} '{}'", kind, slug);
                None
            }
            Err(e) => {
                warn!("Failed to look up {} '{}': {}", kind, slug, e);
                None
            }
        }
    }
}
