//! Content gateway
//!
//! The single entry point page components use to read content. Collection
//! listing lives here; slug lookups, taxonomy, form relays, and the health
//! probe are further `impl` blocks in their own modules.

use super::paginate::{CollectionRun, fetch_collection_with_progress};
use crate::config::GatewayConfig;
use crate::ports::http_client::HttpClientPort;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use gateway_domain::{
    BlogPost, CaseStudy, ContentKind, RawRecord, Service, Solution, TeamMember, Testimonial, Tool,
    transform_blog_post, transform_case_study, transform_service, transform_solution,
    transform_team_member, transform_testimonial, transform_tool,
};
use std::sync::Arc;
use tracing::info;

/// Reads content from the WordPress proxy and normalizes it.
///
/// No public operation returns an error: failures are logged and the caller
/// gets whatever was fetched before the failure (possibly nothing).
pub struct ContentGateway<C: HttpClientPort + 'static> {
    pub(crate) client: Arc<C>,
    pub(crate) config: GatewayConfig,
    progress: Arc<dyn ProgressNotifier>,
}

impl<C: HttpClientPort + 'static> Clone for ContentGateway<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: self.config.clone(),
            progress: Arc::clone(&self.progress),
        }
    }
}

impl<C: HttpClientPort + 'static> ContentGateway<C> {
    pub fn new(client: Arc<C>, config: GatewayConfig) -> Self {
        Self {
            client,
            config,
            progress: Arc::new(NoProgress),
        }
    }

    /// Report pagination progress to `progress`
    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    // ==================== Collections ====================

    pub async fn get_services(&self, limit: Option<usize>) -> Vec<Service> {
        self.list(ContentKind::Services, limit, transform_service).await
    }

    pub async fn get_cases(&self, limit: Option<usize>) -> Vec<CaseStudy> {
        self.list(ContentKind::Cases, limit, transform_case_study).await
    }

    pub async fn get_solutions(&self, limit: Option<usize>) -> Vec<Solution> {
        self.list(ContentKind::Solutions, limit, transform_solution)
            .await
    }

    pub async fn get_tools(&self, limit: Option<usize>) -> Vec<Tool> {
        self.list(ContentKind::Tools, limit, transform_tool).await
    }

    pub async fn get_testimonials(&self, limit: Option<usize>) -> Vec<Testimonial> {
        self.list(ContentKind::Testimonials, limit, transform_testimonial)
            .await
    }

    pub async fn get_team_members(&self, limit: Option<usize>) -> Vec<TeamMember> {
        self.list(ContentKind::Team, limit, transform_team_member)
            .await
    }

    pub async fn get_blog_posts(&self, limit: Option<usize>) -> Vec<BlogPost> {
        self.list(ContentKind::Posts, limit, transform_blog_post)
            .await
    }

    /// Paginate `kind` and transform every record, preserving server order.
    async fn list<T>(
        &self,
        kind: ContentKind,
        limit: Option<usize>,
        transform: fn(&RawRecord) -> T,
    ) -> Vec<T> {
        let run = self.collect(kind.collection(), limit).await;

        info!(
            "Loaded {} {} from {} request(s)",
            run.items.len(),
            kind,
            run.requests
        );

        run.items
            .into_iter()
            .map(|value| transform(&RawRecord::new(value)))
            .collect()
    }

    /// Raw records of `collection`, reported to the progress notifier
    pub(crate) async fn collect(&self, collection: &str, limit: Option<usize>) -> CollectionRun {
        fetch_collection_with_progress(
            self.client.as_ref(),
            &self.config,
            collection,
            limit,
            self.progress.as_ref(),
        )
        .await
    }
}
