//! Taxonomy term listing and term name resolution

use super::content_gateway::ContentGateway;
use super::fetch::fetch_json;
use crate::ports::http_client::{HttpClientPort, HttpRequest};
use futures::future::join_all;
use gateway_domain::wordpress::record::value_text;
use gateway_domain::{RawRecord, Taxonomy, TaxonomyTerm, clean_html, transform_taxonomy_term};
use tracing::{debug, warn};

impl<C: HttpClientPort + 'static> ContentGateway<C> {
    pub async fn get_service_categories(&self) -> Vec<TaxonomyTerm> {
        self.get_terms(Taxonomy::ServiceCategory).await
    }

    /// Case studies are classified by industry through `case_category`
    pub async fn get_case_industries(&self) -> Vec<TaxonomyTerm> {
        self.get_terms(Taxonomy::CaseCategory).await
    }

    pub async fn get_solution_categories(&self) -> Vec<TaxonomyTerm> {
        self.get_terms(Taxonomy::SolutionCategory).await
    }

    pub async fn get_tool_categories(&self) -> Vec<TaxonomyTerm> {
        self.get_terms(Taxonomy::ToolCategory).await
    }

    pub async fn get_tool_types(&self) -> Vec<TaxonomyTerm> {
        self.get_terms(Taxonomy::ToolType).await
    }

    pub async fn get_target_audiences(&self) -> Vec<TaxonomyTerm> {
        self.get_terms(Taxonomy::TargetAudience).await
    }

    /// All terms of `taxonomy`, paginated like any other collection
    pub async fn get_terms(&self, taxonomy: Taxonomy) -> Vec<TaxonomyTerm> {
        let run = self.collect(taxonomy.as_str(), None).await;
        run.items
            .into_iter()
            .map(|value| transform_taxonomy_term(&RawRecord::new(value)))
            .collect()
    }

    /// Display name of one term.
    ///
    /// Falls back to `Category #<id>` (or `Audience #<id>` for target
    /// audiences) when the term cannot be fetched or has no name.
    pub async fn get_category_name(&self, id: u64, taxonomy: Taxonomy) -> String {
        let request = HttpRequest::get(self.config.term_path(taxonomy.as_str(), id))
            .with_timeout(self.config.timeout);

        let name = match fetch_json(self.client.as_ref(), request).await {
            Ok(value) => value
                .get("name")
                .and_then(value_text)
                .map(|name| clean_html(&name))
                .filter(|name| !name.is_empty()),
            Err(e) => {
                warn!("Failed to resolve {} term {}: {}", taxonomy, id, e);
                None
            }
        };

        name.unwrap_or_else(|| {
            debug!("Using fallback label for {} term {}", taxonomy, id);
            taxonomy.fallback_label(id)
        })
    }

    pub async fn get_target_audience_name(&self, id: u64) -> String {
        self.get_category_name(id, Taxonomy::TargetAudience).await
    }

    /// Resolve several term IDs concurrently, keeping input order
    pub async fn resolve_term_names(&self, ids: &[u64], taxonomy: Taxonomy) -> Vec<String> {
        join_all(ids.iter().map(|&id| self.get_category_name(id, taxonomy))).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GatewayConfig;
    use crate::ports::http_client::{ContentError, HttpResponse};
    use crate::use_cases::content_gateway::ContentGateway;
    use crate::use_cases::test_support::ScriptedClient;
    use gateway_domain::Taxonomy;
    use serde_json::json;
    use std::sync::Arc;

    fn gateway(responses: Vec<Result<HttpResponse, ContentError>>) -> ContentGateway<ScriptedClient> {
        ContentGateway::new(
            Arc::new(ScriptedClient::new(responses)),
            GatewayConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_term_list() {
        let gateway = gateway(vec![Ok(HttpResponse::json(&json!([
            {"id": 4, "name": "E-commerce &amp; Retail", "slug": "ecommerce", "count": 3},
            {"id": 9, "name": "Healthcare", "slug": "healthcare"}
        ])))]);
        let terms = gateway.get_case_industries().await;

        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].name, "E-commerce & Retail");
        assert_eq!(terms[0].count, 3);
        assert_eq!(terms[1].count, 0);
        assert_eq!(gateway.client.requests()[0].path, "/api/wordpress/case_category");
    }

    #[tokio::test]
    async fn test_term_list_failure_is_empty() {
        let gateway = gateway(vec![Ok(HttpResponse::new(404, ""))]);
        assert!(gateway.get_tool_types().await.is_empty());
    }

    #[tokio::test]
    async fn test_category_name() {
        let gateway = gateway(vec![Ok(HttpResponse::json(&json!({"name": "Automation"})))]);
        assert_eq!(
            gateway.get_category_name(5, Taxonomy::SolutionCategory).await,
            "Automation"
        );
        assert_eq!(
            gateway.client.requests()[0].path,
            "/api/wordpress/taxonomy/solution_category/5"
        );
    }

    #[tokio::test]
    async fn test_category_name_fallbacks() {
        let gateway = gateway(vec![
            Ok(HttpResponse::new(404, "")),
            Ok(HttpResponse::json(&json!({"name": ""}))),
            Err(ContentError::Timeout { timeout_ms: 15_000 }),
        ]);
        assert_eq!(
            gateway.get_category_name(7, Taxonomy::ToolCategory).await,
            "Category #7"
        );
        assert_eq!(
            gateway.get_category_name(8, Taxonomy::ServiceCategory).await,
            "Category #8"
        );
        assert_eq!(gateway.get_target_audience_name(3).await, "Audience #3");
    }

    #[tokio::test]
    async fn test_resolve_term_names_keeps_order_and_fallbacks() {
        let gateway = gateway(vec![
            Ok(HttpResponse::json(&json!({"name": "Startups"}))),
            Ok(HttpResponse::new(500, "")),
        ]);
        let names = gateway
            .resolve_term_names(&[1, 2], Taxonomy::TargetAudience)
            .await;

        assert_eq!(names, vec!["Startups".to_string(), "Audience #2".to_string()]);
    }
}
