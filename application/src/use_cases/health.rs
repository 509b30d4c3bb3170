//! WordPress proxy liveness probe

use super::content_gateway::ContentGateway;
use super::fetch::timed_fetch;
use crate::ports::http_client::{HttpClientPort, HttpRequest};
use gateway_domain::HealthStatus;
use tracing::warn;

impl<C: HttpClientPort + 'static> ContentGateway<C> {
    /// Any 2xx from `{api_base}/` counts as healthy. `status` is `0` when
    /// no response arrived at all.
    pub async fn check_api_health(&self) -> HealthStatus {
        let request = HttpRequest::get(self.config.health_path()).with_timeout(self.config.timeout);

        match timed_fetch(self.client.as_ref(), request).await {
            Ok(response) if response.is_success() => HealthStatus {
                healthy: true,
                status: response.status,
                message: "WordPress API is reachable".to_string(),
            },
            Ok(response) => {
                warn!("Health probe returned HTTP {}", response.status);
                HealthStatus {
                    healthy: false,
                    status: response.status,
                    message: format!("WordPress API returned HTTP {}", response.status),
                }
            }
            Err(e) => {
                warn!("Health probe failed: {}", e);
                HealthStatus {
                    healthy: false,
                    status: 0,
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GatewayConfig;
    use crate::ports::http_client::{ContentError, HttpResponse};
    use crate::use_cases::content_gateway::ContentGateway;
    use crate::use_cases::test_support::{ScriptedClient, SlowClient};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_healthy_and_unhealthy() {
        let client = ScriptedClient::new(vec![
            Ok(HttpResponse::new(204, "")),
            Ok(HttpResponse::new(503, "")),
            Err(ContentError::Network("dns".to_string())),
        ]);
        let gateway = ContentGateway::new(Arc::new(client), GatewayConfig::default());

        let status = gateway.check_api_health().await;
        assert!(status.healthy);
        assert_eq!(status.status, 204);

        let status = gateway.check_api_health().await;
        assert!(!status.healthy);
        assert_eq!(status.status, 503);

        let status = gateway.check_api_health().await;
        assert!(!status.healthy);
        assert_eq!(status.status, 0);
        assert!(status.message.contains("dns"));

        assert_eq!(gateway.client.requests()[0].path, "/api/wordpress/");
    }

    #[tokio::test]
    async fn test_probe_times_out() {
        let config = GatewayConfig::default().with_timeout(Duration::from_millis(10));
        let gateway = ContentGateway::new(Arc::new(SlowClient::new(Duration::from_secs(5))), config);

        let status = gateway.check_api_health().await;
        assert!(!status.healthy);
        assert_eq!(status.status, 0);
        assert_eq!(status.message, "Request timed out after 10ms");
    }
}
