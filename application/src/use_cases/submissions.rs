//! Contact form and newsletter relays
//!
//! Both routes answer with a `{success, message, data}` envelope. Every
//! failure on the way (validation, transport, status, body) is folded into
//! the same envelope with `success: false`.

use super::content_gateway::ContentGateway;
use super::fetch::{decode_json, timed_fetch};
use crate::ports::http_client::{ContentError, HttpClientPort, HttpRequest};
use gateway_domain::content::submission::validate_email;
use gateway_domain::{ContactSubmission, SubmissionResult};
use serde_json::{Value, json};
use tracing::{debug, warn};

const CONTACT_FAILED: &str = "Failed to send your message. Please try again later.";
const NEWSLETTER_FAILED: &str = "Failed to subscribe. Please try again later.";

impl<C: HttpClientPort + 'static> ContentGateway<C> {
    pub async fn submit_contact_form(&self, submission: &ContactSubmission) -> SubmissionResult {
        if let Err(e) = submission.validate() {
            return SubmissionResult::failure(e.to_string());
        }

        let trimmed = ContactSubmission {
            email: submission.email.trim().to_string(),
            ..submission.clone()
        };
        let body = match serde_json::to_value(&trimmed) {
            Ok(body) => body,
            Err(e) => {
                warn!("Could not encode contact submission: {}", e);
                return SubmissionResult::failure(CONTACT_FAILED);
            }
        };

        let result = self.relay(&self.config.contact_path, body, CONTACT_FAILED).await;
        if result.success {
            debug!("Contact form submitted");
        }
        result
    }

    pub async fn subscribe_newsletter(&self, email: &str) -> SubmissionResult {
        if let Err(e) = validate_email(email) {
            return SubmissionResult::failure(e.to_string());
        }

        let body = json!({ "email": email.trim() });
        self.relay(&self.config.newsletter_path, body, NEWSLETTER_FAILED)
            .await
    }

    /// POST `body` and read the envelope back.
    ///
    /// A non-2xx response that still carries an envelope keeps the server's
    /// message but is forced to `success: false`.
    async fn relay(&self, path: &str, body: Value, fallback: &str) -> SubmissionResult {
        let request = HttpRequest::post_json(path, body).with_timeout(self.config.timeout);

        let response = match timed_fetch(self.client.as_ref(), request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("POST {} failed: {}", path, e);
                return SubmissionResult::failure(failure_message(&e, fallback));
            }
        };

        let envelope = decode_json(&response)
            .ok()
            .and_then(|value| serde_json::from_value::<SubmissionResult>(value).ok());

        match envelope {
            Some(envelope) if response.is_success() => envelope,
            Some(envelope) => {
                warn!("POST {} returned HTTP {}", path, response.status);
                let message = if envelope.message.trim().is_empty() {
                    fallback.to_string()
                } else {
                    envelope.message
                };
                SubmissionResult {
                    success: false,
                    message,
                    data: envelope.data,
                }
            }
            None if response.is_success() => {
                warn!("POST {} returned an unreadable body", path);
                SubmissionResult::failure(fallback)
            }
            None => {
                warn!("POST {} returned HTTP {}", path, response.status);
                SubmissionResult::failure(failure_message(
                    &ContentError::Status(response.status),
                    fallback,
                ))
            }
        }
    }
}

/// Human-readable message for a failed relay
fn failure_message(error: &ContentError, fallback: &str) -> String {
    match error {
        ContentError::Timeout { .. } => {
            "The request timed out. Please check your connection and try again.".to_string()
        }
        ContentError::Network(_) => {
            "Could not reach the server. Please check your connection and try again.".to_string()
        }
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use crate::ports::http_client::{HttpMethod, HttpResponse};
    use crate::use_cases::test_support::ScriptedClient;
    use std::sync::Arc;

    fn gateway(responses: Vec<Result<HttpResponse, ContentError>>) -> ContentGateway<ScriptedClient> {
        ContentGateway::new(
            Arc::new(ScriptedClient::new(responses)),
            GatewayConfig::default(),
        )
    }

    fn submission() -> ContactSubmission {
        let mut submission =
            ContactSubmission::new("Layla", "layla@example.ae", "We need a new storefront");
        submission.budget = "10k-25k".to_string();
        submission
    }

    #[tokio::test]
    async fn test_contact_success_passes_envelope_through() {
        let gateway = gateway(vec![Ok(HttpResponse::json(&json!({
            "success": true,
            "message": "Thanks, we'll be in touch",
            "data": {"id": 42}
        })))]);
        let result = gateway.submit_contact_form(&submission()).await;

        assert!(result.success);
        assert_eq!(result.message, "Thanks, we'll be in touch");
        assert_eq!(result.data["id"], 42);

        let request = &gateway.client.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/api/contact");
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["email"], "layla@example.ae");
        assert_eq!(body["budget"], "10k-25k");
    }

    #[tokio::test]
    async fn test_contact_body_has_trimmed_email() {
        let gateway = gateway(vec![Ok(HttpResponse::json(
            &json!({"success": true, "message": "Sent"}),
        ))]);
        let mut padded = submission();
        padded.email = "  layla@example.ae \n".to_string();

        assert!(gateway.submit_contact_form(&padded).await.success);
        let body = gateway.client.requests()[0].body.clone().unwrap();
        assert_eq!(body["email"], "layla@example.ae");
        assert_eq!(body["name"], "Layla");
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_without_request() {
        let gateway = gateway(vec![]);
        let mut bad = submission();
        bad.email = "not-an-email".to_string();

        let result = gateway.submit_contact_form(&bad).await;
        assert!(!result.success);
        assert!(!result.message.is_empty());

        let result = gateway.subscribe_newsletter("").await;
        assert!(!result.success);
        assert_eq!(gateway.client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failures_become_envelopes() {
        let gateway = gateway(vec![
            Err(ContentError::Timeout { timeout_ms: 15_000 }),
            Err(ContentError::Network("connection reset".to_string())),
        ]);

        let result = gateway.submit_contact_form(&submission()).await;
        assert!(!result.success);
        assert!(result.message.contains("timed out"));
        assert_eq!(result.data, Value::Null);

        let result = gateway.subscribe_newsletter("a@b.co").await;
        assert!(!result.success);
        assert!(!result.message.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_error_status_keeps_server_message() {
        let gateway = gateway(vec![Ok(HttpResponse::new(
            422,
            r#"{"success": true, "message": "Already subscribed"}"#,
        ))]);
        let result = gateway.subscribe_newsletter("a@b.co").await;
        assert!(!result.success);
        assert_eq!(result.message, "Already subscribed");
    }

    #[tokio::test]
    async fn test_unreadable_bodies_use_fallback() {
        let gateway = gateway(vec![
            Ok(HttpResponse::new(200, "")),
            Ok(HttpResponse::new(500, "<html>Internal Server Error</html>")),
        ]);

        let result = gateway.subscribe_newsletter("a@b.co").await;
        assert_eq!(result, SubmissionResult::failure(NEWSLETTER_FAILED));

        let result = gateway.submit_contact_form(&submission()).await;
        assert_eq!(result, SubmissionResult::failure(CONTACT_FAILED));
    }

    #[tokio::test]
    async fn test_newsletter_body_is_trimmed_email() {
        let gateway = gateway(vec![Ok(HttpResponse::json(
            &json!({"success": true, "message": "Subscribed"}),
        ))]);
        let result = gateway.subscribe_newsletter("  news@example.com ").await;

        assert!(result.success);
        assert_eq!(
            gateway.client.requests()[0].body,
            Some(json!({"email": "news@example.com"}))
        );
        assert_eq!(gateway.client.requests()[0].path, "/api/newsletter");
    }
}
