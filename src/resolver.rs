//! Turns a user message into exactly one bot reply.
//!
//! The backend is tried first. A reported failure becomes the apology line;
//! an unreachable or unreadable backend falls back to the [`RuleTable`].
//! Every path ends in a reply string, so callers never see an error.

use crate::api::{ChatbotClient, RemoteReply};
use crate::config::Config;
use crate::constants::APOLOGY_REPLY;
use crate::errors::ShopchatResult;
use crate::rules::RuleTable;
use log::{debug, warn};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ResponseResolver {
    client: Option<ChatbotClient>,
    rules: RuleTable,
}

impl ResponseResolver {
    pub fn new(client: ChatbotClient, rules: RuleTable) -> Self {
        Self {
            client: Some(client),
            rules,
        }
    }

    /// A resolver that never touches the network.
    pub fn offline(rules: RuleTable) -> Self {
        Self {
            client: None,
            rules,
        }
    }

    pub fn from_config(config: &Config) -> ShopchatResult<Self> {
        if config.offline {
            return Ok(Self::offline(RuleTable::default()));
        }
        let client = ChatbotClient::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::new(client, RuleTable::default()))
    }

    pub async fn resolve(&self, message: &str) -> String {
        let Some(client) = &self.client else {
            return self.resolve_locally(message);
        };

        match client.send_message(message).await {
            Ok(RemoteReply::Answer(text)) => text,
            Ok(RemoteReply::Failed(status)) => {
                warn!("Backend reported status {:?}", status);
                APOLOGY_REPLY.to_string()
            }
            Err(e) => {
                debug!("Backend unavailable, answering locally: {}", e);
                self.resolve_locally(message)
            }
        }
    }

    pub fn resolve_locally(&self, message: &str) -> String {
        self.rules.reply_for(message).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_REPLY;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    async fn resolver_with(template: ResponseTemplate) -> (MockServer, ResponseResolver) {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chatbot"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        let client =
            ChatbotClient::new(&format!("{}/api", mock_server.uri()), Duration::from_secs(2))
                .unwrap();
        (mock_server, ResponseResolver::new(client, RuleTable::default()))
    }

    fn unreachable_resolver() -> ResponseResolver {
        // Port 9 (discard) on localhost is closed on test machines.
        let client = ChatbotClient::new("http://127.0.0.1:9/api", Duration::from_secs(2)).unwrap();
        ResponseResolver::new(client, RuleTable::default())
    }

    #[tokio::test]
    async fn test_server_reply_is_returned_verbatim() {
        let (_server, resolver) = resolver_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "success", "message": "X" })),
        )
        .await;
        assert_eq!(resolver.resolve("hello").await, "X");
    }

    #[tokio::test]
    async fn test_failure_status_gives_apology() {
        let (_server, resolver) =
            resolver_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "error" }))).await;
        assert_eq!(resolver.resolve("hello").await, APOLOGY_REPLY);
    }

    #[tokio::test]
    async fn test_reply_without_status_gives_apology() {
        let (_server, resolver) =
            resolver_with(ResponseTemplate::new(200).set_body_json(json!({}))).await;
        assert_eq!(resolver.resolve("hello").await, APOLOGY_REPLY);
    }

    #[tokio::test]
    async fn test_non_string_status_gives_apology() {
        let (_server, resolver) = resolver_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": 500, "message": "X" })),
        )
        .await;
        assert_eq!(resolver.resolve("hello").await, APOLOGY_REPLY);
    }

    #[tokio::test]
    async fn test_malformed_response_falls_back_to_rules() {
        let (_server, resolver) =
            resolver_with(ResponseTemplate::new(200).set_body_string("not json")).await;
        assert_eq!(
            resolver.resolve("hello").await,
            RuleTable::storefront().reply_for("hello")
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_greets_locally() {
        let resolver = unreachable_resolver();
        assert_eq!(
            resolver.resolve("hello").await,
            "Hello! 👋 What can I help you with today?"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_default_reply() {
        let resolver = unreachable_resolver();
        assert_eq!(resolver.resolve("zzz").await, DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn test_each_message_retries_backend() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("garbage"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = ChatbotClient::new(&mock_server.uri(), Duration::from_secs(2)).unwrap();
        let resolver = ResponseResolver::new(client, RuleTable::default());
        resolver.resolve("price").await;
        resolver.resolve("price").await;
    }

    #[tokio::test]
    async fn test_offline_resolver() {
        let resolver = ResponseResolver::offline(RuleTable::default());
        assert_eq!(
            resolver.resolve("Any discount today?").await,
            RuleTable::storefront().reply_for("sale")
        );
    }
}
