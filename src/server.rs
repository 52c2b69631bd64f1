//! # Reference Backend
//!
//! HTTP server answering the chat widget from the store catalog.
//!
//! ## Endpoints
//!
//! - `POST /api/chatbot` - body `{"message": "..."}`, answers
//!   `{"status": "success", "message": "..."}`
//! - `GET /` - liveness banner
//!
//! A body that is not a JSON object with a string `message` gets
//! `400 {"status": "error", "message": "Missing message data"}`.

use crate::catalog::CatalogResponder;
use crate::constants::API_PREFIX;
use crate::errors::{ShopchatError, ShopchatResult};
use crate::models::ChatbotResponse;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use log::{debug, info, warn};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub fn router(responder: Arc<CatalogResponder>) -> Router {
    Router::new()
        .route("/", get(index))
        .route(&format!("{}/chatbot", API_PREFIX), post(chatbot))
        .layer(CorsLayer::permissive())
        .with_state(responder)
}

/// Binds `bind_address` and serves until the process is stopped.
pub async fn start_server(bind_address: &str, responder: CatalogResponder) -> ShopchatResult<()> {
    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(|e| ShopchatError::server_error(format!("Failed to bind {}: {}", bind_address, e)))?;

    info!(
        "Fashion-freek chatbot API running at http://{}{}/chatbot",
        bind_address, API_PREFIX
    );
    serve(listener, responder).await
}

pub async fn serve(listener: TcpListener, responder: CatalogResponder) -> ShopchatResult<()> {
    axum::serve(listener, router(Arc::new(responder)))
        .await
        .map_err(|e| ShopchatError::server_error(e.to_string()))
}

async fn index() -> &'static str {
    "Fashion-freek Chatbot API is running! Access the endpoint at /api/chatbot"
}

async fn chatbot(
    State(responder): State<Arc<CatalogResponder>>,
    body: Bytes,
) -> (StatusCode, Json<ChatbotResponse>) {
    let message = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned));

    let Some(message) = message else {
        warn!("Rejected chatbot request without message data");
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatbotResponse::error("Missing message data")),
        );
    };

    debug!("Chatbot request: {:?}", message);
    let reply = responder.reply(&message);
    (StatusCode::OK, Json(ChatbotResponse::success(reply)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ChatbotClient, RemoteReply};
    use crate::catalog::SiteData;
    use serde_json::json;
    use std::time::Duration;

    async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener, CatalogResponder::new(SiteData::default())));
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_widget_client_talks_to_server() {
        let base = spawn_server().await;
        let client = ChatbotClient::new(&format!("{}/api", base), Duration::from_secs(2)).unwrap();

        let reply = client.send_message("hello").await.unwrap();
        assert_eq!(
            reply,
            RemoteReply::Answer(
                "Hello! 👋 Welcome to Fashion-freek. How can I help you today?".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_missing_message_is_bad_request() {
        let base = spawn_server().await;
        let response = reqwest::Client::new()
            .post(format!("{}/api/chatbot", base))
            .json(&json!({ "text": "hello" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "status": "error", "message": "Missing message data" })
        );
    }

    #[tokio::test]
    async fn test_index_banner() {
        let base = spawn_server().await;
        let text = reqwest::get(&base).await.unwrap().text().await.unwrap();
        assert!(text.contains("/api/chatbot"));
    }
}
