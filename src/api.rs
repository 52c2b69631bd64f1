use crate::{
    constants::{CHATBOT_PATH, STATUS_SUCCESS},
    errors::{ShopchatError, ShopchatResult},
    logging::log_api_call,
    models::{ApiCallLog, ChatbotRequest},
};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};

/// What the backend said about a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteReply {
    /// `status == "success"`: the reply text to show verbatim.
    Answer(String),
    /// Any other status. Carries the status value for logging.
    Failed(String),
}

/// HTTP client for the support backend.
#[derive(Debug, Clone)]
pub struct ChatbotClient {
    client: Client,
    endpoint: String,
}

impl ChatbotClient {
    pub fn new(base_url: &str, timeout: Duration) -> ShopchatResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShopchatError::api_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CHATBOT_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one message to the backend.
    ///
    /// Errors cover everything that prevents reading a JSON object: connection
    /// failures, timeouts and bodies that are not JSON objects. Any object
    /// whose `status` is not `"success"`, including a missing or non-string
    /// status and non-2xx answers, is returned as [`RemoteReply::Failed`].
    pub async fn send_message(&self, message: &str) -> ShopchatResult<RemoteReply> {
        let started = Instant::now();
        let payload = ChatbotRequest {
            message: message.to_string(),
        };

        let result = self.client.post(&self.endpoint).json(&payload).send().await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.log_call(message, 0, started);
                return Err(ShopchatError::api_error(describe_request_error(&e)));
            }
        };

        let status = response.status();
        self.log_call(message, status.as_u16(), started);

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        let Some(fields) = body.as_object() else {
            return Err(ShopchatError::api_error(format!(
                "Chatbot response (HTTP {}) is not a JSON object",
                status
            )));
        };

        match fields.get("status") {
            Some(Value::String(s)) if s == STATUS_SUCCESS => {
                match fields.get("message").and_then(Value::as_str) {
                    Some(text) => Ok(RemoteReply::Answer(text.to_string())),
                    None => Err(ShopchatError::api_error(
                        "Success response missing message text",
                    )),
                }
            }
            Some(Value::String(other)) => Ok(RemoteReply::Failed(other.clone())),
            Some(other) => Ok(RemoteReply::Failed(other.to_string())),
            None => Ok(RemoteReply::Failed("missing".to_string())),
        }
    }

    fn log_call(&self, message: &str, response_status: u16, started: Instant) {
        let snippet: String = message.chars().take(40).collect();
        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: self.endpoint.clone(),
            request_summary: format!("message: \"{}\"", snippet),
            response_status,
            response_time_ms: started.elapsed().as_millis(),
        });
    }
}

fn describe_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "API request timed out".to_string()
    } else if e.is_connect() {
        format!("Could not connect to API: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}
