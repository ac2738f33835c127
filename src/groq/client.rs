use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::types::{ChatRequest, ChatResponse};
use crate::config::{GroqConfig, RequestConfig};
use crate::error::{GroqError, GroqResult};

/// Client for the Groq chat-completions API
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl GroqClient {
    /// Create a new Groq client
    pub fn new(config: &GroqConfig, request_config: RequestConfig) -> GroqResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(GroqError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout_ms: request_config.timeout_ms,
        })
    }

    /// Send a chat-completion request and return the reply.
    ///
    /// One request per call. Retry policy belongs to the caller: any
    /// transport or service error propagates unmodified.
    pub async fn chat(&self, request: ChatRequest) -> GroqResult<ChatResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Calling chat completions"
        );

        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GroqError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    GroqError::Http(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GroqError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| GroqError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                })?;

        info!(
            model = %request.model,
            latency_ms = start.elapsed().as_millis() as u64,
            "Chat completion succeeded"
        );

        Ok(chat_response)
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = GroqConfig {
            api_key: "test_key".to_string(),
            base_url: "https://api.groq.com/openai".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
        };

        let request_config = RequestConfig::default();

        let client = GroqClient::new(&config, request_config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = GroqConfig {
            api_key: "test_key".to_string(),
            base_url: "https://api.groq.com/openai/".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
        };

        let client = GroqClient::new(&config, RequestConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://api.groq.com/openai");
    }
}
