use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::LLMClient};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

#[derive(Debug, Clone)]
pub struct AnthropicLLMClient {
    api_key: String,
    model_name: String,
    max_tokens: u32,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    fn first_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
    }
}

impl AnthropicLLMClient {
    pub fn new(api_key: String, model_name: String, max_tokens: u32) -> Self {
        Self {
            api_key,
            model_name,
            max_tokens,
            base_url: MESSAGES_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Point the client at another messages endpoint, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn call_messages_api(&self, request: MessagesRequest<'_>) -> Result<String, CoreError> {
        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("LLM API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("LLM API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let messages_response: MessagesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        messages_response
            .first_text()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for AnthropicLLMClient {
    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = MessagesRequest {
            model: &self.model_name,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        self.call_messages_api(request).await
    }
}
