use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    flower::{ports::LLMClient, value_objects::ChatMessage},
};

#[derive(Debug, Clone)]
pub struct OpenAiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct WireMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: WireMessage,
}

impl From<ChatMessage> for WireMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: Some(message.content),
        }
    }
}

impl OpenAiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::ConfigurationError(format!("HTTP client setup: {}", e)))?;

        Ok(Self {
            api_key: config
                .openai_api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            model_name: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            client,
        })
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("OPENAI_API_KEY is not configured");
            CoreError::ConfigurationError("OPENAI_API_KEY not set in environment".to_string())
        })
    }

    async fn call_openai_api(
        &self,
        request: ChatCompletionRequest<'_>,
    ) -> Result<String, CoreError> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::UpstreamServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::UpstreamServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        extract_reply(completion)
    }
}

fn extract_reply(completion: ChatCompletionResponse) -> Result<String, CoreError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| CoreError::UpstreamServiceError("No response from LLM".to_string()))
}

impl LLMClient for OpenAiLLMClient {
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: &self.model_name,
            messages: messages.into_iter().map(WireMessage::from).collect(),
            temperature: self.temperature,
        };

        self.call_openai_api(request).await
    }
}
