//! Anthropic Messages API client.
//!
//! Sends a single user message per invocation and returns the text of the
//! first content block.
//! See: <https://docs.anthropic.com/en/api/messages>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::traits::ModelClient;
use crate::types::InvokeOptions;
use crate::{Result, WordweaveError};

/// Default base URL for the Anthropic API
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// API version header value
const API_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicClient {
    api_key: String,
    model: String,
    http: Client,
    base_url: String,
}

impl AnthropicClient {
    /// Create a new client with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| WordweaveError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn classify_status(response: &Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        match status.as_u16() {
            400 | 404 | 413 | 422 => Err(WordweaveError::InvalidRequest(format!(
                "Anthropic API rejected the request: {status}"
            ))),
            401 | 403 => Err(WordweaveError::AccessDenied),
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .map(Duration::from_secs);
                Err(WordweaveError::Throttled { retry_after })
            }
            code => Err(WordweaveError::Api {
                status: code,
                message: format!("Anthropic API error: {status}"),
            }),
        }
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn invoke(&self, prompt: &str, options: &InvokeOptions) -> Result<String> {
        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&MessagesRequest {
                model: &self.model,
                max_tokens: options.max_tokens,
                temperature: options.temperature,
                top_p: options.top_p,
                messages: [UserMessage {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .await?;

        Self::classify_status(&response)?;

        let body: MessagesResponse = response.json().await?;
        body.content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .filter(|text| !text.trim().is_empty())
            .ok_or(WordweaveError::EmptyResponse)
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    messages: [UserMessage<'a>; 1],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}
