//! OpenRouter Provider
//!
//! Remote analysis over OpenRouter's OpenAI-compatible Chat Completions API.
//! Requests opt out of training and data collection.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::RemoteAnalyzer;
use crate::ai::prompt::{SYSTEM_PROMPT, lexical_analysis_prompt};
use crate::config::RemoteConfig;
use crate::constants::{network, remote};
use crate::lexer::LanguageId;
use crate::types::{LexError, Result};

/// OpenRouter provider with secure API key handling
pub struct OpenRouterProvider {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    endpoint: url::Url,
    model: String,
    temperature: f32,
    site_url: String,
    site_name: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenRouterProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterProvider")
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl OpenRouterProvider {
    pub fn new(config: &RemoteConfig, api_key: String) -> Result<Self> {
        let endpoint = chat_completions_url(&config.api_base)?;

        // The orchestrator applies the overall bound; this one catches a
        // stalled connection when the provider is used on its own
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(network::CONNECTION_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                LexError::RemoteUnavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            endpoint,
            model: config.model.clone(),
            temperature: config.temperature,
            site_url: config.site_url.clone(),
            site_name: config.site_name.clone(),
            client,
        })
    }

    fn build_request(&self, source: &str, language: LanguageId) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: lexical_analysis_prompt(language, source),
                },
            ],
            temperature: self.temperature,
            allow_training: false,
            data_policy: DataPolicy::default(),
        }
    }
}

/// `{api_base}/chat/completions`, tolerating a trailing slash on the base
fn chat_completions_url(api_base: &str) -> Result<url::Url> {
    let base = format!("{}/", api_base.trim_end_matches('/'));
    url::Url::parse(&base)
        .and_then(|u| u.join("chat/completions"))
        .map_err(|e| LexError::Config(format!("Invalid api_base '{}': {}", api_base, e)))
}

/// Pull the assistant message out of a completion body
fn extract_content(body: ChatCompletionResponse) -> Result<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| {
            LexError::MalformedRemoteResponse("No content in OpenRouter response".to_string())
        })
}

fn preview(text: &str) -> String {
    text.chars().take(remote::PREVIEW_CHARS).collect()
}

#[async_trait]
impl RemoteAnalyzer for OpenRouterProvider {
    async fn analyze(&self, source: &str, language: LanguageId) -> Result<String> {
        info!(
            "Analyzing with OpenRouter (model: {}, language: {})",
            self.model, language
        );

        let start_time = Instant::now();
        let request = self.build_request(source, language);

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose_secret())
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", &self.site_name)
            .json(&request)
            .send()
            .await
            .map_err(|e| LexError::RemoteUnavailable(format!("OpenRouter request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "OpenRouter API error");
            return Err(LexError::RemoteUnavailable(format!(
                "OpenRouter API error ({}): {}",
                status,
                preview(&body)
            )));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            LexError::MalformedRemoteResponse(format!("Failed to parse OpenRouter response: {}", e))
        })?;

        debug!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Received response from OpenRouter"
        );
        extract_content(body)
    }

    fn name(&self) -> &str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    allow_training: bool,
    data_policy: DataPolicy,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Opt-out flags; all stay `false`
#[derive(Debug, Default, Serialize)]
struct DataPolicy {
    allow_collection: bool,
    allow_search_index: bool,
    allow_prompt_training: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
