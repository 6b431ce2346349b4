//! Anthropic API client
//!
//! Default [`Generator`] backend. Each invocation is stateless: one
//! instruction in, one completion out, no conversation history. Rate limits
//! and server errors are retried with exponential backoff below the
//! capability boundary; everything else surfaces as a generation error.

use crate::auth;
use crate::generator::Generator;
use crate::types::{AnthropicMessage, AnthropicRequest, AnthropicResponse, Model};
use async_trait::async_trait;
use promo_core::{PromoError, Result};
use std::time::Duration;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: usize = 1024;

// Rate limit retry configuration
const MAX_RETRIES: u32 = 5;
const INITIAL_BACKOFF_SECS: u64 = 5;
const MAX_BACKOFF_SECS: u64 = 60;

/// Generator backend for the Anthropic API
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    model: Model,
    max_tokens: usize,
    api_key_env: String,
}

impl AnthropicClient {
    /// Create a new client for the given model
    pub fn new(model: Model) -> Self {
        Self {
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            api_key_env: auth::DEFAULT_API_KEY_ENV.to_string(),
        }
    }

    /// Set max tokens for responses
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the environment variable consulted for the API key
    pub fn with_api_key_env(mut self, env_var: impl Into<String>) -> Self {
        self.api_key_env = env_var.into();
        self
    }

    async fn send(&self, instruction: &str) -> Result<String> {
        let api_key = auth::get_api_key(&self.api_key_env)?;

        let request = AnthropicRequest {
            model: self.model.api_name().to_string(),
            max_tokens: self.max_tokens,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: instruction.to_string(),
            }],
        };

        // Retry loop with exponential backoff for rate limits
        let mut retries = 0;
        let mut backoff_secs = INITIAL_BACKOFF_SECS;

        loop {
            tracing::debug!("Sending request to Anthropic API (attempt {})", retries + 1);

            let client = reqwest::Client::new();
            let response = client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(|e| PromoError::Generation(format!("Failed to send request: {}", e)))?;

            let status = response.status();

            // Handle rate limit (429) with retry
            if status.as_u16() == 429 {
                retries += 1;

                if retries > MAX_RETRIES {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown".to_string());
                    return Err(PromoError::ApiLimit(format!(
                        "Rate limit exceeded after {} retries. Last error: {}",
                        MAX_RETRIES, error_text
                    )));
                }

                // Parse retry-after header if present, otherwise use exponential backoff
                let wait_secs = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(backoff_secs);

                tracing::warn!(
                    "Rate limited (429). Waiting {} seconds before retry {}/{}",
                    wait_secs,
                    retries,
                    MAX_RETRIES
                );

                tokio::time::sleep(Duration::from_secs(wait_secs)).await;
                backoff_secs = (backoff_secs * 2).min(MAX_BACKOFF_SECS);
                continue;
            }

            // Handle other errors
            if !status.is_success() {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown".to_string());

                // Retry on 5xx errors
                if status.is_server_error() && retries < MAX_RETRIES {
                    retries += 1;
                    tracing::warn!(
                        "Server error ({}). Waiting {} seconds before retry {}/{}",
                        status,
                        backoff_secs,
                        retries,
                        MAX_RETRIES
                    );
                    tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                    backoff_secs = (backoff_secs * 2).min(MAX_BACKOFF_SECS);
                    continue;
                }

                return Err(PromoError::Generation(format!(
                    "Anthropic API error {}: {}",
                    status, error_text
                )));
            }

            // Success - parse response
            let anthropic_response: AnthropicResponse = response
                .json()
                .await
                .map_err(|e| PromoError::Generation(format!("Failed to parse response: {}", e)))?;

            let output = anthropic_response
                .content
                .first()
                .ok_or_else(|| PromoError::Generation("No content in response".to_string()))?
                .text
                .clone();

            if let Some(usage) = &anthropic_response.usage {
                tracing::info!(
                    "Generation complete ({} chars, {} input tokens, {} output tokens)",
                    output.len(),
                    usage.input_tokens,
                    usage.output_tokens
                );
            } else {
                tracing::info!("Generation complete ({} chars)", output.len());
            }

            return Ok(output);
        }
    }
}

impl Default for AnthropicClient {
    fn default() -> Self {
        Self::new(Model::default())
    }
}

#[async_trait]
impl Generator for AnthropicClient {
    async fn invoke(&self, instruction: &str) -> Result<String> {
        self.send(instruction).await
    }
}
