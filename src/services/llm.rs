// src/services/llm.rs
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::Language;
use crate::services::prompt;
use crate::services::session_manager::{Message, MessageRole};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned {0}")]
    Provider(reqwest::StatusCode),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for an OpenAI-compatible chat-completions endpoint. The
/// system prompt is fixed to the election domain; only the language
/// instruction varies per request.
#[derive(Debug, Clone)]
pub struct LlmClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl LlmClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
            client,
        }
    }

    /// One non-streaming completion: system prompt, prior session turns,
    /// then the new user message.
    pub async fn complete(
        &self,
        language: Language,
        history: &[Message],
        user_text: &str,
    ) -> Result<String, LlmError> {
        let system = prompt::system_prompt(language);

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(WireMessage {
            role: "system",
            content: &system,
        });
        for turn in history {
            messages.push(WireMessage {
                role: match turn.role {
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                },
                content: &turn.content,
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: user_text,
        });

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        tracing::debug!(model = %self.model, lang = language.code(), "requesting completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                temperature: self.temperature,
                messages,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LlmError::Provider(response.status()));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let reply = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if reply.trim().is_empty() {
            return Err(LlmError::InvalidResponse("empty completion".to_string()));
        }

        Ok(reply)
    }
}
