// src/llm/openai.rs
// OpenAI chat completions client

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

use super::provider::Completions;
use crate::error::{PersonaError, Result};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for the OpenAI chat completions endpoint
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl OpenAiClient {
    /// `api_base` is the versioned API root, e.g. https://api.openai.com/v1
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: api_base.into(),
        }
    }
}

#[async_trait]
impl Completions for OpenAiClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        model: &str,
        temperature: f64,
    ) -> Result<String> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        let url = format!("{}/chat/completions", self.api_base);

        let body = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
        };

        debug!(
            request_id = %request_id,
            model = %model,
            prompt_chars = user.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                request_id = %request_id,
                status = %status,
                "chat completion request failed"
            );
            return Err(PersonaError::Completion(format!(
                "API request failed with status {status}: {detail}"
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                PersonaError::Completion("response contained no choices".to_string())
            })?;

        debug!(
            request_id = %request_id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "chat completion succeeded"
        );
        Ok(content)
    }
}
