//! Primary generative provider (OpenAI-compatible chat completions)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::PROVIDER_REQUEST_TIMEOUT_SECS;

use super::TextProvider;

/// Fixed tutor preamble; the user's question is passed as its own message
const SYSTEM_PROMPT: &str = "You are a concise tutor for data structures and algorithms. \
    Explain concepts clearly with short examples, state time and space complexity where \
    relevant, and nudge the student toward the insight instead of dumping full solutions \
    unless they explicitly ask for one.";

/// OpenAI chat-completions client
#[derive(Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Build the provider; `None` when no usable HTTP client can be made
    pub fn new(api_key: String, model: String) -> Option<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(PROVIDER_REQUEST_TIMEOUT_SECS))
            .build()
            .ok()?;

        Some(Self {
            client,
            api_key,
            model,
            base_url: "https://api.openai.com/v1".to_string(),
        })
    }

    async fn chat(&self, question: &str) -> Result<String, String> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: 0.3,
        };

        let res = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&req)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("HTTP {status}: {body}"));
        }

        let body: ChatCompletionResponse = res.json().await.map_err(|e| e.to_string())?;
        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default()
            .trim()
            .to_string();

        Ok(text)
    }
}

#[async_trait]
impl TextProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn try_generate(&self, question: &str) -> Option<String> {
        match self.chat(question).await {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => {
                warn!(provider = self.name(), "Provider returned empty text");
                None
            }
            Err(e) => {
                warn!(provider = self.name(), error = %e, "Provider call failed");
                None
            }
        }
    }
}
