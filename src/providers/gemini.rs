//! Secondary generative provider (Gemini-style generateContent)
//!
//! This API has no separate system role on the v1beta surface, so the tutor
//! instruction is prepended to the user text. The response schema also varies
//! across models, so text extraction tries several shapes before giving up.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::warn;

use crate::constants::PROVIDER_REQUEST_TIMEOUT_SECS;

use super::TextProvider;

const PROMPT_TEMPLATE: &str = "You are a tutor for data structures and algorithms. Answer the \
    student's question below clearly and concisely, with complexity analysis where relevant.\n\n\
    Question: ";

/// Gemini generateContent client
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
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
        })
    }

    async fn generate(&self, question: &str) -> Result<String, String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{ "text": format!("{PROMPT_TEMPLATE}{question}") }],
            }],
            "generationConfig": { "temperature": 0.3 },
        });

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(format!("HTTP {status}: {text}"));
        }

        let payload: Value = res.json().await.map_err(|e| e.to_string())?;
        extract_text(&payload).ok_or_else(|| "no text in response".to_string())
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn try_generate(&self, question: &str) -> Option<String> {
        match self.generate(question).await {
            Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
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

/// Pull reply text out of a generateContent response.
///
/// Known shapes, newest first:
///   - `candidates[0].content.parts[*].text` (current)
///   - `candidates[0].content.text` (some fine-tuned models)
///   - `candidates[0].output` (legacy)
fn extract_text(payload: &Value) -> Option<String> {
    let candidate = payload.get("candidates")?.get(0)?;

    if let Some(parts) = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array)
    {
        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Some(text);
        }
    }

    if let Some(text) = candidate
        .get("content")
        .and_then(|c| c.get("text"))
        .and_then(Value::as_str)
    {
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    if let Some(text) = candidate.get("output").and_then(Value::as_str) {
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_parts_shape() {
        let payload = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "A hash map " }, { "text": "is O(1) on average." }],
                },
            }],
        });
        assert_eq!(
            extract_text(&payload).as_deref(),
            Some("A hash map is O(1) on average.")
        );
    }

    #[test]
    fn test_extract_legacy_output_shape() {
        let payload = json!({ "candidates": [{ "output": "Use two pointers." }] });
        assert_eq!(extract_text(&payload).as_deref(), Some("Use two pointers."));
    }

    #[test]
    fn test_extract_missing_text() {
        let payload = json!({ "candidates": [{ "content": { "parts": [] } }] });
        assert_eq!(extract_text(&payload), None);

        let payload = json!({ "candidates": [] });
        assert_eq!(extract_text(&payload), None);
    }
}
