//! Assistant reply service
//!
//! Tries the configured generative providers in priority order and falls
//! back to the local intent classifier when none of them produces text. The
//! chain always yields a reply: a conversational endpoint should degrade, not
//! fail.

use std::sync::Arc;

use crate::constants::{FALLBACK_NOTICE, MSG_ASSISTANT_MESSAGE_REQUIRED, MSG_NO_TRAINED_ANSWER};
use crate::error::{AppError, AppResult};
use crate::models::AssistantReply;
use crate::providers::{intent, TextProvider};

/// Assistant reply service
pub struct AssistantService;

impl AssistantService {
    /// Produce a reply for the user's message.
    ///
    /// `message` is the raw value from the request body: absent, non-string,
    /// and empty values are all rejected with the same validation error.
    pub async fn reply(
        providers: &[Arc<dyn TextProvider>],
        message: Option<&str>,
    ) -> AppResult<AssistantReply> {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| AppError::Validation(MSG_ASSISTANT_MESSAGE_REQUIRED.to_string()))?;

        crate::utils::validation::validate_assistant_message(message)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // First provider to produce non-empty text wins; failures only log
        for provider in providers {
            if let Some(text) = provider.try_generate(message).await {
                tracing::debug!(provider = provider.name(), "Assistant reply generated");
                return Ok(AssistantReply {
                    text,
                    degraded: false,
                });
            }
            tracing::info!(
                provider = provider.name(),
                "Provider unavailable, falling through"
            );
        }

        // Terminal fallback: the local classifier always answers
        let answer = intent::classifier()
            .classify(message)
            .unwrap_or(MSG_NO_TRAINED_ANSWER);

        Ok(AssistantReply {
            text: format!("{answer}{FALLBACK_NOTICE}"),
            degraded: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Provider that always fails, counting how often it was tried
    struct DownProvider {
        calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl TextProvider for DownProvider {
        fn name(&self) -> &'static str {
            "down"
        }

        async fn try_generate(&self, _question: &str) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    /// Provider that always answers with a fixed string
    struct CannedProvider(&'static str);

    #[async_trait]
    impl TextProvider for CannedProvider {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn try_generate(&self, _question: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_missing_message_rejected() {
        let err = AssistantService::reply(&[], None).await.unwrap_err();
        assert_eq!(err.to_string(), MSG_ASSISTANT_MESSAGE_REQUIRED);

        let err = AssistantService::reply(&[], Some("   ")).await.unwrap_err();
        assert_eq!(err.to_string(), MSG_ASSISTANT_MESSAGE_REQUIRED);
    }

    #[tokio::test]
    async fn test_first_provider_wins() {
        let providers: Vec<Arc<dyn TextProvider>> = vec![
            Arc::new(CannedProvider("primary answer")),
            Arc::new(CannedProvider("secondary answer")),
        ];

        let reply = AssistantService::reply(&providers, Some("what is a graph"))
            .await
            .expect("reply");
        assert_eq!(reply.text, "primary answer");
        assert!(!reply.degraded);
    }

    #[tokio::test]
    async fn test_fallback_ordering_skips_failed_primary() {
        let calls = Arc::new(AtomicU32::new(0));
        let providers: Vec<Arc<dyn TextProvider>> = vec![
            Arc::new(DownProvider {
                calls: Arc::clone(&calls),
            }),
            Arc::new(CannedProvider("secondary answer")),
        ];

        let reply = AssistantService::reply(&providers, Some("what is a graph"))
            .await
            .expect("reply");

        // The primary was attempted, the secondary's content won, and a
        // remote answer is never marked degraded
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(reply.text, "secondary answer");
        assert!(!reply.degraded);
    }

    #[tokio::test]
    async fn test_terminal_fallback_is_degraded_with_notice() {
        let providers: Vec<Arc<dyn TextProvider>> = vec![
            Arc::new(DownProvider {
                calls: Arc::new(AtomicU32::new(0)),
            }),
            Arc::new(DownProvider {
                calls: Arc::new(AtomicU32::new(0)),
            }),
        ];

        let reply = AssistantService::reply(&providers, Some("what is big o notation"))
            .await
            .expect("reply");

        assert!(reply.degraded);
        assert!(!reply.text.is_empty());
        assert!(reply.text.contains("Big-O"));
        assert!(reply.text.contains("Offline assistant"));
    }

    #[tokio::test]
    async fn test_no_providers_configured_goes_straight_to_fallback() {
        let reply = AssistantService::reply(&[], Some("what is big o notation"))
            .await
            .expect("reply");
        assert!(reply.degraded);
        assert!(reply.text.contains("Big-O"));
    }

    #[tokio::test]
    async fn test_unmatched_question_gets_generic_fallback() {
        let reply = AssistantService::reply(&[], Some("pineapple pizza delivery tonight"))
            .await
            .expect("reply");
        assert!(reply.degraded);
        assert!(reply.text.contains("don't have a trained answer"));
        assert!(reply.text.contains("Offline assistant"));
    }
}
