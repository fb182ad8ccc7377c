//! External provider clients
//!
//! Everything "interesting" the application does is delegated: code runs on a
//! remote judge, assistant replies come from generative APIs, and the local
//! intent classifier is the terminal fallback when no remote provider is
//! available.

pub mod catalog;
pub mod gemini;
pub mod intent;
pub mod judge;
pub mod openai;

use async_trait::async_trait;

pub use gemini::GeminiProvider;
pub use judge::{HttpJudgeApi, JudgeApi};
pub use openai::OpenAiProvider;

/// A generative text provider in the assistant fallback chain.
///
/// Implementations are fully independent and must never propagate failures:
/// any transport error, non-2xx response, or empty extraction is reported as
/// `None` so the chain simply moves on to the next provider.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &'static str;

    /// Attempt to generate a reply for the question; `None` on any failure
    async fn try_generate(&self, question: &str) -> Option<String>;
}
