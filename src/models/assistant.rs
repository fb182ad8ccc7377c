//! Assistant reply model

use serde::Serialize;

/// A reply produced by the assistant orchestrator.
///
/// `degraded` is true when the text came from the local fallback responder
/// rather than a remote model.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub text: String,
    pub degraded: bool,
}

/// A fixed question/answer pair used to train the local fallback responder
#[derive(Debug, Clone, Copy)]
pub struct TrainingPair {
    pub question: &'static str,
    pub answer: &'static str,
}
