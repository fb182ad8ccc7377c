//! Execution models shared with the remote judge

use serde::{Deserialize, Serialize};

use crate::constants::{JUDGE_STATUS_FIRST_FAILURE, JUDGE_STATUS_PROCESSING_MAX, MSG_NO_OUTPUT};
use crate::utils::encoding::decode_base64_lossy;

/// A code submission bound for the remote judge
#[derive(Debug, Clone, Serialize)]
pub struct JudgeSubmission {
    pub language_id: i64,
    pub source_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin: Option<String>,
}

/// Verdict status reported by the judge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub id: i64,
    pub description: String,
}

impl Default for ExecutionStatus {
    fn default() -> Self {
        Self {
            id: 0,
            description: "Unknown".to_string(),
        }
    }
}

/// Full submission result in the judge's wire shape.
///
/// Output fields arrive base64-encoded; the synchronous fallback path decodes
/// them before responding while the asynchronous path passes them through
/// as-is for the caller to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    pub time: Option<String>,
    pub memory: Option<f64>,
    #[serde(default)]
    pub status: ExecutionStatus,
}

impl ExecutionResult {
    /// True once the judge has stopped processing this submission
    pub fn is_terminal(&self) -> bool {
        self.status.id > JUDGE_STATUS_PROCESSING_MAX
    }

    /// True when the run should be reported as an error: a compile-error-or-worse
    /// verdict, or any diagnostic text on stderr/compile output
    pub fn is_failure(&self) -> bool {
        self.status.id >= JUDGE_STATUS_FIRST_FAILURE
            || non_empty(&self.stderr)
            || non_empty(&self.compile_output)
    }

    /// The text a caller should surface for this result: the error output for
    /// failures, otherwise stdout (or a canned no-output message)
    pub fn diagnostic(&self) -> String {
        if self.is_failure() {
            for field in [&self.compile_output, &self.stderr, &self.message] {
                if let Some(text) = field {
                    if !text.trim().is_empty() {
                        return text.clone();
                    }
                }
            }
            return self.status.description.clone();
        }

        match &self.stdout {
            Some(out) if !out.is_empty() => out.clone(),
            _ => MSG_NO_OUTPUT.to_string(),
        }
    }

    /// Decode the base64-encoded output fields in place.
    ///
    /// Decoding is defensive: a malformed payload keeps its raw string so the
    /// caller always gets some diagnostic text.
    pub fn into_decoded(mut self) -> Self {
        for field in [
            &mut self.stdout,
            &mut self.stderr,
            &mut self.compile_output,
            &mut self.message,
        ] {
            if let Some(value) = field.take() {
                *field = Some(decode_base64_lossy(&value));
            }
        }
        self
    }
}

fn non_empty(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_status(id: i64) -> ExecutionResult {
        ExecutionResult {
            status: ExecutionStatus {
                id,
                description: "test".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_terminal_detection() {
        assert!(!result_with_status(1).is_terminal()); // In Queue
        assert!(!result_with_status(2).is_terminal()); // Processing
        assert!(result_with_status(3).is_terminal()); // Accepted
        assert!(result_with_status(6).is_terminal()); // Compilation Error
    }

    #[test]
    fn test_failure_classification() {
        // Accepted with clean streams is not a failure
        assert!(!result_with_status(3).is_failure());

        // Compile-error-or-worse status ids are failures
        assert!(result_with_status(6).is_failure());
        assert!(result_with_status(11).is_failure());

        // Any stderr text makes an otherwise-accepted run a failure
        let mut r = result_with_status(3);
        r.stderr = Some("warning: overflow".to_string());
        assert!(r.is_failure());

        // Whitespace-only streams do not count
        let mut r = result_with_status(3);
        r.stderr = Some("  \n".to_string());
        assert!(!r.is_failure());
    }

    #[test]
    fn test_diagnostic_prefers_compile_output() {
        let mut r = result_with_status(6);
        r.compile_output = Some("main.c:1: error".to_string());
        r.stderr = Some("also failed".to_string());
        assert_eq!(r.diagnostic(), "main.c:1: error");
    }

    #[test]
    fn test_diagnostic_no_output() {
        let r = result_with_status(3);
        assert_eq!(r.diagnostic(), MSG_NO_OUTPUT);
    }

    #[test]
    fn test_into_decoded_keeps_malformed_fields() {
        let mut r = result_with_status(3);
        r.stdout = Some("aGkK".to_string()); // "hi\n"
        r.stderr = Some("%%not-base64%%".to_string());
        let decoded = r.into_decoded();
        assert_eq!(decoded.stdout.as_deref(), Some("hi\n"));
        assert_eq!(decoded.stderr.as_deref(), Some("%%not-base64%%"));
    }
}
