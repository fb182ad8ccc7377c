//! Code execution service
//!
//! Orchestrates a single run against the remote judge. With authenticated
//! host credentials the submission is created without waiting and then polled
//! on a fixed schedule; without them a single blocking call goes to the
//! public endpoint and its output fields are decoded before returning.

use std::time::Duration;

use crate::constants::{
    JUDGE_POLL_INTERVAL_MS, JUDGE_POLL_MAX_ATTEMPTS, MSG_EXECUTION_FIELDS_REQUIRED,
};
use crate::error::{AppError, AppResult};
use crate::models::{ExecutionResult, JudgeSubmission};
use crate::providers::JudgeApi;
use crate::utils::validation::{validate_source_code, validate_stdin};

/// Raw execution input as received from the caller
#[derive(Debug, Clone, Default)]
pub struct ExecutionInput {
    pub language_id: Option<i64>,
    pub source_code: Option<String>,
    pub stdin: Option<String>,
}

/// Code execution service
pub struct ExecutionService;

impl ExecutionService {
    /// Run a submission to completion and return the judge's result
    pub async fn execute(judge: &dyn JudgeApi, input: ExecutionInput) -> AppResult<ExecutionResult> {
        let submission = Self::validate(input)?;

        if judge.has_authenticated_host() {
            Self::execute_polling(judge, &submission).await
        } else {
            // The public endpoint blocks until completion; its base64 output
            // is decoded here so callers of this path get readable text
            let result = judge.submit_blocking(&submission).await?;
            Ok(result.into_decoded())
        }
    }

    fn validate(input: ExecutionInput) -> AppResult<JudgeSubmission> {
        let language_id = input
            .language_id
            .ok_or_else(|| AppError::Validation(MSG_EXECUTION_FIELDS_REQUIRED.to_string()))?;
        let source_code = input
            .source_code
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation(MSG_EXECUTION_FIELDS_REQUIRED.to_string()))?;

        validate_source_code(&source_code).map_err(|e| AppError::Validation(e.to_string()))?;
        if let Some(stdin) = &input.stdin {
            validate_stdin(stdin).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        Ok(JudgeSubmission {
            language_id,
            source_code,
            stdin: input.stdin,
        })
    }

    /// Submit without waiting, then poll on a bounded fixed-interval schedule.
    ///
    /// Exhausting the schedule is a timeout, never a partial result.
    async fn execute_polling(
        judge: &dyn JudgeApi,
        submission: &JudgeSubmission,
    ) -> AppResult<ExecutionResult> {
        let token = judge.submit(submission).await?;
        tracing::debug!(token = %token, "Submission created, polling for verdict");

        for attempt in 1..=JUDGE_POLL_MAX_ATTEMPTS {
            tokio::time::sleep(Duration::from_millis(JUDGE_POLL_INTERVAL_MS)).await;

            let result = judge.fetch(&token).await?;
            if result.is_terminal() {
                tracing::debug!(
                    token = %token,
                    attempt,
                    status = result.status.id,
                    "Submission resolved"
                );
                return Ok(result);
            }
        }

        tracing::warn!(token = %token, "Submission still processing after final poll");
        Err(AppError::ExecutionTimeout)
    }
}
