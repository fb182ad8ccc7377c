//! Remote judge client
//!
//! Two wire paths against a Judge0-compatible API: an authenticated
//! submit/poll pair when host credentials are configured, and a blocking
//! `wait=true` call against the public endpoint otherwise. Source and stdin
//! travel base64-encoded on both paths (the public endpoint requires it, the
//! authenticated host tolerates it), and results come back base64-encoded for
//! the caller to decode.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::JudgeConfig;
use crate::constants::JUDGE_REQUEST_TIMEOUT_SECS;
use crate::error::{AppError, AppResult};
use crate::models::{ExecutionResult, JudgeSubmission};
use crate::utils::encoding::encode_base64;

/// Judge wire operations, split from the orchestration loop so the loop can
/// be exercised against fakes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JudgeApi: Send + Sync {
    /// True when the authenticated high-limit host is configured
    fn has_authenticated_host(&self) -> bool;

    /// Create a submission without waiting; returns the submission token
    async fn submit(&self, submission: &JudgeSubmission) -> AppResult<String>;

    /// Fetch the current state of a submission by token
    async fn fetch(&self, token: &str) -> AppResult<ExecutionResult>;

    /// Submit to the public endpoint and block until the run completes
    async fn submit_blocking(&self, submission: &JudgeSubmission) -> AppResult<ExecutionResult>;
}

/// HTTP judge client
#[derive(Clone)]
pub struct HttpJudgeApi {
    client: reqwest::Client,
    config: JudgeConfig,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    token: String,
}

impl HttpJudgeApi {
    /// Build a judge client from configuration
    pub fn new(config: JudgeConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(JUDGE_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Configuration(format!("judge client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Request body with source and stdin base64-encoded
    fn encoded_body(submission: &JudgeSubmission) -> serde_json::Value {
        json!({
            "language_id": submission.language_id,
            "source_code": encode_base64(&submission.source_code),
            "stdin": submission.stdin.as_deref().map(encode_base64),
        })
    }

    /// Attach the authenticated host's API headers
    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut req = req;
        if let Some(key) = &self.config.api_key {
            req = req.header("X-RapidAPI-Key", key);
        }
        if let Some(host) = &self.config.host {
            req = req.header("X-RapidAPI-Host", host);
        }
        req
    }

    /// Surface a provider failure as its status code + message
    async fn provider_error(res: reqwest::Response) -> AppError {
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        let message = extract_provider_message(&body).unwrap_or(body);
        AppError::Judge { status, message }
    }
}

#[async_trait]
impl JudgeApi for HttpJudgeApi {
    fn has_authenticated_host(&self) -> bool {
        self.config.has_authenticated_host()
    }

    async fn submit(&self, submission: &JudgeSubmission) -> AppResult<String> {
        let host = self.config.host.as_deref().ok_or_else(|| {
            AppError::Configuration("authenticated judge host is not configured".to_string())
        })?;
        let url = format!("https://{host}/submissions?base64_encoded=true&wait=false&fields=*");

        let res = self
            .authed(self.client.post(&url))
            .json(&Self::encoded_body(submission))
            .send()
            .await
            .map_err(transport_error)?;

        if !res.status().is_success() {
            return Err(Self::provider_error(res).await);
        }

        let submitted: SubmitResponse = res.json().await.map_err(|e| AppError::Judge {
            status: 502,
            message: format!("malformed submit response: {e}"),
        })?;

        Ok(submitted.token)
    }

    async fn fetch(&self, token: &str) -> AppResult<ExecutionResult> {
        let host = self.config.host.as_deref().ok_or_else(|| {
            AppError::Configuration("authenticated judge host is not configured".to_string())
        })?;
        let url = format!("https://{host}/submissions/{token}?base64_encoded=true&fields=*");

        let res = self
            .authed(self.client.get(&url))
            .send()
            .await
            .map_err(transport_error)?;

        if !res.status().is_success() {
            return Err(Self::provider_error(res).await);
        }

        res.json().await.map_err(|e| AppError::Judge {
            status: 502,
            message: format!("malformed submission response: {e}"),
        })
    }

    async fn submit_blocking(&self, submission: &JudgeSubmission) -> AppResult<ExecutionResult> {
        let url = format!(
            "{}/submissions?base64_encoded=true&wait=true&fields=*",
            self.config.public_url
        );

        let res = self
            .client
            .post(&url)
            .json(&Self::encoded_body(submission))
            .send()
            .await
            .map_err(transport_error)?;

        if !res.status().is_success() {
            return Err(Self::provider_error(res).await);
        }

        res.json().await.map_err(|e| AppError::Judge {
            status: 502,
            message: format!("malformed submission response: {e}"),
        })
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::Judge {
        status: err
            .status()
            .map(|s| s.as_u16())
            .unwrap_or(502),
        message: err.to_string(),
    }
}

/// Try to pull a clean message out of a judge error body
fn extract_provider_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(alias = "message")]
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body).ok()?.error
}
