//! Managed identity provider
//!
//! Accounts and credentials are owned by an external identity service; this
//! module wraps its REST API behind a trait. Provider error codes are mapped
//! to a small fixed set of caller-facing errors so upstream internals never
//! leak through.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::FirebaseConfig;
use crate::constants::IDENTITY_REQUEST_TIMEOUT_SECS;
use crate::error::{AppError, AppResult};

/// A provider account as seen through token lookup
#[derive(Debug, Clone)]
pub struct IdentityAccount {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// A signed-in session returned by account creation or password sign-in
#[derive(Debug, Clone)]
pub struct IdentitySession {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
}

/// Managed identity provider operations used by the account flows
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an email+password account; returns a signed-in session
    async fn create_account(&self, email: &str, password: &str) -> AppResult<IdentitySession>;

    /// Delete the account owning the given session token.
    /// Used as the compensating action when profile creation fails.
    async fn delete_account(&self, id_token: &str) -> AppResult<()>;

    /// Password sign-in
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<IdentitySession>;

    /// Resolve a session token to its account; fails on invalid/expired tokens
    async fn lookup(&self, id_token: &str) -> AppResult<IdentityAccount>;

    /// Update the provider-side display name for the session's account
    async fn update_display_name(&self, id_token: &str, display_name: &str) -> AppResult<()>;
}

/// Firebase-style identity toolkit REST client
#[derive(Clone)]
pub struct FirebaseIdentity {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl FirebaseIdentity {
    /// Build an identity client from the Firebase configuration
    pub fn new(config: &FirebaseConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(IDENTITY_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Configuration(format!("identity client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "https://identitytoolkit.googleapis.com/v1/accounts:{}?key={}",
            action, self.api_key
        )
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> AppResult<T> {
        let res = self
            .client
            .post(self.endpoint(action))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Identity(format!("accounts:{action}: {e}")))?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(map_provider_error(&text));
        }

        res.json()
            .await
            .map_err(|e| AppError::Identity(format!("accounts:{action}: {e}")))
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentity {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<IdentitySession> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let session: SessionResponse = self.post("signUp", body).await?;
        Ok(session.into())
    }

    async fn delete_account(&self, id_token: &str) -> AppResult<()> {
        let body = json!({ "idToken": id_token });
        let _: serde_json::Value = self.post("delete", body).await?;
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<IdentitySession> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let session: SessionResponse = self.post("signInWithPassword", body).await?;
        Ok(session.into())
    }

    async fn lookup(&self, id_token: &str) -> AppResult<IdentityAccount> {
        let body = json!({ "idToken": id_token });
        let lookup: LookupResponse = self.post("lookup", body).await?;
        let user = lookup.users.into_iter().next().ok_or(AppError::InvalidToken)?;

        Ok(IdentityAccount {
            uid: user.local_id,
            email: user.email,
            display_name: user.display_name,
        })
    }

    async fn update_display_name(&self, id_token: &str, display_name: &str) -> AppResult<()> {
        let body = json!({
            "idToken": id_token,
            "displayName": display_name,
            "returnSecureToken": false,
        });
        let _: serde_json::Value = self.post("update", body).await?;
        Ok(())
    }
}

impl From<SessionResponse> for IdentitySession {
    fn from(res: SessionResponse) -> Self {
        Self {
            uid: res.local_id,
            email: res.email,
            id_token: res.id_token,
            refresh_token: res.refresh_token,
        }
    }
}

/// Map a provider error body to a caller-facing error.
///
/// The provider reports machine codes like `EMAIL_EXISTS`; everything not
/// explicitly mapped collapses to a generic message, with the raw body logged
/// server-side.
fn map_provider_error(body: &str) -> AppError {
    #[derive(Deserialize)]
    struct ErrorWrap {
        error: ErrorBody,
    }
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: String,
    }

    let code = serde_json::from_str::<ErrorWrap>(body)
        .map(|w| w.error.message)
        .unwrap_or_default();

    // Codes may carry a suffix, e.g. "WEAK_PASSWORD : Password should be ..."
    let base = code.split_whitespace().next().unwrap_or("");

    match base {
        "EMAIL_EXISTS" => AppError::EmailTaken,
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            AppError::InvalidCredentials
        }
        "INVALID_EMAIL" => AppError::Validation("Invalid email address".to_string()),
        "WEAK_PASSWORD" => {
            AppError::Validation("Password should be at least 6 characters".to_string())
        }
        "USER_DISABLED" => AppError::Identity("This account has been disabled".to_string()),
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" => AppError::InvalidToken,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            AppError::Identity("Too many attempts, please try again later".to_string())
        }
        _ => {
            tracing::error!(provider_error = %body, "Unmapped identity provider error");
            AppError::Identity("Authentication service error".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_body(code: &str) -> String {
        format!(r#"{{"error":{{"code":400,"message":"{code}"}}}}"#)
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            map_provider_error(&provider_body("EMAIL_EXISTS")),
            AppError::EmailTaken
        ));
        assert!(matches!(
            map_provider_error(&provider_body("INVALID_LOGIN_CREDENTIALS")),
            AppError::InvalidCredentials
        ));
        assert!(matches!(
            map_provider_error(&provider_body("TOKEN_EXPIRED")),
            AppError::InvalidToken
        ));
    }

    #[test]
    fn test_error_mapping_with_suffix() {
        let body = provider_body("WEAK_PASSWORD : Password should be at least 6 characters.");
        assert!(matches!(map_provider_error(&body), AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_code_is_generic() {
        let err = map_provider_error(&provider_body("SOMETHING_NEW"));
        match err {
            AppError::Identity(msg) => assert_eq!(msg, "Authentication service error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
