//! Authentication extractors
//!
//! Protected endpoints take a bearer session token issued by the identity
//! provider. Tokens are verified by asking the provider itself (token
//! lookup), so no key material lives in this service.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use crate::{error::AppError, state::AppState};

/// Authenticated user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    /// The verified session token, kept for provider calls made on the
    /// user's behalf (display-name sync, account deletion)
    pub id_token: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            debug!(path = %parts.uri.path(), "Auth failed: missing or malformed Authorization header");
            AppError::Unauthorized
        })?;

        let account = state.identity().lookup(&token).await.map_err(|e| {
            debug!(path = %parts.uri.path(), error = %e, "Auth failed: token lookup rejected");
            e
        })?;

        debug!(path = %parts.uri.path(), uid = %account.uid, "Token verified");

        Ok(AuthenticatedUser {
            uid: account.uid,
            email: account.email,
            display_name: account.display_name,
            id_token: token,
        })
    }
}

/// Optional authenticated user wrapper (never fails).
///
/// An invalid token is treated the same as no token: the endpoint serves its
/// anonymous view.
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(
            AuthenticatedUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
