//! Account handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{account_service::ProfileUpdate, AccountService},
    state::AppState,
};

use super::{
    request::{LoginRequest, SignupRequest, UpdateProfileRequest},
    response::{CurrentUserResponse, LoginResponse, SignupResponse},
};

/// Create an account
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    payload.validate()?;

    let record = AccountService::sign_up(
        state.store(),
        state.identity(),
        &payload.username,
        &payload.email,
        &payload.password,
    )
    .await?;

    let response = SignupResponse {
        message: "Account created, please log in".to_string(),
        user: record.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Log in with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let (session, record) = AccountService::sign_in(
        state.store(),
        state.identity(),
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse {
        id_token: session.id_token,
        refresh_token: session.refresh_token,
        token_type: "Bearer".to_string(),
        user: record.into(),
    }))
}

/// Get the authenticated user's profile
pub async fn get_current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let record = AccountService::get_profile(state.store(), &user.uid).await?;

    Ok(Json(CurrentUserResponse {
        user: record.into(),
    }))
}

/// Update the authenticated user's profile
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<CurrentUserResponse>> {
    payload.validate()?;

    let record = AccountService::update_profile(
        state.store(),
        state.identity(),
        &user.id_token,
        &user.uid,
        &user.email,
        ProfileUpdate {
            username: payload.username,
            name: payload.name,
            dob: payload.dob,
        },
    )
    .await?;

    Ok(Json(CurrentUserResponse {
        user: record.into(),
    }))
}
