//! Problem handler implementations

use std::collections::HashSet;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::{problem_service::ProblemFilter, AccountService, ProblemService},
    state::AppState,
};

use super::{
    request::{ListProblemsQuery, SolvedRequest},
    response::{ProblemsListResponse, SolvedResponse},
};

/// List the problem catalog (paginated).
///
/// With a valid bearer token the listing carries the caller's solved status;
/// anonymous callers get `solved: false` everywhere.
pub async fn list_problems(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    if let Some(difficulty) = &query.difficulty {
        crate::utils::validation::validate_difficulty(&difficulty.to_lowercase())
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let solved: HashSet<String> = match auth_user {
        Some(user) => AccountService::get_profile(state.store(), &user.uid)
            .await
            .map(|record| record.solved.into_iter().collect())
            .unwrap_or_default(),
        None => HashSet::new(),
    };

    let filter = ProblemFilter {
        search: query.search,
        difficulty: query.difficulty,
        tag: query.tag,
    };
    let (problems, total) = ProblemService::list(&filter, &solved, page, per_page);

    Ok(Json(ProblemsListResponse {
        problems,
        total,
        page,
        per_page,
    }))
}

/// Mark or unmark a catalog problem as solved
pub async fn set_solved(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(payload): Json<SolvedRequest>,
) -> AppResult<Json<SolvedResponse>> {
    // Reject ids that are not in the catalog
    ProblemService::find(&id)?;

    let solved_ids = AccountService::set_solved(state.store(), &user.uid, &id, payload.solved).await?;

    Ok(Json(SolvedResponse {
        problem_id: id,
        solved: payload.solved,
        solved_ids,
    }))
}
