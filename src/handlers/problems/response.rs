//! Problem response DTOs

use serde::Serialize;

use crate::models::ProblemWithStatus;

/// Paginated catalog listing
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemWithStatus>,
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
}

/// Solved status update result
#[derive(Debug, Serialize)]
pub struct SolvedResponse {
    pub problem_id: String,
    pub solved: bool,
    /// The user's full solved list after the update
    pub solved_ids: Vec<String>,
}
