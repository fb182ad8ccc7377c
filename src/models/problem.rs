//! Problem catalog models

use serde::{Deserialize, Serialize};

/// A catalog entry: a link to an external problem with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A catalog entry combined with the requesting user's solved status
#[derive(Debug, Clone, Serialize)]
pub struct ProblemWithStatus {
    #[serde(flatten)]
    pub problem: Problem,
    pub solved: bool,
}
