//! Problem catalog service
//!
//! The catalog is static JSON shipped with the binary; per-user solved status
//! comes from the profile document and is merged into listings at request
//! time.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{AppError, AppResult};
use crate::models::{Problem, ProblemWithStatus};

/// Embedded problem catalog, parsed once per process
static CATALOG: LazyLock<Vec<Problem>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../data/problems.json"))
        .expect("embedded problem catalog is valid JSON")
});

/// Catalog listing filters
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub tag: Option<String>,
}

/// Problem catalog service
pub struct ProblemService;

impl ProblemService {
    /// The full catalog
    pub fn catalog() -> &'static [Problem] {
        &CATALOG
    }

    /// Look up a catalog entry by id
    pub fn find(problem_id: &str) -> AppResult<&'static Problem> {
        CATALOG
            .iter()
            .find(|p| p.id == problem_id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown problem: {problem_id}")))
    }

    /// List problems with filters and pagination, merging the caller's
    /// solved status when available
    pub fn list(
        filter: &ProblemFilter,
        solved: &HashSet<String>,
        page: u32,
        per_page: u32,
    ) -> (Vec<ProblemWithStatus>, usize) {
        let search = filter.search.as_deref().map(str::to_lowercase);
        let difficulty = filter.difficulty.as_deref().map(str::to_lowercase);

        let matching: Vec<&Problem> = CATALOG
            .iter()
            .filter(|p| {
                if let Some(needle) = &search {
                    let hit = p.title.to_lowercase().contains(needle)
                        || p.tags.iter().any(|t| t.to_lowercase().contains(needle));
                    if !hit {
                        return false;
                    }
                }
                if let Some(difficulty) = &difficulty {
                    if !p.difficulty.eq_ignore_ascii_case(difficulty) {
                        return false;
                    }
                }
                if let Some(tag) = &filter.tag {
                    if !p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                        return false;
                    }
                }
                true
            })
            .collect();

        let total = matching.len();
        let start = ((page.max(1) - 1) * per_page) as usize;

        let items = matching
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .map(|p| ProblemWithStatus {
                problem: p.clone(),
                solved: solved.contains(&p.id),
            })
            .collect();

        (items, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses_and_is_well_formed() {
        let catalog = ProblemService::catalog();
        assert!(!catalog.is_empty());

        let mut ids = HashSet::new();
        for problem in catalog {
            assert!(ids.insert(problem.id.clone()), "duplicate id: {}", problem.id);
            assert!(problem.url.starts_with("https://"));
            assert!(crate::constants::difficulties::ALL.contains(&problem.difficulty.as_str()));
        }
    }

    #[test]
    fn test_find() {
        assert!(ProblemService::find("two-sum").is_ok());
        assert!(matches!(
            ProblemService::find("no-such-problem"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_filters_by_difficulty() {
        let filter = ProblemFilter {
            difficulty: Some("easy".to_string()),
            ..Default::default()
        };
        let (items, total) = ProblemService::list(&filter, &HashSet::new(), 1, 100);
        assert_eq!(items.len(), total);
        assert!(items.iter().all(|p| p.problem.difficulty == "easy"));
        assert!(total > 0);
    }

    #[test]
    fn test_list_merges_solved_status() {
        let solved: HashSet<String> = ["two-sum".to_string()].into_iter().collect();
        let (items, _) = ProblemService::list(&ProblemFilter::default(), &solved, 1, 100);

        let two_sum = items
            .iter()
            .find(|p| p.problem.id == "two-sum")
            .expect("two-sum in catalog");
        assert!(two_sum.solved);
        assert!(items.iter().filter(|p| p.solved).count() == 1);
    }

    #[test]
    fn test_list_pagination() {
        let (page1, total) = ProblemService::list(&ProblemFilter::default(), &HashSet::new(), 1, 5);
        let (page2, _) = ProblemService::list(&ProblemFilter::default(), &HashSet::new(), 2, 5);

        assert_eq!(page1.len(), 5);
        assert!(total > 5);
        assert_ne!(page1[0].problem.id, page2[0].problem.id);

        // A page past the end is empty, not an error
        let (beyond, _) = ProblemService::list(&ProblemFilter::default(), &HashSet::new(), 99, 5);
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_list_search_matches_title_and_tags() {
        let filter = ProblemFilter {
            search: Some("Linked".to_string()),
            ..Default::default()
        };
        let (items, _) = ProblemService::list(&filter, &HashSet::new(), 1, 100);
        assert!(!items.is_empty());
        assert!(items.iter().all(|p| {
            p.problem.title.to_lowercase().contains("linked")
                || p.problem.tags.iter().any(|t| t.contains("linked"))
        }));
    }
}
