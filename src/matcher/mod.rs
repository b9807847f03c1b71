//! Skill matching and ranking.
//!
//! Pure computation: normalize the user's free-text skill list, intersect it
//! with each catalog profile, score the overlap, rank.

pub mod types;

pub use types::MatchResult;

use crate::catalog::Catalog;
use crate::error::{CareerAiError, Result};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use tracing::debug;

/// Normalize a comma-separated skill string into a set of skill tokens.
///
/// Tokens are trimmed and lower-cased; empty tokens are dropped and
/// duplicates collapse.
pub fn normalize_skills(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Match a raw skill string against the catalog and return the ranked
/// results.
///
/// The only failure mode is an input that normalizes to the empty set.
pub fn match_skills(user_input: &str, catalog: &Catalog) -> Result<Vec<MatchResult>> {
    let user_skills = normalize_skills(user_input);
    if user_skills.is_empty() {
        return Err(CareerAiError::EmptyInput);
    }
    Ok(rank_profiles(&user_skills, catalog))
}

/// Score every catalog profile against an already-normalized skill set and
/// sort by score, descending. The sort is stable, so equal scores keep the
/// catalog declaration order.
pub fn rank_profiles(user_skills: &BTreeSet<String>, catalog: &Catalog) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog
        .iter()
        .map(|profile| {
            let matched: BTreeSet<String> = profile
                .required_skills
                .intersection(user_skills)
                .cloned()
                .collect();
            let missing: BTreeSet<String> = profile
                .required_skills
                .difference(&matched)
                .cloned()
                .collect();
            // Truncating percentage. required_skills is never empty.
            let score = (matched.len() * 100 / profile.required_skills.len()) as u8;

            MatchResult {
                career: profile.name.clone(),
                score,
                matched_skills: matched,
                missing_skills: missing,
            }
        })
        .collect();

    results.sort_by_key(|r| Reverse(r.score));

    debug!(
        "ranked {} careers against {} user skills",
        results.len(),
        user_skills.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        let skills = normalize_skills("Python, SQL");
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
    }

    #[test]
    fn test_normalize_whitespace_and_case() {
        let a = normalize_skills("Python, SQL");
        let b = normalize_skills("python,sql");
        let c = normalize_skills(" python , sql ");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_normalize_drops_empty_tokens() {
        let skills = normalize_skills("python,, ,sql,");
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_normalize_collapses_duplicates() {
        let skills = normalize_skills("python, Python, PYTHON");
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            match_skills("", &catalog),
            Err(CareerAiError::EmptyInput)
        ));
        assert!(matches!(
            match_skills("   ", &catalog),
            Err(CareerAiError::EmptyInput)
        ));
        assert!(matches!(
            match_skills(" , , ", &catalog),
            Err(CareerAiError::EmptyInput)
        ));
    }

    #[test]
    fn test_score_truncates() {
        // 2 of 7 matched: floor(100 * 2 / 7) = 28, not 29
        let catalog = Catalog::builtin();
        let results = match_skills("python, dsa", &catalog).unwrap();
        let dev = results
            .iter()
            .find(|r| r.career == "Software Developer")
            .unwrap();
        assert_eq!(dev.score, 28);
        assert_eq!(dev.matched_skills.len(), 2);
        assert_eq!(dev.missing_skills.len(), 5);
    }

    #[test]
    fn test_results_are_sorted_descending() {
        let catalog = Catalog::builtin();
        let results = match_skills("python, sql, excel", &catalog).unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
