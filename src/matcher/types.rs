use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ranked outcome for one career: how much of its required-skill set the
/// user's skills cover.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub career: String,
    /// Integer percentage in [0,100], truncated.
    pub score: u8,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
}
