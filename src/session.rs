//! Advisor session: the context object carried from one matching step to the
//! rendering and export steps.
//!
//! A session lives for one advise/export cycle. It is only written to disk
//! when the user asks for it, as the bridge between `advise --output` and a
//! later `export`.

use crate::error::{CareerAiError, Result};
use crate::matcher::MatchResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorSession {
    /// The normalized user skill set the ranking was computed from.
    pub user_skills: BTreeSet<String>,
    pub created_at: String,
    /// Full ranking, catalog-sized, sorted by score descending.
    pub results: Vec<MatchResult>,
}

impl AdvisorSession {
    pub fn new(user_skills: BTreeSet<String>, results: Vec<MatchResult>) -> Self {
        Self {
            user_skills,
            created_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            results,
        }
    }

    /// The first `n` results (fewer when the ranking is shorter).
    pub fn top(&self, n: usize) -> &[MatchResult] {
        &self.results[..self.results.len().min(n)]
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CareerAiError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let session: Self = serde_json::from_str(&content)?;
        Ok(session)
    }
}
