//! Career catalog: the fixed table of career profiles the matcher runs
//! against.
//!
//! The builtin catalog is assembled once at startup. A custom catalog can be
//! loaded from a JSON file instead; file-loaded catalogs are validated and
//! their skill tokens re-normalized, so the matcher can assume every profile
//! is well-formed.

use crate::error::{CareerAiError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::debug;

/// Descriptive metadata attached to a career, used only for display/export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerInsight {
    pub present: String,
    pub future: String,
    pub companies: Vec<String>,
    pub hackathons: Vec<String>,
    pub competitions: Vec<String>,
}

/// One career with its required-skill set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerProfile {
    pub name: String,
    /// Normalized (lower-cased, trimmed) skill tokens. Never empty.
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub insight: CareerInsight,
}

/// The full, fixed collection of career profiles. Declaration order is
/// preserved; the matcher uses it as the tie-break order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    careers: Vec<CareerProfile>,
}

impl Catalog {
    /// The builtin catalog.
    pub fn builtin() -> Self {
        let careers = vec![
            profile(
                "Software Developer",
                &["python", "java", "c", "dsa", "problem solving", "c++", "cpp"],
                CareerInsight {
                    present: "High demand across startups, product companies, and service-based firms.".into(),
                    future: "Will remain evergreen with growth in AI-assisted development and cloud-native apps.".into(),
                    companies: names(&["Google", "Microsoft", "Amazon", "Infosys", "TCS", "Zoho"]),
                    hackathons: names(&["Smart India Hackathon", "Google Solution Challenge", "MLH Hackathons"]),
                    competitions: names(&["CodeChef", "LeetCode", "HackerRank"]),
                },
            ),
            profile(
                "Data Analyst",
                &["python", "sql", "excel", "statistics", "data analysis"],
                CareerInsight {
                    present: "Strong demand in finance, healthcare, e-commerce, and analytics firms.".into(),
                    future: "Demand will grow with data-driven decision making and AI integration.".into(),
                    companies: names(&["Deloitte", "EY", "Accenture", "Amazon", "Flipkart"]),
                    hackathons: names(&["Analytics Vidhya Hackathons", "Kaggle Days"]),
                    competitions: names(&["Kaggle", "StrataScratch"]),
                },
            ),
            profile(
                "Cybersecurity Analyst",
                &["networking", "linux", "security", "python", "cryptography"],
                CareerInsight {
                    present: "Rising demand due to increasing cyber threats and data breaches.".into(),
                    future: "Critical role as cloud, IoT, and digital payments expand.".into(),
                    companies: names(&["Cisco", "Palo Alto Networks", "IBM", "Microsoft"]),
                    hackathons: names(&["Cyber Apocalypse", "CTFtime Events"]),
                    competitions: names(&["Hack The Box", "TryHackMe"]),
                },
            ),
            profile(
                "AI / ML Engineer",
                &["python", "machine learning", "math", "statistics", "data", "ml"],
                CareerInsight {
                    present: "High demand in AI startups, research labs, and big tech companies.".into(),
                    future: "Explosive growth as AI adoption increases across industries.".into(),
                    companies: names(&["OpenAI", "Google DeepMind", "Meta", "NVIDIA"]),
                    hackathons: names(&["AI Hackathons", "Kaggle Competitions"]),
                    competitions: names(&["Kaggle", "AIcrowd"]),
                },
            ),
        ];

        Self { careers }
    }

    /// Load a custom catalog from a JSON file (an array of profiles).
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CareerAiError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut catalog: Catalog = serde_json::from_str(&content)?;
        catalog.normalize();
        catalog.validate()?;
        debug!("loaded {} careers from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CareerProfile> {
        self.careers.iter()
    }

    pub fn get(&self, name: &str) -> Option<&CareerProfile> {
        self.careers.iter().find(|p| p.name == name)
    }

    /// Re-normalize the skill tokens of a file-loaded catalog.
    fn normalize(&mut self) {
        for career in &mut self.careers {
            career.required_skills = career
                .required_skills
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }

    fn validate(&self) -> Result<()> {
        if self.careers.is_empty() {
            return Err(CareerAiError::InvalidCatalog("catalog has no careers".into()));
        }

        let mut seen = HashSet::new();
        for career in &self.careers {
            if career.name.trim().is_empty() {
                return Err(CareerAiError::InvalidCatalog("career with empty name".into()));
            }
            if !seen.insert(career.name.as_str()) {
                return Err(CareerAiError::InvalidCatalog(format!(
                    "duplicate career name: {}",
                    career.name
                )));
            }
            if career.required_skills.is_empty() {
                return Err(CareerAiError::InvalidCatalog(format!(
                    "career '{}' has no required skills",
                    career.name
                )));
            }
        }

        Ok(())
    }
}

fn profile(name: &str, skills: &[&str], insight: CareerInsight) -> CareerProfile {
    CareerProfile {
        name: name.to_string(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        insight,
    }
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
