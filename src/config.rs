use crate::error::{CareerAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How many top matches to detail in guidance and reports.
    pub top_matches: usize,
    pub report_title: String,
    pub advice_note: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CareerAiError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("career-ai").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            top_matches: 3,
            report_title: "Career AI Advisor Report".into(),
            advice_note: "Focus on real-world projects, internships, and consistent problem-solving.".into(),
        }
    }

    pub fn set_top_matches(&mut self, top: usize) -> Result<()> {
        if top == 0 {
            return Err(CareerAiError::Config("top matches must be at least 1".into()));
        }
        self.top_matches = top;
        self.save()
    }

    pub fn set_report_title(&mut self, title: String) -> Result<()> {
        if title.trim().is_empty() {
            return Err(CareerAiError::Config("report title must not be empty".into()));
        }
        self.report_title = title;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default_config();
        assert_eq!(config.top_matches, 3);
        assert!(!config.report_title.is_empty());
        assert!(!config.advice_note.is_empty());
    }

    #[test]
    fn test_rejects_zero_top_matches() {
        let mut config = Config::default_config();
        assert!(matches!(
            config.set_top_matches(0),
            Err(CareerAiError::Config(_))
        ));
    }
}
