//! Configuration module for ideaforge.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by domain: Providers (collaborator endpoints) and Scoring.

mod provider_config;
mod scoring_config;

pub use provider_config::{NewsApiConfig, OpenAiConfig, ProviderEnvConfig, YahooFinanceConfig};
pub use scoring_config::ScoringEnvConfig;

use crate::domain::feasibility::{FeasibilityScorer, FeatureWeights, KeywordRules};
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Which collaborators back the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// OpenAI, Yahoo Finance and NewsAPI
    Live,
    /// Static ideas and fallback market snapshots, no network
    Offline,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Mode::Live),
            "offline" | "mock" => Ok(Mode::Offline),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'live' or 'offline'", s),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub providers: ProviderEnvConfig,
    pub scoring: ScoringEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "live".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let providers = ProviderEnvConfig::from_env();
        let scoring = ScoringEnvConfig::from_env().context("Failed to load scoring config")?;

        Ok(Self {
            mode,
            providers,
            scoring,
        })
    }

    /// Build the scorer, loading custom keyword rules when configured
    pub fn build_scorer(&self) -> Result<FeasibilityScorer> {
        let rules = match &self.scoring.keywords_file {
            Some(path) => KeywordRules::from_file(path)?,
            None => KeywordRules::default(),
        };
        FeasibilityScorer::new(rules, FeatureWeights::default(), self.scoring.normalization)
            .context("Invalid scoring configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(Mode::from_str("live").unwrap(), Mode::Live);
        assert_eq!(Mode::from_str("OFFLINE").unwrap(), Mode::Offline);
        assert_eq!(Mode::from_str("mock").unwrap(), Mode::Offline);
        assert!(Mode::from_str("invalid").is_err());
    }

    #[test]
    fn test_build_scorer_with_defaults() {
        let config = Config {
            mode: Mode::Offline,
            providers: ProviderEnvConfig::default(),
            scoring: ScoringEnvConfig::default(),
        };
        let scorer = config.build_scorer().unwrap();
        assert_eq!(scorer.rules(), &KeywordRules::default());
    }

    #[test]
    fn test_build_scorer_missing_keywords_file() {
        let config = Config {
            mode: Mode::Offline,
            providers: ProviderEnvConfig::default(),
            scoring: ScoringEnvConfig {
                keywords_file: Some("/nonexistent/ideaforge-keywords.toml".into()),
                ..ScoringEnvConfig::default()
            },
        };
        assert!(config.build_scorer().is_err());
    }
}
