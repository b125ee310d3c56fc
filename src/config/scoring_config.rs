//! Scoring configuration parsing from environment variables.

use crate::domain::errors::ConfigError;
use crate::domain::feasibility::NormalizationMode;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Scoring environment configuration
#[derive(Debug, Clone)]
pub struct ScoringEnvConfig {
    pub normalization: NormalizationMode,
    /// Optional TOML file replacing the built-in keyword rules
    pub keywords_file: Option<PathBuf>,
    pub ideas_per_request: usize,
}

impl Default for ScoringEnvConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationMode::PerCall,
            keywords_file: None,
            ideas_per_request: 5,
        }
    }
}

impl ScoringEnvConfig {
    pub fn from_env() -> Result<Self> {
        let normalization_str =
            env::var("IDEAFORGE_NORMALIZATION").unwrap_or_else(|_| "per-call".to_string());
        let normalization = NormalizationMode::from_str(&normalization_str)?;

        let ideas_str =
            env::var("IDEAFORGE_IDEAS_PER_REQUEST").unwrap_or_else(|_| "5".to_string());
        let ideas_per_request = match ideas_str.trim().parse::<usize>() {
            Ok(count) if count > 0 => count,
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: "IDEAFORGE_IDEAS_PER_REQUEST".to_string(),
                    value: ideas_str,
                })
                .context("IDEAFORGE_IDEAS_PER_REQUEST must be a positive integer");
            }
        };

        Ok(Self {
            normalization,
            keywords_file: env::var("IDEAFORGE_KEYWORDS_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            ideas_per_request,
        })
    }
}
