//! Collaborator configuration parsing from environment variables.
//!
//! This module handles loading endpoints and credentials for:
//! - OpenAI-compatible chat completions (idea generation)
//! - NewsAPI (headline sentiment)
//! - Yahoo Finance (sector ETF price history)
//!
//! Adapters receive these structs explicitly; they never read the
//! environment themselves.

use std::env;

/// Chat-completion endpoint used for idea generation
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
        }
    }
}

impl OpenAiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: non_empty_var("OPENAI_API_KEY"),
            base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("OPENAI_MODEL").unwrap_or(defaults.model),
        }
    }
}

/// NewsAPI configuration
#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://newsapi.org".to_string(),
        }
    }
}

impl NewsApiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var("NEWS_API_KEY"),
            base_url: env::var("NEWS_API_BASE_URL").unwrap_or(Self::default().base_url),
        }
    }
}

/// Yahoo Finance chart API configuration
#[derive(Debug, Clone)]
pub struct YahooFinanceConfig {
    pub base_url: String,
}

impl Default for YahooFinanceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
        }
    }
}

impl YahooFinanceConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("YAHOO_FINANCE_BASE_URL").unwrap_or(Self::default().base_url),
        }
    }
}

/// Aggregated collaborator configuration
#[derive(Debug, Clone)]
pub struct ProviderEnvConfig {
    pub openai: OpenAiConfig,
    pub news_api: NewsApiConfig,
    pub yahoo: YahooFinanceConfig,
    pub http_max_retries: u32,
}

impl Default for ProviderEnvConfig {
    fn default() -> Self {
        Self {
            openai: OpenAiConfig::default(),
            news_api: NewsApiConfig::default(),
            yahoo: YahooFinanceConfig::default(),
            http_max_retries: 3,
        }
    }
}

impl ProviderEnvConfig {
    pub fn from_env() -> Self {
        Self {
            openai: OpenAiConfig::from_env(),
            news_api: NewsApiConfig::from_env(),
            yahoo: YahooFinanceConfig::from_env(),
            http_max_retries: env::var("HTTP_MAX_RETRIES")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .unwrap_or(3),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
