use crate::domain::market::MarketSnapshot;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Produces candidate business idea descriptions
#[async_trait]
pub trait IdeaGenerator: Send + Sync {
    async fn generate(
        &self,
        industry: &str,
        target_market: &str,
        count: usize,
    ) -> Result<Vec<String>>;
}

/// Builds a market snapshot for an industry
#[async_trait]
pub trait MarketAnalysisService: Send + Sync {
    async fn fetch_snapshot(&self, industry: &str) -> Result<MarketSnapshot>;
}

/// Daily closing prices for a ticker, oldest first
#[async_trait]
pub trait PriceHistoryService: Send + Sync {
    async fn daily_closes(&self, symbol: &str) -> Result<Vec<f64>>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
}

/// Searches recent news articles for a query
#[async_trait]
pub trait NewsSearchService: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<NewsArticle>>;
}
