//! Canned collaborators for offline runs and tests.

use crate::domain::market::MarketSnapshot;
use crate::domain::ports::{
    IdeaGenerator, MarketAnalysisService, NewsArticle, NewsSearchService, PriceHistoryService,
};
use anyhow::{Result, bail};
use async_trait::async_trait;
use tracing::info;

/// Returns a fixed list of ideas, truncated to the requested count
#[derive(Debug, Clone, Default)]
pub struct StaticIdeaGenerator {
    ideas: Vec<String>,
    fail: bool,
}

impl StaticIdeaGenerator {
    pub fn new(ideas: Vec<String>) -> Self {
        Self { ideas, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            ideas: Vec::new(),
            fail: true,
        }
    }

    /// Template ideas mentioning the industry and market
    pub fn offline() -> Self {
        Self::new(vec![
            "A subscription service with a web platform for {market} in {industry}".to_string(),
            "An on-demand marketplace connecting {market} with local {industry} providers"
                .to_string(),
            "A consulting service helping {market} adopt new {industry} tools".to_string(),
            "A retail storefront selling curated {industry} products to {market}".to_string(),
            "A mobile app that lets {market} compare {industry} offers".to_string(),
        ])
    }
}

#[async_trait]
impl IdeaGenerator for StaticIdeaGenerator {
    async fn generate(
        &self,
        industry: &str,
        target_market: &str,
        count: usize,
    ) -> Result<Vec<String>> {
        if self.fail {
            bail!("StaticIdeaGenerator: generation unavailable");
        }
        info!("StaticIdeaGenerator: returning up to {} canned ideas", count);
        Ok(self
            .ideas
            .iter()
            .take(count)
            .map(|idea| {
                idea.replace("{industry}", industry)
                    .replace("{market}", target_market)
            })
            .collect())
    }
}

/// Returns the same snapshot for every industry
#[derive(Debug, Clone, Copy)]
pub struct StaticMarketAnalysis {
    snapshot: Option<MarketSnapshot>,
}

impl StaticMarketAnalysis {
    pub fn new(snapshot: MarketSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn failing() -> Self {
        Self { snapshot: None }
    }
}

#[async_trait]
impl MarketAnalysisService for StaticMarketAnalysis {
    async fn fetch_snapshot(&self, industry: &str) -> Result<MarketSnapshot> {
        match self.snapshot {
            Some(snapshot) => Ok(snapshot),
            None => bail!("StaticMarketAnalysis: no market data for {}", industry),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticPriceHistory {
    closes: Option<Vec<f64>>,
}

impl StaticPriceHistory {
    pub fn new(closes: Vec<f64>) -> Self {
        Self {
            closes: Some(closes),
        }
    }

    pub fn failing() -> Self {
        Self { closes: None }
    }
}

#[async_trait]
impl PriceHistoryService for StaticPriceHistory {
    async fn daily_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        match &self.closes {
            Some(closes) => Ok(closes.clone()),
            None => bail!("StaticPriceHistory: no history for {}", symbol),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticNewsSearch {
    articles: Option<Vec<NewsArticle>>,
}

impl StaticNewsSearch {
    pub fn new(articles: Vec<NewsArticle>) -> Self {
        Self {
            articles: Some(articles),
        }
    }

    pub fn failing() -> Self {
        Self { articles: None }
    }
}

#[async_trait]
impl NewsSearchService for StaticNewsSearch {
    async fn search(&self, query: &str) -> Result<Vec<NewsArticle>> {
        match &self.articles {
            Some(articles) => Ok(articles.clone()),
            None => bail!("StaticNewsSearch: search failed for '{}'", query),
        }
    }
}
