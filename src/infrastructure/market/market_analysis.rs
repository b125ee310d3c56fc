//! Live market analysis: sector ETF price history plus news sentiment.
//!
//! - `price_trend`: mean daily percentage change of the ETF close over a year
//! - `volatility`: sample standard deviation of the closing prices themselves
//!   (price-level dependent; the scorer clips it into [0, 1])
//! - `news_sentiment`: mean headline polarity, 0.0 when no articles match

use crate::domain::errors::CollaboratorError;
use crate::domain::market::MarketSnapshot;
use crate::domain::ports::{MarketAnalysisService, NewsSearchService, PriceHistoryService};
use crate::infrastructure::news::sentiment_analyzer::SentimentAnalyzer;
use anyhow::{Context, Result};
use async_trait::async_trait;
use statrs::statistics::{Data, Distribution};
use std::sync::Arc;
use tracing::info;

/// Sector ETF tracked for an industry
pub fn etf_symbol_for(industry: &str) -> &'static str {
    match industry.trim().to_lowercase().as_str() {
        "technology" => "XLK",
        "healthcare" => "XLV",
        "finance" => "XLF",
        "consumer" => "XLP",
        _ => "SPY",
    }
}

/// Mean of day-over-day percentage changes. `None` with fewer than two closes.
pub fn price_trend(closes: &[f64]) -> Option<f64> {
    let changes: Vec<f64> = closes
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect();
    if changes.is_empty() {
        return None;
    }
    Data::new(changes).mean()
}

/// Sample standard deviation of the closes. `None` with fewer than two closes.
pub fn price_volatility(closes: &[f64]) -> Option<f64> {
    if closes.len() < 2 {
        return None;
    }
    Data::new(closes.to_vec()).std_dev()
}

pub struct LiveMarketAnalysisService {
    prices: Arc<dyn PriceHistoryService>,
    news: Arc<dyn NewsSearchService>,
    sentiment_analyzer: SentimentAnalyzer,
}

impl LiveMarketAnalysisService {
    pub fn new(prices: Arc<dyn PriceHistoryService>, news: Arc<dyn NewsSearchService>) -> Self {
        Self {
            prices,
            news,
            sentiment_analyzer: SentimentAnalyzer::new(),
        }
    }
}

#[async_trait]
impl MarketAnalysisService for LiveMarketAnalysisService {
    async fn fetch_snapshot(&self, industry: &str) -> Result<MarketSnapshot> {
        let symbol = etf_symbol_for(industry);
        let closes = self
            .prices
            .daily_closes(symbol)
            .await
            .with_context(|| format!("Failed to fetch price history for {}", symbol))?;

        let insufficient = || CollaboratorError::EmptyResponse {
            provider: "price history".to_string(),
            reason: format!("{} has {} closes, need at least 2", symbol, closes.len()),
        };
        let trend = price_trend(&closes).ok_or_else(insufficient)?;
        let volatility = price_volatility(&closes).ok_or_else(insufficient)?;

        let articles = self
            .news
            .search(industry)
            .await
            .with_context(|| format!("Failed to fetch news for {}", industry))?;
        let texts: Vec<String> = articles
            .iter()
            .map(|a| format!("{} {}", a.title, a.description))
            .collect();
        let sentiment = self
            .sentiment_analyzer
            .mean_polarity(texts.iter().map(String::as_str));

        info!(
            "Market snapshot for {} ({}): trend={:.4}, volatility={:.4}, sentiment={:.3} from {} articles",
            industry,
            symbol,
            trend,
            volatility,
            sentiment,
            articles.len()
        );
        Ok(MarketSnapshot::new(trend, volatility, sentiment))
    }
}
