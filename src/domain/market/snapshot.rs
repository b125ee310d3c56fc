use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::AssessmentError;

/// Trend / volatility / sentiment triple for one industry.
///
/// Built once per industry by a market-analysis collaborator and consumed
/// read-only by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Mean daily percentage change, typically a small signed fraction
    pub price_trend: f64,
    pub volatility: f64,
    /// Average headline polarity, roughly -1.0 to 1.0
    pub news_sentiment: f64,
}

impl MarketSnapshot {
    pub fn new(price_trend: f64, volatility: f64, news_sentiment: f64) -> Self {
        Self {
            price_trend,
            volatility,
            news_sentiment,
        }
    }

    /// Static defaults used when live market data cannot be fetched.
    pub fn fallback_for(industry: &str) -> Self {
        if industry.trim().eq_ignore_ascii_case("technology") {
            Self::new(0.15, 0.25, 0.2)
        } else {
            Self::new(0.05, 0.15, 0.1)
        }
    }

    pub fn validate(&self) -> Result<(), AssessmentError> {
        let fields = [
            ("price_trend", self.price_trend),
            ("volatility", self.volatility),
            ("news_sentiment", self.news_sentiment),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AssessmentError::InvalidSnapshot {
                    reason: format!("{} is not finite ({})", name, value),
                });
            }
        }
        if self.volatility < 0.0 {
            return Err(AssessmentError::InvalidSnapshot {
                reason: format!("volatility must be >= 0, got {}", self.volatility),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotSource {
    Live,
    Fallback,
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotSource::Live => write!(f, "Live"),
            SnapshotSource::Fallback => write!(f, "Fallback"),
        }
    }
}

/// A snapshot together with where it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub industry: String,
    pub snapshot: MarketSnapshot,
    pub source: SnapshotSource,
    pub fetched_at: DateTime<Utc>,
}

impl MarketAnalysis {
    pub fn live(industry: &str, snapshot: MarketSnapshot) -> Self {
        Self {
            industry: industry.to_string(),
            snapshot,
            source: SnapshotSource::Live,
            fetched_at: Utc::now(),
        }
    }

    pub fn fallback(industry: &str) -> Self {
        Self {
            industry: industry.to_string(),
            snapshot: MarketSnapshot::fallback_for(industry),
            source: SnapshotSource::Fallback,
            fetched_at: Utc::now(),
        }
    }
}
