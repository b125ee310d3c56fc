use serde::{Deserialize, Serialize};
use std::fmt;

use super::characteristics::NormalizedCharacteristics;

/// Label shown for any category of a degraded assessment
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarketOutlook {
    #[serde(rename = "Very Negative")]
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    #[serde(rename = "Very Positive")]
    VeryPositive,
}

impl fmt::Display for MarketOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketOutlook::VeryNegative => write!(f, "Very Negative"),
            MarketOutlook::Negative => write!(f, "Negative"),
            MarketOutlook::Neutral => write!(f, "Neutral"),
            MarketOutlook::Positive => write!(f, "Positive"),
            MarketOutlook::VeryPositive => write!(f, "Very Positive"),
        }
    }
}

impl MarketOutlook {
    pub fn from_score(score: f64) -> Self {
        if score > 0.6 {
            Self::VeryPositive
        } else if score > 0.2 {
            Self::Positive
        } else if score > -0.2 {
            Self::Neutral
        } else if score > -0.6 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::VeryLow => write!(f, "Very Low"),
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::VeryHigh => write!(f, "Very High"),
        }
    }
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::VeryHigh
        } else if score > 0.4 {
            Self::High
        } else if score > 0.2 {
            Self::Moderate
        } else if score > 0.1 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

/// Overall sentiment towards an idea. Shares the outlook ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Very Negative")]
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    #[serde(rename = "Very Positive")]
    VeryPositive,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::VeryNegative => write!(f, "Very Negative"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::VeryPositive => write!(f, "Very Positive"),
        }
    }
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        match MarketOutlook::from_score(score) {
            MarketOutlook::VeryPositive => Self::VeryPositive,
            MarketOutlook::Positive => Self::Positive,
            MarketOutlook::Neutral => Self::Neutral,
            MarketOutlook::Negative => Self::Negative,
            MarketOutlook::VeryNegative => Self::VeryNegative,
        }
    }
}

pub fn outlook_score(c: &NormalizedCharacteristics) -> f64 {
    c.market_trend * 0.3 + c.sentiment * 0.3 + c.market_competition * 0.2 + c.ethical_impact * 0.2
}

pub fn risk_score(c: &NormalizedCharacteristics) -> f64 {
    c.market_volatility * 0.3
        + c.complexity * 0.2
        + c.market_competition * 0.2
        + (1.0 - c.ethical_impact) * 0.3
}

pub fn sentiment_score(c: &NormalizedCharacteristics) -> f64 {
    c.sentiment * 0.3 + c.market_trend * 0.2 + c.market_competition * 0.2 + c.ethical_impact * 0.3
}

pub fn determine_market_outlook(c: &NormalizedCharacteristics) -> MarketOutlook {
    MarketOutlook::from_score(outlook_score(c))
}

pub fn determine_risk_level(c: &NormalizedCharacteristics) -> RiskLevel {
    RiskLevel::from_score(risk_score(c))
}

pub fn determine_sentiment(c: &NormalizedCharacteristics) -> SentimentLabel {
    SentimentLabel::from_score(sentiment_score(c))
}
