use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::errors::ConfigError;
use crate::domain::market::MarketSnapshot;

/// Guards the min-max denominator when min == max
const MIN_MAX_EPSILON: f64 = 1e-10;

/// Raw signals for one idea, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdeaCharacteristics {
    pub market_trend: f64,
    pub market_volatility: f64,
    pub sentiment: f64,
    pub investment_required: f64,
    pub target_roi: f64,
    pub complexity: f64,
    pub market_competition: f64,
    pub scalability: f64,
    pub ethical_impact: f64,
}

/// Qualitative scores derived from the idea text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitativeScores {
    pub complexity: f64,
    pub market_competition: f64,
    pub scalability: f64,
    pub ethical_impact: f64,
}

impl IdeaCharacteristics {
    pub fn new(
        snapshot: &MarketSnapshot,
        investment_required: f64,
        target_roi: f64,
        scores: QualitativeScores,
    ) -> Self {
        Self {
            market_trend: snapshot.price_trend,
            market_volatility: snapshot.volatility,
            sentiment: snapshot.news_sentiment,
            investment_required,
            target_roi,
            complexity: scores.complexity,
            market_competition: scores.market_competition,
            scalability: scores.scalability,
            ethical_impact: scores.ethical_impact,
        }
    }

    pub fn normalize(&self, bounds: &FinancialBounds) -> NormalizedCharacteristics {
        NormalizedCharacteristics {
            market_trend: self.market_trend.clamp(-1.0, 1.0),
            sentiment: self.sentiment.clamp(-1.0, 1.0),
            investment_required: min_max(self.investment_required, bounds.investment),
            target_roi: min_max(self.target_roi, bounds.target_roi),
            market_volatility: self.market_volatility.clamp(0.0, 1.0),
            complexity: self.complexity.clamp(0.0, 1.0),
            market_competition: self.market_competition.clamp(0.0, 1.0),
            scalability: self.scalability.clamp(0.0, 1.0),
            ethical_impact: self.ethical_impact.clamp(0.0, 1.0),
        }
    }
}

/// Characteristics after per-field normalization. Lives for one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCharacteristics {
    pub market_trend: f64,
    pub market_volatility: f64,
    pub sentiment: f64,
    pub investment_required: f64,
    pub target_roi: f64,
    pub complexity: f64,
    pub market_competition: f64,
    pub scalability: f64,
    pub ethical_impact: f64,
}

fn min_max(value: f64, (min, max): (f64, f64)) -> f64 {
    if (max - min).is_finite() {
        (value - min) / (max - min + MIN_MAX_EPSILON)
    } else {
        // span of two finite extremes overflows; halving keeps it representable
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0 + MIN_MAX_EPSILON / 2.0)
    }
}

/// Min/max of the financial fields over a normalization batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialBounds {
    pub investment: (f64, f64),
    pub target_roi: (f64, f64),
}

impl FinancialBounds {
    /// Bounds of a batch of one; both financial fields normalize to 0.
    pub fn single(characteristics: &IdeaCharacteristics) -> Self {
        Self {
            investment: (
                characteristics.investment_required,
                characteristics.investment_required,
            ),
            target_roi: (characteristics.target_roi, characteristics.target_roi),
        }
    }

    /// Bounds over a whole batch. `None` for an empty batch.
    pub fn across<'a, I>(batch: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a IdeaCharacteristics>,
    {
        batch.into_iter().fold(None, |acc, c| {
            let single = Self::single(c);
            Some(match acc {
                None => single,
                Some(b) => Self {
                    investment: (
                        b.investment.0.min(single.investment.0),
                        b.investment.1.max(single.investment.1),
                    ),
                    target_roi: (
                        b.target_roi.0.min(single.target_roi.0),
                        b.target_roi.1.max(single.target_roi.1),
                    ),
                },
            })
        })
    }
}

/// How investment and target ROI are min-max normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizationMode {
    /// Each idea is its own batch of one, so both fields collapse to 0
    #[default]
    PerCall,
    /// Bounds are computed across every idea scored together
    Batched,
}

impl FromStr for NormalizationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per-call" | "per_call" | "percall" => Ok(NormalizationMode::PerCall),
            "batched" | "batch" => Ok(NormalizationMode::Batched),
            _ => anyhow::bail!(
                "Invalid normalization mode: {}. Must be 'per-call' or 'batched'",
                s
            ),
        }
    }
}

/// Weight applied to each normalized field in the feasibility sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub market_trend: f64,
    pub market_volatility: f64,
    pub sentiment: f64,
    pub investment_required: f64,
    pub target_roi: f64,
    pub complexity: f64,
    pub market_competition: f64,
    pub scalability: f64,
    pub ethical_impact: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            market_trend: 0.15,
            market_volatility: 0.10,
            sentiment: 0.10,
            investment_required: 0.10,
            target_roi: 0.10,
            complexity: 0.10,
            market_competition: 0.10,
            scalability: 0.10,
            ethical_impact: 0.15,
        }
    }
}

impl FeatureWeights {
    pub fn sum(&self) -> f64 {
        self.market_trend
            + self.market_volatility
            + self.sentiment
            + self.investment_required
            + self.target_roi
            + self.complexity
            + self.market_competition
            + self.scalability
            + self.ethical_impact
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }

    pub fn weighted_sum(&self, c: &NormalizedCharacteristics) -> f64 {
        c.market_trend * self.market_trend
            + c.market_volatility * self.market_volatility
            + c.sentiment * self.sentiment
            + c.investment_required * self.investment_required
            + c.target_roi * self.target_roi
            + c.complexity * self.complexity
            + c.market_competition * self.market_competition
            + c.scalability * self.scalability
            + c.ethical_impact * self.ethical_impact
    }
}
