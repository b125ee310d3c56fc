use serde::{Deserialize, Serialize};
use std::fmt;

use super::labels::{MarketOutlook, RiskLevel, SentimentLabel, UNKNOWN_LABEL};
use crate::domain::errors::AssessmentError;

/// Outcome of a successful scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    /// 0.0 to 100.0
    pub score: f64,
    pub market_outlook: MarketOutlook,
    pub risk_level: RiskLevel,
    pub sentiment: SentimentLabel,
}

impl FeasibilityResult {
    pub const HARMFUL_IDEA_SCORE: f64 = 20.0;

    /// Fixed result for ideas whose description suggests harm
    pub fn harmful() -> Self {
        Self {
            score: Self::HARMFUL_IDEA_SCORE,
            market_outlook: MarketOutlook::VeryNegative,
            risk_level: RiskLevel::VeryHigh,
            sentiment: SentimentLabel::VeryNegative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedReason {
    InvalidInput,
    InvalidSnapshot,
    Computation,
}

impl fmt::Display for DegradedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradedReason::InvalidInput => write!(f, "invalid_input"),
            DegradedReason::InvalidSnapshot => write!(f, "invalid_snapshot"),
            DegradedReason::Computation => write!(f, "computation"),
        }
    }
}

impl From<&AssessmentError> for DegradedReason {
    fn from(error: &AssessmentError) -> Self {
        match error {
            AssessmentError::InvalidInput { .. } => DegradedReason::InvalidInput,
            AssessmentError::InvalidSnapshot { .. } => DegradedReason::InvalidSnapshot,
            AssessmentError::Computation { .. } => DegradedReason::Computation,
        }
    }
}

/// Either a scored result or a degraded placeholder carrying the reason.
///
/// Scoring never fails outward; faults become `Degraded`, which reports a
/// score of 0 and "Unknown" labels when flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment {
    Scored(FeasibilityResult),
    Degraded {
        reason: DegradedReason,
        detail: String,
    },
}

impl Assessment {
    pub fn degraded(error: AssessmentError) -> Self {
        Assessment::Degraded {
            reason: DegradedReason::from(&error),
            detail: error.to_string(),
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, Assessment::Scored(_))
    }

    pub fn result(&self) -> Option<&FeasibilityResult> {
        match self {
            Assessment::Scored(result) => Some(result),
            Assessment::Degraded { .. } => None,
        }
    }

    pub fn score(&self) -> f64 {
        self.result().map(|r| r.score).unwrap_or(0.0)
    }

    pub fn market_outlook_label(&self) -> String {
        self.result()
            .map(|r| r.market_outlook.to_string())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }

    pub fn risk_level_label(&self) -> String {
        self.result()
            .map(|r| r.risk_level.to_string())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }

    pub fn sentiment_label(&self) -> String {
        self.result()
            .map(|r| r.sentiment.to_string())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }

    /// Short status tag: "scored" or the degraded reason
    pub fn status(&self) -> String {
        match self {
            Assessment::Scored(_) => "scored".to_string(),
            Assessment::Degraded { reason, .. } => reason.to_string(),
        }
    }
}
