use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::assessment::{Assessment, FeasibilityResult};
use super::characteristics::{
    FeatureWeights, FinancialBounds, IdeaCharacteristics, NormalizationMode,
    NormalizedCharacteristics, QualitativeScores,
};
use super::keywords::{KeywordRules, LevelScale};
use super::labels::{determine_market_outlook, determine_risk_level, determine_sentiment};
use crate::domain::errors::{AssessmentError, ConfigError};
use crate::domain::market::MarketSnapshot;

/// Ideas whose ethical impact falls below this bypass the weighted pipeline
pub const HARMFUL_ETHICS_THRESHOLD: f64 = 0.3;

/// One idea plus the financial parameters it is scored with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaInput {
    pub idea: String,
    pub investment: f64,
    pub target_roi: f64,
}

impl IdeaInput {
    pub fn new(idea: impl Into<String>, investment: f64, target_roi: f64) -> Self {
        Self {
            idea: idea.into(),
            investment,
            target_roi,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedIdea {
    pub idea: String,
    pub assessment: Assessment,
}

/// Result of the keyword stage, before normalization
enum Prepared {
    Harmful,
    Ready(IdeaCharacteristics),
}

/// Weighted multi-factor feasibility scoring.
///
/// Holds only immutable configuration, so one scorer can be shared across
/// threads and every call is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct FeasibilityScorer {
    rules: KeywordRules,
    weights: FeatureWeights,
    normalization: NormalizationMode,
}

impl Default for FeasibilityScorer {
    fn default() -> Self {
        Self {
            rules: KeywordRules::default(),
            weights: FeatureWeights::default(),
            normalization: NormalizationMode::default(),
        }
    }
}

impl FeasibilityScorer {
    pub fn new(
        rules: KeywordRules,
        weights: FeatureWeights,
        normalization: NormalizationMode,
    ) -> Result<Self, ConfigError> {
        weights.validate()?;
        Ok(Self {
            rules,
            weights,
            normalization,
        })
    }

    pub fn rules(&self) -> &KeywordRules {
        &self.rules
    }

    pub fn normalization(&self) -> NormalizationMode {
        self.normalization
    }

    /// Score a single idea against a market snapshot.
    ///
    /// A single call is always a normalization batch of one, whatever the
    /// configured mode.
    pub fn assess(
        &self,
        idea: &str,
        investment: f64,
        target_roi: f64,
        snapshot: &MarketSnapshot,
    ) -> Assessment {
        let outcome = self
            .prepare(idea, investment, target_roi, snapshot)
            .and_then(|prepared| match prepared {
                Prepared::Harmful => Ok(FeasibilityResult::harmful()),
                Prepared::Ready(raw) => self.score(&raw.normalize(&FinancialBounds::single(&raw))),
            });
        into_assessment(idea, outcome)
    }

    /// Score every idea and rank them by descending score.
    ///
    /// Ties keep input order. In `Batched` mode the investment / ROI bounds
    /// are computed across all non-harmful, valid ideas before any is scored.
    pub fn assess_batch(&self, ideas: &[IdeaInput], snapshot: &MarketSnapshot) -> Vec<RankedIdea> {
        let mut ranked: Vec<RankedIdea> = ideas
            .iter()
            .zip(self.assess_all(ideas, snapshot))
            .map(|(input, assessment)| RankedIdea {
                idea: input.idea.clone(),
                assessment,
            })
            .collect();

        ranked.sort_by(|a, b| b.assessment.score().total_cmp(&a.assessment.score()));
        ranked
    }

    /// Same normalization batch as `assess_batch`, results in input order
    pub fn assess_all(&self, ideas: &[IdeaInput], snapshot: &MarketSnapshot) -> Vec<Assessment> {
        let pairs: Vec<(&IdeaInput, &MarketSnapshot)> =
            ideas.iter().map(|input| (input, snapshot)).collect();
        self.assess_pairs(&pairs)
    }

    /// Score ideas that each carry their own market snapshot.
    ///
    /// The whole slice is one normalization batch, so in `Batched` mode the
    /// investment / ROI bounds span every idea regardless of snapshot.
    pub fn assess_with_snapshots(&self, ideas: &[(IdeaInput, MarketSnapshot)]) -> Vec<Assessment> {
        let pairs: Vec<(&IdeaInput, &MarketSnapshot)> =
            ideas.iter().map(|(input, snapshot)| (input, snapshot)).collect();
        self.assess_pairs(&pairs)
    }

    /// True when the ethical classification short-circuits to the harmful result
    pub fn is_harmful(&self, idea: &str) -> bool {
        self.rules.ethics.classify(idea).score() < HARMFUL_ETHICS_THRESHOLD
    }

    fn assess_pairs(&self, pairs: &[(&IdeaInput, &MarketSnapshot)]) -> Vec<Assessment> {
        let prepared: Vec<Result<Prepared, AssessmentError>> = pairs
            .par_iter()
            .map(|(input, snapshot)| {
                self.prepare(&input.idea, input.investment, input.target_roi, snapshot)
            })
            .collect();

        let shared_bounds = match self.normalization {
            NormalizationMode::PerCall => None,
            NormalizationMode::Batched => FinancialBounds::across(prepared.iter().filter_map(
                |p| match p {
                    Ok(Prepared::Ready(raw)) => Some(raw),
                    _ => None,
                },
            )),
        };

        pairs
            .par_iter()
            .zip(prepared.into_par_iter())
            .map(|((input, _), prepared)| {
                let outcome = prepared.and_then(|p| match p {
                    Prepared::Harmful => Ok(FeasibilityResult::harmful()),
                    Prepared::Ready(raw) => {
                        let bounds = shared_bounds.unwrap_or_else(|| FinancialBounds::single(&raw));
                        self.score(&raw.normalize(&bounds))
                    }
                });
                into_assessment(&input.idea, outcome)
            })
            .collect()
    }

    /// Keyword-derived qualitative scores for an idea description
    pub fn qualitative_scores(&self, idea: &str) -> QualitativeScores {
        QualitativeScores {
            complexity: LevelScale::PENALIZING.value(self.rules.complexity.classify(idea)),
            market_competition: LevelScale::PENALIZING
                .value(self.rules.competition.classify(idea)),
            scalability: LevelScale::REWARDING.value(self.rules.scalability.classify(idea)),
            ethical_impact: self.rules.ethics.classify(idea).score(),
        }
    }

    fn prepare(
        &self,
        idea: &str,
        investment: f64,
        target_roi: f64,
        snapshot: &MarketSnapshot,
    ) -> Result<Prepared, AssessmentError> {
        if self.is_harmful(idea) {
            debug!("Harmful idea short-circuit: {}", idea);
            return Ok(Prepared::Harmful);
        }

        validate_financials(investment, target_roi)?;
        snapshot.validate()?;

        let scores = self.qualitative_scores(idea);
        Ok(Prepared::Ready(IdeaCharacteristics::new(
            snapshot, investment, target_roi, scores,
        )))
    }

    fn score(
        &self,
        normalized: &NormalizedCharacteristics,
    ) -> Result<FeasibilityResult, AssessmentError> {
        let weighted = self.weights.weighted_sum(normalized);
        let score = (weighted + 1.0) * 50.0;
        if !score.is_finite() {
            return Err(AssessmentError::Computation {
                reason: format!("weighted score is not finite ({})", weighted),
            });
        }

        Ok(FeasibilityResult {
            score: score.clamp(0.0, 100.0),
            market_outlook: determine_market_outlook(normalized),
            risk_level: determine_risk_level(normalized),
            sentiment: determine_sentiment(normalized),
        })
    }
}

fn validate_financials(investment: f64, target_roi: f64) -> Result<(), AssessmentError> {
    if !investment.is_finite() {
        return Err(AssessmentError::invalid_input(
            "investment",
            format!("must be a finite number, got {}", investment),
        ));
    }
    if investment < 0.0 {
        return Err(AssessmentError::invalid_input(
            "investment",
            format!("must be >= 0, got {}", investment),
        ));
    }
    if !target_roi.is_finite() {
        return Err(AssessmentError::invalid_input(
            "target_roi",
            format!("must be a finite number, got {}", target_roi),
        ));
    }
    Ok(())
}

fn into_assessment(idea: &str, outcome: Result<FeasibilityResult, AssessmentError>) -> Assessment {
    match outcome {
        Ok(result) => Assessment::Scored(result),
        Err(e) => {
            warn!("Degraded assessment for '{}': {}", idea, e);
            Assessment::degraded(e)
        }
    }
}
