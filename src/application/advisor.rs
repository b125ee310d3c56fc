use crate::domain::feasibility::{Assessment, FeasibilityScorer, IdeaInput};
use crate::domain::market::{MarketAnalysis, SnapshotSource};
use crate::domain::ports::{IdeaGenerator, MarketAnalysisService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_IDEAS_PER_REQUEST: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub idea: String,
    pub industry: String,
    pub assessment: Assessment,
    pub snapshot_source: SnapshotSource,
}

/// Generates ideas, looks up market conditions and ranks the ideas.
///
/// Collaborator failures never surface to the caller: a failed generator
/// yields no recommendations and a failed market lookup falls back to the
/// industry's static snapshot.
pub struct BusinessAdvisor {
    idea_generator: Arc<dyn IdeaGenerator>,
    market_analysis: Arc<dyn MarketAnalysisService>,
    scorer: FeasibilityScorer,
    ideas_per_request: usize,
}

impl BusinessAdvisor {
    pub fn new(
        idea_generator: Arc<dyn IdeaGenerator>,
        market_analysis: Arc<dyn MarketAnalysisService>,
        scorer: FeasibilityScorer,
    ) -> Self {
        Self {
            idea_generator,
            market_analysis,
            scorer,
            ideas_per_request: DEFAULT_IDEAS_PER_REQUEST,
        }
    }

    pub fn with_ideas_per_request(mut self, count: usize) -> Self {
        self.ideas_per_request = count.max(1);
        self
    }

    pub fn scorer(&self) -> &FeasibilityScorer {
        &self.scorer
    }

    pub async fn market_analysis(&self, industry: &str) -> MarketAnalysis {
        match self.market_analysis.fetch_snapshot(industry).await {
            Ok(snapshot) => MarketAnalysis::live(industry, snapshot),
            Err(e) => {
                warn!(
                    "Market data unavailable for '{}', using fallback snapshot: {:#}",
                    industry, e
                );
                MarketAnalysis::fallback(industry)
            }
        }
    }

    /// Ranked recommendations, best first
    pub async fn recommend(
        &self,
        industry: &str,
        target_market: &str,
        investment: f64,
        target_roi: f64,
    ) -> Vec<Recommendation> {
        let ideas = match self
            .idea_generator
            .generate(industry, target_market, self.ideas_per_request)
            .await
        {
            Ok(ideas) => ideas,
            Err(e) => {
                warn!("Idea generation failed for '{}': {:#}", industry, e);
                return Vec::new();
            }
        };
        if ideas.is_empty() {
            warn!("No ideas generated for '{}' / '{}'", industry, target_market);
            return Vec::new();
        }

        let analysis = self.market_analysis(industry).await;
        let inputs: Vec<IdeaInput> = ideas
            .into_iter()
            .map(|idea| IdeaInput::new(idea, investment, target_roi))
            .collect();

        let ranked = self.scorer.assess_batch(&inputs, &analysis.snapshot);
        info!(
            "Ranked {} ideas for '{}' ({} market data)",
            ranked.len(),
            industry,
            analysis.source
        );

        ranked
            .into_iter()
            .map(|r| Recommendation {
                idea: r.idea,
                industry: industry.to_string(),
                assessment: r.assessment,
                snapshot_source: analysis.source,
            })
            .collect()
    }

    pub async fn assess_user_idea(
        &self,
        idea: &str,
        industry: &str,
        investment: f64,
        target_roi: f64,
    ) -> Recommendation {
        let analysis = self.market_analysis(industry).await;
        let assessment = self
            .scorer
            .assess(idea, investment, target_roi, &analysis.snapshot);
        Recommendation {
            idea: idea.to_string(),
            industry: industry.to_string(),
            assessment,
            snapshot_source: analysis.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::MarketSnapshot;
    use crate::infrastructure::mock::{StaticIdeaGenerator, StaticMarketAnalysis};

    fn advisor(
        generator: StaticIdeaGenerator,
        market: StaticMarketAnalysis,
    ) -> BusinessAdvisor {
        BusinessAdvisor::new(
            Arc::new(generator),
            Arc::new(market),
            FeasibilityScorer::default(),
        )
    }

    #[tokio::test]
    async fn test_generator_failure_yields_no_recommendations() {
        let advisor = advisor(
            StaticIdeaGenerator::failing(),
            StaticMarketAnalysis::new(MarketSnapshot::new(0.1, 0.1, 0.1)),
        );
        assert!(advisor.recommend("technology", "students", 1000.0, 0.2).await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_generation_yields_no_recommendations() {
        let advisor = advisor(
            StaticIdeaGenerator::new(vec![]),
            StaticMarketAnalysis::new(MarketSnapshot::new(0.1, 0.1, 0.1)),
        );
        assert!(advisor.recommend("technology", "students", 1000.0, 0.2).await.is_empty());
    }

    #[tokio::test]
    async fn test_market_failure_uses_fallback() {
        let advisor = advisor(StaticIdeaGenerator::offline(), StaticMarketAnalysis::failing());
        let analysis = advisor.market_analysis("technology").await;
        assert_eq!(analysis.source, SnapshotSource::Fallback);
        assert_eq!(analysis.snapshot, MarketSnapshot::fallback_for("technology"));
    }

    #[tokio::test]
    async fn test_recommendations_are_ranked_and_capped() {
        let ideas = vec![
            "A scam selling fake reviews".to_string(),
            "A sustainable platform for local farmers".to_string(),
            "A bakery".to_string(),
        ];
        let advisor = advisor(
            StaticIdeaGenerator::new(ideas),
            StaticMarketAnalysis::new(MarketSnapshot::new(0.15, 0.25, 0.2)),
        )
        .with_ideas_per_request(3);

        let recs = advisor.recommend("technology", "farmers", 5000.0, 0.15).await;
        assert_eq!(recs.len(), 3);
        assert!(recs.windows(2).all(|w| w[0].assessment.score() >= w[1].assessment.score()));
        assert_eq!(recs[2].idea, "A scam selling fake reviews");
        assert_eq!(recs[2].assessment.score(), 20.0);
        assert!(recs.iter().all(|r| r.snapshot_source == SnapshotSource::Live));
    }

    #[tokio::test]
    async fn test_assess_user_idea() {
        let advisor = advisor(StaticIdeaGenerator::offline(), StaticMarketAnalysis::failing());
        let rec = advisor
            .assess_user_idea("A bakery", "consumer", 20000.0, 0.1)
            .await;
        assert!(rec.assessment.is_scored());
        assert_eq!(rec.industry, "consumer");
        assert_eq!(rec.snapshot_source, SnapshotSource::Fallback);
    }
}
