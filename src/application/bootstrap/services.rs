use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::application::advisor::BusinessAdvisor;
use crate::config::Config;
use crate::domain::ports::{IdeaGenerator, MarketAnalysisService};
use crate::infrastructure::factory::ServiceFactory;

pub struct ServicesHandle {
    pub idea_generator: Arc<dyn IdeaGenerator>,
    pub market_analysis: Arc<dyn MarketAnalysisService>,
    pub advisor: BusinessAdvisor,
}

pub struct ServicesBootstrap;

impl ServicesBootstrap {
    pub fn init(config: &Config) -> Result<ServicesHandle> {
        // 1. Collaborators for the configured mode
        let (idea_generator, market_analysis) = ServiceFactory::create_services(config);

        // 2. Scorer with configured keyword rules and normalization
        let scorer = config
            .build_scorer()
            .context("Failed to build feasibility scorer")?;
        info!(
            "Scorer ready (mode={:?}, normalization={:?})",
            config.mode,
            scorer.normalization()
        );

        let advisor = BusinessAdvisor::new(idea_generator.clone(), market_analysis.clone(), scorer)
            .with_ideas_per_request(config.scoring.ideas_per_request);

        Ok(ServicesHandle {
            idea_generator,
            market_analysis,
            advisor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Mode, ProviderEnvConfig, ScoringEnvConfig};
    use crate::domain::market::SnapshotSource;

    #[tokio::test]
    async fn test_offline_bootstrap_recommends() {
        let config = Config {
            mode: Mode::Offline,
            providers: ProviderEnvConfig::default(),
            scoring: ScoringEnvConfig {
                ideas_per_request: 2,
                ..ScoringEnvConfig::default()
            },
        };
        let handle = ServicesBootstrap::init(&config).unwrap();
        let recs = handle
            .advisor
            .recommend("technology", "students", 10000.0, 0.2)
            .await;
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.snapshot_source == SnapshotSource::Fallback));
    }
}
