use crate::config::{Config, Mode};
use crate::domain::ports::{IdeaGenerator, MarketAnalysisService};
use crate::infrastructure::market::{LiveMarketAnalysisService, YahooPriceHistory};
use crate::infrastructure::mock::{StaticIdeaGenerator, StaticMarketAnalysis};
use crate::infrastructure::news::NewsApiClient;
use crate::infrastructure::openai::OpenAiIdeaGenerator;
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_services(
        config: &Config,
    ) -> (Arc<dyn IdeaGenerator>, Arc<dyn MarketAnalysisService>) {
        match config.mode {
            Mode::Offline => {
                info!("Offline mode: static ideas and fallback market data");
                (
                    Arc::new(StaticIdeaGenerator::offline()),
                    // every lookup resolves to the industry fallback snapshot
                    Arc::new(StaticMarketAnalysis::failing()),
                )
            }
            Mode::Live => {
                let providers = &config.providers;
                let retries = providers.http_max_retries;

                let idea_generator = OpenAiIdeaGenerator::new(providers.openai.clone(), retries);
                let market_analysis = LiveMarketAnalysisService::new(
                    Arc::new(YahooPriceHistory::new(providers.yahoo.clone(), retries)),
                    Arc::new(NewsApiClient::new(providers.news_api.clone(), retries)),
                );

                (Arc::new(idea_generator), Arc::new(market_analysis))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProviderEnvConfig, ScoringEnvConfig};

    #[tokio::test]
    async fn test_offline_services_need_no_network() {
        let config = Config {
            mode: Mode::Offline,
            providers: ProviderEnvConfig::default(),
            scoring: ScoringEnvConfig::default(),
        };
        let (ideas, market) = ServiceFactory::create_services(&config);
        assert_eq!(ideas.generate("technology", "students", 3).await.unwrap().len(), 3);
        assert!(market.fetch_snapshot("technology").await.is_err());
    }
}
