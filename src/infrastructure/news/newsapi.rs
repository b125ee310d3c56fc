use crate::config::NewsApiConfig;
use crate::domain::errors::CollaboratorError;
use crate::domain::ports::{NewsArticle, NewsSearchService};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::{debug, info};

use crate::infrastructure::http_client_factory::HttpClientFactory;

const PROVIDER: &str = "NewsAPI";

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
}

pub struct NewsApiClient {
    client: ClientWithMiddleware,
    config: NewsApiConfig,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig, max_retries: u32) -> Self {
        Self {
            client: HttpClientFactory::create_client(max_retries),
            config,
        }
    }

    fn endpoint(&self, query: &str, api_key: &str) -> Result<Url> {
        let base = format!("{}/v2/everything", self.config.base_url.trim_end_matches('/'));
        Url::parse_with_params(&base, &[("q", query), ("apiKey", api_key)]).map_err(|e| {
            CollaboratorError::Transport {
                provider: PROVIDER.to_string(),
                reason: format!("invalid endpoint {}: {}", base, e),
            }
            .into()
        })
    }
}

#[async_trait]
impl NewsSearchService for NewsApiClient {
    async fn search(&self, query: &str) -> Result<Vec<NewsArticle>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| CollaboratorError::MissingCredentials {
                provider: PROVIDER.to_string(),
            })?;

        info!("Searching {} for '{}'...", PROVIDER, query);
        let response = self
            .client
            .get(self.endpoint(query, api_key)?)
            .send()
            .await
            .map_err(|e| CollaboratorError::Transport {
                provider: PROVIDER.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(CollaboratorError::RateLimited {
                provider: PROVIDER.to_string(),
            }
            .into());
        }
        if !status.is_success() {
            return Err(CollaboratorError::HttpStatus {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body: EverythingResponse =
            response.json().await.map_err(|e| CollaboratorError::Decode {
                provider: PROVIDER.to_string(),
                reason: e.to_string(),
            })?;

        let articles: Vec<NewsArticle> = body
            .articles
            .into_iter()
            .map(|a| NewsArticle {
                title: a.title.unwrap_or_default(),
                description: a.description.unwrap_or_default(),
            })
            .collect();
        debug!("{} returned {} articles for '{}'", PROVIDER, articles.len(), query);
        Ok(articles)
    }
}
