use crate::config::YahooFinanceConfig;
use crate::domain::errors::CollaboratorError;
use crate::domain::ports::PriceHistoryService;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::info;

const PROVIDER: &str = "Yahoo Finance";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    /// Missing sessions come back as null
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// One year of daily closes from the Yahoo Finance chart API
pub struct YahooPriceHistory {
    client: ClientWithMiddleware,
    config: YahooFinanceConfig,
}

impl YahooPriceHistory {
    pub fn new(config: YahooFinanceConfig, max_retries: u32) -> Self {
        Self {
            client: HttpClientFactory::create_client(max_retries),
            config,
        }
    }
}

fn parse_closes(symbol: &str, body: ChartResponse) -> Result<Vec<f64>, CollaboratorError> {
    if let Some(error) = body.chart.error {
        return Err(CollaboratorError::EmptyResponse {
            provider: PROVIDER.to_string(),
            reason: format!("{}: {}", symbol, error.description),
        });
    }

    let closes: Vec<f64> = body
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .flat_map(|r| r.indicators.quote)
        .flat_map(|q| q.close)
        .flatten()
        .filter(|c| c.is_finite())
        .collect();

    if closes.is_empty() {
        return Err(CollaboratorError::EmptyResponse {
            provider: PROVIDER.to_string(),
            reason: format!("no price data found for {}", symbol),
        });
    }
    Ok(closes)
}

#[async_trait]
impl PriceHistoryService for YahooPriceHistory {
    async fn daily_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        let base = format!(
            "{}/v8/finance/chart/{}",
            self.config.base_url.trim_end_matches('/'),
            symbol
        );
        let url = Url::parse_with_params(&base, &[("range", "1y"), ("interval", "1d")]).map_err(
            |e| CollaboratorError::Transport {
                provider: PROVIDER.to_string(),
                reason: format!("invalid endpoint {}: {}", base, e),
            },
        )?;

        info!("Fetching 1y daily history for {} from {}...", symbol, PROVIDER);
        let response = self
            .client
            .get(url)
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

        let body: ChartResponse = response.json().await.map_err(|e| CollaboratorError::Decode {
            provider: PROVIDER.to_string(),
            reason: e.to_string(),
        })?;

        Ok(parse_closes(symbol, body)?)
    }
}
