use crate::config::OpenAiConfig;
use crate::domain::errors::CollaboratorError;
use crate::domain::ports::IdeaGenerator;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

const PROVIDER: &str = "OpenAI";

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

pub fn build_prompt(industry: &str, target_market: &str, count: usize) -> String {
    format!(
        "Generate {} innovative business ideas in the {} industry targeting {}. \
         Format each idea as a numbered list item starting with the number followed by a period.",
        count, industry, target_market
    )
}

/// Split a numbered-list completion into idea descriptions.
///
/// Blank lines are dropped, a leading "N. " is stripped from lines that start
/// with a digit, and at most `count` ideas are kept.
pub fn parse_idea_list(content: &str, count: usize) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let numbered = line.chars().next().is_some_and(|c| c.is_ascii_digit());
            match line.split_once(". ") {
                Some((_, rest)) if numbered => rest.trim().to_string(),
                _ => line.to_string(),
            }
        })
        .filter(|idea| !idea.is_empty())
        .take(count)
        .collect()
}

/// Idea generation through an OpenAI-compatible chat-completions endpoint
pub struct OpenAiIdeaGenerator {
    client: ClientWithMiddleware,
    config: OpenAiConfig,
}

impl OpenAiIdeaGenerator {
    pub fn new(config: OpenAiConfig, max_retries: u32) -> Self {
        Self {
            client: HttpClientFactory::create_client(max_retries),
            config,
        }
    }
}

#[async_trait]
impl IdeaGenerator for OpenAiIdeaGenerator {
    async fn generate(
        &self,
        industry: &str,
        target_market: &str,
        count: usize,
    ) -> Result<Vec<String>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| CollaboratorError::MissingCredentials {
                provider: PROVIDER.to_string(),
            })?;

        let body = json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": build_prompt(industry, target_market, count) }],
        });

        info!(
            "Requesting {} ideas for {} / {} from {}...",
            count, industry, target_market, self.config.model
        );
        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
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

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| CollaboratorError::Decode {
                provider: PROVIDER.to_string(),
                reason: e.to_string(),
            })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CollaboratorError::EmptyResponse {
                provider: PROVIDER.to_string(),
                reason: "completion has no message content".to_string(),
            })?;

        let ideas = parse_idea_list(&content, count);
        debug!("Parsed {} ideas from completion", ideas.len());
        Ok(ideas)
    }
}
