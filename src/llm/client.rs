use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            api_key: config.api_key,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        // The credential is checked on first use, not at startup.
        if self.api_key.is_empty() {
            return Err(Error::config("GEMINI_API_KEY is not set"));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest::from_prompt(prompt);

        debug!("Requesting completion from model: {}", self.model);

        let call = async {
            let response = self
                .http
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .json(&request)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::llm(format!(
                    "model request failed with status {status}: {body}"
                )));
            }

            let payload: GenerateContentResponse = response.json().await?;
            payload
                .text()
                .ok_or_else(|| Error::llm("model response contained no text"))
        };

        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| Error::LlmTimeout {
                secs: self.timeout.as_secs(),
            })?
    }
}
