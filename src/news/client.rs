use super::types::{NewsApiResponse, NewsArticle};
use crate::{Error, Result, config::NewsConfig};
use tracing::debug;

pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            page_size: config.page_size,
        }
    }

    /// Recent English-language articles mentioning the symbol, newest first.
    pub async fn fetch(&self, symbol: &str) -> Result<Vec<NewsArticle>> {
        if self.api_key.is_empty() {
            return Err(Error::config("NEWS_API_KEY is not set"));
        }

        debug!("Fetching news for symbol: {}", symbol);

        let url = format!("{}/v2/everything", self.base_url);
        let page_size = self.page_size.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", symbol),
                ("apiKey", self.api_key.as_str()),
                ("pageSize", page_size.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::news(format!(
                "News API request failed with status {status}"
            )));
        }

        let payload: NewsApiResponse = response.json().await?;
        Ok(payload.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NewsConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_creation() {
        let client = NewsClient::new(NewsConfig::default());

        assert_eq!(client.base_url, "https://newsapi.org");
        assert_eq!(client.page_size, 10);
    }

    #[tokio::test]
    async fn test_missing_key_fails_on_use() {
        let client = NewsClient::new(NewsConfig::default());
        let err = client.fetch("AAPL").await.unwrap_err();

        assert!(err.to_string().contains("NEWS_API_KEY"));
    }
}
