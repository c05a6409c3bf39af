use super::types::{GlobalQuoteResponse, StockQuote};
use crate::{Error, Result, config::MarketConfig};
use tracing::debug;

pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MarketClient {
    pub fn new(config: MarketConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// Latest global quote for a symbol. `None` means the symbol is unknown
    /// to the upstream.
    pub async fn quote(&self, symbol: &str) -> Result<Option<StockQuote>> {
        if self.api_key.is_empty() {
            return Err(Error::config("ALPHA_VANTAGE_API_KEY is not set"));
        }

        debug!("Fetching quote for symbol: {}", symbol);

        let url = format!("{}/query", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::market(format!(
                "Alpha Vantage request failed with status {status}"
            )));
        }

        let payload: GlobalQuoteResponse = response.json().await?;
        Ok(payload.quote.and_then(|quote| quote.into_quote()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarketConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_creation() {
        let client = MarketClient::new(MarketConfig::default());
        assert_eq!(client.base_url, "https://www.alphavantage.co");
    }

    #[tokio::test]
    async fn test_missing_key_fails_on_use() {
        let client = MarketClient::new(MarketConfig::default());
        let err = client.quote("AAPL").await.unwrap_err();

        assert!(err.to_string().contains("ALPHA_VANTAGE_API_KEY"));
    }
}
