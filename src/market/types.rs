use serde::{Deserialize, Serialize};

/// Normalized daily quote for one symbol.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub previous_close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    pub date: String,
}

/// Alpha Vantage GLOBAL_QUOTE payload, numbered field names and all.
#[derive(Debug, Deserialize)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    pub quote: Option<RawQuote>,
}

/// All quote fields arrive as strings; `change percent` carries a
/// trailing `%`.
#[derive(Debug, Default, Deserialize)]
pub struct RawQuote {
    #[serde(rename = "01. symbol", default)]
    pub symbol: String,
    #[serde(rename = "02. open", default)]
    pub open: String,
    #[serde(rename = "03. high", default)]
    pub high: String,
    #[serde(rename = "04. low", default)]
    pub low: String,
    #[serde(rename = "05. price", default)]
    pub price: String,
    #[serde(rename = "06. volume", default)]
    pub volume: String,
    #[serde(rename = "07. latest trading day", default)]
    pub latest_trading_day: String,
    #[serde(rename = "08. previous close", default)]
    pub previous_close: String,
    #[serde(rename = "09. change", default)]
    pub change: String,
    #[serde(rename = "10. change percent", default)]
    pub change_percent: String,
}

impl RawQuote {
    /// Unknown symbols come back as an empty quote object.
    pub fn into_quote(self) -> Option<StockQuote> {
        if self.symbol.is_empty() {
            return None;
        }

        Some(StockQuote {
            symbol: self.symbol,
            price: parse_num(&self.price),
            change: parse_num(&self.change),
            change_percent: parse_num(self.change_percent.trim_end_matches('%')),
            previous_close: parse_num(&self.previous_close),
            open: parse_num(&self.open),
            high: parse_num(&self.high),
            low: parse_num(&self.low),
            volume: self.volume.parse().unwrap_or(0),
            date: self.latest_trading_day,
        })
    }
}

fn parse_num(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}
