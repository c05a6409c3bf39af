use crate::{
    market::StockQuote,
    news::NewsArticle,
    sentiment::{Article, ArticleSentiment, Sentiment},
    storage::{SentimentCount, SentimentRecord},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SentimentRequest {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub sentiments: Vec<ArticleSentiment>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StockQuery {
    pub stock: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub data: StockQuote,
}

#[derive(Debug, Deserialize)]
pub struct RecordSentimentRequest {
    pub symbol: String,
    pub title: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Serialize)]
pub struct RecordSentimentResponse {
    pub saved: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub results: Vec<SentimentRecord>,
}

#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub distribution: Vec<SentimentCount>,
}
