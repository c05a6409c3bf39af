use crate::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted article judgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub id: Option<i64>,
    pub symbol: String,
    pub title: String,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
}

impl SentimentRecord {
    pub fn new(symbol: String, title: String, sentiment: Sentiment) -> Self {
        Self {
            id: None,
            symbol,
            title,
            sentiment,
            created_at: Utc::now(),
        }
    }
}

/// Aggregate row for the distribution query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: u64,
}
