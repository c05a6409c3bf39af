mod analyzer;
mod label;

pub use analyzer::{Article, ArticleSentiment, SentimentAnalyzer};
pub use label::{Sentiment, classify};
