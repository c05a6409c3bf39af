mod client;
mod types;

pub use client::NewsClient;
pub use types::{NewsApiResponse, NewsArticle, NewsSource};
