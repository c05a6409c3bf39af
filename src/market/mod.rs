mod client;
mod types;

pub use client::MarketClient;
pub use types::{GlobalQuoteResponse, RawQuote, StockQuote};
