mod store;
mod types;

pub use store::SentimentStore;
pub use types::{SentimentCount, SentimentRecord};
