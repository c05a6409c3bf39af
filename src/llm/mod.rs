mod client;
mod types;

pub use client::{GeminiClient, TextGenerator};
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
