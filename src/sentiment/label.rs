use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed classification of an article's stance toward the stock market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(crate::Error::internal(format!(
                "Unknown sentiment label: {other}"
            ))),
        }
    }
}

/// Maps the model's free-text reply onto a label.
///
/// The reply is trimmed and lowercased, then matched by substring.
/// "positive" is checked before "negative"; anything that matches neither
/// falls back to neutral.
pub fn classify(response: &str) -> Sentiment {
    let text = response.trim().to_lowercase();

    if text.contains("positive") {
        Sentiment::Positive
    } else if text.contains("negative") {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
