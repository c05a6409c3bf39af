use super::label::{Sentiment, classify};
use crate::{Result, llm::TextGenerator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Incoming news article descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
}

/// Label assigned to a single article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSentiment {
    pub title: String,
    pub sentiment: Sentiment,
}

pub struct SentimentAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl SentimentAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Labels each article, preserving input order.
    ///
    /// Articles are scored one at a time; the first failed model call
    /// aborts the whole batch and discards any results already computed.
    pub async fn analyze(&self, articles: &[Article]) -> Result<Vec<ArticleSentiment>> {
        let mut sentiments = Vec::with_capacity(articles.len());

        for article in articles {
            let response = self.generator.generate(&prompt(article)).await?;
            let sentiment = classify(&response);

            debug!("Scored article '{}' as {}", article.title, sentiment);

            sentiments.push(ArticleSentiment {
                title: article.title.clone(),
                sentiment,
            });
        }

        Ok(sentiments)
    }
}

fn prompt(article: &Article) -> String {
    format!(
        "Analyze the sentiment of this news article about the stock market:\n\
         Title: {}\n\
         Description: {}\n\n\
         Return only one word - 'positive', 'negative', or 'neutral'.",
        article.title, article.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Result};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct ScriptedGenerator {
        replies: Mutex<Vec<Result<String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());

            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(Error::llm("No more scripted replies"));
            }
            replies.remove(0)
        }
    }

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: format!("{title} description"),
        }
    }

    #[tokio::test]
    async fn labels_follow_input_order() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Ok("positive".to_string()),
            Ok("Negative sentiment due to rate hike concerns.".to_string()),
            Ok("mixed signals".to_string()),
        ]));
        let analyzer = SentimentAnalyzer::new(generator);

        let articles = vec![article("A"), article("B"), article("C")];
        let sentiments = analyzer.analyze(&articles).await.unwrap();

        assert_eq!(sentiments.len(), 3);
        assert_eq!(sentiments[0].title, "A");
        assert_eq!(sentiments[0].sentiment, Sentiment::Positive);
        assert_eq!(sentiments[1].title, "B");
        assert_eq!(sentiments[1].sentiment, Sentiment::Negative);
        assert_eq!(sentiments[2].title, "C");
        assert_eq!(sentiments[2].sentiment, Sentiment::Neutral);
    }

    #[tokio::test]
    async fn empty_batch_makes_no_model_calls() {
        let generator = Arc::new(ScriptedGenerator::new(vec![]));
        let analyzer = SentimentAnalyzer::new(generator.clone());

        let sentiments = analyzer.analyze(&[]).await.unwrap();

        assert!(sentiments.is_empty());
        assert_eq!(generator.prompts.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn failure_aborts_batch_without_partial_results() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Ok("positive".to_string()),
            Err(Error::llm("quota exceeded")),
        ]));
        let analyzer = SentimentAnalyzer::new(generator.clone());

        let articles = vec![article("A"), article("B"), article("C")];
        let err = analyzer.analyze(&articles).await.unwrap_err();

        assert!(err.to_string().contains("quota exceeded"));
        // The third article is never scored once the second call fails.
        assert_eq!(generator.prompts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn prompt_embeds_title_and_description() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok("neutral".to_string())]));
        let analyzer = SentimentAnalyzer::new(generator.clone());

        let articles = vec![Article {
            title: "Fed raises rates".to_string(),
            description: "Markets react sharply".to_string(),
        }];
        analyzer.analyze(&articles).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Title: Fed raises rates"));
        assert!(prompts[0].contains("Description: Markets react sharply"));
        assert!(prompts[0].contains("'positive', 'negative', or 'neutral'"));
    }
}
