use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article as returned by NewsAPI. Field names stay camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub source: NewsSource,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_news_api_payload() {
        let payload = json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": null, "name": "Reuters"},
                "author": "Jane Doe",
                "title": "Fed raises rates",
                "description": "Markets react sharply",
                "url": "https://example.com/fed",
                "urlToImage": "https://example.com/fed.jpg",
                "publishedAt": "2024-06-01T12:30:00Z",
                "content": "..."
            }]
        });

        let response: NewsApiResponse = serde_json::from_value(payload).unwrap();

        assert_eq!(response.articles.len(), 1);
        let article = &response.articles[0];
        assert_eq!(article.title, "Fed raises rates");
        assert_eq!(article.description.as_deref(), Some("Markets react sharply"));
        assert_eq!(article.source.name, "Reuters");
        assert!(article.published_at.is_some());
        assert_eq!(
            article.url_to_image.as_deref(),
            Some("https://example.com/fed.jpg")
        );
    }

    #[test]
    fn missing_articles_key_is_empty() {
        let response: NewsApiResponse = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(response.articles.is_empty());
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let payload = json!({
            "articles": [{
                "source": {"name": "AP"},
                "title": "Quiet day on the markets",
                "url": "https://example.com/quiet"
            }]
        });

        let response: NewsApiResponse = serde_json::from_value(payload).unwrap();
        let article = &response.articles[0];

        assert_eq!(article.description, None);
        assert_eq!(article.published_at, None);
        assert_eq!(article.url_to_image, None);
    }
}
