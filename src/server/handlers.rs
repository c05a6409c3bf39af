use super::types::{
    AnalysisResponse, DistributionResponse, ErrorResponse, NewsResponse, QuoteResponse,
    RecordSentimentRequest, RecordSentimentResponse, SentimentRequest, SentimentResponse,
    StockQuery, SymbolQuery,
};
use crate::{
    Result,
    market::MarketClient,
    news::NewsClient,
    sentiment::{ArticleSentiment, SentimentAnalyzer},
    storage::{SentimentRecord, SentimentStore},
};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
    pub store: Arc<SentimentStore>,
    pub news: Arc<NewsClient>,
    pub market: Arc<MarketClient>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn internal_error(message: &str) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// JSON 405 for any non-POST method on the sentiment route.
pub async fn method_not_allowed() -> HandlerError {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}

pub async fn analyze_sentiment(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<SentimentResponse>, HandlerError> {
    match score_batch(&state, &body).await {
        Ok(sentiments) => {
            info!("Scored {} articles", sentiments.len());
            Ok(Json(SentimentResponse { sentiments }))
        }
        Err(e) => {
            error!("Error in sentiment analysis: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

// The body is parsed here rather than by the Json extractor so malformed
// input and upstream failures surface through one error boundary. The batch
// either fully succeeds or fully fails.
async fn score_batch(state: &AppState, body: &[u8]) -> Result<Vec<ArticleSentiment>> {
    let request: SentimentRequest = serde_json::from_slice(body)?;

    info!(
        "Received sentiment request for {} articles",
        request.articles.len()
    );

    state.analyzer.analyze(&request.articles).await
}

pub async fn news(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> std::result::Result<Json<NewsResponse>, HandlerError> {
    let Some(symbol) = query.symbol else {
        return Err(bad_request("Stock symbol is required"));
    };

    match state.news.fetch(&symbol).await {
        Ok(articles) => Ok(Json(NewsResponse { articles })),
        Err(e) => {
            error!("Error fetching news: {}", e);
            Err(internal_error("Failed to fetch news articles"))
        }
    }
}

pub async fn stock(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> std::result::Result<Json<QuoteResponse>, HandlerError> {
    let Some(symbol) = query.symbol else {
        return Err(bad_request("Stock symbol is required"));
    };

    match state.market.quote(&symbol).await {
        Ok(Some(data)) => Ok(Json(QuoteResponse { data })),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Stock data not found".to_string(),
            }),
        )),
        Err(e) => {
            error!("Error fetching stock data: {}", e);
            Err(internal_error("Failed to fetch stock data"))
        }
    }
}

pub async fn sentiment_history(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> std::result::Result<Json<AnalysisResponse>, HandlerError> {
    let Some(stock) = query.stock else {
        return Err(bad_request("Stock symbol is required"));
    };

    match state.store.list_by_symbol(&stock).await {
        Ok(results) => Ok(Json(AnalysisResponse { results })),
        Err(e) => {
            error!("Error fetching sentiment analysis: {}", e);
            Err(internal_error("Failed to fetch sentiment analysis"))
        }
    }
}

pub async fn record_sentiment(
    State(state): State<AppState>,
    Json(request): Json<RecordSentimentRequest>,
) -> std::result::Result<Json<RecordSentimentResponse>, HandlerError> {
    let record = SentimentRecord::new(request.symbol, request.title, request.sentiment);

    match state.store.save(record).await {
        Ok(()) => Ok(Json(RecordSentimentResponse { saved: true })),
        Err(e) => {
            error!("Error saving sentiment analysis: {}", e);
            Err(internal_error("Failed to save sentiment analysis"))
        }
    }
}

pub async fn sentiment_distribution(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> std::result::Result<Json<DistributionResponse>, HandlerError> {
    let Some(stock) = query.stock else {
        return Err(bad_request("Stock symbol is required"));
    };

    match state.store.distribution(&stock).await {
        Ok(distribution) => Ok(Json(DistributionResponse { distribution })),
        Err(e) => {
            error!("Error fetching sentiment distribution: {}", e);
            Err(internal_error("Failed to fetch sentiment distribution"))
        }
    }
}
