pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::GeminiClient,
    market::MarketClient,
    news::NewsClient,
    sentiment::SentimentAnalyzer,
    storage::SentimentStore,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Initialize sentiment storage
    let db_path =
        std::env::var("SENTIMENT_DB_PATH").unwrap_or_else(|_| config.server.database_path.clone());
    let store = SentimentStore::new(&db_path).await?;

    // Create application state
    let generator = Arc::new(GeminiClient::new(config.llm.clone()));
    let state = AppState {
        analyzer: Arc::new(SentimentAnalyzer::new(generator)),
        store: Arc::new(store),
        news: Arc::new(NewsClient::new(config.news.clone())),
        market: Arc::new(MarketClient::new(config.market.clone())),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Router shared by the binary and the integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/sentiment",
            post(handlers::analyze_sentiment).fallback(handlers::method_not_allowed),
        )
        .route("/api/news", get(handlers::news))
        .route("/api/stock", get(handlers::stock))
        .route(
            "/api/sentiment/analysis",
            get(handlers::sentiment_history).post(handlers::record_sentiment),
        )
        .route(
            "/api/sentiment/distribution",
            get(handlers::sentiment_distribution),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
