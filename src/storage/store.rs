use super::types::{SentimentCount, SentimentRecord};
use crate::{Error, Result, sentiment::Sentiment};
use libsql::{Builder, Database};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub struct SentimentStore {
    db: Option<Database>,
    // In-memory fallback storage
    fallback: Arc<Mutex<Vec<SentimentRecord>>>,
}

impl SentimentStore {
    pub async fn new(db_path: &str) -> Result<Self> {
        let mut store = Self {
            db: None,
            fallback: Arc::new(Mutex::new(Vec::new())),
        };

        // Try to initialize database
        match store.init_database(db_path).await {
            Ok(()) => {
                info!("Database initialized successfully: {}", db_path);
            }
            Err(e) => {
                warn!(
                    "Database initialization failed, using in-memory fallback: {}",
                    e
                );
            }
        }

        Ok(store)
    }

    async fn init_database(&mut self, db_path: &str) -> Result<()> {
        let db = Builder::new_local(db_path).build().await?;

        // Create table if it doesn't exist
        let conn = db.connect()?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS sentiment_analysis (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                stock_symbol TEXT NOT NULL,
                article_title TEXT NOT NULL,
                sentiment TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            "#,
            (),
        )
        .await?;

        self.db = Some(db);
        Ok(())
    }

    pub async fn save(&self, record: SentimentRecord) -> Result<()> {
        // Try database first
        if let Some(ref db) = self.db {
            match self.save_to_db(db, &record).await {
                Ok(()) => {
                    debug!("Sentiment saved to database for symbol: {}", record.symbol);
                    return Ok(());
                }
                Err(e) => {
                    warn!("Failed to save to database, using fallback: {}", e);
                }
            }
        }

        // Fallback to in-memory storage
        self.save_to_fallback(record)
    }

    async fn save_to_db(&self, db: &Database, record: &SentimentRecord) -> Result<()> {
        let conn = db.connect()?;
        conn.execute(
            "INSERT INTO sentiment_analysis (stock_symbol, article_title, sentiment, created_at) VALUES (?, ?, ?, ?)",
            (
                record.symbol.as_str(),
                record.title.as_str(),
                record.sentiment.as_str(),
                record.created_at.to_rfc3339(),
            ),
        )
        .await?;
        Ok(())
    }

    fn save_to_fallback(&self, record: SentimentRecord) -> Result<()> {
        let mut fallback = self
            .fallback
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;
        fallback.push(record);
        Ok(())
    }

    /// Records for one symbol, newest first.
    pub async fn list_by_symbol(&self, symbol: &str) -> Result<Vec<SentimentRecord>> {
        // Try database first
        if let Some(ref db) = self.db {
            match self.list_from_db(db, symbol).await {
                Ok(records) => {
                    debug!(
                        "Retrieved {} records from database for symbol: {}",
                        records.len(),
                        symbol
                    );
                    return Ok(records);
                }
                Err(e) => {
                    warn!("Failed to read from database, using fallback: {}", e);
                }
            }
        }

        // Fallback to in-memory storage
        self.list_from_fallback(symbol)
    }

    async fn list_from_db(&self, db: &Database, symbol: &str) -> Result<Vec<SentimentRecord>> {
        let conn = db.connect()?;
        let mut rows = conn
            .query(
                "SELECT id, stock_symbol, article_title, sentiment, created_at FROM sentiment_analysis WHERE stock_symbol = ? ORDER BY created_at DESC, id DESC",
                [symbol],
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            let sentiment_str: String = row.get(3)?;
            let created_at_str: String = row.get(4)?;
            let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
                .map_err(|e| Error::internal(format!("Failed to parse timestamp: {e}")))?
                .with_timezone(&chrono::Utc);

            records.push(SentimentRecord {
                id: Some(row.get(0)?),
                symbol: row.get(1)?,
                title: row.get(2)?,
                sentiment: sentiment_str.parse()?,
                created_at,
            });
        }

        Ok(records)
    }

    fn list_from_fallback(&self, symbol: &str) -> Result<Vec<SentimentRecord>> {
        let fallback = self
            .fallback
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        // Insertion order is chronological, so reversing gives newest first.
        let mut records: Vec<SentimentRecord> = fallback
            .iter()
            .filter(|record| record.symbol == symbol)
            .cloned()
            .collect();
        records.reverse();

        debug!(
            "Retrieved {} records from fallback for symbol: {}",
            records.len(),
            symbol
        );
        Ok(records)
    }

    /// Per-label counts for one symbol. Labels with no records are omitted.
    pub async fn distribution(&self, symbol: &str) -> Result<Vec<SentimentCount>> {
        // Try database first
        if let Some(ref db) = self.db {
            match self.distribution_from_db(db, symbol).await {
                Ok(counts) => return Ok(counts),
                Err(e) => {
                    warn!("Failed to read from database, using fallback: {}", e);
                }
            }
        }

        // Fallback to in-memory storage
        self.distribution_from_fallback(symbol)
    }

    async fn distribution_from_db(&self, db: &Database, symbol: &str) -> Result<Vec<SentimentCount>> {
        let conn = db.connect()?;
        let mut rows = conn
            .query(
                "SELECT sentiment, COUNT(*) as count FROM sentiment_analysis WHERE stock_symbol = ? GROUP BY sentiment",
                [symbol],
            )
            .await?;

        let mut counts = Vec::new();
        while let Some(row) = rows.next().await? {
            let sentiment_str: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            counts.push(SentimentCount {
                sentiment: sentiment_str.parse()?,
                count: count as u64,
            });
        }

        Ok(counts)
    }

    fn distribution_from_fallback(&self, symbol: &str) -> Result<Vec<SentimentCount>> {
        let fallback = self
            .fallback
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        let mut counts = Vec::new();
        for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            let count = fallback
                .iter()
                .filter(|record| record.symbol == symbol && record.sentiment == sentiment)
                .count() as u64;
            if count > 0 {
                counts.push(SentimentCount { sentiment, count });
            }
        }

        Ok(counts)
    }
}
