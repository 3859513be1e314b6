pub mod models;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use common::ScoreSubmission;
use models::ScoreRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence boundary for the leaderboard. Implementations are append-only:
/// records are never updated or deleted once written.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Appends a record, stamping the creation time server-side. Submitted
    /// values are trusted verbatim; duplicates create duplicate entries.
    async fn record_score(&self, submission: &ScoreSubmission) -> Result<(), StoreError>;

    /// The top `limit` records ordered by score descending, ties broken by
    /// insertion order. An empty store yields an empty vec.
    async fn top_scores(&self, limit: i64) -> Result<Vec<ScoreRecord>, StoreError>;
}
