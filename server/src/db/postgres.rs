use async_trait::async_trait;
use sqlx::PgPool;

use common::ScoreSubmission;

use super::models::ScoreRecord;
use super::{ScoreStore, StoreError};

/// PostgreSQL-backed score store. The schema is owned by the embedded
/// migrations in `migrations/`.
pub struct PgScoreStore {
    pool: PgPool,
}

impl PgScoreStore {
    pub fn new(pool: PgPool) -> Self {
        PgScoreStore { pool }
    }
}

#[async_trait]
impl ScoreStore for PgScoreStore {
    async fn record_score(&self, submission: &ScoreSubmission) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO scores (score, duration, date) VALUES ($1, $2, $3)")
            .bind(submission.score as i64)
            .bind(submission.duration as i64)
            .bind(&submission.date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn top_scores(&self, limit: i64) -> Result<Vec<ScoreRecord>, StoreError> {
        let records = sqlx::query_as::<_, ScoreRecord>(
            "SELECT id, score, duration, date, created_at FROM scores \
             ORDER BY score DESC, id ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
