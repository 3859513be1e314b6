use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use ::common::ScoreSubmission;
use server::db::models::ScoreRecord;
use server::db::{ScoreStore, StoreError};

/// In-memory score store mirroring the ordering contract of the Postgres
/// implementation: score descending, insertion order for ties.
pub struct MemoryScoreStore {
    records: Mutex<Vec<ScoreRecord>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        MemoryScoreStore {
            records: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn record_score(&self, submission: &ScoreSubmission) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        let id = records.len() as i64 + 1;
        records.push(ScoreRecord {
            id,
            score: submission.score as i64,
            duration: submission.duration as i64,
            date: submission.date.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn top_scores(&self, limit: i64) -> Result<Vec<ScoreRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        let mut sorted = records.clone();
        // Stable sort keeps insertion order for equal scores.
        sorted.sort_by_key(|record| std::cmp::Reverse(record.score));
        sorted.truncate(limit as usize);
        Ok(sorted)
    }
}

/// Store double whose backend is permanently down.
pub struct UnavailableScoreStore;

#[async_trait]
impl ScoreStore for UnavailableScoreStore {
    async fn record_score(&self, _submission: &ScoreSubmission) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn top_scores(&self, _limit: i64) -> Result<Vec<ScoreRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}
