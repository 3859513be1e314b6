use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted leaderboard entry. Field names on the wire keep the shape the
/// web frontend already consumes (`_id`, `createdAt`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScoreRecord {
    #[serde(rename = "_id")]
    pub id: i64,
    pub score: i64,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
