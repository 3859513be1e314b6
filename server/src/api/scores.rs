use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use common::ScoreSubmission;

use crate::db::models::ScoreRecord;
use crate::db::ScoreStore;

/// Fixed leaderboard cutoff.
const LEADERBOARD_LIMIT: i64 = 5;

/// State for the score endpoints.
#[derive(Clone)]
pub struct ScoresState {
    pub store: Arc<dyn ScoreStore>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Get the top scores, best first.
/// A failing store degrades to an empty leaderboard so the game page keeps
/// working while the backend is down.
pub async fn get_scores(State(state): State<ScoresState>) -> Json<Vec<ScoreRecord>> {
    match state.store.top_scores(LEADERBOARD_LIMIT).await {
        Ok(records) => Json(records),
        Err(e) => {
            error!("Failed to fetch top scores: {:?}", e);
            Json(Vec::new())
        }
    }
}

/// Record a finished game's score. Values are stored as submitted; only the
/// creation timestamp is server-assigned.
pub async fn submit_score(
    State(state): State<ScoresState>,
    Json(submission): Json<ScoreSubmission>,
) -> Response {
    match state.store.record_score(&submission).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Score saved successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to save score: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error saving score".to_string(),
                }),
            )
                .into_response()
        }
    }
}
