use serde::{Deserialize, Serialize};

use crate::game_engine::ScoreSummary;

/// Wire format of a score submission as POSTed to the score API. The `date`
/// is a display string chosen by the client; the server stores it verbatim
/// and stamps its own creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub score: u32,
    pub duration: u64,
    pub date: String,
}

impl ScoreSubmission {
    pub fn new(summary: ScoreSummary, date: String) -> Self {
        ScoreSubmission {
            score: summary.score,
            duration: summary.duration_secs,
            date,
        }
    }
}
