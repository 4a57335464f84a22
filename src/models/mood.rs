use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// How many entries `GET /moods/recent/{user_id}` returns at most.
pub const RECENT_LIMIT: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: i64,
    pub user_id: i64,
    pub mood: String,
    pub trigger_note: Option<String>,
    pub date: NaiveDate,
}

/// POST /moods
#[derive(Debug, Deserialize)]
pub struct LogMoodRequest {
    pub mood: String,
    pub trigger_note: Option<String>,
    /// Defaults to today's date when absent.
    pub date: Option<NaiveDate>,
    pub user_id: i64,
}

/// A mood entry ready for insertion, with its date already resolved.
#[derive(Debug, Clone)]
pub struct NewMood {
    pub user_id: i64,
    pub mood: String,
    pub trigger_note: Option<String>,
    pub date: NaiveDate,
}

impl LogMoodRequest {
    pub fn into_new_mood(self, today: NaiveDate) -> NewMood {
        NewMood {
            user_id: self.user_id,
            mood: self.mood,
            trigger_note: self.trigger_note,
            date: self.date.unwrap_or(today),
        }
    }
}

/// PUT /moods/{id}. Only these two fields of an entry are mutable.
#[derive(Debug, Clone, Deserialize)]
pub struct MoodChange {
    pub mood: String,
    pub trigger_note: Option<String>,
}
