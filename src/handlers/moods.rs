use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::mood::{LogMoodRequest, MoodChange, MoodEntry};
use crate::models::MessageResponse;
use crate::AppState;

pub async fn log_mood(
    State(state): State<AppState>,
    AppJson(body): AppJson<LogMoodRequest>,
) -> AppResult<Json<MessageResponse>> {
    let mood = body.into_new_mood(Utc::now().date_naive());
    state.store.create_mood(&mood).await?;
    tracing::info!(user_id = mood.user_id, date = %mood.date, "Mood logged");

    Ok(Json(MessageResponse::new("Mood logged successfully")))
}

pub async fn list_moods(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let moods = state.store.list_moods(user_id).await?;
    Ok(Json(moods))
}

/// Replaces mood and trigger note. An unknown id is acknowledged like any
/// other update.
pub async fn update_mood(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<MoodChange>,
) -> AppResult<Json<MessageResponse>> {
    let rows = state.store.update_mood(id, &body).await?;
    if rows == 0 {
        tracing::debug!(mood_id = id, "Update matched no mood entry");
    }

    Ok(Json(MessageResponse::new("Mood updated")))
}

/// An unknown id is acknowledged like any other delete.
pub async fn delete_mood(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    let rows = state.store.delete_mood(id).await?;
    if rows == 0 {
        tracing::debug!(mood_id = id, "Delete matched no mood entry");
    }

    Ok(Json(MessageResponse::new("Mood deleted")))
}
