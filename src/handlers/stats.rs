use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::models::mood::MoodEntry;
use crate::AppState;

pub async fn mood_summary(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<Json<BTreeMap<String, i64>>> {
    let summary = state.store.mood_summary(user_id).await?;
    Ok(Json(summary))
}

pub async fn recent_moods(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let recent = state.store.recent_moods(user_id).await?;
    Ok(Json(recent))
}
