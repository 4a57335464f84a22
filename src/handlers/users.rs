use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::models::user::{NewUser, RegisterUserResponse, User};
use crate::AppState;

pub async fn register_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<NewUser>,
) -> AppResult<Json<RegisterUserResponse>> {
    let user_id = state.store.create_user(&body).await?;
    tracing::info!(user_id, "User registered");

    Ok(Json(RegisterUserResponse {
        message: "User added".into(),
        user_id,
    }))
}

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}
