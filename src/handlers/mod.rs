use axum::http::Uri;

use crate::error::AppError;

pub mod health;
pub mod moods;
pub mod stats;
pub mod users;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
