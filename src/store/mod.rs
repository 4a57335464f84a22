//! Storage port for users and mood entries.
//!
//! Each method maps to exactly one SQL statement executed on its own
//! connection. Listing methods order entries by `date DESC, id DESC`.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::mood::{MoodChange, MoodEntry, NewMood};
use crate::models::user::{NewUser, User};

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgMoodStore;

#[async_trait]
pub trait MoodStore: Send + Sync {
    /// Insert a user and return its generated id.
    async fn create_user(&self, user: &NewUser) -> AppResult<i64>;

    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Insert a mood entry. Fails with `BadRequest` when `user_id` does not
    /// reference an existing user.
    async fn create_mood(&self, mood: &NewMood) -> AppResult<()>;

    async fn list_moods(&self, user_id: i64) -> AppResult<Vec<MoodEntry>>;

    /// Returns the number of rows changed; zero when `id` does not exist.
    async fn update_mood(&self, id: i64, change: &MoodChange) -> AppResult<u64>;

    /// Returns the number of rows removed; zero when `id` does not exist.
    async fn delete_mood(&self, id: i64) -> AppResult<u64>;

    /// Count of entries per mood label. Empty when the user has no entries.
    async fn mood_summary(&self, user_id: i64) -> AppResult<BTreeMap<String, i64>>;

    /// At most [`RECENT_LIMIT`](crate::models::mood::RECENT_LIMIT) entries.
    async fn recent_moods(&self, user_id: i64) -> AppResult<Vec<MoodEntry>>;

    /// Readiness probe against the backing store.
    async fn ping(&self) -> AppResult<()>;
}
