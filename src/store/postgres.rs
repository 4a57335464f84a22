use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::db::ConnectionFactory;
use crate::error::{AppError, AppResult};
use crate::models::mood::{MoodChange, MoodEntry, NewMood, RECENT_LIMIT};
use crate::models::user::{NewUser, User};

use super::MoodStore;

pub struct PgMoodStore {
    connections: ConnectionFactory,
}

impl PgMoodStore {
    pub fn new(connections: ConnectionFactory) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl MoodStore for PgMoodStore {
    async fn create_user(&self, user: &NewUser) -> AppResult<i64> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&mut *conn)
        .await;
        conn.release().await;

        Ok(result?)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&mut *conn)
            .await;
        conn.release().await;

        Ok(result?)
    }

    async fn create_mood(&self, mood: &NewMood) -> AppResult<()> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO moods (mood, trigger_note, date, user_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&mood.mood)
        .bind(&mood.trigger_note)
        .bind(mood.date)
        .bind(mood.user_id)
        .execute(&mut *conn)
        .await;
        conn.release().await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Err(
                AppError::BadRequest(format!("User {} does not exist", mood.user_id)),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_moods(&self, user_id: i64) -> AppResult<Vec<MoodEntry>> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_as::<_, MoodEntry>(
            r#"
            SELECT id, user_id, mood, trigger_note, date FROM moods
            WHERE user_id = $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await;
        conn.release().await;

        Ok(result?)
    }

    async fn update_mood(&self, id: i64, change: &MoodChange) -> AppResult<u64> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query("UPDATE moods SET mood = $1, trigger_note = $2 WHERE id = $3")
            .bind(&change.mood)
            .bind(&change.trigger_note)
            .bind(id)
            .execute(&mut *conn)
            .await;
        conn.release().await;

        Ok(result?.rows_affected())
    }

    async fn delete_mood(&self, id: i64) -> AppResult<u64> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query("DELETE FROM moods WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await;
        conn.release().await;

        Ok(result?.rows_affected())
    }

    async fn mood_summary(&self, user_id: i64) -> AppResult<BTreeMap<String, i64>> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_as::<_, (String, i64)>(
            "SELECT mood, COUNT(*) FROM moods WHERE user_id = $1 GROUP BY mood",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await;
        conn.release().await;

        Ok(result?.into_iter().collect())
    }

    async fn recent_moods(&self, user_id: i64) -> AppResult<Vec<MoodEntry>> {
        let mut conn = self.connections.acquire().await?;
        let result = sqlx::query_as::<_, MoodEntry>(
            r#"
            SELECT id, user_id, mood, trigger_note, date FROM moods
            WHERE user_id = $1
            ORDER BY date DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(RECENT_LIMIT)
        .fetch_all(&mut *conn)
        .await;
        conn.release().await;

        Ok(result?)
    }

    async fn ping(&self) -> AppResult<()> {
        self.connections.ping().await
    }
}
