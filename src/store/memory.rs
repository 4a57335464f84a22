//! In-memory store with the same ordering, limit and foreign-key behavior as
//! the PostgreSQL adapter. Used by the router tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::mood::{MoodChange, MoodEntry, NewMood, RECENT_LIMIT};
use crate::models::user::{NewUser, User};

use super::MoodStore;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    moods: Vec<MoodEntry>,
    next_user_id: i64,
    next_mood_id: i64,
}

#[derive(Default)]
pub struct MemoryMoodStore {
    tables: Mutex<Tables>,
    unavailable: bool,
}

impl MemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the database were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn tables(&self) -> AppResult<std::sync::MutexGuard<'_, Tables>> {
        if self.unavailable {
            return Err(AppError::StorageUnavailable(sqlx::Error::PoolClosed));
        }
        Ok(self.tables.lock().unwrap())
    }

    fn sorted_for(tables: &Tables, user_id: i64) -> Vec<MoodEntry> {
        let mut moods: Vec<MoodEntry> = tables
            .moods
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        moods.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        moods
    }
}

#[async_trait]
impl MoodStore for MemoryMoodStore {
    async fn create_user(&self, user: &NewUser) -> AppResult<i64> {
        let mut tables = self.tables()?;
        tables.next_user_id += 1;
        let id = tables.next_user_id;
        tables.users.push(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
        });
        Ok(id)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.tables()?.users.clone())
    }

    async fn create_mood(&self, mood: &NewMood) -> AppResult<()> {
        let mut tables = self.tables()?;
        if !tables.users.iter().any(|u| u.id == mood.user_id) {
            return Err(AppError::BadRequest(format!(
                "User {} does not exist",
                mood.user_id
            )));
        }
        tables.next_mood_id += 1;
        let id = tables.next_mood_id;
        tables.moods.push(MoodEntry {
            id,
            user_id: mood.user_id,
            mood: mood.mood.clone(),
            trigger_note: mood.trigger_note.clone(),
            date: mood.date,
        });
        Ok(())
    }

    async fn list_moods(&self, user_id: i64) -> AppResult<Vec<MoodEntry>> {
        let tables = self.tables()?;
        Ok(Self::sorted_for(&tables, user_id))
    }

    async fn update_mood(&self, id: i64, change: &MoodChange) -> AppResult<u64> {
        let mut tables = self.tables()?;
        match tables.moods.iter_mut().find(|m| m.id == id) {
            Some(entry) => {
                entry.mood = change.mood.clone();
                entry.trigger_note = change.trigger_note.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_mood(&self, id: i64) -> AppResult<u64> {
        let mut tables = self.tables()?;
        let before = tables.moods.len();
        tables.moods.retain(|m| m.id != id);
        Ok((before - tables.moods.len()) as u64)
    }

    async fn mood_summary(&self, user_id: i64) -> AppResult<BTreeMap<String, i64>> {
        let tables = self.tables()?;
        let mut summary = BTreeMap::new();
        for entry in tables.moods.iter().filter(|m| m.user_id == user_id) {
            *summary.entry(entry.mood.clone()).or_insert(0) += 1;
        }
        Ok(summary)
    }

    async fn recent_moods(&self, user_id: i64) -> AppResult<Vec<MoodEntry>> {
        let tables = self.tables()?;
        let mut moods = Self::sorted_for(&tables, user_id);
        moods.truncate(RECENT_LIMIT as usize);
        Ok(moods)
    }

    async fn ping(&self) -> AppResult<()> {
        self.tables().map(|_| ())
    }
}
