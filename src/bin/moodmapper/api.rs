use std::collections::BTreeMap;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("BASE_URL not found in environment or .env file")]
    MissingBaseUrl,

    #[error("{body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoodRow {
    pub id: i64,
    pub user_id: i64,
    pub mood: String,
    pub trigger_note: Option<String>,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Registered {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LogMoodBody {
    pub mood: String,
    pub trigger_note: String,
    pub date: String,
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
struct UpdateMoodBody<'a> {
    mood: &'a str,
    trigger_note: &'a str,
}

/// Thin wrapper over the MoodMapper HTTP API. Every call is one request; any
/// non-2xx answer is returned as [`ClientError::Status`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "Request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn register_user(&self, name: &str, email: &str) -> Result<i64, ClientError> {
        let registered: Registered = self
            .send(
                self.http
                    .post(self.url("/users"))
                    .json(&RegisterBody { name, email }),
            )
            .await?;
        Ok(registered.user_id)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.send(self.http.get(self.url("/users"))).await
    }

    pub async fn log_mood(&self, body: &LogMoodBody) -> Result<Message, ClientError> {
        self.send(self.http.post(self.url("/moods")).json(body)).await
    }

    pub async fn list_moods(&self, user_id: i64) -> Result<Vec<MoodRow>, ClientError> {
        self.send(self.http.get(self.url(&format!("/moods/{user_id}"))))
            .await
    }

    pub async fn update_mood(
        &self,
        id: i64,
        mood: &str,
        trigger_note: &str,
    ) -> Result<Message, ClientError> {
        self.send(
            self.http
                .put(self.url(&format!("/moods/{id}")))
                .json(&UpdateMoodBody { mood, trigger_note }),
        )
        .await
    }

    pub async fn delete_mood(&self, id: i64) -> Result<Message, ClientError> {
        self.send(self.http.delete(self.url(&format!("/moods/{id}"))))
            .await
    }

    pub async fn mood_summary(&self, user_id: i64) -> Result<BTreeMap<String, i64>, ClientError> {
        self.send(
            self.http
                .get(self.url(&format!("/moods/stats/summary/{user_id}"))),
        )
        .await
    }

    pub async fn recent_moods(&self, user_id: i64) -> Result<Vec<MoodRow>, ClientError> {
        self.send(self.http.get(self.url(&format!("/moods/recent/{user_id}"))))
            .await
    }
}
