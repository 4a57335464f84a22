use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;

use store::MoodStore;

/// Shared handler state. Holds nothing but the storage handle; every request
/// opens and releases its own connection through it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MoodStore>,
}

impl AppState {
    pub fn new(store: impl MoodStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
