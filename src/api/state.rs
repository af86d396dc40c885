// src/api/state.rs
use crate::config::AppConfig;
use crate::database::SqliteQuizStore;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: SqliteQuizStore,
}

impl AppState {
    pub fn new(config: AppConfig, pool: SqlitePool) -> Self {
        Self {
            config: Arc::new(config),
            store: SqliteQuizStore::new(pool),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        self.store.pool()
    }
}
